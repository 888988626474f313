//! # Session & Route Gate
//!
//! Session state is published on a `watch` channel by the [`Authenticator`]. It starts as
//! [`SessionState::Unknown`] and leaves that state once restoration finishes or an operator
//! signs in or out. [`RouteGuard`] waits on the channel, so a protected page is never
//! decided against a session that has not been restored yet.
//!
//! ```rust,ignore
//! let auth = Authenticator::new(Arc::new(StaticOperators::new(operators)));
//! let restoring = auth.restore();
//!
//! let mut guard = auth.guard();
//! match guard.resolve(Route::Orders).await? {
//!     Decision::Render(route) => show(route),
//!     Decision::Redirect(route) => show(route),
//! }
//! ```

pub mod gate;
pub mod provider;
pub mod session;

pub use gate::*;
pub use provider::*;
pub use session::*;

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

/// Owns the current [`SessionState`] and drives an [`AuthProvider`].
#[derive(Clone)]
pub struct Authenticator {
    provider: Arc<dyn AuthProvider>,
    state: Arc<watch::Sender<SessionState>>,
}

impl Authenticator {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        let (state, _) = watch::channel(SessionState::Unknown);
        Self {
            provider,
            state: Arc::new(state),
        }
    }

    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.subscribe())
    }

    /// Restores the remembered session in the background.
    ///
    /// Only settles a state that is still `Unknown`; an explicit sign-in or sign-out that
    /// finished first wins. A failing provider leaves the console signed out.
    pub fn restore(&self) -> JoinHandle<()> {
        let provider = self.provider.clone();
        let state = self.state.clone();
        tokio::spawn(async move {
            let restored = match provider.restore().await {
                Ok(session) => SessionState::from(session),
                Err(e) => {
                    warn!(error = %e, "Session restoration failed");
                    SessionState::Unauthenticated
                }
            };
            let settled = state.send_if_modified(|current| {
                if current.is_unknown() {
                    *current = restored;
                    true
                } else {
                    false
                }
            });
            info!(settled, "Session restoration complete");
        })
    }

    /// Signs in and publishes the new session. A refused sign-in leaves the state as it was.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.provider.sign_in(email, password).await?;
        self.state
            .send_replace(SessionState::Authenticated(session.clone()));
        Ok(session)
    }

    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        self.state.send_replace(SessionState::Unauthenticated);
        Ok(())
    }
}
