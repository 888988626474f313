//! Route gating on the session state.

use super::provider::AuthError;
use super::session::SessionState;
use crate::model::OrderId;
use tokio::sync::watch;
use tracing::debug;

/// Console pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Orders,
    Track(OrderId),
}

impl Route {
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Render(Route),
    Redirect(Route),
}

/// What to do with `route` in `state`. `None` while the session is still unknown.
pub fn decide(state: &SessionState, route: &Route) -> Option<Decision> {
    match state {
        SessionState::Unknown => None,
        SessionState::Unauthenticated if route.is_protected() => {
            Some(Decision::Redirect(Route::Login))
        }
        _ => Some(Decision::Render(route.clone())),
    }
}

/// Decides routes once the session state is settled.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    state: watch::Receiver<SessionState>,
}

impl RouteGuard {
    pub fn new(state: watch::Receiver<SessionState>) -> Self {
        Self { state }
    }

    /// Waits until the state leaves `Unknown`, then decides.
    pub async fn resolve(&mut self, route: Route) -> Result<Decision, AuthError> {
        let state = self
            .state
            .wait_for(|s| !s.is_unknown())
            .await
            .map_err(|_| AuthError::Provider("session feed closed".into()))?;

        let decision = match decide(&state, &route) {
            Some(decision) => decision,
            None => Decision::Redirect(Route::Login),
        };
        debug!(?route, ?decision, "Route resolved");
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;

    #[test]
    fn nothing_is_decided_while_unknown() {
        assert_eq!(decide(&SessionState::Unknown, &Route::Orders), None);
        assert_eq!(decide(&SessionState::Unknown, &Route::Login), None);
    }

    #[test]
    fn protected_routes_need_a_session() {
        let out = SessionState::Unauthenticated;
        assert_eq!(
            decide(&out, &Route::Track(OrderId(2))),
            Some(Decision::Redirect(Route::Login))
        );
        assert_eq!(
            decide(&out, &Route::Login),
            Some(Decision::Render(Route::Login))
        );

        let signed_in = SessionState::Authenticated(Session::new("desk@tulipa.test"));
        assert_eq!(
            decide(&signed_in, &Route::Orders),
            Some(Decision::Render(Route::Orders))
        );
    }

    #[tokio::test]
    async fn resolve_waits_for_restoration() {
        let (sender, receiver) = watch::channel(SessionState::Unknown);
        let mut guard = RouteGuard::new(receiver);

        let pending = tokio::spawn(async move { guard.resolve(Route::Orders).await });
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        sender.send_replace(SessionState::Unauthenticated);
        assert_eq!(
            pending.await.unwrap().unwrap(),
            Decision::Redirect(Route::Login)
        );
    }
}
