//! Sign-in backends.

use super::session::Session;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("auth provider error: {0}")]
    Provider(String),
}

/// The capability the console needs from an identity backend.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The session remembered from an earlier run, if any.
    async fn restore(&self) -> Result<Option<Session>, AuthError>;
}

/// Credentials of one console operator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Operator {
    pub email: String,
    pub password: String,
}

/// In-process provider over a fixed list of operators.
///
/// Remembers the last successful sign-in until sign-out; that is what `restore` returns.
#[derive(Debug, Default)]
pub struct StaticOperators {
    operators: Vec<Operator>,
    remembered: Mutex<Option<Session>>,
}

impl StaticOperators {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self {
            operators,
            remembered: Mutex::new(None),
        }
    }

    /// Starts with a session already remembered, as after a previous run.
    pub fn with_session(self, session: Session) -> Self {
        Self {
            remembered: Mutex::new(Some(session)),
            ..self
        }
    }

    fn remember(&self, session: Option<Session>) -> Result<(), AuthError> {
        let mut slot = self
            .remembered
            .lock()
            .map_err(|_| AuthError::Provider("session store poisoned".into()))?;
        *slot = session;
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for StaticOperators {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = email.trim();
        let known = self
            .operators
            .iter()
            .any(|op| op.email.eq_ignore_ascii_case(email) && op.password == password);
        if !known {
            warn!(%email, "Sign-in refused");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::new(email);
        self.remember(Some(session.clone()))?;
        info!(%email, "Signed in");
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.remember(None)?;
        info!("Signed out");
        Ok(())
    }

    async fn restore(&self) -> Result<Option<Session>, AuthError> {
        let session = self
            .remembered
            .lock()
            .map_err(|_| AuthError::Provider("session store poisoned".into()))?
            .clone();
        debug!(restored = session.is_some(), "Session restoration finished");
        Ok(session)
    }
}
