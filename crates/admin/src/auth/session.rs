use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}

/// What is known about the current session.
///
/// Starts as `Unknown` until restoration has run. Protected pages are not decided while the
/// state is `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unknown,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionState {
    pub fn is_unknown(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

impl From<Option<Session>> for SessionState {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Unauthenticated,
        }
    }
}
