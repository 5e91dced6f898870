//! Session context.
//!
//! The session is an explicit value: it starts on login success, ends on
//! logout, and is passed to every authenticated API call.

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, LoginResponse};
use crate::domain::Role;

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Restore a previously persisted session
    pub fn restored(session: Option<Session>) -> Self {
        Self { current: session }
    }

    /// Start a session from a successful login response.
    pub fn begin(&mut self, username: impl Into<String>, response: LoginResponse) -> &Session {
        let session = Session {
            token: response.token,
            username: username.into(),
            role: response.role,
        };
        log::info!("session started user={} role={}", session.username, session.role.as_str());
        self.current.insert(session)
    }

    /// End the session; returns the one that was active, if any.
    pub fn end(&mut self) -> Option<Session> {
        let ended = self.current.take();
        if let Some(s) = &ended {
            log::info!("session ended user={}", s.username);
        }
        ended
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn require(&self) -> Result<&Session, ApiError> {
        self.current.as_ref().ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut ctx = SessionContext::anonymous();
        assert!(matches!(ctx.require(), Err(ApiError::Unauthenticated)));

        let session = ctx.begin(
            "maya",
            LoginResponse {
                token: "t0k".into(),
                role: Role::Admin,
            },
        );
        assert!(session.is_admin());
        assert_eq!(ctx.require().unwrap().token, "t0k");

        let ended = ctx.end().unwrap();
        assert_eq!(ended.username, "maya");
        assert!(!ctx.is_authenticated());
        assert!(ctx.end().is_none());
    }

    #[test]
    fn test_session_roundtrips_through_storage_json() {
        let session = Session {
            token: "abc".into(),
            username: "lee".into(),
            role: Role::User,
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"role\":\"User\""));
        let restored = SessionContext::restored(serde_json::from_str(&json).ok());
        assert_eq!(restored.current(), Some(&session));
    }
}
