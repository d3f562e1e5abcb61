//! Session State
//!
//! Client-held record of authentication status and identity.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// `sessionStorage` key the session is mirrored under
pub const SESSION_STORAGE_KEY: &str = "inventory-admin.session";

/// Identity of the logged-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
}

impl SessionUser {
    /// Identity from a login response body, which may be the user itself,
    /// `{ "user": {...} }`, or nothing useful at all.
    pub fn from_login_body(body: &str, email: &str) -> Self {
        let value: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
        let candidate = value.get("user").cloned().unwrap_or(value);
        let mut user: SessionUser = serde_json::from_value(candidate).unwrap_or_default();
        if user.email.is_empty() {
            user.email = email.to_string();
        }
        user
    }

    /// Name shown in the shell
    pub fn display_name(&self) -> &str {
        self.username.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_logged_in: bool,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(user: SessionUser) -> Self {
        Self { is_logged_in: true, user: Some(user) }
    }

    /// Apply a login attempt; failure leaves the session as it was
    pub fn apply_login(&mut self, result: Result<SessionUser, ApiError>) -> bool {
        match result {
            Ok(user) => {
                *self = Self::logged_in(user);
                true
            }
            Err(_) => false,
        }
    }

    /// LOGGED_IN -> NOT_LOGGED_IN
    pub fn end(&mut self) {
        *self = Self::anonymous();
    }

    pub fn to_storage(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a stored session; anything malformed or half-formed is ignored
    pub fn from_storage(raw: &str) -> Option<Self> {
        let session: Session = serde_json::from_str(raw).ok()?;
        (session.is_logged_in && session.user.is_some()).then_some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_anonymous() {
        let session = Session::anonymous();
        assert!(!session.is_logged_in);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_login_transitions() {
        let mut session = Session::anonymous();

        let failed = session.apply_login(Err(ApiError::Unauthorized));
        assert!(!failed);
        assert!(!session.is_logged_in);

        let ok = session.apply_login(Ok(SessionUser { email: "a@b.c".to_string(), ..Default::default() }));
        assert!(ok);
        assert!(session.is_logged_in);

        session.end();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_login_body_variants() {
        let direct = SessionUser::from_login_body(
            r#"{"_id":"u1","email":"ann@example.com","username":"ann"}"#,
            "typed@example.com",
        );
        assert_eq!(direct.id.as_deref(), Some("u1"));
        assert_eq!(direct.display_name(), "ann");

        let wrapped = SessionUser::from_login_body(
            r#"{"message":"ok","user":{"email":"bob@example.com"}}"#,
            "typed@example.com",
        );
        assert_eq!(wrapped.email, "bob@example.com");

        let empty = SessionUser::from_login_body("", "typed@example.com");
        assert_eq!(empty.email, "typed@example.com");
        assert_eq!(empty.display_name(), "typed@example.com");
    }

    #[test]
    fn test_storage_restores_only_logged_in() {
        let session = Session::logged_in(SessionUser { email: "a@b.c".to_string(), ..Default::default() });
        let raw = session.to_storage().unwrap();
        assert_eq!(Session::from_storage(&raw), Some(session));

        assert_eq!(Session::from_storage(r#"{"isLoggedIn":false,"user":null}"#), None);
        assert_eq!(Session::from_storage(r#"{"isLoggedIn":true,"user":null}"#), None);
        assert_eq!(Session::from_storage("not json"), None);
    }
}
