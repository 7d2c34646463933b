//! Session state: who, if anyone, is signed in

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visitor profile as returned by the mutation service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
}

impl Profile {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// Authenticated identity plus the bearer credential that proves it
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "token")]
    pub auth_token: String,
}

impl Session {
    pub fn new(profile: Profile, auth_token: impl Into<String>) -> Self {
        Self {
            profile,
            auth_token: auth_token.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn bearer_token(&self) -> &str {
        &self.auth_token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("profile", &self.profile)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Editable profile fields. Email is fixed once the account exists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            phone_number: profile.phone_number.clone(),
        }
    }
}

/// Session state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SignIn(Session),
    ProfileUpdated(Profile),
    SignOut,
}

/// Current authenticated identity, or none for an anonymous visitor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            current: Some(session),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.current.as_ref().map(Session::bearer_token)
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::SignIn(session) => {
                tracing::debug!(user_id = %session.id(), "session established");
                self.current = Some(session);
            }
            SessionAction::ProfileUpdated(profile) => {
                // The update response carries no credential; keep the one we hold.
                if let Some(session) = self.current.as_mut() {
                    session.profile = profile;
                }
            }
            SessionAction::SignOut => {
                tracing::debug!("session cleared");
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            Profile {
                id: "u1".into(),
                email: "mei@example.com".into(),
                first_name: "Mei".into(),
                last_name: "Lin".into(),
                phone_number: "0400 000 000".into(),
            },
            "tok-123",
        )
    }

    #[test]
    fn test_session_deserializes_flat_identity_record() {
        let json = r#"{"id":"u1","email":"mei@example.com","firstName":"Mei","lastName":"Lin","phoneNumber":"0400 000 000","token":"tok-123"}"#;
        let parsed: Session = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, session());
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", session());
        assert!(!rendered.contains("tok-123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_profile_update_keeps_token() {
        let mut state = SessionState::signed_in(session());
        let mut profile = session().profile;
        profile.phone_number = "0411 111 111".into();
        state.apply(SessionAction::ProfileUpdated(profile));

        let current = state.session().unwrap();
        assert_eq!(current.profile.phone_number, "0411 111 111");
        assert_eq!(current.bearer_token(), "tok-123");
    }

    #[test]
    fn test_profile_update_while_anonymous_is_ignored() {
        let mut state = SessionState::anonymous();
        state.apply(SessionAction::ProfileUpdated(session().profile));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let mut state = SessionState::signed_in(session());
        state.apply(SessionAction::SignOut);
        assert_eq!(state.bearer_token(), None);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = Profile {
            email: "anon@example.com".into(),
            ..Profile::default()
        };
        assert_eq!(profile.display_name(), "anon@example.com");
        assert_eq!(session().profile.display_name(), "Mei Lin");
    }
}
