//! Sign-in / sign-up form state and the post-authentication resume step

use crate::coordinator::{ModalAction, ModalCoordinator, Overlay};
use crate::error::ValidationError;
use crate::types::{EnquiryKind, ItemId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub const fn overlay(self) -> Overlay {
        match self {
            Self::SignIn => Overlay::SignIn,
            Self::SignUp => Overlay::SignUp,
        }
    }

    pub const fn from_overlay(overlay: &Overlay) -> Option<Self> {
        match overlay {
            Overlay::SignIn => Some(Self::SignIn),
            Overlay::SignUp => Some(Self::SignUp),
            _ => None,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDetails {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl fmt::Debug for SignUpDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpDetails")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// Request the caller must send to the mutation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn(Credentials),
    SignUp(SignUpDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Idle,
    Authenticating,
    Failed(String),
}

/// What happens once a session has been stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCompletion {
    /// Reopen the deferred enquiry instead of the generic success path
    Resume { kind: EnquiryKind, subject_id: ItemId },
    /// Nothing was waiting
    Done,
}

impl AuthCompletion {
    pub fn resolve(coordinator: &ModalCoordinator) -> Self {
        match coordinator.resume_target() {
            Some((kind, subject_id)) => Self::Resume { kind, subject_id },
            None => Self::Done,
        }
    }

    /// The coordinator action that completes the flow. `Done` closes the
    /// auth overlay, which is what every caller's success callback does.
    pub fn into_action(self) -> ModalAction {
        match self {
            Self::Resume { kind, subject_id } => ModalAction::ResumeEnquiry { kind, subject_id },
            Self::Done => ModalAction::CloseAll,
        }
    }

    pub const fn is_resume(&self) -> bool {
        matches!(self, Self::Resume { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    phase: AuthPhase,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            phase: AuthPhase::Idle,
        }
    }

    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    pub const fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == AuthPhase::Authenticating
    }

    /// Validate locally and move to `Authenticating`
    pub fn begin(&mut self) -> Result<AuthRequest, ValidationError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            let err = ValidationError::MissingCredentials;
            self.phase = AuthPhase::Failed(err.to_string());
            return Err(err);
        }
        self.phase = AuthPhase::Authenticating;

        let email = self.email.trim().to_string();
        Ok(match self.mode {
            AuthMode::SignIn => AuthRequest::SignIn(Credentials {
                email,
                password: self.password.clone(),
            }),
            AuthMode::SignUp => AuthRequest::SignUp(SignUpDetails {
                email,
                password: self.password.clone(),
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                phone_number: self.phone_number.trim().to_string(),
            }),
        })
    }

    /// Authentication was rejected. Entered values stay so the visitor can
    /// retry; session and coordinator are not touched.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.phase = AuthPhase::Failed(message.into());
    }

    /// Authentication succeeded. The caller stores the session and then
    /// dispatches [`ModalAction::AuthSucceeded`].
    pub fn succeeded(&mut self) {
        tracing::debug!(mode = ?self.mode, "authentication succeeded");
        self.phase = AuthPhase::Idle;
        self.password.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{EnquiryDraft, EnquiryFields};

    #[test]
    fn test_begin_requires_email_and_password() {
        let mut form = AuthForm::new(AuthMode::SignIn);
        form.email = "  ".into();
        form.password = "secret".into();

        assert_eq!(form.begin(), Err(ValidationError::MissingCredentials));
        assert_eq!(form.error(), Some("Email and password are required"));
    }

    #[test]
    fn test_sign_up_request_carries_profile_fields() {
        let mut form = AuthForm::new(AuthMode::SignUp);
        form.email = " mei@example.com ".into();
        form.password = "pw".into();
        form.first_name = "Mei".into();

        let Ok(AuthRequest::SignUp(details)) = form.begin() else {
            panic!("expected sign-up request");
        };
        assert_eq!(details.email, "mei@example.com");
        assert_eq!(details.first_name, "Mei");
        assert!(form.is_busy());

        let body = serde_json::to_value(&details).unwrap();
        assert_eq!(body["firstName"], "Mei");
        assert_eq!(body["phoneNumber"], "");
    }

    #[test]
    fn test_failure_keeps_entered_values() {
        let mut form = AuthForm::new(AuthMode::SignIn);
        form.email = "mei@example.com".into();
        form.password = "wrong".into();
        let _ = form.begin();
        form.failed("Invalid credentials");

        assert_eq!(form.error(), Some("Invalid credentials"));
        assert_eq!(form.password, "wrong");
        assert!(!form.is_busy());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials {
            email: "a@b.c".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[test]
    fn test_success_clears_password() {
        let mut form = AuthForm::new(AuthMode::SignIn);
        form.email = "mei@example.com".into();
        form.password = "pw".into();
        let _ = form.begin();
        form.succeeded();
        assert_eq!(form.phase(), &AuthPhase::Idle);
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_completion_without_draft_is_done() {
        let coordinator = ModalCoordinator::new();
        assert_eq!(AuthCompletion::resolve(&coordinator), AuthCompletion::Done);
        assert_eq!(AuthCompletion::Done.into_action(), ModalAction::CloseAll);
    }

    #[test]
    fn test_completion_resumes_pending_draft() {
        let mut coordinator = ModalCoordinator::new();
        let _ = coordinator.set_deferred_draft(
            EnquiryKind::Masterclass,
            Some(EnquiryDraft::new("m7", EnquiryFields::for_kind(EnquiryKind::Masterclass))),
        );

        let completion = AuthCompletion::resolve(&coordinator);
        assert_eq!(
            completion.into_action(),
            ModalAction::ResumeEnquiry {
                kind: EnquiryKind::Masterclass,
                subject_id: "m7".into(),
            }
        );
    }

    #[test]
    fn test_mode_maps_to_overlay() {
        assert_eq!(AuthMode::SignUp.overlay(), Overlay::SignUp);
        assert_eq!(AuthMode::from_overlay(&Overlay::SignIn), Some(AuthMode::SignIn));
        assert_eq!(AuthMode::from_overlay(&Overlay::None), None);
    }
}
