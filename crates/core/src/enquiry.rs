//! Enquiry form state machine
//!
//! ```text
//! LoadingSubject -> Ready | Failed
//! Ready -> Ready (edit, invalid submit) | Submitting | DeferredHandoff
//! Submitting -> Success | Ready (request failed, fields kept)
//! ```
//!
//! The form never touches the coordinator directly. Transitions that affect
//! shared overlay state hand back a [`ModalAction`] for the caller to
//! dispatch, which is how the browser context provider and the CLI share the
//! same logic.

use crate::coordinator::ModalAction;
use crate::draft::{EnquiryDraft, EnquiryFields};
use crate::error::ValidationError;
use crate::session::Session;
use crate::types::{EngagementType, EnquiryKind, ItemId};
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnquiryPhase {
    LoadingSubject,
    Ready,
    Submitting,
    Success,
    /// The subject could not be loaded; terminal
    Failed(String),
    /// Handed off to sign-in; terminal for this form instance
    DeferredHandoff,
}

/// What the caller must do after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Send this enquiry with the session's bearer credential
    Send(EnquiryRequest),
    /// Dispatch this action; no request is made
    Defer(ModalAction),
    /// The form was not accepting submissions
    Ignored,
}

/// Body of an enquiry submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryRequest {
    pub kind: EnquiryKind,
    pub subject_id: ItemId,
    pub fields: EnquiryFields,
}

impl Serialize for EnquiryRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.fields.selected_type.is_some() { 4 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("subject", &self.fields.subject)?;
        map.serialize_entry("message", &self.fields.message)?;
        map.serialize_entry(self.kind.id_field(), &self.subject_id)?;
        if let Some(selected_type) = self.fields.selected_type {
            map.serialize_entry("selectedType", &selected_type)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryForm {
    kind: EnquiryKind,
    subject_id: ItemId,
    subject_title: Option<String>,
    phase: EnquiryPhase,
    fields: EnquiryFields,
    error: Option<String>,
}

impl EnquiryForm {
    pub fn new(kind: EnquiryKind, subject_id: impl Into<ItemId>) -> Self {
        Self {
            kind,
            subject_id: subject_id.into(),
            subject_title: None,
            phase: EnquiryPhase::LoadingSubject,
            fields: EnquiryFields::for_kind(kind),
            error: None,
        }
    }

    pub const fn kind(&self) -> EnquiryKind {
        self.kind
    }

    pub const fn subject_id(&self) -> &ItemId {
        &self.subject_id
    }

    pub fn subject_title(&self) -> Option<&str> {
        self.subject_title.as_deref()
    }

    pub const fn phase(&self) -> &EnquiryPhase {
        &self.phase
    }

    pub const fn fields(&self) -> &EnquiryFields {
        &self.fields
    }

    /// Inline message for the last failed validation or submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editable(&self) -> bool {
        self.phase == EnquiryPhase::Ready
    }

    /// The subject arrived. Restores `waiting` if it belongs to this form,
    /// returning the action that clears it from the coordinator.
    pub fn subject_loaded(
        &mut self,
        title: &str,
        waiting: Option<&EnquiryDraft>,
    ) -> Option<ModalAction> {
        if self.phase != EnquiryPhase::LoadingSubject {
            return None;
        }
        self.subject_title = Some(title.to_string());
        self.phase = EnquiryPhase::Ready;

        match waiting {
            Some(draft) if draft.subject_id == self.subject_id => {
                tracing::debug!(kind = %self.kind, subject_id = %self.subject_id, "restoring deferred enquiry draft");
                self.fields = draft.fields.clone();
                Some(ModalAction::ConsumeDraft {
                    kind: self.kind,
                    subject_id: self.subject_id.clone(),
                })
            }
            _ => {
                self.fields.subject = self.kind.default_subject(title);
                None
            }
        }
    }

    pub fn subject_failed(&mut self, message: impl Into<String>) {
        if self.phase == EnquiryPhase::LoadingSubject {
            self.phase = EnquiryPhase::Failed(message.into());
        }
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        if self.is_editable() {
            self.fields.subject = subject.into();
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        if self.is_editable() {
            self.fields.message = message.into();
        }
    }

    /// Ignored for kinds without an engagement type
    pub fn set_selected_type(&mut self, selected_type: Option<EngagementType>) {
        if self.is_editable() && self.kind.has_engagement_type() {
            self.fields.selected_type = selected_type;
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing_text =
            self.fields.subject.trim().is_empty() || self.fields.message.trim().is_empty();
        let missing_type =
            self.kind.has_engagement_type() && self.fields.selected_type.is_none();
        if missing_text || missing_type {
            Err(ValidationError::MissingFields)
        } else {
            Ok(())
        }
    }

    pub fn draft(&self) -> EnquiryDraft {
        EnquiryDraft::new(self.subject_id.clone(), self.fields.clone())
    }

    pub fn request(&self) -> EnquiryRequest {
        EnquiryRequest {
            kind: self.kind,
            subject_id: self.subject_id.clone(),
            fields: self.fields.clone(),
        }
    }

    /// Validate, then either send or hand off to sign-in.
    ///
    /// Validation runs before the session is looked at, so an invalid form
    /// never triggers the handoff.
    pub fn submit(&mut self, session: Option<&Session>) -> Result<Submission, ValidationError> {
        if !self.is_editable() {
            return Ok(Submission::Ignored);
        }
        self.error = None;

        if let Err(err) = self.validate() {
            self.error = Some(err.to_string());
            return Err(err);
        }

        if session.is_none() {
            self.phase = EnquiryPhase::DeferredHandoff;
            return Ok(Submission::Defer(ModalAction::DeferToSignIn {
                kind: self.kind,
                draft: self.draft(),
            }));
        }

        self.phase = EnquiryPhase::Submitting;
        Ok(Submission::Send(self.request()))
    }

    pub fn submission_succeeded(&mut self) {
        if self.phase == EnquiryPhase::Submitting {
            self.phase = EnquiryPhase::Success;
        }
    }

    /// Back to an editable form with the values intact
    pub fn submission_failed(&mut self, message: impl Into<String>) {
        if self.phase == EnquiryPhase::Submitting {
            self.phase = EnquiryPhase::Ready;
            self.error = Some(message.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Profile;
    use serde_json::json;

    fn session() -> Session {
        Session::new(
            Profile {
                id: "u1".into(),
                email: "mei@example.com".into(),
                ..Profile::default()
            },
            "tok",
        )
    }

    fn ready(kind: EnquiryKind) -> EnquiryForm {
        let mut form = EnquiryForm::new(kind, "42");
        assert!(form.subject_loaded("Misty Peaks", None).is_none());
        form
    }

    #[test]
    fn test_fresh_form_uses_default_subject() {
        let form = ready(EnquiryKind::Artwork);
        assert_eq!(form.phase(), &EnquiryPhase::Ready);
        assert_eq!(form.fields().subject, "Enquiry about \"Misty Peaks\"");
        assert_eq!(form.fields().message, "");
    }

    #[test]
    fn test_subject_failure_is_terminal() {
        let mut form = EnquiryForm::new(EnquiryKind::Service, "s1");
        form.subject_failed("Failed to load service details.");
        assert_eq!(
            form.phase(),
            &EnquiryPhase::Failed("Failed to load service details.".into())
        );

        assert!(form.subject_loaded("Late", None).is_none());
        assert!(matches!(form.phase(), EnquiryPhase::Failed(_)));
    }

    #[test]
    fn test_waiting_draft_for_other_subject_is_not_restored() {
        let mut form = EnquiryForm::new(EnquiryKind::Artwork, "42");
        let other = EnquiryDraft::new(
            "43",
            EnquiryFields {
                subject: "Other".into(),
                message: "Other".into(),
                selected_type: None,
            },
        );
        assert!(form.subject_loaded("Misty Peaks", Some(&other)).is_none());
        assert_eq!(form.fields().subject, "Enquiry about \"Misty Peaks\"");
    }

    #[test]
    fn test_invalid_submit_stays_ready_with_error() {
        let mut form = ready(EnquiryKind::Artwork);
        form.set_subject("   ");
        form.set_message("Hello");

        assert_eq!(form.submit(None), Err(ValidationError::MissingFields));
        assert_eq!(form.phase(), &EnquiryPhase::Ready);
        assert_eq!(form.error(), Some("Please complete all required fields"));
    }

    #[test]
    fn test_masterclass_requires_engagement_type() {
        let mut form = ready(EnquiryKind::Masterclass);
        form.set_message("Weekends only?");
        form.set_selected_type(None);
        assert_eq!(
            form.submit(Some(&session())),
            Err(ValidationError::MissingFields)
        );

        form.set_selected_type(Some(EngagementType::Corporate));
        assert!(matches!(
            form.submit(Some(&session())),
            Ok(Submission::Send(_))
        ));
    }

    #[test]
    fn test_authenticated_submit_then_failure_keeps_fields() {
        let mut form = ready(EnquiryKind::Service);
        form.set_message("Can you remount a scroll?");

        let Ok(Submission::Send(request)) = form.submit(Some(&session())) else {
            panic!("expected a send");
        };
        assert_eq!(request.subject_id, ItemId::new("42"));
        assert_eq!(form.phase(), &EnquiryPhase::Submitting);

        // Edits are ignored while the request is in flight
        form.set_message("changed");
        form.submission_failed("Server error 500: boom");

        assert_eq!(form.phase(), &EnquiryPhase::Ready);
        assert_eq!(form.fields().message, "Can you remount a scroll?");
        assert_eq!(form.error(), Some("Server error 500: boom"));

        assert!(matches!(
            form.submit(Some(&session())),
            Ok(Submission::Send(_))
        ));
        form.submission_succeeded();
        assert_eq!(form.phase(), &EnquiryPhase::Success);
        assert_eq!(form.submit(Some(&session())), Ok(Submission::Ignored));
    }

    #[test]
    fn test_request_body_uses_kind_specific_id_field() {
        let mut form = ready(EnquiryKind::Masterclass);
        form.set_subject("Q1");
        form.set_message("Group rates?");
        form.set_selected_type(Some(EngagementType::Group));

        assert_eq!(
            serde_json::to_value(form.request()).unwrap(),
            json!({
                "subject": "Q1",
                "message": "Group rates?",
                "masterclassId": "42",
                "selectedType": "Group"
            })
        );

        let artwork = ready(EnquiryKind::Artwork);
        let body = serde_json::to_value(artwork.request()).unwrap();
        assert_eq!(body["artworkId"], "42");
        assert!(body.get("selectedType").is_none());
    }

    #[test]
    fn test_selected_type_ignored_for_artwork() {
        let mut form = ready(EnquiryKind::Artwork);
        form.set_selected_type(Some(EngagementType::Group));
        assert_eq!(form.fields().selected_type, None);
    }
}
