//! Modal/dialog coordination
//!
//! [`ModalCoordinator`] is the single source of truth for which overlay is
//! showing and which enquiry draft is parked while the visitor signs in.
//! Overlay visibility is one tagged value, so two overlays can never be open
//! at once, and the draft slot holds at most one draft across all kinds.

use crate::auth::AuthCompletion;
use crate::draft::{EnquiryDraft, EnquiryFields, PendingDraft};
use crate::types::{EnquiryKind, ItemId};

/// The overlay currently mounted above the page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    SignIn,
    SignUp,
    ArtworkEnquiry(ItemId),
    MasterclassEnquiry(ItemId),
    ServiceEnquiry(ItemId),
}

impl Overlay {
    pub fn enquiry(kind: EnquiryKind, subject_id: ItemId) -> Self {
        match kind {
            EnquiryKind::Artwork => Self::ArtworkEnquiry(subject_id),
            EnquiryKind::Masterclass => Self::MasterclassEnquiry(subject_id),
            EnquiryKind::Service => Self::ServiceEnquiry(subject_id),
        }
    }

    /// Kind and subject of the open enquiry overlay, if one is open
    pub const fn as_enquiry(&self) -> Option<(EnquiryKind, &ItemId)> {
        match self {
            Self::ArtworkEnquiry(id) => Some((EnquiryKind::Artwork, id)),
            Self::MasterclassEnquiry(id) => Some((EnquiryKind::Masterclass, id)),
            Self::ServiceEnquiry(id) => Some((EnquiryKind::Service, id)),
            Self::None | Self::SignIn | Self::SignUp => None,
        }
    }

    pub const fn subject_id(&self) -> Option<&ItemId> {
        match self.as_enquiry() {
            Some((_, id)) => Some(id),
            None => None,
        }
    }

    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A draft pushed out of the slot by a draft of another kind
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplacedDraft {
    pub kind: EnquiryKind,
    pub draft: EnquiryDraft,
}

/// Every transition the coordinator accepts, in dispatchable form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    OpenSignIn,
    OpenSignUp,
    ToggleAuthForms,
    OpenEnquiry {
        kind: EnquiryKind,
        subject_id: ItemId,
    },
    CloseAll,
    SetDeferredDraft {
        kind: EnquiryKind,
        draft: Option<EnquiryDraft>,
    },
    /// A form of `kind` for `subject_id` restored the waiting draft
    ConsumeDraft {
        kind: EnquiryKind,
        subject_id: ItemId,
    },
    /// Park the draft, close the enquiry and show sign-in, in one step
    DeferToSignIn {
        kind: EnquiryKind,
        draft: EnquiryDraft,
    },
    /// Close the auth overlay and reopen the deferred enquiry
    ResumeEnquiry {
        kind: EnquiryKind,
        subject_id: ItemId,
    },
    /// A session was just stored; resume or close
    AuthSucceeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalCoordinator {
    overlay: Overlay,
    pending: PendingDraft,
}

impl ModalCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub const fn pending(&self) -> &PendingDraft {
        &self.pending
    }

    pub fn open_sign_in(&mut self) {
        self.overlay = Overlay::SignIn;
    }

    pub fn open_sign_up(&mut self) {
        self.overlay = Overlay::SignUp;
    }

    /// Swap between sign-in and sign-up. Does nothing when neither is open.
    pub fn toggle_auth_forms(&mut self) {
        self.overlay = match self.overlay {
            Overlay::SignIn => Overlay::SignUp,
            Overlay::SignUp => Overlay::SignIn,
            _ => return,
        };
    }

    pub fn open_enquiry(&mut self, kind: EnquiryKind, subject_id: impl Into<ItemId>) {
        self.overlay = Overlay::enquiry(kind, subject_id.into());
    }

    pub fn open_artwork_enquiry(&mut self, artwork_id: impl Into<ItemId>) {
        self.open_enquiry(EnquiryKind::Artwork, artwork_id);
    }

    pub fn open_masterclass_enquiry(&mut self, masterclass_id: impl Into<ItemId>) {
        self.open_enquiry(EnquiryKind::Masterclass, masterclass_id);
    }

    pub fn open_service_enquiry(&mut self, service_id: impl Into<ItemId>) {
        self.open_enquiry(EnquiryKind::Service, service_id);
    }

    /// Hide every overlay. Deferred drafts are left alone.
    pub fn close_all(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Store (or with `None`, clear) the draft for `kind`.
    ///
    /// Only one draft is held at a time and the newest wins. Storing over a
    /// draft of the same kind overwrites it. Storing over a draft of a
    /// different kind drops the older one and returns it as displaced.
    pub fn set_deferred_draft(
        &mut self,
        kind: EnquiryKind,
        draft: Option<EnquiryDraft>,
    ) -> Option<DisplacedDraft> {
        let Some(draft) = draft else {
            if self.pending.kind() == Some(kind) {
                self.pending = PendingDraft::None;
            }
            return None;
        };

        let displaced = match self.pending.kind() {
            Some(held) if held != kind => self
                .pending
                .take()
                .map(|(kind, draft)| DisplacedDraft { kind, draft }),
            _ => None,
        };
        if let Some(displaced) = &displaced {
            tracing::warn!(
                displaced_kind = %displaced.kind,
                displaced_subject = %displaced.draft.subject_id,
                incoming_kind = %kind,
                "deferred enquiry draft displaced by another kind"
            );
        }

        tracing::debug!(%kind, subject_id = %draft.subject_id, "deferred enquiry draft stored");
        self.pending = PendingDraft::new(kind, draft);
        displaced
    }

    pub fn deferred_draft(&self, kind: EnquiryKind) -> Option<&EnquiryDraft> {
        self.pending.get(kind)
    }

    /// Hand the waiting draft to a form of `kind` showing `subject_id`.
    /// A draft is handed out at most once.
    pub fn take_deferred_draft(
        &mut self,
        kind: EnquiryKind,
        subject_id: &ItemId,
    ) -> Option<EnquiryFields> {
        let matches = self
            .pending
            .get(kind)
            .is_some_and(|draft| &draft.subject_id == subject_id);
        if !matches {
            return None;
        }
        tracing::debug!(%kind, %subject_id, "deferred enquiry draft consumed");
        self.pending.take().map(|(_, draft)| draft.fields)
    }

    /// The unauthenticated-submit handoff
    pub fn defer_to_sign_in(
        &mut self,
        kind: EnquiryKind,
        draft: EnquiryDraft,
    ) -> Option<DisplacedDraft> {
        let displaced = self.set_deferred_draft(kind, Some(draft));
        self.close_all();
        self.open_sign_in();
        displaced
    }

    /// Which enquiry to reopen after authentication, scanning kinds in
    /// [`EnquiryKind::RESUME_ORDER`]
    pub fn resume_target(&self) -> Option<(EnquiryKind, ItemId)> {
        EnquiryKind::RESUME_ORDER.into_iter().find_map(|kind| {
            self.deferred_draft(kind)
                .map(|draft| (kind, draft.subject_id.clone()))
        })
    }

    pub fn resume_enquiry(&mut self, kind: EnquiryKind, subject_id: ItemId) {
        tracing::debug!(%kind, %subject_id, "resuming deferred enquiry");
        self.close_all();
        self.open_enquiry(kind, subject_id);
    }

    /// Post-authentication step: reopen the deferred enquiry if one is
    /// waiting, otherwise close the auth overlay.
    ///
    /// Returns `None` and changes nothing when no auth overlay is showing;
    /// the dialog that started the request is gone and whatever the visitor
    /// opened since stays put. A waiting draft stays parked for later.
    pub fn complete_authentication(&mut self) -> Option<AuthCompletion> {
        if !self.overlay.is_auth() {
            tracing::debug!(overlay = ?self.overlay, "authentication finished after its dialog closed");
            return None;
        }
        let completion = AuthCompletion::resolve(self);
        match completion.clone().into_action() {
            ModalAction::ResumeEnquiry { kind, subject_id } => self.resume_enquiry(kind, subject_id),
            _ => self.close_all(),
        }
        Some(completion)
    }

    /// Apply a dispatched action
    pub fn apply(&mut self, action: ModalAction) -> Option<DisplacedDraft> {
        match action {
            ModalAction::OpenSignIn => self.open_sign_in(),
            ModalAction::OpenSignUp => self.open_sign_up(),
            ModalAction::ToggleAuthForms => self.toggle_auth_forms(),
            ModalAction::OpenEnquiry { kind, subject_id } => self.open_enquiry(kind, subject_id),
            ModalAction::CloseAll => self.close_all(),
            ModalAction::SetDeferredDraft { kind, draft } => {
                return self.set_deferred_draft(kind, draft);
            }
            ModalAction::ConsumeDraft { kind, subject_id } => {
                self.take_deferred_draft(kind, &subject_id);
            }
            ModalAction::DeferToSignIn { kind, draft } => {
                return self.defer_to_sign_in(kind, draft);
            }
            ModalAction::ResumeEnquiry { kind, subject_id } => {
                self.resume_enquiry(kind, subject_id);
            }
            ModalAction::AuthSucceeded => {
                self.complete_authentication();
            }
        }
        None
    }
}
