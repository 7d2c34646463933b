//! Gallery core types and state machines
//!
//! Everything in this crate is a pure state transition. The browser frontend
//! wraps these types in context providers and the CLI drives them directly,
//! so the deferred-enquiry flow behaves identically in both.

pub mod auth;
pub mod coordinator;
pub mod draft;
pub mod enquiry;
pub mod error;
pub mod playground;
pub mod session;
#[cfg(feature = "settings")]
pub mod settings;
pub mod text;
pub mod types;

pub use auth::{
    AuthCompletion, AuthForm, AuthMode, AuthPhase, AuthRequest, Credentials, SignUpDetails,
};
pub use coordinator::{DisplacedDraft, ModalAction, ModalCoordinator, Overlay};
pub use draft::{EnquiryDraft, EnquiryFields, PendingDraft};
pub use enquiry::{EnquiryForm, EnquiryPhase, EnquiryRequest, Submission};
pub use error::{CoreError, CoreResult, ErrorContext, ValidationError};
pub use playground::{ArtworkType, GenerateRequest, PlaygroundSubmission};
pub use session::{Profile, ProfileUpdate, Session, SessionAction, SessionState};
#[cfg(feature = "settings")]
pub use settings::Settings;
pub use text::editorial_paragraphs;
pub use types::{EngagementType, EnquiryKind, ItemId};
