//! Enquiry field values and the deferred-draft slot

use crate::types::{EngagementType, EnquiryKind, ItemId};
use serde::{Deserialize, Serialize};

/// Free-text values of an enquiry form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryFields {
    pub subject: String,
    pub message: String,
    /// Only masterclass enquiries carry an engagement type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_type: Option<EngagementType>,
}

impl EnquiryFields {
    /// Fresh values for a form of the given kind
    pub fn for_kind(kind: EnquiryKind) -> Self {
        Self {
            selected_type: kind
                .has_engagement_type()
                .then(EngagementType::default),
            ..Self::default()
        }
    }
}

/// Snapshot of an in-progress form, parked while the visitor authenticates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDraft {
    pub subject_id: ItemId,
    pub fields: EnquiryFields,
}

impl EnquiryDraft {
    pub fn new(subject_id: impl Into<ItemId>, fields: EnquiryFields) -> Self {
        Self {
            subject_id: subject_id.into(),
            fields,
        }
    }
}

/// The single deferred draft, if any, tagged with its enquiry kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingDraft {
    #[default]
    None,
    Artwork(EnquiryDraft),
    Masterclass(EnquiryDraft),
    Service(EnquiryDraft),
}

impl PendingDraft {
    pub fn new(kind: EnquiryKind, draft: EnquiryDraft) -> Self {
        match kind {
            EnquiryKind::Artwork => Self::Artwork(draft),
            EnquiryKind::Masterclass => Self::Masterclass(draft),
            EnquiryKind::Service => Self::Service(draft),
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn kind(&self) -> Option<EnquiryKind> {
        match self {
            Self::None => None,
            Self::Artwork(_) => Some(EnquiryKind::Artwork),
            Self::Masterclass(_) => Some(EnquiryKind::Masterclass),
            Self::Service(_) => Some(EnquiryKind::Service),
        }
    }

    /// The pending draft for `kind`, if that is the kind being held
    pub fn get(&self, kind: EnquiryKind) -> Option<&EnquiryDraft> {
        match (self, kind) {
            (Self::Artwork(draft), EnquiryKind::Artwork)
            | (Self::Masterclass(draft), EnquiryKind::Masterclass)
            | (Self::Service(draft), EnquiryKind::Service) => Some(draft),
            _ => None,
        }
    }

    /// Remove and return whatever is held
    pub fn take(&mut self) -> Option<(EnquiryKind, EnquiryDraft)> {
        match std::mem::take(self) {
            Self::None => None,
            Self::Artwork(draft) => Some((EnquiryKind::Artwork, draft)),
            Self::Masterclass(draft) => Some((EnquiryKind::Masterclass, draft)),
            Self::Service(draft) => Some((EnquiryKind::Service, draft)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masterclass_fields_start_with_individual() {
        let fields = EnquiryFields::for_kind(EnquiryKind::Masterclass);
        assert_eq!(fields.selected_type, Some(EngagementType::Individual));
        assert_eq!(EnquiryFields::for_kind(EnquiryKind::Artwork).selected_type, None);
    }

    #[test]
    fn test_get_only_matches_held_kind() {
        let draft = EnquiryDraft::new("7", EnquiryFields::default());
        let pending = PendingDraft::new(EnquiryKind::Service, draft.clone());
        assert_eq!(pending.get(EnquiryKind::Service), Some(&draft));
        assert_eq!(pending.get(EnquiryKind::Artwork), None);
        assert_eq!(pending.kind(), Some(EnquiryKind::Service));
    }

    #[test]
    fn test_take_empties_slot() {
        let mut pending =
            PendingDraft::new(EnquiryKind::Artwork, EnquiryDraft::new("1", EnquiryFields::default()));
        assert!(pending.take().is_some());
        assert!(pending.is_none());
        assert!(pending.take().is_none());
    }
}
