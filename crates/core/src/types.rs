//! Identifiers and small enums shared by every gallery crate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog item identifier, meaningful only within its own record type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The three things a visitor can enquire about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryKind {
    Artwork,
    Masterclass,
    Service,
}

impl EnquiryKind {
    /// Order in which deferred drafts are looked for after authentication
    pub const RESUME_ORDER: [Self; 3] = [Self::Artwork, Self::Masterclass, Self::Service];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artwork => "artwork",
            Self::Masterclass => "masterclass",
            Self::Service => "service",
        }
    }

    /// Field name carrying the subject id in an enquiry body
    pub const fn id_field(self) -> &'static str {
        match self {
            Self::Artwork => "artworkId",
            Self::Masterclass => "masterclassId",
            Self::Service => "serviceId",
        }
    }

    /// Subject line a fresh form starts with
    pub fn default_subject(self, title: &str) -> String {
        match self {
            Self::Artwork => format!("Enquiry about \"{title}\""),
            Self::Masterclass => format!("Enquiry about \"{title}\" masterclass"),
            Self::Service => format!("Enquiry about \"{title}\" service"),
        }
    }

    /// Whether the form carries an engagement type selector
    pub const fn has_engagement_type(self) -> bool {
        matches!(self, Self::Masterclass)
    }
}

impl fmt::Display for EnquiryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "artwork" => Ok(Self::Artwork),
            "masterclass" => Ok(Self::Masterclass),
            "service" => Ok(Self::Service),
            other => Err(format!("unknown enquiry kind '{other}'")),
        }
    }
}

/// How a masterclass is to be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EngagementType {
    #[default]
    Individual,
    Group,
    Corporate,
}

impl EngagementType {
    pub const ALL: [Self; 3] = [Self::Individual, Self::Group, Self::Corporate];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Group => "Group",
            Self::Corporate => "Corporate",
        }
    }
}

impl fmt::Display for EngagementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngagementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown engagement type '{s}'"))
    }
}
