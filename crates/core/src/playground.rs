//! AI playground form
//!
//! Unlike enquiries, a playground request is not deferred: an anonymous
//! submit opens sign-in and leaves the form as it is.

use crate::coordinator::ModalAction;
use crate::error::ValidationError;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtworkType {
    #[default]
    CalligraphyOnly,
    PaintingWithCalligraphy,
}

impl ArtworkType {
    pub const ALL: [Self; 2] = [Self::CalligraphyOnly, Self::PaintingWithCalligraphy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CalligraphyOnly => "CALLIGRAPHY_ONLY",
            Self::PaintingWithCalligraphy => "PAINTING_WITH_CALLIGRAPHY",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CalligraphyOnly => "Calligraphy Only",
            Self::PaintingWithCalligraphy => "Calligraphy + Painting",
        }
    }

    pub const fn prompt_placeholder(self) -> &'static str {
        match self {
            Self::CalligraphyOnly => "Enter text for calligraphy",
            Self::PaintingWithCalligraphy => {
                "Describe what you want in your painting with calligraphy"
            }
        }
    }

    pub const fn has_painting(self) -> bool {
        matches!(self, Self::PaintingWithCalligraphy)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ArtworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `(value, label)` choices for the optional selectors. An empty value
/// means "no preference".
pub const CALLIGRAPHY_STYLES: [(&str, &str); 5] = [
    ("regular", "Regular Script (楷书)"),
    ("running", "Running Script (行书)"),
    ("cursive", "Cursive Script (草书)"),
    ("clerical", "Clerical Script (隶书)"),
    ("seal", "Seal Script (篆书)"),
];

pub const PAINTING_STYLES: [(&str, &str); 4] = [
    ("landscape", "Landscape (山水画)"),
    ("bird-and-flower", "Bird and Flower (花鸟画)"),
    ("figure", "Figure Painting (人物画)"),
    ("literati", "Literati Painting (文人画)"),
];

pub const DYNASTIES: [(&str, &str); 5] = [
    ("Tang", "Tang Dynasty"),
    ("Song", "Song Dynasty"),
    ("Yuan", "Yuan Dynasty"),
    ("Ming", "Ming Dynasty"),
    ("Qing", "Qing Dynasty"),
];

pub const TECHNIQUES: [(&str, &str); 4] = [
    ("gongbi", "Gongbi (工笔)"),
    ("xieyi", "Xieyi (写意)"),
    ("mogu", "Mogu (没骨)"),
    ("shuimo", "Shuimo (水墨)"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub artwork_type: ArtworkType,
    pub subject_prompt: String,
    pub calligraphy_style: String,
    pub painting_style: String,
    pub dynasty: String,
    pub technique: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundSubmission {
    Generate(GenerateRequest),
    /// Anonymous visitor; dispatch and keep the form untouched
    RequireSignIn(ModalAction),
}

/// Decide what a generate click does. The session is checked before the
/// prompt so an anonymous visitor is sent to sign-in first.
pub fn submit(
    request: &GenerateRequest,
    session: Option<&Session>,
) -> Result<PlaygroundSubmission, ValidationError> {
    if session.is_none() {
        return Ok(PlaygroundSubmission::RequireSignIn(ModalAction::OpenSignIn));
    }
    if request.subject_prompt.trim().is_empty() {
        return Err(ValidationError::MissingPrompt);
    }
    Ok(PlaygroundSubmission::Generate(request.clone()))
}
