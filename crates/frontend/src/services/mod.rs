//! Service calls used by pages and overlays
//!
//! Errors are flattened into display strings here so components can show
//! them inline without knowing about transport details.

pub mod account;
pub mod catalog;
pub mod enquiry;
pub mod playground;

use crate::client::{ClientError, authenticated_client};
use gallery_core::ErrorContext;
use gallery_http::AuthenticatedGalleryClient;

fn message(error: &ClientError) -> String {
    error.user_message()
}

/// The authenticated client, or the message shown when there is none
fn require_authenticated() -> Result<AuthenticatedGalleryClient, String> {
    authenticated_client()
        .with_context_str("Failed to get client")?
        .ok_or_else(|| "Authentication required".to_string())
}
