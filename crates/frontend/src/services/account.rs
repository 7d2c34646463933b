//! Authentication and profile calls

use super::{message, require_authenticated};
use crate::client::public_client;
use gallery_core::{AuthRequest, ErrorContext, Profile, ProfileUpdate, Session};

pub async fn authenticate(request: AuthRequest) -> Result<Session, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client
        .authenticate_with(&request)
        .await
        .map_err(|e| message(&e))
}

pub async fn update_profile(update: ProfileUpdate) -> Result<Profile, String> {
    let client = require_authenticated()?;
    client.update_profile(&update).await.map_err(|e| message(&e))
}

pub async fn delete_account() -> Result<(), String> {
    let client = require_authenticated()?;
    client.delete_account().await.map_err(|e| message(&e))
}
