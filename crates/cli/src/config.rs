//! CLI configuration utilities

use anyhow::{Context, Result};
use gallery_core::{Profile, Session, Settings};
use gallery_http::{AuthenticatedGalleryClient, PublicGalleryClient, TypedClientBuilder};
use std::path::Path;
use tracing::debug;

/// Clients built from the loaded settings
pub struct Clients {
    pub public: PublicGalleryClient,
    pub authenticated: Option<AuthenticatedGalleryClient>,
}

/// Load settings from an optional TOML file layered under `GALLERY_*`
/// environment variables
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = path {
        debug!("Loading configuration from: {}", path.display());
    }
    Settings::load(path).context("failed to load settings")
}

pub fn build_clients(settings: &Settings) -> Result<Clients> {
    let public = TypedClientBuilder::new()
        .base_url(&settings.api_url)
        .timeout(settings.timeout())
        .build_public()?;
    let authenticated = settings
        .bearer_token()
        .map(|token| public.clone().authenticate(token));

    Ok(Clients {
        public,
        authenticated,
    })
}

/// The CLI only knows the stored token, not the profile behind it
pub fn session_from_settings(settings: &Settings) -> Option<Session> {
    settings
        .bearer_token()
        .map(|token| Session::new(Profile::default(), token))
}
