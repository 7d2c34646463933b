//! Client configuration and initialization

use crate::config::AppConfig;
pub use gallery_http::ClientError;
use gallery_http::{AuthenticatedGalleryClient, PublicGalleryClient, TypedClientBuilder};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicGalleryClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<AuthenticatedGalleryClient>>> =
    Lazy::new(|| Mutex::new(None));

fn lock_poisoned() -> ClientError {
    ClientError::Configuration("client lock poisoned".into())
}

/// Get the public client instance (for unauthenticated endpoints)
pub fn public_client() -> Result<PublicGalleryClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT.lock().map_err(|_| lock_poisoned())?;

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TypedClientBuilder::new()
        .base_url(AppConfig::api_base_url())
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the authenticated client instance (None while anonymous)
pub fn authenticated_client() -> Result<Option<AuthenticatedGalleryClient>, ClientError> {
    let client_lock = AUTH_CLIENT.lock().map_err(|_| lock_poisoned())?;
    Ok(client_lock.clone())
}

/// Update the authenticated client with a bearer token, or drop it
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT.lock().map_err(|_| lock_poisoned())?;

    *auth_lock = match token {
        Some(token) => Some(
            TypedClientBuilder::new()
                .base_url(AppConfig::api_base_url())
                .build_authenticated(token)?,
        ),
        None => None,
    };

    Ok(())
}
