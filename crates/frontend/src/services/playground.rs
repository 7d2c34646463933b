//! AI playground generation

use super::{message, require_authenticated};
use gallery_core::GenerateRequest;

/// Returns an image source usable directly in `<img src>`
pub async fn generate(request: GenerateRequest) -> Result<String, String> {
    let client = require_authenticated()?;
    client
        .generate_artwork(&request)
        .await
        .map(|response| response.image_data)
        .map_err(|e| message(&e))
}
