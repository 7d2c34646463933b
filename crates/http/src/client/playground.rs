//! AI playground endpoint

use super::{AuthenticatedGalleryClient, ClientError};
use crate::types::GenerateResponse;
use gallery_core::GenerateRequest;
use reqwest::Method;

impl AuthenticatedGalleryClient {
    pub async fn generate_artwork(
        &self,
        params: &GenerateRequest,
    ) -> Result<GenerateResponse, ClientError> {
        tracing::debug!(artwork_type = params.artwork_type.as_str(), "generating artwork");
        let request = self
            .request(Method::POST, "/playground/generate")
            .json(params);
        self.execute(request).await
    }
}
