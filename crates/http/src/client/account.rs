//! Profile endpoints for the signed-in visitor

use super::{AuthenticatedGalleryClient, ClientError};
use gallery_core::{Profile, ProfileUpdate};
use reqwest::Method;

impl AuthenticatedGalleryClient {
    /// Update the editable profile fields; returns the stored profile
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ClientError> {
        let request = self.request(Method::PUT, "/users/profile").json(update);
        self.execute(request).await
    }

    pub async fn delete_account(&self) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, "/users/profile");
        self.execute_empty(request).await
    }
}
