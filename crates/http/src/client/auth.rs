//! Sign-in and sign-up endpoints

use super::{ClientError, PublicGalleryClient};
use gallery_core::{AuthRequest, Credentials, Session, SignUpDetails};
use reqwest::Method;

/// Authentication endpoints are public; they return the session whose
/// token unlocks [`super::AuthenticatedGalleryClient`]
impl PublicGalleryClient {
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        let request = self
            .request(Method::POST, "/auth/sign-in")
            .json(credentials);
        self.execute(request).await
    }

    pub async fn sign_up(&self, details: &SignUpDetails) -> Result<Session, ClientError> {
        let request = self.request(Method::POST, "/auth/sign-up").json(details);
        self.execute(request).await
    }

    /// Send whichever request an auth form produced
    pub async fn authenticate_with(&self, request: &AuthRequest) -> Result<Session, ClientError> {
        match request {
            AuthRequest::SignIn(credentials) => self.sign_in(credentials).await,
            AuthRequest::SignUp(details) => self.sign_up(details).await,
        }
    }
}
