//! Read-only data service endpoints

use super::{ClientError, PublicGalleryClient};
use crate::types::{Artist, Artwork, Editorial, EnquirySubject, Masterclass, Service};
use gallery_core::{EnquiryKind, ItemId};
use reqwest::Method;

impl PublicGalleryClient {
    pub async fn list_artists(&self) -> Result<Vec<Artist>, ClientError> {
        let request = self.request(Method::GET, "/artists");
        self.execute(request).await
    }

    pub async fn featured_artist(&self) -> Result<Artist, ClientError> {
        let request = self.request(Method::GET, "/artists/featured");
        self.execute(request).await
    }

    pub async fn get_artist(&self, id: &ItemId) -> Result<Artist, ClientError> {
        let request = self.request(Method::GET, &format!("/artists/{id}"));
        self.execute(request).await
    }

    pub async fn list_artworks(&self) -> Result<Vec<Artwork>, ClientError> {
        let request = self.request(Method::GET, "/artworks");
        self.execute(request).await
    }

    pub async fn get_artwork(&self, id: &ItemId) -> Result<Artwork, ClientError> {
        let request = self.request(Method::GET, &format!("/artworks/{id}"));
        self.execute(request).await
    }

    pub async fn list_editorials(&self) -> Result<Vec<Editorial>, ClientError> {
        let request = self.request(Method::GET, "/editorials");
        self.execute(request).await
    }

    pub async fn get_editorial(&self, id: &ItemId) -> Result<Editorial, ClientError> {
        let request = self.request(Method::GET, &format!("/editorials/{id}"));
        self.execute(request).await
    }

    pub async fn list_masterclasses(&self) -> Result<Vec<Masterclass>, ClientError> {
        let request = self.request(Method::GET, "/masterclasses");
        self.execute(request).await
    }

    /// Masterclasses have no detail endpoint; the list is searched
    pub async fn get_masterclass(&self, id: &ItemId) -> Result<Masterclass, ClientError> {
        find_by_id(self.list_masterclasses().await?, id, |m| &m.id, "masterclass")
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, ClientError> {
        let request = self.request(Method::GET, "/services");
        self.execute(request).await
    }

    /// Services have no detail endpoint; the list is searched
    pub async fn get_service(&self, id: &ItemId) -> Result<Service, ClientError> {
        find_by_id(self.list_services().await?, id, |s| &s.id, "service")
    }

    /// Load whatever an enquiry form of `kind` needs to show for `id`
    pub async fn enquiry_subject(
        &self,
        kind: EnquiryKind,
        id: &ItemId,
    ) -> Result<EnquirySubject, ClientError> {
        tracing::debug!(%kind, subject_id = %id, "loading enquiry subject");
        Ok(match kind {
            EnquiryKind::Artwork => self.get_artwork(id).await?.into(),
            EnquiryKind::Masterclass => self.get_masterclass(id).await?.into(),
            EnquiryKind::Service => self.get_service(id).await?.into(),
        })
    }
}

fn find_by_id<T>(
    items: Vec<T>,
    id: &ItemId,
    key: impl Fn(&T) -> &ItemId,
    what: &str,
) -> Result<T, ClientError> {
    items
        .into_iter()
        .find(|item| key(item) == id)
        .ok_or_else(|| ClientError::NotFound(format!("{what} {id}")))
}
