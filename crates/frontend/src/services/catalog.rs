//! Data service calls

use super::message;
use crate::client::public_client;
use gallery_core::{EnquiryKind, ErrorContext, ItemId};
use gallery_http::{Artist, Artwork, Editorial, EnquirySubject, Masterclass, Service};

pub async fn artists() -> Result<Vec<Artist>, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.list_artists().await.map_err(|e| message(&e))
}

pub async fn featured_artist() -> Result<Artist, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.featured_artist().await.map_err(|e| message(&e))
}

pub async fn artist(id: ItemId) -> Result<Artist, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.get_artist(&id).await.map_err(|e| message(&e))
}

pub async fn artworks() -> Result<Vec<Artwork>, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.list_artworks().await.map_err(|e| message(&e))
}

pub async fn artwork(id: ItemId) -> Result<Artwork, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.get_artwork(&id).await.map_err(|e| message(&e))
}

pub async fn editorials() -> Result<Vec<Editorial>, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.list_editorials().await.map_err(|e| message(&e))
}

pub async fn editorial(id: ItemId) -> Result<Editorial, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.get_editorial(&id).await.map_err(|e| message(&e))
}

pub async fn masterclasses() -> Result<Vec<Masterclass>, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.list_masterclasses().await.map_err(|e| message(&e))
}

pub async fn services() -> Result<Vec<Service>, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.list_services().await.map_err(|e| message(&e))
}

/// Subject for an enquiry overlay. Failures use the per-kind wording the
/// overlay shows in its error state.
pub async fn enquiry_subject(kind: EnquiryKind, id: ItemId) -> Result<EnquirySubject, String> {
    let client = public_client().with_context_str("Failed to get client")?;
    client.enquiry_subject(kind, &id).await.map_err(|e| {
        tracing::warn!(%kind, subject_id = %id, error = %e, "failed to load enquiry subject");
        format!("Failed to load {kind} details.")
    })
}
