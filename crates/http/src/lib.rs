//! Gallery HTTP client
//!
//! Typed access to the read-only data service (artists, artworks,
//! editorials, masterclasses, services) and the mutation service
//! (authentication, enquiries, profile, playground). Endpoints that need a
//! bearer credential only exist on [`AuthenticatedGalleryClient`].

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::typed::{AuthenticatedGalleryClient, PublicGalleryClient, TypedClientBuilder};
pub use types::{
    Artist, ArtistRef, Artwork, Editorial, EnquiryReceipt, EnquirySubject, GenerateResponse,
    Masterclass, MediaArticle, Service,
};
