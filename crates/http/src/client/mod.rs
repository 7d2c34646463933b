//! Gallery API clients

pub mod account;
pub mod auth;
pub mod catalog;
pub mod enquiry;
pub mod error;
pub mod playground;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedGalleryClient, PublicGalleryClient, TypedClientBuilder};
