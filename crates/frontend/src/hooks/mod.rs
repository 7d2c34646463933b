//! Custom hooks for the application

pub mod use_remote;

pub use use_remote::{Remote, use_remote};
