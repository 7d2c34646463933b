//! Session state shared across the application

mod context;

pub use context::{SessionProvider, use_current_session, use_session};
