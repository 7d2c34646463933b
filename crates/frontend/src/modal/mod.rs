//! Overlay coordination shared across the application

mod context;

pub use context::{ModalProvider, use_modal};
