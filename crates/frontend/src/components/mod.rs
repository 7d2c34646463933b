//! UI components

pub mod auth_form;
pub mod dialog;
pub mod enquire_button;
pub mod enquiry_modal;
pub mod footer;
pub mod modal_host;
pub mod nav_bar;
pub mod spinner;

pub use auth_form::AuthDialog;
pub use dialog::{Dialog, ErrorBanner};
pub use enquire_button::EnquireButton;
pub use enquiry_modal::EnquiryModal;
pub use footer::Footer;
pub use modal_host::ModalHost;
pub use nav_bar::NavBar;
pub use spinner::{LoadingSpinner, SpinnerSize};
