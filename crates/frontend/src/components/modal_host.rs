//! Renders whichever overlay the coordinator has open

use super::{AuthDialog, EnquiryModal};
use crate::modal::use_modal;
use gallery_core::{AuthMode, Overlay};
use yew::prelude::*;

#[function_component(ModalHost)]
pub fn modal_host() -> Html {
    let modal = use_modal();
    let overlay = modal.overlay();

    if let Some(mode) = AuthMode::from_overlay(overlay) {
        return html! { <AuthDialog key={mode.title()} {mode} /> };
    }

    match overlay.as_enquiry() {
        Some((kind, subject_id)) => {
            let key = format!("{kind}-{subject_id}");
            html! { <EnquiryModal key={key} {kind} subject_id={subject_id.clone()} /> }
        }
        None => {
            debug_assert!(matches!(overlay, Overlay::None));
            html! {}
        }
    }
}
