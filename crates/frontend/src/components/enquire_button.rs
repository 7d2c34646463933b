use crate::modal::use_modal;
use gallery_core::{EnquiryKind, ItemId, ModalAction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnquireButtonProps {
    pub kind: EnquiryKind,
    pub subject_id: ItemId,
    #[prop_or(AttrValue::Static("Enquire"))]
    pub label: AttrValue,
}

/// Opens the enquiry overlay for one catalog item. Anyone may open it;
/// sign-in is only asked for on submit.
#[function_component(EnquireButton)]
pub fn enquire_button(props: &EnquireButtonProps) -> Html {
    let modal = use_modal();

    let onclick = {
        let kind = props.kind;
        let subject_id = props.subject_id.clone();
        Callback::from(move |_: MouseEvent| {
            modal.dispatch(ModalAction::OpenEnquiry {
                kind,
                subject_id: subject_id.clone(),
            });
        })
    };

    html! {
        <button
            class="bg-red-800 hover:bg-red-900 text-white px-4 py-2 rounded transition-colors"
            {onclick}
        >
            {props.label.clone()}
        </button>
    }
}
