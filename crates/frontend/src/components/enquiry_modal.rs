//! Enquiry overlay for artworks, masterclasses and services
//!
//! The form state machine lives in a mutable ref so async completions act
//! on the current values rather than on the render that started them.

use super::{Dialog, ErrorBanner, LoadingSpinner, SpinnerSize};
use crate::modal::use_modal;
use crate::services::{catalog, enquiry};
use crate::session::use_current_session;
use gallery_core::{
    EngagementType, EnquiryForm, EnquiryKind, EnquiryPhase, ItemId, ModalAction, Submission,
};
use gallery_http::EnquirySubject;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EnquiryModalProps {
    pub kind: EnquiryKind,
    pub subject_id: ItemId,
}

const fn heading(kind: EnquiryKind) -> &'static str {
    match kind {
        EnquiryKind::Artwork => "Enquire About This Artwork",
        EnquiryKind::Masterclass => "Enquire About This Masterclass",
        EnquiryKind::Service => "Enquire About This Service",
    }
}

const fn message_placeholder(kind: EnquiryKind) -> &'static str {
    match kind {
        EnquiryKind::Artwork => {
            "Please provide details about your interest in this artwork or any questions you have."
        }
        EnquiryKind::Masterclass => {
            "Please provide details about your interest in this masterclass, any questions you have, or specific requirements."
        }
        EnquiryKind::Service => {
            "Please describe what you need and any questions you have about this service."
        }
    }
}

#[function_component(EnquiryModal)]
pub fn enquiry_modal(props: &EnquiryModalProps) -> Html {
    let session = use_current_session();
    let modal = use_modal();
    let form = use_mut_ref(|| EnquiryForm::new(props.kind, props.subject_id.clone()));
    let subject = use_state(|| None::<EnquirySubject>);
    let update = use_force_update();

    // Load the subject, then restore a waiting draft for this form
    {
        let form = form.clone();
        let subject = subject.clone();
        let update = update.clone();
        let modal = modal.clone();
        use_effect_with((props.kind, props.subject_id.clone()), move |(kind, id)| {
            let kind = *kind;
            let waiting = modal.deferred_draft(kind).cloned();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match catalog::enquiry_subject(kind, id).await {
                    Ok(loaded) => {
                        let consume = form
                            .borrow_mut()
                            .subject_loaded(&loaded.title, waiting.as_ref());
                        subject.set(Some(loaded));
                        if let Some(action) = consume {
                            modal.dispatch(action);
                        }
                    }
                    Err(message) => form.borrow_mut().subject_failed(message),
                }
                update.force_update();
            });
        });
    }

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |()| modal.dispatch(ModalAction::CloseAll))
    };

    let on_subject = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().set_subject(input.value());
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.borrow_mut().set_message(input.value());
        })
    };

    let on_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.borrow_mut()
                .set_selected_type(select.value().parse::<EngagementType>().ok());
        })
    };

    let on_submit = {
        let form = form.clone();
        let update = update.clone();
        let modal = modal.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = form.borrow_mut().submit(session.as_ref());
            match submission {
                Ok(Submission::Send(request)) => {
                    update.force_update();
                    let form = form.clone();
                    let update = update.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match enquiry::submit(request).await {
                            Ok(()) => form.borrow_mut().submission_succeeded(),
                            Err(message) => form.borrow_mut().submission_failed(message),
                        }
                        update.force_update();
                    });
                }
                Ok(Submission::Defer(action)) => {
                    tracing::debug!("anonymous enquiry handed to sign-in");
                    modal.dispatch(action);
                }
                Ok(Submission::Ignored) => {}
                Err(_) => update.force_update(),
            }
        })
    };

    let kind = props.kind;
    let current = form.borrow();
    let title = current.subject_title().unwrap_or_default().to_string();

    let body = match current.phase() {
        EnquiryPhase::LoadingSubject => html! {
            <LoadingSpinner label="Loading..." />
        },
        EnquiryPhase::Failed(message) => html! {
            <ErrorBanner message={message.clone()} />
        },
        EnquiryPhase::Success => html! {
            <div class="space-y-4">
                <p>{"Thank you for your interest! Your enquiry has been sent successfully."}</p>
                <p>{format!("We'll get back to you shortly regarding \"{title}\".")}</p>
                <button class="px-4 py-2 bg-black text-white" onclick={on_close.reform(|_: MouseEvent| ())}>
                    {"Close"}
                </button>
            </div>
        },
        EnquiryPhase::DeferredHandoff => html! {},
        EnquiryPhase::Ready | EnquiryPhase::Submitting => {
            let fields = current.fields();
            let submitting = *current.phase() == EnquiryPhase::Submitting;
            let selected = fields.selected_type.map(EngagementType::as_str).unwrap_or_default();
            html! {
                <>
                    if let Some(subject) = (*subject).as_ref() {
                        <div class="flex gap-4 mb-4">
                            if let Some(src) = subject.image_url.clone() {
                                <img {src} alt={subject.title.clone()} class="w-24 h-24 object-cover" />
                            }
                            <div>
                                <h3 class="font-semibold">{subject.title.clone()}</h3>
                                if let Some(summary) = &subject.summary {
                                    <p class="text-sm text-stone-600">{summary.clone()}</p>
                                }
                            </div>
                        </div>
                    }
                    <form onsubmit={on_submit}>
                        if let Some(message) = current.error() {
                            <ErrorBanner message={message.to_string()} />
                        }
                        <label class="block text-sm font-medium mb-4">
                            {"Subject"}
                            <input
                                type="text"
                                class="w-full p-2 border border-stone-300"
                                value={fields.subject.clone()}
                                oninput={on_subject}
                                disabled={submitting}
                                required=true
                            />
                        </label>
                        if kind.has_engagement_type() {
                            <label class="block text-sm font-medium mb-4">
                                {"Masterclass Type"}
                                <select class="w-full p-2 border border-stone-300" onchange={on_type} disabled={submitting}>
                                    { for EngagementType::ALL.iter().map(|option| html! {
                                        <option value={option.as_str()} selected={option.as_str() == selected}>
                                            {option.as_str()}
                                        </option>
                                    }) }
                                </select>
                            </label>
                        }
                        <label class="block text-sm font-medium mb-4">
                            {"Message"}
                            <textarea
                                class="w-full p-2 border border-stone-300"
                                rows="5"
                                placeholder={message_placeholder(kind)}
                                value={fields.message.clone()}
                                oninput={on_message}
                                disabled={submitting}
                                required=true
                            />
                        </label>
                        <button
                            type="submit"
                            class="w-full p-2 bg-black text-white disabled:bg-stone-400"
                            disabled={submitting}
                        >
                            if submitting {
                                <LoadingSpinner label="Sending..." size={SpinnerSize::Inline} />
                            } else {
                                {"Send Enquiry"}
                            }
                        </button>
                    </form>
                </>
            }
        }
    };

    let dialog_title = if *current.phase() == EnquiryPhase::Success {
        "Enquiry Sent"
    } else {
        heading(kind)
    };

    html! {
        <Dialog title={dialog_title} {on_close}>
            {body}
        </Dialog>
    }
}
