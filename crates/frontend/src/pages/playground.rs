//! AI artwork generation
//!
//! Anonymous visitors can set up their options; generating asks them to
//! sign in first and keeps the form as it is.

use crate::components::{ErrorBanner, LoadingSpinner, SpinnerSize};
use crate::modal::use_modal;
use crate::services::playground as generator;
use crate::session::use_current_session;
use gallery_core::playground::{
    CALLIGRAPHY_STYLES, DYNASTIES, PAINTING_STYLES, TECHNIQUES, submit as plan_generation,
};
use gallery_core::{ArtworkType, GenerateRequest, PlaygroundSubmission};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn choice(
    label: &'static str,
    placeholder: &'static str,
    options: &[(&'static str, &'static str)],
    value: &str,
    onchange: Callback<String>,
) -> Html {
    let onchange = onchange.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    html! {
        <label class="block text-sm font-medium mb-4">
            {label}
            <select class="w-full p-2 border border-stone-300" {onchange}>
                <option value="" selected={value.is_empty()}>{placeholder}</option>
                { for options.iter().map(|(option, text)| html! {
                    <option value={*option} selected={*option == value}>{*text}</option>
                }) }
            </select>
        </label>
    }
}

#[function_component(Playground)]
pub fn playground() -> Html {
    let session = use_current_session();
    let modal = use_modal();
    let request = use_state(GenerateRequest::default);
    let image = use_state(|| None::<String>);
    let generating = use_state(|| false);
    let error = use_state(|| None::<String>);

    let edit = |apply: fn(&mut GenerateRequest, String)| {
        let request = request.clone();
        Callback::from(move |value: String| {
            let mut next = (*request).clone();
            apply(&mut next, value);
            request.set(next);
        })
    };

    let on_type = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(artwork_type) = ArtworkType::parse(&select.value()) {
                request.set(GenerateRequest {
                    artwork_type,
                    ..(*request).clone()
                });
            }
        })
    };

    let on_prompt = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            request.set(GenerateRequest {
                subject_prompt: input.value(),
                ..(*request).clone()
            });
        })
    };

    let on_submit = {
        let request = request.clone();
        let image = image.clone();
        let generating = generating.clone();
        let error = error.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match plan_generation(&request, session.as_ref()) {
                Ok(PlaygroundSubmission::RequireSignIn(action)) => modal.dispatch(action),
                Ok(PlaygroundSubmission::Generate(body)) => {
                    generating.set(true);
                    error.set(None);
                    let image = image.clone();
                    let generating = generating.clone();
                    let error = error.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match generator::generate(body).await {
                            Ok(src) => image.set(Some(src)),
                            Err(message) => {
                                tracing::warn!(%message, "artwork generation failed");
                                error.set(Some(message));
                            }
                        }
                        generating.set(false);
                    });
                }
                Err(invalid) => error.set(Some(invalid.to_string())),
            }
        })
    };

    let on_reset = {
        let request = request.clone();
        let image = image.clone();
        Callback::from(move |_: MouseEvent| {
            request.set(GenerateRequest::default());
            image.set(None);
        })
    };

    let current = (*request).clone();
    let busy = *generating;

    let preview = if busy {
        html! { <LoadingSpinner label="Generating your artwork..." /> }
    } else if let Some(src) = (*image).clone() {
        html! {
            <div>
                <h2 class="text-xl font-bold mb-4">{"Your Generated Artwork"}</h2>
                <img {src} alt="AI-generated artwork" class="w-full object-contain mb-4" />
                <button class="px-4 py-2 border border-black" onclick={on_reset}>{"Create Another"}</button>
            </div>
        }
    } else {
        html! {
            <p class="text-stone-500 text-center p-10">{"Your artwork will appear here."}</p>
        }
    };

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-2">{"AI Playground"}</h1>
            <p class="text-stone-600 mb-8">{"Create your own AI-generated traditional Chinese artwork."}</p>
            <div class="grid md:grid-cols-2 gap-12">
                <form onsubmit={on_submit}>
                    if let Some(message) = (*error).clone() {
                        <ErrorBanner {message} />
                    }
                    <label class="block text-sm font-medium mb-4">
                        {"Artwork Type"}
                        <select class="w-full p-2 border border-stone-300" onchange={on_type}>
                            { for ArtworkType::ALL.iter().map(|option| html! {
                                <option value={option.as_str()} selected={*option == current.artwork_type}>
                                    {option.label()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label class="block text-sm font-medium mb-4">
                        {"Subject / Text"}
                        <input
                            type="text"
                            class="w-full p-2 border border-stone-300"
                            placeholder={current.artwork_type.prompt_placeholder()}
                            value={current.subject_prompt.clone()}
                            oninput={on_prompt}
                        />
                    </label>
                    {choice("Calligraphy Style", "Select a style (optional)", &CALLIGRAPHY_STYLES,
                        &current.calligraphy_style, edit(|r, v| r.calligraphy_style = v))}
                    if current.artwork_type.has_painting() {
                        {choice("Painting Style", "Select a style (optional)", &PAINTING_STYLES,
                            &current.painting_style, edit(|r, v| r.painting_style = v))}
                    }
                    {choice("Dynasty Style", "Select a dynasty (optional)", &DYNASTIES,
                        &current.dynasty, edit(|r, v| r.dynasty = v))}
                    {choice("Technique", "Select a technique (optional)", &TECHNIQUES,
                        &current.technique, edit(|r, v| r.technique = v))}
                    <button
                        type="submit"
                        class="w-full p-2 bg-black text-white disabled:bg-stone-400"
                        disabled={busy}
                    >
                        if busy {
                            <LoadingSpinner label="Generating..." size={SpinnerSize::Inline} />
                        } else {
                            {"Generate Artwork"}
                        }
                    </button>
                    if session.is_none() {
                        <p class="mt-4 text-sm text-stone-500">
                            {"You'll need to sign in to generate artwork. You can set up your options first, then sign in when you're ready to generate."}
                        </p>
                    }
                </form>
                <div>{preview}</div>
            </div>
        </div>
    }
}
