//! Busy indicators for page loads and in-flight form submissions

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    /// Centred in the space a page or subject summary will fill
    #[default]
    Block,
    /// Sits beside the label inside a submit button
    Inline,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub size: SpinnerSize,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    match props.size {
        SpinnerSize::Block => html! {
            <div class="text-center p-10" role="status">
                <div class="w-10 h-10 border-4 border-stone-200 border-t-red-700 rounded-full animate-spin mx-auto mb-5"></div>
                <p class="text-stone-600 text-sm m-0">{props.label.clone()}</p>
            </div>
        },
        SpinnerSize::Inline => html! {
            <span class="inline-flex items-center justify-center gap-2" role="status">
                <span class="w-4 h-4 border-2 border-white/40 border-t-white rounded-full animate-spin"></span>
                {props.label.clone()}
            </span>
        },
    }
}
