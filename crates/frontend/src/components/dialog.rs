//! Overlay frame shared by the auth and enquiry forms

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg p-6 max-w-lg w-full mx-4 shadow-xl" role="dialog" aria-modal="true">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-serif text-stone-900">{props.title.clone()}</h2>
                    <button
                        class="text-stone-400 hover:text-stone-700 text-2xl leading-none"
                        aria-label="Close"
                        onclick={on_close}
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="mb-4 p-3 bg-red-50 text-red-700 rounded text-sm" role="alert">
            {props.message.clone()}
        </div>
    }
}
