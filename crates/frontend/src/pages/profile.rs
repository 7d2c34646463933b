//! Account page: edit profile fields or delete the account

use crate::components::ErrorBanner;
use crate::routes::Route;
use crate::services::account;
use crate::session::use_session;
use gallery_core::{ProfileUpdate, SessionAction};
use gloo::timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let update = use_state(ProfileUpdate::default);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let confirm_delete = use_state(|| false);

    // Seed the form from the session, or leave when there is none
    {
        let update = update.clone();
        let navigator = navigator.clone();
        use_effect_with(session.session().map(|s| s.profile.clone()), move |profile| {
            match profile {
                Some(profile) => update.set(ProfileUpdate::from(profile)),
                None => {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Home);
                    }
                }
            }
        });
    }

    let edit = |apply: fn(&mut ProfileUpdate, String)| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*update).clone();
            apply(&mut next, input.value());
            update.set(next);
        })
    };

    let on_save = {
        let session = session.clone();
        let update = update.clone();
        let saving = saving.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            saving.set(true);
            error.set(None);
            notice.set(None);

            let body = (*update).clone();
            let session = session.clone();
            let saving = saving.clone();
            let error = error.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match account::update_profile(body).await {
                    Ok(profile) => {
                        session.dispatch(SessionAction::ProfileUpdated(profile));
                        notice.set(Some("Profile updated successfully".to_string()));
                        // Clear success message after 3 seconds
                        let notice = notice.clone();
                        Timeout::new(3000, move || notice.set(None)).forget();
                    }
                    Err(message) => error.set(Some(message)),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let session = session.clone();
        let saving = saving.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            saving.set(true);
            error.set(None);

            let session = session.clone();
            let saving = saving.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match account::delete_account().await {
                    Ok(()) => {
                        tracing::info!("account deleted");
                        session.dispatch(SessionAction::SignOut);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(message) => {
                        error.set(Some(message));
                        saving.set(false);
                    }
                }
            });
        })
    };

    let ask_confirm = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_: MouseEvent| confirm_delete.set(true))
    };
    let cancel_confirm = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_: MouseEvent| confirm_delete.set(false))
    };

    let Some(current) = session.session() else {
        return html! {};
    };
    let busy = *saving;
    let input_class = "w-full p-2 border border-stone-300";

    html! {
        <div class="max-w-2xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-8">{"My Profile"}</h1>
            if let Some(message) = (*error).clone() {
                <ErrorBanner {message} />
            }
            if let Some(message) = (*notice).clone() {
                <div class="mb-4 p-3 bg-green-50 text-green-700 rounded text-sm">{message}</div>
            }
            <form onsubmit={on_save} class="mb-12">
                <div class="grid grid-cols-2 gap-4">
                    <label class="block text-sm font-medium mb-4">
                        {"First Name"}
                        <input type="text" class={input_class} value={update.first_name.clone()}
                            oninput={edit(|u, v| u.first_name = v)} />
                    </label>
                    <label class="block text-sm font-medium mb-4">
                        {"Last Name"}
                        <input type="text" class={input_class} value={update.last_name.clone()}
                            oninput={edit(|u, v| u.last_name = v)} />
                    </label>
                </div>
                <label class="block text-sm font-medium mb-4">
                    {"Email"}
                    <input type="email" class={input_class} value={current.email().to_string()} disabled=true />
                    <span class="text-xs text-stone-500">{"Email cannot be changed"}</span>
                </label>
                <label class="block text-sm font-medium mb-4">
                    {"Phone Number"}
                    <input type="tel" class={input_class} value={update.phone_number.clone()}
                        oninput={edit(|u, v| u.phone_number = v)} />
                </label>
                <button type="submit" class="px-6 py-2 bg-black text-white disabled:bg-stone-400" disabled={busy}>
                    {if busy { "Saving..." } else { "Save Changes" }}
                </button>
            </form>

            <section class="border-t border-stone-200 pt-8">
                <h2 class="text-xl font-bold mb-2">{"Delete Account"}</h2>
                <p class="text-sm text-stone-600 mb-4">
                    {"Permanently delete your account and all associated data. This action cannot be undone."}
                </p>
                if *confirm_delete {
                    <p class="text-sm mb-4">{"Are you sure you want to delete your account? This action cannot be undone."}</p>
                    <div class="flex gap-4">
                        <button class="px-4 py-2 bg-red-700 text-white disabled:bg-stone-400" disabled={busy} onclick={on_delete}>
                            {"Yes, Delete My Account"}
                        </button>
                        <button class="px-4 py-2 border border-stone-400" onclick={cancel_confirm}>{"Cancel"}</button>
                    </div>
                } else {
                    <button class="px-4 py-2 border border-red-700 text-red-700" onclick={ask_confirm}>
                        {"Delete Account"}
                    </button>
                }
            </section>
        </div>
    }
}
