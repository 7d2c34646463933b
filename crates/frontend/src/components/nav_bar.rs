//! Top navigation with the sign-in entry points

use crate::modal::use_modal;
use crate::routes::Route;
use crate::session::use_session;
use gallery_core::{ModalAction, SessionAction};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let session = use_session();
    let modal = use_modal();

    let on_sign_in = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::OpenSignIn))
    };

    let on_sign_up = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::OpenSignUp))
    };

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            tracing::info!("signing out");
            session.dispatch(SessionAction::SignOut);
        })
    };

    let link = "text-stone-700 hover:text-red-800 transition-colors";

    html! {
        <nav class="bg-white border-b border-stone-200">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="text-xl font-bold">{"DUO"}</Link<Route>>
                <div class="flex items-center gap-6 text-sm">
                    <Link<Route> to={Route::Artists} classes={link}>{"Artists"}</Link<Route>>
                    <Link<Route> to={Route::Artworks} classes={link}>{"Artworks"}</Link<Route>>
                    <Link<Route> to={Route::Masterclasses} classes={link}>{"Masterclasses"}</Link<Route>>
                    <Link<Route> to={Route::Services} classes={link}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Editorials} classes={link}>{"Editorials"}</Link<Route>>
                    <Link<Route> to={Route::Playground} classes={link}>{"AI Playground"}</Link<Route>>

                    if let Some(current) = session.session() {
                        <div class="flex items-center gap-3">
                            <Link<Route> to={Route::Profile} classes={link}>{current.email().to_string()}</Link<Route>>
                            <button class="px-3 py-1 border border-stone-400 rounded" onclick={on_sign_out}>
                                {"Sign Out"}
                            </button>
                        </div>
                    } else {
                        <div class="flex items-center gap-3">
                            <button class="px-3 py-1 border border-stone-400 rounded" onclick={on_sign_in}>
                                {"Sign In"}
                            </button>
                            <button class="px-3 py-1 bg-black text-white rounded" onclick={on_sign_up}>
                                {"Sign Up"}
                            </button>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}
