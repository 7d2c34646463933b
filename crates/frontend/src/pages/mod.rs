//! Routed pages

mod about;
mod artists;
mod artworks;
mod editorials;
mod landing;
mod masterclasses;
mod not_found;
mod playground;
mod profile;
mod services;

pub use about::About;
pub use artists::{ArtistDetail, Artists};
pub use artworks::{ArtworkDetail, Artworks};
pub use editorials::{EditorialDetail, Editorials};
pub use landing::Landing;
pub use masterclasses::Masterclasses;
pub use not_found::NotFound;
pub use playground::Playground;
pub use profile::ProfilePage;
pub use services::Services;

use crate::components::{ErrorBanner, LoadingSpinner};
use crate::hooks::Remote;
use yew::prelude::*;

/// Spinner, inline error, or the loaded content
fn remote_view<T>(state: &Remote<T>, loaded: impl FnOnce(&T) -> Html) -> Html {
    match state {
        Remote::Loading => html! { <LoadingSpinner label="Loading..." /> },
        Remote::Failed(message) => html! {
            <div class="max-w-6xl mx-auto px-6 pt-12">
                <ErrorBanner message={message.clone()} />
            </div>
        },
        Remote::Loaded(value) => loaded(value),
    }
}

fn image(src: Option<&String>, alt: &str, class: &'static str) -> Html {
    match src {
        Some(src) => html! { <img src={src.clone()} alt={alt.to_string()} {class} /> },
        None => html! { <div class={classes!(class, "bg-stone-100")}></div> },
    }
}
