use super::{image, remote_view};
use crate::hooks::use_remote;
use crate::routes::Route;
use crate::services::catalog;
use yew::prelude::*;
use yew_router::prelude::*;

const RECENT_EDITORIALS: usize = 3;

#[function_component(Landing)]
pub fn landing() -> Html {
    let featured = use_remote((), |()| catalog::featured_artist());
    let editorials = use_remote((), |()| catalog::editorials());

    let featured_view = remote_view(&*featured, |artist| {
        html! {
            <section class="grid md:grid-cols-2 gap-8 items-center">
                {image(
                    artist.artworks.first().and_then(|artwork| artwork.image_url.as_ref()),
                    &format!("Artwork by {}", artist.name),
                    "max-h-96 w-full object-contain",
                )}
                <div>
                    <h2 class="text-2xl font-bold mb-2">{"Featured Artist"}</h2>
                    <h3 class="text-3xl font-bold mb-4 text-amber-700">{artist.name.clone()}</h3>
                    <p class="text-sm text-stone-600 mb-4">{artist.lifespan()}</p>
                    if let Some(bio) = &artist.bio {
                        <p class="text-stone-700 mb-6 line-clamp-3">{bio.clone()}</p>
                    }
                    <Link<Route> to={Route::ArtistDetail { id: artist.id.to_string() }}
                        classes="inline-block px-6 py-3 bg-black text-white">
                        {"View Artist Profile"}
                    </Link<Route>>
                </div>
            </section>
        }
    });

    let editorials_view = remote_view(&*editorials, |list| {
        if list.is_empty() {
            return html! {};
        }
        html! {
            <section class="mt-16">
                <div class="mb-8 flex justify-between items-center">
                    <h2 class="text-2xl font-bold">{"Recent Editorials"}</h2>
                    <Link<Route> to={Route::Editorials} classes="text-amber-700 hover:underline">{"View All"}</Link<Route>>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for list.iter().take(RECENT_EDITORIALS).map(|editorial| html! {
                        <Link<Route> to={Route::EditorialDetail { id: editorial.id.to_string() }} classes="block group">
                            {image(editorial.image_url.as_ref(), &editorial.title, "aspect-video w-full object-cover mb-4")}
                            <h3 class="text-lg font-bold mb-2">{editorial.title.clone()}</h3>
                            <p class="text-sm text-stone-600">
                                {editorial.author.clone().unwrap_or_default()}
                                if let Some(date) = editorial.published_date() {
                                    {" • "}{date.to_string()}
                                }
                            </p>
                        </Link<Route>>
                    }) }
                </div>
            </section>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <section class="mb-16">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">
                    <span class="text-red-800">{"DUO"}</span>{" Chinese Calligraphy & Art"}
                </h1>
                <p class="text-lg text-stone-700 mb-8">
                    {"Rediscover the timeless beauty of traditional Chinese art through our curated collection of masterpieces."}
                </p>
                <div class="flex flex-wrap gap-4">
                    <Link<Route> to={Route::Artworks} classes="px-6 py-3 bg-black text-white">{"Explore Artworks"}</Link<Route>>
                    <Link<Route> to={Route::Masterclasses} classes="px-6 py-3 border border-black">{"Join Masterclasses"}</Link<Route>>
                </div>
            </section>
            {featured_view}
            {editorials_view}
        </div>
    }
}
