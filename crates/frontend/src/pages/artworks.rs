use super::{image, remote_view};
use crate::components::EnquireButton;
use crate::hooks::use_remote;
use crate::routes::Route;
use crate::services::catalog;
use gallery_core::{EnquiryKind, ItemId};
use gallery_http::Artwork;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Artworks)]
pub fn artworks() -> Html {
    let artworks = use_remote((), |()| catalog::artworks());

    let grid = remote_view(&*artworks, |artworks| {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                { for artworks.iter().map(artwork_card) }
            </div>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-8">{"Artworks"}</h1>
            {grid}
        </div>
    }
}

fn artwork_card(artwork: &Artwork) -> Html {
    html! {
        <Link<Route> to={Route::ArtworkDetail { id: artwork.id.to_string() }} classes="block group">
            {image(artwork.image_url.as_ref(), &artwork.title, "aspect-square w-full object-cover mb-4")}
            <h2 class="text-lg font-bold">{artwork.title.clone()}</h2>
            if let Some(artist) = &artwork.artist {
                <p class="text-sm text-stone-600">{artist.name.clone()}</p>
            }
            if let Some(price) = artwork.formatted_price() {
                <p class="text-sm">{price}</p>
            }
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArtworkDetailProps {
    pub id: ItemId,
}

#[function_component(ArtworkDetail)]
pub fn artwork_detail(props: &ArtworkDetailProps) -> Html {
    let artwork = use_remote(props.id.clone(), catalog::artwork);

    let body = remote_view(&*artwork, |artwork| {
        let facts = [
            ("Year", artwork.year.map(|year| year.to_string())),
            ("Medium", artwork.medium.clone()),
            ("Category", artwork.category.clone()),
            ("Mounting", artwork.mounting.clone()),
            ("Dimensions", artwork.dimensions()),
            ("Price", artwork.formatted_price()),
        ];

        html! {
            <div class="grid md:grid-cols-2 gap-12">
                {image(artwork.image_url.as_ref(), &artwork.title, "w-full object-contain")}
                <div>
                    <h1 class="text-3xl font-bold mb-2">{artwork.title.clone()}</h1>
                    if let Some(artist) = &artwork.artist {
                        <Link<Route> to={Route::ArtistDetail { id: artist.id.to_string() }} classes="text-amber-700">
                            {artist.name.clone()}
                        </Link<Route>>
                    }
                    <dl class="grid grid-cols-2 gap-2 my-6 text-sm">
                        { for facts.into_iter().filter_map(|(label, value)| value.map(|value| html! {
                            <>
                                <dt class="text-stone-500">{label}</dt>
                                <dd>{value}</dd>
                            </>
                        })) }
                    </dl>
                    if let Some(description) = &artwork.description {
                        <p class="text-stone-700 mb-4">{description.clone()}</p>
                    }
                    if let Some(long) = &artwork.long_description {
                        <p class="text-stone-700 mb-4 whitespace-pre-line">{long.clone()}</p>
                    }
                    if !artwork.additional_tags.is_empty() {
                        <div class="flex flex-wrap gap-2 mb-6">
                            { for artwork.additional_tags.iter().map(|tag| html! {
                                <span class="px-2 py-1 bg-stone-100 text-xs">{tag.clone()}</span>
                            }) }
                        </div>
                    }
                    <EnquireButton kind={EnquiryKind::Artwork} subject_id={artwork.id.clone()} label="Enquire About This Artwork" />
                </div>
            </div>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <Link<Route> to={Route::Artworks} classes="text-sm text-stone-500">{"← Back to Artworks"}</Link<Route>>
            <div class="mt-6">{body}</div>
        </div>
    }
}
