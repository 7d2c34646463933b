use super::{image, remote_view};
use crate::hooks::use_remote;
use crate::routes::Route;
use crate::services::catalog;
use gallery_core::ItemId;
use gallery_http::{Artist, MediaArticle};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Artists)]
pub fn artists() -> Html {
    let artists = use_remote((), |()| catalog::artists());

    let list = remote_view(&*artists, |artists| {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                { for artists.iter().map(artist_card) }
            </div>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-8">{"Artists"}</h1>
            {list}
        </div>
    }
}

fn artist_card(artist: &Artist) -> Html {
    let cover = artist
        .featured_artwork()
        .or_else(|| artist.artworks.first())
        .and_then(|artwork| artwork.image_url.as_ref());

    html! {
        <Link<Route> to={Route::ArtistDetail { id: artist.id.to_string() }} classes="block group">
            {image(cover, &artist.name, "aspect-square w-full object-cover mb-4")}
            <h2 class="text-lg font-bold">{artist.name.clone()}</h2>
            <p class="text-sm text-stone-600">{artist.lifespan()}</p>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArtistDetailProps {
    pub id: ItemId,
}

#[function_component(ArtistDetail)]
pub fn artist_detail(props: &ArtistDetailProps) -> Html {
    let artist = use_remote(props.id.clone(), catalog::artist);

    let body = remote_view(&*artist, |artist| {
        html! {
            <>
                <h1 class="text-3xl font-bold mb-2">{artist.name.clone()}</h1>
                <p class="text-stone-600 mb-8">{artist.lifespan()}</p>
                if let Some(bio) = &artist.bio {
                    <p class="text-stone-700 mb-6">{bio.clone()}</p>
                }
                if let Some(about) = &artist.about {
                    <section class="mb-12">
                        <h2 class="text-2xl font-bold mb-4">{"About"}</h2>
                        <p class="text-stone-700 whitespace-pre-line">{about.clone()}</p>
                    </section>
                }
                if !artist.artworks.is_empty() {
                    <section class="mb-12">
                        <h2 class="text-2xl font-bold mb-4">{"Artworks"}</h2>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                            { for artist.artworks.iter().map(|artwork| html! {
                                <Link<Route> to={Route::ArtworkDetail { id: artwork.id.to_string() }} classes="block">
                                    {image(artwork.image_url.as_ref(), &artwork.title, "aspect-square w-full object-cover mb-2")}
                                    <p class="text-sm">{artwork.title.clone()}</p>
                                </Link<Route>>
                            }) }
                        </div>
                    </section>
                }
                if !artist.media_articles.is_empty() {
                    <section>
                        <h2 class="text-2xl font-bold mb-4">{"In the Media"}</h2>
                        <ul class="space-y-4">
                            { for artist.media_articles.iter().map(media_article) }
                        </ul>
                    </section>
                }
            </>
        }
    });

    html! {
        <div class="max-w-5xl mx-auto px-6 pt-12 pb-16">
            <Link<Route> to={Route::Artists} classes="text-sm text-stone-500">{"← Back to Artists"}</Link<Route>>
            <div class="mt-6">{body}</div>
        </div>
    }
}

fn media_article(article: &MediaArticle) -> Html {
    let byline = [article.source.as_deref(), article.date.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <li>
            if let Some(url) = article.url.clone() {
                <a href={url} target="_blank" rel="noopener noreferrer" class="font-semibold underline">
                    {article.title.clone()}
                </a>
            } else {
                <span class="font-semibold">{article.title.clone()}</span>
            }
            if !byline.is_empty() {
                <p class="text-sm text-stone-500">{byline}</p>
            }
        </li>
    }
}
