//! Application routes

use crate::pages::{
    About, ArtistDetail, Artists, ArtworkDetail, Artworks, EditorialDetail, Editorials, Landing,
    Masterclasses, NotFound, Playground, ProfilePage, Services,
};
use gallery_core::ItemId;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/artists")]
    Artists,
    #[at("/artists/:id")]
    ArtistDetail { id: String },
    #[at("/artworks")]
    Artworks,
    #[at("/artworks/:id")]
    ArtworkDetail { id: String },
    #[at("/masterclasses")]
    Masterclasses,
    #[at("/services")]
    Services,
    #[at("/editorials")]
    Editorials,
    #[at("/editorials/:id")]
    EditorialDetail { id: String },
    #[at("/playground")]
    Playground,
    #[at("/profile")]
    Profile,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Artists => html! { <Artists /> },
        Route::ArtistDetail { id } => html! { <ArtistDetail id={ItemId::from(id)} /> },
        Route::Artworks => html! { <Artworks /> },
        Route::ArtworkDetail { id } => html! { <ArtworkDetail id={ItemId::from(id)} /> },
        Route::Masterclasses => html! { <Masterclasses /> },
        Route::Services => html! { <Services /> },
        Route::Editorials => html! { <Editorials /> },
        Route::EditorialDetail { id } => html! { <EditorialDetail id={ItemId::from(id)} /> },
        Route::Playground => html! { <Playground /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
