use super::{image, remote_view};
use crate::hooks::use_remote;
use crate::routes::Route;
use crate::services::catalog;
use gallery_core::ItemId;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Editorials)]
pub fn editorials() -> Html {
    let editorials = use_remote((), |()| catalog::editorials());

    let list = remote_view(&*editorials, |editorials| {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                { for editorials.iter().map(|editorial| html! {
                    <Link<Route> to={Route::EditorialDetail { id: editorial.id.to_string() }} classes="block group">
                        {image(editorial.image_url.as_ref(), &editorial.title, "aspect-video w-full object-cover mb-4")}
                        <h2 class="text-lg font-bold mb-2">{editorial.title.clone()}</h2>
                        <p class="text-sm text-stone-600">
                            {editorial.author.clone().unwrap_or_default()}
                            if let Some(date) = editorial.published_date() {
                                {" • "}{date.to_string()}
                            }
                        </p>
                    </Link<Route>>
                }) }
            </div>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-8">{"Editorials"}</h1>
            {list}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditorialDetailProps {
    pub id: ItemId,
}

#[function_component(EditorialDetail)]
pub fn editorial_detail(props: &EditorialDetailProps) -> Html {
    let editorial = use_remote(props.id.clone(), catalog::editorial);

    let body = remote_view(&*editorial, |editorial| {
        html! {
            <article>
                <h1 class="text-4xl font-bold mb-4">{editorial.title.clone()}</h1>
                <p class="text-sm text-stone-600 mb-8">
                    {editorial.author.clone().unwrap_or_default()}
                    if let Some(date) = editorial.published_date() {
                        {" • "}{date.to_string()}
                    }
                </p>
                {image(editorial.image_url.as_ref(), &editorial.title, "w-full object-cover mb-8")}
                { for editorial.paragraphs().into_iter().map(|paragraph| html! {
                    <p class="text-lg leading-relaxed text-stone-800 mb-6">{paragraph}</p>
                }) }
                if !editorial.tags.is_empty() {
                    <div class="flex flex-wrap gap-2 mt-8">
                        { for editorial.tags.iter().map(|tag| html! {
                            <span class="px-2 py-1 bg-stone-100 text-xs">{tag.clone()}</span>
                        }) }
                    </div>
                }
            </article>
        }
    });

    html! {
        <div class="max-w-3xl mx-auto px-6 pt-12 pb-16">
            <Link<Route> to={Route::Editorials} classes="text-sm text-stone-500">{"← Back to Editorials"}</Link<Route>>
            <div class="mt-6">{body}</div>
        </div>
    }
}
