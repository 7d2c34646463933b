use super::{image, remote_view};
use crate::components::EnquireButton;
use crate::hooks::use_remote;
use crate::services::catalog;
use gallery_core::EnquiryKind;
use yew::prelude::*;

#[function_component(Services)]
pub fn services() -> Html {
    let services = use_remote((), |()| catalog::services());

    let list = remote_view(&*services, |services| {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                { for services.iter().map(|service| html! {
                    <article>
                        {image(service.image_url.as_ref(), &service.title, "aspect-video w-full object-cover mb-4")}
                        if let Some(service_type) = &service.service_type {
                            <p class="text-xs uppercase tracking-wide text-stone-500">{service_type.clone()}</p>
                        }
                        <h2 class="text-xl font-bold mb-2">{service.title.clone()}</h2>
                        if let Some(description) = &service.description {
                            <p class="text-stone-700 mb-4">{description.clone()}</p>
                        }
                        <EnquireButton kind={EnquiryKind::Service} subject_id={service.id.clone()} />
                    </article>
                }) }
            </div>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-8">{"Services"}</h1>
            {list}
        </div>
    }
}
