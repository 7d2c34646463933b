use super::{image, remote_view};
use crate::components::EnquireButton;
use crate::hooks::use_remote;
use crate::services::catalog;
use gallery_core::EnquiryKind;
use yew::prelude::*;

#[function_component(Masterclasses)]
pub fn masterclasses() -> Html {
    let masterclasses = use_remote((), |()| catalog::masterclasses());

    let list = remote_view(&*masterclasses, |masterclasses| {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                { for masterclasses.iter().map(|masterclass| html! {
                    <article>
                        {image(masterclass.image_url.as_ref(), &masterclass.title, "aspect-video w-full object-cover mb-4")}
                        <h2 class="text-xl font-bold mb-2">{masterclass.title.clone()}</h2>
                        if let Some(description) = &masterclass.description {
                            <p class="text-stone-700 mb-4">{description.clone()}</p>
                        }
                        <EnquireButton kind={EnquiryKind::Masterclass} subject_id={masterclass.id.clone()} />
                    </article>
                }) }
            </div>
        }
    });

    html! {
        <div class="max-w-6xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-8">{"Masterclasses"}</h1>
            {list}
        </div>
    }
}
