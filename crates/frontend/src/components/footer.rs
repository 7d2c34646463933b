use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-white border-t border-stone-200 py-10 mt-16">
            <div class="max-w-6xl mx-auto px-6 grid grid-cols-1 md:grid-cols-3 gap-8 text-sm text-stone-600">
                <div>
                    <Link<Route> to={Route::Home} classes="text-xl font-bold text-black">{"DUO"}</Link<Route>>
                    <p class="mt-4">{"Re-discover a lost art"}</p>
                </div>
                <div>
                    <h3 class="font-semibold mb-4 text-stone-900">{"CONTACT US"}</h3>
                    <p>{"317 Outram Rd, #01-59 Concord Shopping Center, Singapore 169075"}</p>
                    <p>{"+65 62350306"}</p>
                    <p>{"info@duo.art"}</p>
                </div>
                <nav class="flex flex-col gap-2">
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Editorials}>{"Editorials"}</Link<Route>>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                </nav>
            </div>
        </footer>
    }
}
