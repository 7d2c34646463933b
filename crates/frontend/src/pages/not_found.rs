use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-6 pt-24 pb-16 text-center">
            <h1 class="text-4xl font-bold mb-4">{"Page Not Found"}</h1>
            <p class="text-stone-600 mb-8">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="px-6 py-3 bg-black text-white">{"Back to Home"}</Link<Route>>
        </div>
    }
}
