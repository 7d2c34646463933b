use crate::components::{Footer, ModalHost, NavBar};
use crate::modal::ModalProvider;
use crate::routes::{Route, switch};
use crate::session::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ModalProvider>
                    <AppContent />
                </ModalProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-stone-50 text-stone-900">
            <NavBar />
            <main class="flex-1">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <ModalHost />
        </div>
    }
}
