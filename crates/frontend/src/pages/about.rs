use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-6 pt-12 pb-16">
            <h1 class="text-3xl font-bold mb-8 text-center">{"About Duo"}</h1>
            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-4 border-b border-stone-200 pb-2">{"Our Vision & Mission"}</h2>
                <p class="text-stone-700 mb-4">
                    {"Duo was created to bridge the gap between tradition and technology in the art world. \
                      Our mission is to preserve and promote traditional Chinese calligraphy and paintings \
                      while making them accessible to a global audience through modern technology."}
                </p>
            </section>
            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-4 border-b border-stone-200 pb-2">{"Our Plans"}</h2>
                <p class="text-stone-700 mb-4">
                    {"We're building an educational platform with masterclasses from renowned artists, \
                      interactive learning tools, and AI tools that respect the authenticity of traditional styles."}
                </p>
            </section>
            <section>
                <h2 class="text-2xl font-bold mb-4 border-b border-stone-200 pb-2">{"Visit Us"}</h2>
                <p class="text-stone-700">{"317 Outram Rd, #01-59 Concord Shopping Center, Singapore 169075"}</p>
                <p class="text-stone-700">{"+65 62350306 · info@duo.art"}</p>
            </section>
        </div>
    }
}
