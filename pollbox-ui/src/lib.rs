pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{CreatePollPage, HomePage, PollPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Pollbox"/>
        <Meta name="description" content="Create polls and vote, one email per poll"/>
        <Stylesheet id="leptos" href="/pkg/pollbox.css"/>

        <Router>
            <nav class="nav">
                <a href="/" class="nav__link">"Home (All Polls)"</a>
                <a href="/create" class="nav__link">"Create Poll"</a>
            </nav>
            <main class="container">
                <Routes fallback=|| "404 Not Found">
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/poll/:id") view=PollPage/>
                    <Route path=path!("/create") view=CreatePollPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
