use crate::layout::cinematic::CinematicPage;
use crate::layout::studio::StudioPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page wandered off. "</p>
            <A href="/">"Back to the studio"</A>
        </div>
    }
}

/// `/` renders the Studio theme, `/cinematic` the Cinematic one.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=StudioPage />
                <Route path=path!("/cinematic") view=CinematicPage />
            </Routes>
        </Router>
    }
}
