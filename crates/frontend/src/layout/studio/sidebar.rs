use crate::domain::bonsai::ui::BonsaiCanvas;
use crate::domain::clock::ui::BerlinClock;
use crate::domain::weather::ui::WeatherChip;
use crate::shared::icons::icon;
use crate::shared::scroll::scroll_to_id;
use crate::shared::theme::ThemeToggle;
use contracts::domain::portfolio::{PROFILE, SOCIALS, STUDIO_NAV};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar(active: RwSignal<String>, progress: Signal<f64>) -> impl IntoView {
    view! {
        <aside class="studio-sidebar">
            <div class="sidebar-top">
                <div class="sidebar-toolbar">
                    <A href="/cinematic" attr:class="theme-switch-link">"Cinematic mode"</A>
                    <ThemeToggle />
                </div>
                <h1 class="sidebar-name">{PROFILE.name}</h1>
                <p class="sidebar-headline">{PROFILE.headline}</p>
                <div class="chip-row">
                    <span class="chip">{icon("map-pin")} {PROFILE.location}</span>
                    <WeatherChip />
                    <BerlinClock />
                </div>
            </div>

            <nav class="sidebar-nav" aria-label="Sections">
                {STUDIO_NAV
                    .iter()
                    .map(|link| {
                        let anchor = link.anchor;
                        let is_active = move || active.with(|a| a == anchor);
                        view! {
                            <button
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                aria-current=move || is_active().then_some("true")
                                on:click=move |_| scroll_to_id(anchor)
                            >
                                <span class="nav-indicator"></span>
                                {link.name}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <BonsaiCanvas progress=progress />

            <div class="sidebar-socials">
                {SOCIALS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                class="icon-btn"
                                href=social.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.platform
                                title=social.platform
                            >
                                {icon(social.icon)}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}
