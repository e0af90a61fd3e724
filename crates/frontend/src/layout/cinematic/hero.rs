use crate::shared::icons::icon;
use crate::shared::scroll::scroll_to_id;
use crate::shared::timers::use_interval;
use contracts::domain::portfolio::{HERO_DESCRIPTORS, HERO_ROTATE_MS, PROFILE};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let descriptor = RwSignal::new(0_usize);
    use_interval(HERO_ROTATE_MS, move || {
        descriptor.update(|i| *i = (*i + 1) % HERO_DESCRIPTORS.len());
    });

    view! {
        <section id="hero" class="cine-hero">
            <p class="cine-eyebrow">{PROFILE.location}</p>
            <h1 class="cine-title">{PROFILE.name}</h1>
            <p class="cine-subtitle">{PROFILE.headline}</p>
            // keyed by index so the fade-in animation replays on every change
            {move || {
                let i = descriptor.get();
                view! { <p class="cine-descriptor" data-index={i.to_string()}>{HERO_DESCRIPTORS[i]}</p> }
            }}
            <button class="cine-scroll-cue" aria-label="Scroll to about" on:click=move |_| scroll_to_id("about")>
                {icon("chevron-down")}
            </button>
        </section>
    }
}
