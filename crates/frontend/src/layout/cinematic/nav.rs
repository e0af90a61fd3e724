use crate::shared::scroll::{document_anchors, scroll_to_id, viewport_height, window_scroll_y};
use contracts::domain::portfolio::{CINEMATIC_NAV, PROFILE};
use contracts::motion::scroll_spy::{active_section, spy_line};
use contracts::motion::FrameGate;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use std::rc::Rc;

/// Below this offset the bar stays transparent over the hero.
const SOLID_AFTER_PX: f64 = 50.0;

#[component]
pub fn CinematicNav() -> impl IntoView {
    let active = RwSignal::new(String::new());
    let solid = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let update = move || {
        let scroll_y = window_scroll_y();
        solid.set(scroll_y > SOLID_AFTER_PX);
        let ids: Vec<&str> = CINEMATIC_NAV.iter().map(|l| l.anchor).collect();
        let anchors = document_anchors(&ids);
        let line = spy_line(scroll_y, viewport_height().unwrap_or_default());
        // the hero sits above the first anchor
        let id = match anchors.first() {
            Some(first) if line < first.top => None,
            _ => active_section(&anchors, line),
        };
        let id = id.unwrap_or_default();
        if active.with_untracked(|a| a != id) {
            active.set(id.to_string());
        }
    };

    Effect::new(move |_| update());

    let gate = Rc::new(FrameGate::new());
    let on_scroll = window_event_listener(ev::scroll, move |_| {
        if !gate.try_acquire() {
            return;
        }
        let gate = Rc::clone(&gate);
        request_animation_frame(move || {
            update();
            gate.release();
        });
    });
    on_cleanup(move || on_scroll.remove());

    view! {
        <nav class=move || if solid.get() { "cine-nav solid" } else { "cine-nav" } aria-label="Sections">
            <button class="cine-logo" on:click=move |_| scroll_to_id("hero")>
                {PROFILE.name.split_whitespace().next().unwrap_or_default()}
                <span class="accent">"."</span>
            </button>
            <button
                class="cine-menu-toggle"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|o| *o = !*o)
            >
                "Menu"
            </button>
            <div class=move || if menu_open.get() { "cine-links open" } else { "cine-links" }>
                {CINEMATIC_NAV
                    .iter()
                    .map(|link| {
                        let anchor = link.anchor;
                        view! {
                            <button
                                class=move || if active.with(|a| a == anchor) { "cine-link active" } else { "cine-link" }
                                on:click=move |_| {
                                    menu_open.set(false);
                                    scroll_to_id(anchor);
                                }
                            >
                                {link.name}
                            </button>
                        }
                    })
                    .collect_view()}
                <A href="/" attr:class="cine-link studio-link">"Studio"</A>
            </div>
        </nav>
    }
}
