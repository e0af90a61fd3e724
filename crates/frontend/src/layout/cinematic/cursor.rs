use contracts::motion::cursor::{CursorDot, INTERACTIVE_SELECTOR, TOUCH_LAYOUT_QUERY};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn touch_layout() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(TOUCH_LAYOUT_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn over_interactive(e: &ev::MouseEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Soft dot that trails the pointer. Not rendered on narrow (touch) layouts.
#[component]
pub fn CustomCursor() -> impl IntoView {
    if touch_layout() {
        return ().into_any();
    }

    let dot = RwSignal::new(CursorDot::new());

    let on_move = window_event_listener(ev::mousemove, move |e: ev::MouseEvent| {
        let hovering = over_interactive(&e);
        dot.update(|d| d.on_move(e.client_x() as f64, e.client_y() as f64, hovering));
    });
    // mouseout with no related target means the pointer left the document
    let on_out = window_event_listener(ev::mouseout, move |e: ev::MouseEvent| {
        if e.related_target().is_none() {
            dot.update(|d| d.on_leave());
        }
    });
    let on_over = window_event_listener(ev::mouseover, move |_| {
        if !dot.with_untracked(|d| d.is_visible()) {
            dot.update(|d| d.on_enter());
        }
    });
    on_cleanup(move || {
        on_move.remove();
        on_out.remove();
        on_over.remove();
    });

    view! {
        <div
            class=move || if dot.with(|d| d.is_hovering()) { "cine-cursor hovering" } else { "cine-cursor" }
            style=move || dot.with(|d| d.style())
            aria-hidden="true"
        ></div>
    }
    .into_any()
}
