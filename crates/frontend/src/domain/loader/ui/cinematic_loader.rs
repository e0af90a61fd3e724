use crate::shared::timers::{now_ms, use_interval};
use contracts::motion::loader::EasedLoader;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const FRAME_MS: u32 = 16;
const RING_RADIUS: f64 = 54.0;

/// Eased percentage counter with a circular gauge.
#[component]
pub fn CinematicLoader(on_done: Callback<()>) -> impl IntoView {
    let loader = EasedLoader::default();
    let started = now_ms();
    let elapsed = RwSignal::new(0.0_f64);
    let finished = RwSignal::new(false);

    use_interval(FRAME_MS, move || {
        if finished.get_untracked() {
            return;
        }
        let t = now_ms() - started;
        elapsed.set(t);
        if loader.is_finished(t) {
            finished.set(true);
            spawn_local(async move {
                TimeoutFuture::new(loader.exit_delay_ms).await;
                on_done.run(());
            });
        }
    });

    let percent = move || loader.percent(elapsed.get());
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;

    view! {
        <div class=move || if finished.get() { "cine-loader exiting" } else { "cine-loader" } role="status">
            <svg width="140" height="140" viewBox="0 0 140 140" aria-hidden="true">
                <circle class="ring-track" cx="70" cy="70" r={RING_RADIUS.to_string()} />
                <circle
                    class="ring-fill"
                    cx="70"
                    cy="70"
                    r={RING_RADIUS.to_string()}
                    stroke-dasharray={format!("{:.2}", circumference)}
                    stroke-dashoffset=move || format!("{:.2}", EasedLoader::ring_offset(RING_RADIUS, percent()))
                />
            </svg>
            <div class="cine-loader-percent">{move || format!("{:03}", percent().floor() as u32)}</div>
        </div>
    }
}
