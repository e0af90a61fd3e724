use crate::shared::timers::use_interval;
use contracts::motion::loader::BootSequence;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Terminal-style boot log shown over the Studio layout until the bar fills.
#[component]
pub fn BootScreen(on_done: Callback<()>) -> impl IntoView {
    let boot = RwSignal::new(BootSequence::new());
    let exiting = RwSignal::new(false);

    use_interval(BootSequence::LINE_INTERVAL_MS, move || {
        boot.maybe_update(|b| b.tick_line());
    });

    use_interval(BootSequence::PROGRESS_INTERVAL_MS, move || {
        if exiting.get_untracked() {
            return;
        }
        boot.update(|b| b.tick_progress(js_sys::Math::random()));
        if boot.with_untracked(|b| b.is_complete()) {
            exiting.set(true);
            spawn_local(async move {
                TimeoutFuture::new(BootSequence::EXIT_DELAY_MS).await;
                on_done.run(());
            });
        }
    });

    view! {
        <div class=move || if exiting.get() { "boot-screen exiting" } else { "boot-screen" } role="status">
            <div class="boot-log">
                {move || {
                    boot.with(|b| b.lines())
                        .into_iter()
                        .map(|line| view! { <div class="boot-line">{line}</div> })
                        .collect_view()
                }}
            </div>
            <div class="boot-progress">
                <div
                    class="boot-progress-bar"
                    style=move || format!("width: {:.1}%;", boot.with(|b| b.progress()))
                ></div>
            </div>
            <div class="boot-percent">{move || boot.with(|b| b.percent_label())}</div>
        </div>
    }
}
