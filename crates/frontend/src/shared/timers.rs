//! Interval helpers tied to the owning component's lifetime.

use leptos::prelude::*;
use std::time::Duration;

/// Run `tick` every `period_ms` until the current reactive owner is cleaned up.
pub fn use_interval<F>(period_ms: u32, tick: F)
where
    F: Fn() + 'static,
{
    match set_interval_with_handle(tick, Duration::from_millis(period_ms as u64)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("set_interval failed: {:?}", e),
    }
}

/// Milliseconds since page load, for state machines that take `now`.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
