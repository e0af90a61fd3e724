use crate::shared::icons::icon;
use crate::shared::timers::use_interval;
use chrono::{DateTime, Utc};
use contracts::shared::clock::{berlin_time, zone_abbreviation, TICK_MS};
use leptos::prelude::*;

fn browser_now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Local time in Bremen, refreshed every second.
#[component]
pub fn BerlinClock() -> impl IntoView {
    let now = RwSignal::new(browser_now());
    use_interval(TICK_MS, move || now.set(browser_now()));

    view! {
        <span class="chip clock-chip" title="Local time in Bremen">
            {icon("clock")}
            <span class="tabular">{move || berlin_time(now.get())}</span>
            <span class="chip-muted">{move || zone_abbreviation(now.get())}</span>
        </span>
    }
}
