use super::model::fetch_weather;
use crate::shared::icons::icon;
use contracts::domain::weather::{WeatherData, BREMEN};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Small "12°C Partly cloudy" chip for Bremen. Hidden until data arrives.
#[component]
pub fn WeatherChip() -> impl IntoView {
    let weather = RwSignal::new(None::<WeatherData>);

    Effect::new(move |_| {
        spawn_local(async move {
            weather.set(fetch_weather(BREMEN).await);
        });
    });

    move || {
        weather.get().map(|data| {
            view! {
                <span class="chip weather-chip" title=data.summary("Bremen")>
                    {icon(data.condition.icon(data.is_day))}
                    <span>{format!("{}°C", data.temperature)}</span>
                    <span class="chip-muted">{data.condition.label()}</span>
                </span>
            }
        })
    }
}
