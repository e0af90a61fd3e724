use crate::shared::api_utils::api_url;
use contracts::domain::portfolio::PROFILE;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum AssistantStatus {
    Online,
    Offline,
    Checking,
}

impl AssistantStatus {
    fn display_text(&self) -> &'static str {
        match self {
            AssistantStatus::Online => "Assistant online",
            AssistantStatus::Offline => "Assistant offline",
            AssistantStatus::Checking => "Checking assistant...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            AssistantStatus::Online => "status-online",
            AssistantStatus::Offline => "status-offline",
            AssistantStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(AssistantStatus::Checking);

    Effect::new(move |_| {
        spawn_local(async move {
            status.set(if ping_backend().await {
                AssistantStatus::Online
            } else {
                AssistantStatus::Offline
            });
        });
    });

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="studio-footer">
            <span>{format!("© {} {}", year, PROFILE.name)}</span>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

async fn ping_backend() -> bool {
    match gloo_net::http::Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::debug!("health check failed: {}", e);
            false
        }
    }
}
