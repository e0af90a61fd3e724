use super::model::fetch_profile;
use crate::shared::components::reveal_card::RevealCard;
use crate::shared::icons::icon;
use contracts::domain::github::{GithubProfile, FALLBACK_URL};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
enum ProfileState {
    Loading,
    Loaded(GithubProfile),
    Unavailable,
}

#[component]
pub fn GithubCard(#[prop(into)] username: String) -> impl IntoView {
    let state = RwSignal::new(ProfileState::Loading);

    Effect::new(move |_| {
        let username = username.clone();
        spawn_local(async move {
            state.set(match fetch_profile(&username).await {
                Some(profile) => ProfileState::Loaded(profile),
                None => ProfileState::Unavailable,
            });
        });
    });

    view! {
        <RevealCard class="github-card" delay_ms=120>
            {move || match state.get() {
                ProfileState::Loading => view! {
                    <div class="github-card-body skeleton" aria-busy="true">
                        <div class="skeleton-avatar"></div>
                        <div class="skeleton-line"></div>
                    </div>
                }.into_any(),
                ProfileState::Loaded(profile) => view! {
                    <a class="github-card-body" href=profile.html_url.clone() target="_blank" rel="noopener noreferrer">
                        <img class="github-avatar" src=profile.avatar_url.clone() alt={format!("{} avatar", profile.login)} />
                        <div>
                            <div class="github-login">{icon("github")} " @" {profile.login.clone()}</div>
                            <div class="github-stats">
                                <span>{profile.public_repos} " repos"</span>
                                <span>{profile.followers} " followers"</span>
                            </div>
                        </div>
                        {icon("arrow-up-right")}
                    </a>
                }.into_any(),
                ProfileState::Unavailable => view! {
                    <a class="github-card-body fallback" href=FALLBACK_URL target="_blank" rel="noopener noreferrer">
                        {icon("github")}
                        <div>
                            <div class="github-login">"GitHub"</div>
                            <div class="github-stats">"Check out my code"</div>
                        </div>
                        {icon("arrow-up-right")}
                    </a>
                }.into_any(),
            }}
        </RevealCard>
    }
}
