use crate::shared::api_utils::get_text_with;
use contracts::domain::github::{profile_url, GithubProfile};

/// Public profile for `username`; `None` on non-2xx, network or decode failure.
pub async fn fetch_profile(username: &str) -> Option<GithubProfile> {
    match get_text_with(&profile_url(username), GithubProfile::parse).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("github profile unavailable: {}", e);
            None
        }
    }
}
