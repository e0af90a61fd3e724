//! Public GitHub profile card data.

use serde::{Deserialize, Serialize};

/// Link used by the fallback card when the profile cannot be loaded.
pub const FALLBACK_URL: &str = "https://github.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubProfile {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub public_repos: u32,
    pub followers: u32,
}

impl GithubProfile {
    /// Decode an API body; extra fields are ignored, missing ones fail.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

pub fn profile_url(username: &str) -> String {
    format!(
        "https://api.github.com/users/{}",
        urlencoding::encode(username.trim())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url() {
        assert_eq!(profile_url("baddy1411"), "https://api.github.com/users/baddy1411");
        assert_eq!(profile_url(" a b "), "https://api.github.com/users/a%20b");
    }

    #[test]
    fn test_parse_profile() {
        let body = r#"{
            "login": "baddy1411",
            "id": 1,
            "avatar_url": "https://avatars.githubusercontent.com/u/1",
            "html_url": "https://github.com/baddy1411",
            "public_repos": 23,
            "followers": 7,
            "bio": null
        }"#;
        let p = GithubProfile::parse(body).unwrap();
        assert_eq!(p.login, "baddy1411");
        assert_eq!(p.public_repos, 23);
        assert_eq!(p.followers, 7);
    }

    #[test]
    fn test_parse_rate_limit_body() {
        let body = r#"{"message":"API rate limit exceeded","documentation_url":"https://docs.github.com"}"#;
        assert!(GithubProfile::parse(body).is_none());
    }
}
