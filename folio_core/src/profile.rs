//! Developer-profile avatar lookup.
//!
//! The hero fetches the public profile once on mount. Whatever goes wrong
//! (network, status, JSON, missing field) the result is a placeholder
//! initial, never an error shown to the visitor.

use serde::Deserialize;
use tracing::warn;

const PROFILE_API_BASE: &str = "https://api.github.com/users";

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    avatar_url: Option<String>,
}

pub fn profile_api_url(user: &str) -> String {
    format!("{PROFILE_API_BASE}/{}", user.trim().trim_matches('/'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Placeholder(char),
}

impl Avatar {
    /// Placeholder built from the first letter or digit of `display_name`.
    pub fn placeholder(display_name: &str) -> Self {
        let initial = display_name
            .chars()
            .find(|c| c.is_alphanumeric())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?');
        Avatar::Placeholder(initial)
    }

    /// Interpret a profile API response body.
    pub fn from_response(body: &str, display_name: &str) -> Self {
        match serde_json::from_str::<ProfileResponse>(body) {
            Ok(ProfileResponse {
                avatar_url: Some(url),
            }) if !url.trim().is_empty() => Avatar::Image(url),
            Ok(_) => Avatar::placeholder(display_name),
            Err(err) => {
                warn!(error = %err, "profile response unreadable, using placeholder");
                Avatar::placeholder(display_name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_for_user() {
        assert_eq!(
            profile_api_url(" rithick-06 "),
            "https://api.github.com/users/rithick-06"
        );
    }

    #[test]
    fn reads_avatar_url() {
        let body = r#"{"login":"octo","avatar_url":"https://avatars.example/u/1"}"#;
        assert_eq!(
            Avatar::from_response(body, "Octo Cat"),
            Avatar::Image("https://avatars.example/u/1".into())
        );
    }

    #[test]
    fn missing_or_blank_avatar_falls_back() {
        assert_eq!(
            Avatar::from_response(r#"{"login":"x"}"#, "Rithick M K"),
            Avatar::Placeholder('R')
        );
        assert_eq!(
            Avatar::from_response(r#"{"avatar_url":"  "}"#, "rithick"),
            Avatar::Placeholder('R')
        );
        assert_eq!(
            Avatar::from_response(r#"{"avatar_url":null}"#, "john"),
            Avatar::Placeholder('J')
        );
    }

    #[test]
    fn garbage_body_falls_back() {
        assert_eq!(
            Avatar::from_response("<html>rate limited</html>", "  ~doe"),
            Avatar::Placeholder('D')
        );
        assert_eq!(Avatar::placeholder("***"), Avatar::Placeholder('?'));
    }
}
