//! Site configuration.
//!
//! Each site embeds a `site.toml` at build time. A broken file never stops
//! the site from rendering: [`SiteConfig::load_embedded`] logs the problem and
//! falls back to defaults.

use crate::contact::DEFAULT_RELAY_ENDPOINT;
use crate::scroll_spy::DEFAULT_SPY_OFFSET;
use crate::shortcut::Shortcut;
use crate::typewriter::TypewriterTiming;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name used for the placeholder avatar and the console banner.
    pub owner: String,
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
    /// Scroll-spy activation line, px from the viewport top.
    pub scroll_offset: f64,
    pub contact: ContactConfig,
    pub profile: Option<ProfileConfig>,
    pub shortcut: Option<Shortcut>,
    pub typewriter: TypewriterTiming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    /// Public relay key; it ships in the page anyway.
    pub access_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Account name on the code-hosting profile API.
    pub api_user: String,
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            log_level: "info".to_string(),
            scroll_offset: DEFAULT_SPY_OFFSET,
            contact: ContactConfig::default(),
            profile: None,
            shortcut: None,
            typewriter: TypewriterTiming::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            access_key: String::new(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an embedded file; defaults on any error.
    pub fn load_embedded(name: &str, source: &str) -> Self {
        match Self::from_toml(source) {
            Ok(config) => config,
            Err(e) => {
                warn!(file = name, error = %e, "falling back to default site config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scroll_offset.is_finite() || self.scroll_offset < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scroll_offset must be a non-negative number, got {}",
                self.scroll_offset
            )));
        }
        let endpoint = self.contact.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::Invalid(format!(
                "contact.endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        let timing = &self.typewriter;
        if timing.type_ms == 0 || timing.delete_ms == 0 {
            return Err(ConfigError::Invalid(
                "typewriter type_ms and delete_ms must be positive".to_string(),
            ));
        }
        if let Some(shortcut) = self.shortcut.as_ref().filter(|s| !s.key.is_alphanumeric()) {
            return Err(ConfigError::Invalid(format!(
                "shortcut.key must be a letter or digit, got {:?}",
                shortcut.key
            )));
        }
        Ok(())
    }

    /// Configured log level; unknown names fall back to `INFO`.
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.trim()).unwrap_or_else(|_| {
            warn!(level = %self.log_level, "unknown log level, using info");
            tracing::Level::INFO
        })
    }

    /// Whether the contact form can post at all.
    pub fn has_relay_key(&self) -> bool {
        !self.contact.access_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.contact.endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.scroll_offset, 100.0);
        assert_eq!(config.log_level(), tracing::Level::INFO);
        assert!(!config.has_relay_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_config() {
        let config = SiteConfig::from_toml(
            r#"
owner = "Rithick M K"
log_level = "debug"
scroll_offset = 120

[contact]
access_key = "abc-123"

[profile]
api_user = "rithick-06"
url = "https://github.com/rithick-06"

[shortcut]
key = "g"
url = "https://github.com/rithick-06"

[typewriter]
hold_ms = 1500
"#,
        )
        .unwrap();

        assert_eq!(config.owner, "Rithick M K");
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(config.scroll_offset, 120.0);
        assert_eq!(config.contact.endpoint, DEFAULT_RELAY_ENDPOINT);
        assert!(config.has_relay_key());
        assert_eq!(config.shortcut.map(|s| s.key), Some('g'));
        assert_eq!(config.typewriter.hold_ms, 1500);
        assert_eq!(config.typewriter.type_ms, 100);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SiteConfig::from_toml("scroll_offset = -5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SiteConfig::from_toml("[contact]\nendpoint = \"ftp://relay\"").unwrap_err();
        assert!(err.to_string().contains("contact.endpoint"));

        let err = SiteConfig::from_toml("[typewriter]\ntype_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_broken_file_falls_back() {
        let config = SiteConfig::load_embedded("site.toml", "owner = [unterminated");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_unknown_log_level() {
        let config = SiteConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }
}
