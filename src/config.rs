//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table, the user's file is merged on top, and the
//! result is deserialized and validated. A sparse file overrides only the keys
//! it names.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml      # Site config (optional, overrides stock defaults)
//! ├── locales/
//! ├── seo/
//! └── data/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! default_language = "en"
//! namespaces = ["common", "home", "services", "training",
//!               "partners", "events", "contact", "notFound"]
//!
//! [site]
//! title_template = "%s | KITES Kuwait"
//! default_title = "KITES Kuwait | Engineering Training & Simulation"
//! site_name = "KITES Kuwait"
//! site_url = "https://www.kites-kw.com"
//! og_image = "/assets/images/og-image.png"
//! twitter_handle = "@KITESKuwait"
//!
//! [contact]
//! simulated_delay_ms = 1500
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Language served at the site root.
    pub default_language: Language,
    /// Content namespaces to load from `locales/<lang>/<namespace>.json`.
    pub namespaces: Vec<String>,
    /// Site-wide SEO defaults.
    pub site: SiteDefaults,
    /// Contact form behavior.
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            namespaces: [
                "common", "home", "services", "training", "partners", "events", "contact",
                "notFound",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            site: SiteDefaults::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespaces.is_empty() {
            return Err(ConfigError::Validation("namespaces must not be empty".into()));
        }
        let mut seen = BTreeSet::new();
        for ns in &self.namespaces {
            if ns.is_empty()
                || !ns
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(ConfigError::Validation(format!(
                    "namespace '{ns}' may only contain letters, digits, '-' and '_'"
                )));
            }
            if !seen.insert(ns.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "namespace '{ns}' is listed twice"
                )));
            }
        }
        self.site.validate()
    }
}

/// Site-wide defaults used when composing page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDefaults {
    /// Title pattern shown in the inventory; `%s` is the page title.
    pub title_template: String,
    /// Document title for pages whose metadata carries no title.
    pub default_title: String,
    /// Appended to page titles: `"{title} | {site_name}"`.
    pub site_name: String,
    /// Absolute origin, no trailing slash.
    pub site_url: String,
    /// Fallback Open Graph image (absolute URL or site-relative path).
    pub og_image: String,
    /// `twitter:site` handle.
    pub twitter_handle: String,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            title_template: "%s | KITES Kuwait".to_string(),
            default_title: "KITES Kuwait | Engineering Training & Simulation".to_string(),
            site_name: "KITES Kuwait".to_string(),
            site_url: "https://www.kites-kw.com".to_string(),
            og_image: "/assets/images/og-image.png".to_string(),
            twitter_handle: "@KITESKuwait".to_string(),
        }
    }
}

impl SiteDefaults {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site.site_name must not be empty".into()));
        }
        if !(self.site_url.starts_with("https://") || self.site_url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "site.site_url must be an absolute http(s) URL".into(),
            ));
        }
        if self.site_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.site_url must not end with '/'".into(),
            ));
        }
        if !self.title_template.contains("%s") {
            return Err(ConfigError::Validation(
                "site.title_template must contain '%s'".into(),
            ));
        }
        Ok(())
    }

    /// Apply `title_template` to a page title.
    pub fn apply_template(&self, title: &str) -> String {
        self.title_template.replace("%s", title)
    }

    /// Join a site-relative path onto `site_url`. Absolute URLs pass through.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.site_url, path)
        } else {
            format!("{}/{}", self.site_url, path)
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Artificial latency reported with the acknowledgement. Nothing is sent.
    pub simulated_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 1500,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# KITES Site Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Language served at the site root ("en" or "ar").
default_language = "en"

# Content namespaces. Each one is read from locales/<lang>/<namespace>.json
# for every language. A namespace missing in one language is reported by
# `kites-site check` and renders as blank text.
namespaces = [
    "common",
    "home",
    "services",
    "training",
    "partners",
    "events",
    "contact",
    "notFound",
]

# ---------------------------------------------------------------------------
# Site-wide SEO defaults
# ---------------------------------------------------------------------------
[site]
# Page title pattern; %s is replaced with the page title.
title_template = "%s | KITES Kuwait"

# Title used when a page's metadata has no title of its own.
default_title = "KITES Kuwait | Engineering Training & Simulation"

# Appended to every page title.
site_name = "KITES Kuwait"

# Absolute origin used for canonical links and og:url. No trailing slash.
site_url = "https://www.kites-kw.com"

# Fallback Open Graph image (absolute URL or path under site_url).
og_image = "/assets/images/og-image.png"

# twitter:site handle.
twitter_handle = "@KITESKuwait"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# Simulated submission latency in milliseconds. Submissions are validated
# and acknowledged, never sent or stored.
simulated_delay_ms = 1500
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_site_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site.site_name, "KITES Kuwait");
        assert_eq!(config.default_language, Language::En);
        assert!(config.namespaces.contains(&"contact".to_string()));
    }

    #[test]
    fn default_config_validates() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn stock_config_toml_matches_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.site, defaults.site);
        assert_eq!(parsed.namespaces, defaults.namespaces);
        assert_eq!(parsed.default_language, defaults.default_language);
        assert_eq!(
            parsed.contact.simulated_delay_ms,
            defaults.contact.simulated_delay_ms
        );
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
default_language = "ar"

[site]
site_name = "KITES"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_language, Language::Ar);
        assert_eq!(config.site.site_name, "KITES");
        // Untouched values keep their defaults
        assert_eq!(config.site.site_url, "https://www.kites-kw.com");
        assert_eq!(config.contact.simulated_delay_ms, 1500);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r#"
[site]
sitename = "typo"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn unsupported_default_language_is_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(r#"default_language = "fr""#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_relative_site_url() {
        let mut config = SiteConfig::default();
        config.site.site_url = "www.kites-kw.com".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_template_without_placeholder() {
        let mut config = SiteConfig::default();
        config.site.title_template = "KITES".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_namespace() {
        let mut config = SiteConfig::default();
        config.namespaces.push("home".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn validate_rejects_path_like_namespace() {
        let mut config = SiteConfig::default();
        config.namespaces = vec!["../secrets".into()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_toml_overlay_wins_per_key() {
        let base: toml::Value = toml::from_str("[site]\na = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[site]\nb = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["site"]["a"].as_integer(), Some(1));
        assert_eq!(merged["site"]["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_replaces_arrays_whole() {
        let base: toml::Value = toml::from_str(r#"namespaces = ["a", "b"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"namespaces = ["c"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["namespaces"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn load_config_without_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site, SiteDefaults::default());
    }

    #[test]
    fn load_config_merges_user_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[site]\ntwitter_handle = \"@kites\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.twitter_handle, "@kites");
        assert_eq!(config.site.site_name, "KITES Kuwait");
    }

    #[test]
    fn load_config_reports_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site\n").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn apply_template_substitutes_title() {
        let site = SiteDefaults::default();
        assert_eq!(site.apply_template("Contact Us"), "Contact Us | KITES Kuwait");
    }

    #[test]
    fn absolute_url_joins_relative_paths() {
        let site = SiteDefaults::default();
        assert_eq!(
            site.absolute_url("/images/a.jpg"),
            "https://www.kites-kw.com/images/a.jpg"
        );
        assert_eq!(
            site.absolute_url("images/a.jpg"),
            "https://www.kites-kw.com/images/a.jpg"
        );
        assert_eq!(site.absolute_url("https://cdn.x/a.jpg"), "https://cdn.x/a.jpg");
    }
}
