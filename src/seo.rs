//! Page metadata resolution and `<head>` rendering.
//!
//! Metadata comes from three static tables under `content/seo/`:
//!
//! | File | Keyed by | Used when |
//! |------|----------|-----------|
//! | `pages.json` | page key (`home`, `services`, …) | always (the base record) |
//! | `services.json` | service id | a service detail page is rendered |
//! | `partners.json` | partner id | a partner detail page is rendered |
//!
//! Each entry holds one [`PageSeo`] per language: `{ "en": {...}, "ar": {...} }`.
//!
//! ## Precedence
//!
//! ```text
//! pages[page_key][lang]                  base (required)
//!   └─ services[service_id][lang]        replaces the whole record if present
//!        └─ partners[partner_id][lang]   replaces the whole record if present
//!             └─ custom_meta             overwrites field by field
//! ```
//!
//! Entity records replace rather than merge, so a service page never inherits
//! keywords from the generic services page. Only `custom_meta` merges.
//!
//! ## Derived Fields
//!
//! - `full_title`: `"{title} | {site_name}"`, or `default_title` when untitled
//! - `og_title` / `og_description` / `og_image`: fall back to title,
//!   description and the site image respectively
//! - `html_dir`, `og_locale`: from the language

use crate::config::SiteDefaults;
use crate::i18n::{Direction, Language};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    #[error("no SEO record for page '{page_key}' in language '{language}'")]
    ConfigMissing {
        page_key: String,
        language: Language,
    },
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid SEO table {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Metadata declared for one page (or entity) in one language.
///
/// Every field is optional so the same type doubles as the `custom_meta`
/// partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageSeo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl PageSeo {
    /// Field-level merge: every `Some` in `custom` wins.
    pub fn overlay(self, custom: &PageSeo) -> PageSeo {
        PageSeo {
            title: custom.title.clone().or(self.title),
            description: custom.description.clone().or(self.description),
            og_title: custom.og_title.clone().or(self.og_title),
            og_description: custom.og_description.clone().or(self.og_description),
            og_image: custom.og_image.clone().or(self.og_image),
            keywords: custom.keywords.clone().or(self.keywords),
        }
    }
}

/// One table entry: a record per language, either of which may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalizedSeo {
    pub en: Option<PageSeo>,
    pub ar: Option<PageSeo>,
}

impl LocalizedSeo {
    pub fn get(&self, language: Language) -> Option<&PageSeo> {
        match language {
            Language::En => self.en.as_ref(),
            Language::Ar => self.ar.as_ref(),
        }
    }
}

pub type SeoTable = BTreeMap<String, LocalizedSeo>;

/// The page, service and partner metadata tables.
#[derive(Debug, Clone, Default)]
pub struct SeoTables {
    pub pages: SeoTable,
    pub services: SeoTable,
    pub partners: SeoTable,
}

impl SeoTables {
    /// Load `seo/{pages,services,partners}.json`. Missing files yield empty
    /// tables; malformed ones are errors.
    pub fn load(root: &Path) -> Result<SeoTables, SeoError> {
        let dir = root.join("seo");
        Ok(SeoTables {
            pages: read_table(&dir.join("pages.json"))?,
            services: read_table(&dir.join("services.json"))?,
            partners: read_table(&dir.join("partners.json"))?,
        })
    }
}

fn read_table(path: &Path) -> Result<SeoTable, SeoError> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "SEO table not found, using an empty table");
        return Ok(SeoTable::new());
    }
    let raw = fs::read_to_string(path).map_err(|source| SeoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Optional inputs that refine the page-level record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoOverrides {
    pub service_id: Option<String>,
    pub partner_id: Option<String>,
    pub custom_meta: Option<PageSeo>,
}

impl SeoOverrides {
    pub fn service(id: impl Into<String>) -> Self {
        Self {
            service_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn partner(id: impl Into<String>) -> Self {
        Self {
            partner_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_custom(mut self, custom: PageSeo) -> Self {
        self.custom_meta = Some(custom);
        self
    }
}

/// Final metadata for one rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub full_title: String,
    pub og_title: String,
    pub og_description: Option<String>,
    /// Absolute URL.
    pub og_image: String,
    pub og_locale: &'static str,
    pub og_locale_alternate: &'static str,
    pub html_lang: Language,
    pub html_dir: Direction,
    pub site_name: String,
    pub site_url: String,
    pub twitter_handle: String,
}

/// Compose the metadata for `page_key` in `language`.
///
/// Fails with [`SeoError::ConfigMissing`] only when the base page record is
/// absent; callers then omit the SEO tags entirely. Unknown service or partner
/// ids simply skip their stage.
pub fn resolve_seo(
    tables: &SeoTables,
    defaults: &SiteDefaults,
    page_key: &str,
    language: Language,
    overrides: &SeoOverrides,
) -> Result<ResolvedMeta, SeoError> {
    let Some(base) = tables.pages.get(page_key).and_then(|e| e.get(language)) else {
        let err = SeoError::ConfigMissing {
            page_key: page_key.to_string(),
            language,
        };
        tracing::warn!(page_key, language = %language, "{err}");
        return Err(err);
    };

    let mut meta = base;
    if let Some(record) = lookup(&tables.services, overrides.service_id.as_deref(), language) {
        meta = record;
    }
    if let Some(record) = lookup(&tables.partners, overrides.partner_id.as_deref(), language) {
        meta = record;
    }
    let meta = match &overrides.custom_meta {
        Some(custom) => meta.clone().overlay(custom),
        None => meta.clone(),
    };

    Ok(derive(meta, defaults, language))
}

fn lookup<'a>(table: &'a SeoTable, id: Option<&str>, language: Language) -> Option<&'a PageSeo> {
    let id = id?;
    let record = table.get(id).and_then(|e| e.get(language));
    if record.is_none() {
        tracing::debug!(id, language = %language, "no entity SEO override");
    }
    record
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn derive(meta: PageSeo, defaults: &SiteDefaults, language: Language) -> ResolvedMeta {
    let title = non_empty(meta.title);
    let description = non_empty(meta.description);

    let full_title = match &title {
        Some(t) => format!("{} | {}", t, defaults.site_name),
        None => defaults.default_title.clone(),
    };
    let og_title = non_empty(meta.og_title)
        .or_else(|| title.clone())
        .unwrap_or_else(|| full_title.clone());
    let og_description = non_empty(meta.og_description).or_else(|| description.clone());
    let og_image = defaults.absolute_url(
        non_empty(meta.og_image)
            .as_deref()
            .unwrap_or(&defaults.og_image),
    );

    ResolvedMeta {
        title,
        description,
        keywords: meta.keywords.unwrap_or_default(),
        full_title,
        og_title,
        og_description,
        og_image,
        og_locale: language.og_locale(),
        og_locale_alternate: language.other().og_locale(),
        html_lang: language,
        html_dir: language.direction(),
        site_name: defaults.site_name.clone(),
        site_url: defaults.site_url.clone(),
        twitter_handle: defaults.twitter_handle.clone(),
    }
}

/// Render the SEO block of `<head>`.
///
/// `canonical_path` is the site-relative path of this document;
/// `alternates` lists the same document in every language for `hreflang`.
pub fn render_head(
    meta: &ResolvedMeta,
    canonical_path: &str,
    alternates: &[(Language, String)],
) -> Markup {
    let canonical = format!("{}{}", meta.site_url, canonical_path);
    html! {
        title { (meta.full_title) }
        @if let Some(description) = &meta.description {
            meta name="description" content=(description);
        }
        @if !meta.keywords.is_empty() {
            meta name="keywords" content=(meta.keywords.join(", "));
        }
        link rel="canonical" href=(canonical);
        @for (language, path) in alternates {
            link rel="alternate" hreflang=(language.code()) href={ (meta.site_url) (path) };
        }
        meta property="og:type" content="website";
        meta property="og:site_name" content=(meta.site_name);
        meta property="og:title" content=(meta.og_title);
        @if let Some(description) = &meta.og_description {
            meta property="og:description" content=(description);
        }
        meta property="og:image" content=(meta.og_image);
        meta property="og:url" content=(canonical);
        meta property="og:locale" content=(meta.og_locale);
        meta property="og:locale:alternate" content=(meta.og_locale_alternate);
        meta name="twitter:card" content="summary_large_image";
        meta name="twitter:site" content=(meta.twitter_handle);
        meta name="twitter:title" content=(meta.og_title);
        @if let Some(description) = &meta.og_description {
            meta name="twitter:description" content=(description);
        }
        meta name="twitter:image" content=(meta.og_image);
    }
}
