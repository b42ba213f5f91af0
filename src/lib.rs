//! # KITES Site
//!
//! Content and SEO metadata resolution for the KITES Kuwait website, an
//! engineering training, simulation and consultation company. Every page
//! exists in English and Arabic; Arabic pages are laid out right-to-left.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Load      content/        →  Site        (config, bundles, SEO tables, records)
//! 2. Resolve   (route, lang)   →  bundles + ResolvedMeta
//! 3. Generate  Site            →  dist/       (static HTML per language)
//! ```
//!
//! Loading is the only stage that reads input files. Resolution is a pure
//! lookup over the loaded [`site::Site`], so tests can exercise it without
//! touching the filesystem beyond the initial load.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`i18n`] | Supported languages, text direction, observable current-language state |
//! | [`content`] | Translated content bundles per (namespace, language), parity checks |
//! | [`seo`] | Per-page SEO records, override precedence, `<head>` rendering |
//! | [`entities`] | Domain records (services, partners, clients, events, articles) |
//! | [`registry`] | Id-indexed read-only collections of those records |
//! | [`routes`] | URL path ↔ page mapping |
//! | [`contact`] | Contact form validation and simulated submission |
//! | [`site`] | Loads everything under `content/` into one [`site::Site`] |
//! | [`generate`] | Renders pages with Maud and writes the output tree |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Registration Over Discovery
//!
//! Content bundles are registered per `(namespace, language)` from the
//! `namespaces` list in `config.toml`. A file that is not listed is never
//! loaded, and a listed file that is missing is a warning, not a crash. The
//! set of namespaces is data, not a directory glob.
//!
//! ## Degrade, Don't Fail
//!
//! A missing translation bundle renders as blank text. A missing SEO record
//! drops the metadata block from `<head>`. An unknown service or partner id
//! renders the not-found page. Each of these is logged with `tracing::warn!`
//! and rendering continues. Only malformed input (bad JSON, duplicate ids,
//! unknown fields) stops the load.
//!
//! ## Whole-Record SEO Overrides
//!
//! A service or partner SEO record replaces the page record entirely; only
//! `custom_meta` is merged field by field. A service page therefore never
//! inherits page-level keywords it did not declare.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and all interpolation is escaped. Arabic text and RTL
//! layout need no special handling beyond `<html dir>` and logical CSS
//! properties.

pub mod config;
pub mod contact;
pub mod content;
pub mod entities;
pub mod generate;
pub mod i18n;
pub mod output;
pub mod registry;
pub mod routes;
pub mod seo;
pub mod site;

#[cfg(test)]
pub(crate) mod test_helpers;
