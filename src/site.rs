//! The loaded site: configuration, content bundles, SEO tables and registries.
//!
//! Loading is the only stage that touches the filesystem for input. Once a
//! [`Site`] exists, every lookup is an in-memory read.
//!
//! ```text
//! content/
//! ├── config.toml          → SiteConfig
//! ├── locales/<lang>/*.json → ContentStore
//! ├── seo/*.json           → SeoTables
//! ├── data/*.json          → Registries
//! └── assets/              → copied verbatim by `generate`
//! ```

use crate::config::{self, ConfigError, SiteConfig};
use crate::content::{ContentBundle, ContentError, ContentStore};
use crate::i18n::Language;
use crate::registry::{Registries, RegistryError};
use crate::routes::Route;
use crate::seo::{self, ResolvedMeta, SeoError, SeoTables};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("SEO error: {0}")]
    Seo(#[from] SeoError),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub config: SiteConfig,
    pub content: ContentStore,
    pub seo: SeoTables,
    pub registries: Registries,
}

impl Site {
    pub fn load(root: &Path) -> Result<Site, LoadError> {
        if !root.is_dir() {
            return Err(LoadError::MissingRoot(root.to_path_buf()));
        }
        let config = config::load_config(root)?;
        let content = ContentStore::load(root, &config.namespaces)?;
        let seo = SeoTables::load(root)?;
        let registries = Registries::load(root)?;

        for gap in content.parity_report(&config.namespaces) {
            tracing::warn!("content parity: {gap}");
        }
        tracing::info!(
            bundles = content.len(),
            pages = seo.pages.len(),
            services = registries.services.len(),
            partners = registries.partners.len(),
            events = registries.events.len(),
            "site loaded from {}",
            root.display()
        );

        Ok(Site {
            root: root.to_path_buf(),
            config,
            content,
            seo,
            registries,
        })
    }

    /// Bundle for `namespace`, blank on a miss.
    pub fn bundle(&self, namespace: &str, language: Language) -> ContentBundle {
        self.content.resolve(namespace, language)
    }

    /// Metadata for a route, with the route's entity id as override.
    pub fn meta_for(&self, route: &Route, language: Language) -> Result<ResolvedMeta, SeoError> {
        seo::resolve_seo(
            &self.seo,
            &self.config.site,
            route.page_key(),
            language,
            &route.seo_overrides(),
        )
    }

    /// Every route the site renders, listings first, then detail pages in
    /// registry order.
    pub fn routes(&self) -> Vec<Route> {
        let mut routes: Vec<Route> = Route::NAV.to_vec();
        routes.extend(
            self.registries
                .services
                .list()
                .iter()
                .map(|s| Route::Service(s.id.clone())),
        );
        routes.extend(
            self.registries
                .partners
                .list()
                .iter()
                .map(|p| Route::Partner(p.id.clone())),
        );
        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn load_fails_for_missing_root() {
        let tmp = TempDir::new().unwrap();
        let err = Site::load(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, LoadError::MissingRoot(_)));
    }

    #[test]
    fn load_empty_directory_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let site = Site::load(tmp.path()).unwrap();
        assert!(site.content.is_empty());
        assert!(site.registries.services.is_empty());
        assert_eq!(site.routes().len(), Route::NAV.len());
    }

    #[test]
    fn shipped_content_loads() {
        let site = shipped_site();
        assert!(site.content.contains("common", Language::Ar));
        assert!(!site.registries.partners.is_empty());
    }

    #[test]
    fn routes_include_detail_pages() {
        let site = shipped_site();
        let routes = site.routes();
        assert!(routes.contains(&Route::Service("consultation".into())));
        assert!(routes.contains(&Route::Partner("ansys".into())));
        assert_eq!(&routes[..Route::NAV.len()], &Route::NAV[..]);
    }

    #[test]
    fn meta_for_service_route_uses_service_record() {
        let site = shipped_site();
        let meta = site
            .meta_for(&Route::Service("consultation".into()), Language::En)
            .unwrap();
        assert_eq!(meta.title.as_deref(), Some("Engineering Consultation Services"));
    }
}
