//! In-memory registries of domain records.
//!
//! A [`Registry`] is an ordered, read-only collection with unique ids.
//! [`Registries`] bundles one registry per record type and exposes the named
//! lookups pages use (`get_partners_by_category`, `get_upcoming_events`, …).
//!
//! String ids become URL segments and output paths, so they must be slugs:
//! lowercase ASCII letters and digits joined by single hyphens. Anything else
//! (empty, `..`, `/`, uppercase) fails the load.
//!
//! A failed lookup by id is an ordinary outcome (`None`) that pages turn into
//! a "not found" view. Filters return fresh vectors of references and never
//! reorder or mutate the source.
//!
//! ## Fixture Files
//!
//! ```text
//! content/data/
//! ├── services.json          # [Service]
//! ├── service-details.json   # [ServiceDetail], keyed by service id
//! ├── partners.json          # [Partner]
//! ├── clients.json           # [Client]
//! ├── events.json            # [Event]
//! └── articles.json          # [Article]
//! ```

use crate::entities::{
    Article, ArticleCategory, Client, ClientSector, Event, EventType, Partner, PartnerCategory,
    Service, ServiceDetail,
};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern must compile"));

/// Whether `id` is usable as a URL segment and directory name.
pub fn is_slug(id: &str) -> bool {
    SLUG_RE.is_match(id)
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId { collection: &'static str, id: String },
    #[error("invalid id '{id}' in {collection}: expected lowercase letters, digits and '-'")]
    InvalidId { collection: &'static str, id: String },
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A record with a stable identifier.
pub trait Entity {
    type Id: Ord + Clone + fmt::Display + fmt::Debug;

    /// Collection name used in diagnostics.
    const COLLECTION: &'static str;

    fn id(&self) -> &Self::Id;

    /// Whether an id is acceptable. Numeric ids never reach a path.
    fn valid_id(_id: &Self::Id) -> bool {
        true
    }
}

macro_rules! entity {
    ($ty:ty, slug, $collection:literal) => {
        impl Entity for $ty {
            type Id = String;
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> &String {
                &self.id
            }

            fn valid_id(id: &String) -> bool {
                is_slug(id)
            }
        }
    };
    ($ty:ty, $id:ty, $collection:literal) => {
        impl Entity for $ty {
            type Id = $id;
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> &$id {
                &self.id
            }
        }
    };
}

entity!(Service, slug, "services");
entity!(ServiceDetail, slug, "service-details");
entity!(Partner, slug, "partners");
entity!(Client, u32, "clients");
entity!(Event, u32, "events");
entity!(Article, u32, "articles");

/// Ordered collection with an id index.
#[derive(Debug, Clone)]
pub struct Registry<T: Entity> {
    items: Vec<T>,
    index: BTreeMap<T::Id, usize>,
}

impl<T: Entity> Registry<T> {
    /// Build a registry, rejecting invalid and duplicate ids.
    pub fn new(items: Vec<T>) -> Result<Self, RegistryError> {
        let mut index = BTreeMap::new();
        for (pos, item) in items.iter().enumerate() {
            if !T::valid_id(item.id()) {
                return Err(RegistryError::InvalidId {
                    collection: T::COLLECTION,
                    id: item.id().to_string(),
                });
            }
            if index.insert(item.id().clone(), pos).is_some() {
                return Err(RegistryError::DuplicateId {
                    collection: T::COLLECTION,
                    id: item.id().to_string(),
                });
            }
        }
        Ok(Self { items, index })
    }

    /// All records in fixture order.
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn get_by_id<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<&T> {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

/// Every registry the site renders from.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub services: Registry<Service>,
    pub service_details: Registry<ServiceDetail>,
    pub partners: Registry<Partner>,
    pub clients: Registry<Client>,
    pub events: Registry<Event>,
    pub articles: Registry<Article>,
}

impl Registries {
    /// Load every fixture under `data/`.
    pub fn load(root: &Path) -> Result<Registries, RegistryError> {
        let dir = root.join("data");
        let registries = Registries {
            services: load_registry(&dir.join("services.json"))?,
            service_details: load_registry(&dir.join("service-details.json"))?,
            partners: load_registry(&dir.join("partners.json"))?,
            clients: load_registry(&dir.join("clients.json"))?,
            events: load_registry(&dir.join("events.json"))?,
            articles: load_registry(&dir.join("articles.json"))?,
        };
        for detail in registries.service_details.list() {
            if registries.services.get_by_id(detail.id.as_str()).is_none() {
                tracing::warn!(id = %detail.id, "service detail has no matching service");
            }
        }
        Ok(registries)
    }

    pub fn get_service_by_id(&self, id: &str) -> Option<&Service> {
        self.services.get_by_id(id)
    }

    pub fn get_service_detail(&self, id: &str) -> Option<&ServiceDetail> {
        self.service_details.get_by_id(id)
    }

    pub fn get_partner_by_id(&self, id: &str) -> Option<&Partner> {
        self.partners.get_by_id(id)
    }

    pub fn get_partners_by_category(&self, category: PartnerCategory) -> Vec<&Partner> {
        self.partners.filter(|p| p.category == category)
    }

    pub fn get_clients_by_sector(&self, sector: ClientSector) -> Vec<&Client> {
        self.clients.filter(|c| c.sector == sector)
    }

    pub fn get_events_by_type(&self, kind: EventType) -> Vec<&Event> {
        self.events.filter(|e| e.kind == kind)
    }

    pub fn get_upcoming_events(&self) -> Vec<&Event> {
        self.events.filter(|e| e.upcoming)
    }

    pub fn get_past_events(&self) -> Vec<&Event> {
        self.events.filter(|e| !e.upcoming)
    }

    pub fn get_articles_by_category(&self, category: ArticleCategory) -> Vec<&Article> {
        self.articles.filter(|a| a.category == category)
    }
}

fn load_registry<T>(path: &Path) -> Result<Registry<T>, RegistryError>
where
    T: Entity + DeserializeOwned,
{
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "fixture not found, registry is empty");
        return Ok(Registry::default());
    }
    let raw = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<T> = serde_json::from_str(&raw).map_err(|source| RegistryError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = Registry::new(items)?;
    tracing::debug!(collection = T::COLLECTION, count = registry.len(), "fixture loaded");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Localized;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn text(s: &str) -> Localized<String> {
        Localized {
            en: s.to_string(),
            ar: s.to_string(),
        }
    }

    fn partner(id: &str, category: PartnerCategory) -> Partner {
        Partner {
            id: id.to_string(),
            name: id.to_uppercase(),
            category,
            website: format!("https://{id}.example"),
            logo: format!("/images/partners/{id}.svg"),
            description: text(id),
        }
    }

    fn client(id: u32, sector: ClientSector) -> Client {
        Client {
            id,
            name: text(&format!("client-{id}")),
            sector,
            logo: format!("/assets/clients/{id}.svg"),
        }
    }

    fn article(id: u32, category: ArticleCategory) -> Article {
        Article {
            id,
            category,
            title: text("article"),
            excerpt: text("excerpt"),
            date: NaiveDate::from_ymd_opt(2025, 2, id).unwrap(),
            author: text("KITES"),
        }
    }

    fn event(id: u32, kind: EventType, upcoming: bool) -> Event {
        Event {
            id,
            kind,
            title: text("event"),
            date: NaiveDate::from_ymd_opt(2025, 1, id).unwrap(),
            location: text("Kuwait"),
            description: text("d"),
            upcoming,
            registration_url: None,
        }
    }

    fn registries() -> Registries {
        Registries {
            partners: Registry::new(vec![
                partner("ansys", PartnerCategory::Software),
                partner("dell", PartnerCategory::Hardware),
                partner("altair", PartnerCategory::Software),
            ])
            .unwrap(),
            events: Registry::new(vec![
                event(1, EventType::Workshop, true),
                event(2, EventType::Conference, false),
                event(3, EventType::Workshop, false),
            ])
            .unwrap(),
            clients: Registry::new(vec![
                client(1, ClientSector::OilGas),
                client(2, ClientSector::Government),
                client(3, ClientSector::OilGas),
            ])
            .unwrap(),
            articles: Registry::new(vec![
                article(1, ArticleCategory::News),
                article(2, ArticleCategory::CaseStudy),
                article(3, ArticleCategory::News),
                article(4, ArticleCategory::Insight),
            ])
            .unwrap(),
            ..Registries::default()
        }
    }

    #[test]
    fn list_keeps_insertion_order() {
        let r = registries();
        let ids: Vec<&str> = r.partners.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["ansys", "dell", "altair"]);
        let again: Vec<&str> = r.partners.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn get_by_id_exact_match() {
        let r = registries();
        assert_eq!(r.get_partner_by_id("ansys").unwrap().id, "ansys");
        assert!(r.get_partner_by_id("ANSYS").is_none());
        assert!(r.get_partner_by_id("unknown").is_none());
        assert_eq!(r.events.get_by_id(&2).unwrap().kind, EventType::Conference);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Registry::new(vec![
            partner("ansys", PartnerCategory::Software),
            partner("ansys", PartnerCategory::Hardware),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateId { collection: "partners", ref id } if id == "ansys"
        ));
    }

    #[test]
    fn filter_by_category_preserves_order() {
        let r = registries();
        let software: Vec<&str> = r
            .get_partners_by_category(PartnerCategory::Software)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(software, vec!["ansys", "altair"]);
        assert!(r.get_partners_by_category(PartnerCategory::Academic).is_empty());
        assert_eq!(r.partners.len(), 3);
    }

    #[test]
    fn events_partition_by_upcoming() {
        let r = registries();
        let upcoming: Vec<u32> = r.get_upcoming_events().iter().map(|e| e.id).collect();
        let past: Vec<u32> = r.get_past_events().iter().map(|e| e.id).collect();
        assert_eq!(upcoming, vec![1]);
        assert_eq!(past, vec![2, 3]);
    }

    #[test]
    fn events_by_type() {
        let r = registries();
        let workshops: Vec<u32> = r
            .get_events_by_type(EventType::Workshop)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(workshops, vec![1, 3]);
    }

    #[test]
    fn clients_by_sector_preserves_order() {
        let r = registries();
        let oil: Vec<u32> = r
            .get_clients_by_sector(ClientSector::OilGas)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(oil, vec![1, 3]);
        assert!(r.get_clients_by_sector(ClientSector::Academic).is_empty());

        // Source untouched
        let all: Vec<u32> = r.clients.list().iter().map(|c| c.id).collect();
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn articles_by_category_preserves_order() {
        let r = registries();
        let news: Vec<u32> = r
            .get_articles_by_category(ArticleCategory::News)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(news, vec![1, 3]);
        assert_eq!(r.get_articles_by_category(ArticleCategory::Insight).len(), 1);

        let all: Vec<u32> = r.articles.list().iter().map(|a| a.id).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn slug_ids() {
        assert!(is_slug("ansys"));
        assert!(is_slug("case-study-2"));
        assert!(!is_slug(""));
        assert!(!is_slug(".."));
        assert!(!is_slug("../../escaped"));
        assert!(!is_slug("a/b"));
        assert!(!is_slug("Ansys"));
        assert!(!is_slug("-lead"));
        assert!(!is_slug("double--dash"));
    }

    #[test]
    fn empty_and_traversal_ids_are_rejected() {
        for bad in ["", "../../../escaped"] {
            let err = Registry::new(vec![partner(bad, PartnerCategory::Software)]).unwrap_err();
            assert!(matches!(
                err,
                RegistryError::InvalidId { collection: "partners", ref id } if id == bad
            ));
        }
    }

    #[test]
    fn load_rejects_path_like_ids_in_fixture() {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        fs::create_dir_all(&data).unwrap();
        let partner = r#"{"id": "../../escaped", "name": "X", "category": "software", "website": "https://x.example", "logo": "/x.svg", "description": {"en": "x", "ar": "x"}}"#;
        fs::write(data.join("partners.json"), format!("[{partner}]")).unwrap();

        assert!(matches!(
            Registries::load(tmp.path()),
            Err(RegistryError::InvalidId { collection: "partners", .. })
        ));
    }

    #[test]
    fn load_missing_fixtures_yields_empty_registries() {
        let tmp = TempDir::new().unwrap();
        let r = Registries::load(tmp.path()).unwrap();
        assert!(r.services.is_empty());
        assert!(r.events.is_empty());
    }

    #[test]
    fn load_reports_duplicate_ids_in_fixture() {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        fs::create_dir_all(&data).unwrap();
        let client = r#"{"id": 7, "name": {"en": "KOC", "ar": "نفط الكويت"}, "sector": "oil-gas", "logo": "/koc.svg"}"#;
        fs::write(data.join("clients.json"), format!("[{client}, {client}]")).unwrap();

        let err = Registries::load(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate id '7' in clients"));
    }

    #[test]
    fn load_reports_malformed_fixture() {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("partners.json"), r#"[{"id": "x"}]"#).unwrap();

        assert!(matches!(
            Registries::load(tmp.path()),
            Err(RegistryError::Json { .. })
        ));
    }
}
