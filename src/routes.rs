//! URL paths ↔ pages.
//!
//! Every page lives under a language prefix:
//!
//! ```text
//! /en/                          Home
//! /en/services/                 Services
//! /en/services/<service-id>/    Service
//! /en/training/                 Training
//! /en/partners/                 Partners
//! /en/partners/<partner-id>/    Partner
//! /en/events/                   Events
//! /en/contact/                  Contact
//! ```
//!
//! Routing only names the page and the entity id. Whether the id exists is
//! the registries' concern; an unknown id still parses.

use crate::i18n::Language;
use crate::seo::SeoOverrides;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    Service(String),
    Training,
    Partners,
    Partner(String),
    Events,
    Contact,
}

impl Route {
    /// Listing routes, in navigation order.
    pub const NAV: [Route; 6] = [
        Route::Home,
        Route::Services,
        Route::Training,
        Route::Partners,
        Route::Events,
        Route::Contact,
    ];

    /// Key into the page SEO table and the page's content namespace.
    pub fn page_key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Services | Route::Service(_) => "services",
            Route::Training => "training",
            Route::Partners | Route::Partner(_) => "partners",
            Route::Events => "events",
            Route::Contact => "contact",
        }
    }

    /// Site-relative path with trailing slash.
    pub fn path(&self, language: Language) -> String {
        let lang = language.code();
        match self {
            Route::Home => format!("/{lang}/"),
            Route::Service(id) => format!("/{lang}/services/{id}/"),
            Route::Partner(id) => format!("/{lang}/partners/{id}/"),
            listing => format!("/{lang}/{}/", listing.page_key()),
        }
    }

    /// Entity ids as SEO overrides.
    pub fn seo_overrides(&self) -> SeoOverrides {
        match self {
            Route::Service(id) => SeoOverrides::service(id.clone()),
            Route::Partner(id) => SeoOverrides::partner(id.clone()),
            _ => SeoOverrides::default(),
        }
    }

    /// The listing a detail page links back to.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Service(_) => Some(Route::Services),
            Route::Partner(_) => Some(Route::Partners),
            _ => None,
        }
    }

    /// The top-level section this route belongs to (for nav highlighting).
    pub fn section(&self) -> Route {
        self.parent().unwrap_or_else(|| self.clone())
    }
}

/// Parse a site-relative path.
///
/// Returns the language prefix (if it names a supported language) and the
/// route (if the remainder matches one). `index.html` suffixes and missing
/// trailing slashes are tolerated.
pub fn parse_path(path: &str) -> (Option<Language>, Option<Route>) {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.last() == Some(&"index.html") {
        segments.pop();
    }

    let Some((first, rest)) = segments.split_first() else {
        return (None, Some(Route::Home));
    };
    let Ok(language) = Language::from_code(first) else {
        return (None, None);
    };

    let route = match rest {
        [] => Some(Route::Home),
        ["services"] => Some(Route::Services),
        ["services", id] => Some(Route::Service(id.to_string())),
        ["training"] => Some(Route::Training),
        ["partners"] => Some(Route::Partners),
        ["partners", id] => Some(Route::Partner(id.to_string())),
        ["events"] => Some(Route::Events),
        ["contact"] => Some(Route::Contact),
        _ => None,
    };
    (Some(language), route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_routes() {
        assert_eq!(
            parse_path("/en/services/"),
            (Some(Language::En), Some(Route::Services))
        );
        assert_eq!(
            parse_path("/ar/contact"),
            (Some(Language::Ar), Some(Route::Contact))
        );
        assert_eq!(parse_path("/ar/"), (Some(Language::Ar), Some(Route::Home)));
    }

    #[test]
    fn parses_detail_routes() {
        assert_eq!(
            parse_path("/en/services/consultation/"),
            (Some(Language::En), Some(Route::Service("consultation".into())))
        );
        assert_eq!(
            parse_path("/ar/partners/ansys/index.html"),
            (Some(Language::Ar), Some(Route::Partner("ansys".into())))
        );
    }

    #[test]
    fn root_is_home_without_language() {
        assert_eq!(parse_path("/"), (None, Some(Route::Home)));
        assert_eq!(parse_path(""), (None, Some(Route::Home)));
    }

    #[test]
    fn unknown_paths_have_no_route() {
        assert_eq!(parse_path("/en/careers/"), (Some(Language::En), None));
        assert_eq!(parse_path("/en/services/a/b/"), (Some(Language::En), None));
        assert_eq!(parse_path("/fr/services/"), (None, None));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            parse_path("/en/events/?past=1#top"),
            (Some(Language::En), Some(Route::Events))
        );
    }

    #[test]
    fn path_round_trips_through_parse() {
        let routes = [
            Route::Home,
            Route::Service("simulation".into()),
            Route::Partner("ansys".into()),
            Route::Training,
        ];
        for route in routes {
            for lang in Language::ALL {
                assert_eq!(parse_path(&route.path(lang)), (Some(lang), Some(route.clone())));
            }
        }
    }

    #[test]
    fn detail_routes_share_listing_page_key() {
        assert_eq!(Route::Service("x".into()).page_key(), "services");
        assert_eq!(Route::Partner("x".into()).page_key(), "partners");
    }

    #[test]
    fn seo_overrides_carry_entity_ids() {
        let overrides = Route::Service("consultation".into()).seo_overrides();
        assert_eq!(overrides.service_id.as_deref(), Some("consultation"));
        assert!(overrides.partner_id.is_none());
        assert_eq!(Route::Events.seo_overrides(), SeoOverrides::default());
    }

    #[test]
    fn parent_and_section() {
        assert_eq!(Route::Partner("a".into()).parent(), Some(Route::Partners));
        assert_eq!(Route::Service("a".into()).section(), Route::Services);
        assert_eq!(Route::Contact.parent(), None);
        assert_eq!(Route::Contact.section(), Route::Contact);
    }
}
