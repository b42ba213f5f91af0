//! Localized content bundles.
//!
//! Every page (and the shared chrome) reads its display strings from a
//! bundle: a free-form JSON document keyed by `(namespace, language)`.
//!
//! ## File Layout
//!
//! ```text
//! content/
//! └── locales/
//!     ├── en/
//!     │   ├── common.json      # nav, footer, shared labels
//!     │   ├── home.json
//!     │   └── ...
//!     └── ar/
//!         ├── common.json
//!         └── ...
//! ```
//!
//! ## Registration
//!
//! Nothing is discovered by globbing. `config.toml` declares the namespaces;
//! [`ContentStore::load`] tries exactly `locales/<lang>/<namespace>.json` for
//! each declared pair and registers what it finds. A missing file is not an
//! error at load time. It shows up in [`ContentStore::parity_report`] and, if a
//! page asks for it, as a logged miss that resolves to [`ContentBundle::empty`].
//!
//! ## Lookups
//!
//! Bundles are addressed with dotted paths. Array elements are addressed by
//! index:
//!
//! ```text
//! text("hero.title")        → "Engineering Excellence Through Simulation"
//! text("stats.0.label")     → "Engineers Trained"
//! list("hero.highlights")   → ["...", "..."]
//! text("no.such.key")       → ""
//! ```

use crate::i18n::Language;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("no content bundle for namespace '{namespace}' in language '{language}'")]
    NotFound {
        namespace: String,
        language: Language,
    },
    #[error("content bundle '{namespace}' ({language}) registered twice")]
    DuplicateBundle {
        namespace: String,
        language: Language,
    },
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("content bundle {0} must be a JSON object at the top level")]
    NotAnObject(PathBuf),
}

/// The text payload for one `(namespace, language)` pair.
///
/// Cloning is cheap: the document is shared behind an `Arc` and never mutated
/// after load.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBundle(Arc<Value>);

impl ContentBundle {
    /// Wrap a JSON document. Non-object documents are accepted here; the
    /// loader enforces the object shape for files on disk.
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }

    /// The bundle returned for a miss: an empty object.
    pub fn empty() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }

    pub fn is_empty(&self) -> bool {
        match self.0.as_ref() {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Whether two handles point at the same loaded document.
    pub fn ptr_eq(&self, other: &ContentBundle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Look up a dotted path (`"hero.title"`, `"stats.0.label"`).
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(self.0.as_ref(), |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    /// String at `path`, or `""` when absent or not a string.
    pub fn text(&self, path: &str) -> &str {
        self.get(path).and_then(Value::as_str).unwrap_or("")
    }

    /// String array at `path`. Non-string elements are skipped.
    pub fn list(&self, path: &str) -> Vec<&str> {
        self.get(path)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Array of objects at `path`, each wrapped as its own bundle view.
    pub fn items(&self, path: &str) -> Vec<ContentBundle> {
        self.get(path)
            .and_then(Value::as_array)
            .map(|items| items.iter().cloned().map(ContentBundle::new).collect())
            .unwrap_or_default()
    }

    /// Dotted paths of every leaf. Arrays count as leaves.
    pub fn leaf_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_leaf_keys(&self.0, String::new(), &mut keys);
        keys
    }
}

impl Default for ContentBundle {
    fn default() -> Self {
        Self::empty()
    }
}

fn collect_leaf_keys(value: &Value, prefix: String, keys: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaf_keys(child, path, keys);
            }
        }
        _ if !prefix.is_empty() => {
            keys.insert(prefix);
        }
        _ => {}
    }
}

/// A namespace/language mismatch found by [`ContentStore::parity_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParityGap {
    /// The namespace is declared but has no bundle in any language.
    Unregistered { namespace: String },
    /// The namespace exists for some language but not for `language`.
    MissingBundle {
        namespace: String,
        language: Language,
    },
    /// `key` exists in another language's bundle but not in `language`'s.
    MissingKey {
        namespace: String,
        language: Language,
        key: String,
    },
}

impl fmt::Display for ParityGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParityGap::Unregistered { namespace } => write!(f, "{namespace}: no bundles"),
            ParityGap::MissingBundle {
                namespace,
                language,
            } => write!(f, "{namespace}: no {language} bundle"),
            ParityGap::MissingKey {
                namespace,
                language,
                key,
            } => write!(f, "{namespace}: '{key}' missing in {language}"),
        }
    }
}

/// Registration table of every loaded bundle.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    bundles: BTreeMap<(String, Language), ContentBundle>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundle for `(namespace, language)`.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        language: Language,
        bundle: ContentBundle,
    ) -> Result<(), ContentError> {
        let namespace = namespace.into();
        let key = (namespace, language);
        if self.bundles.contains_key(&key) {
            return Err(ContentError::DuplicateBundle {
                namespace: key.0,
                language,
            });
        }
        self.bundles.insert(key, bundle);
        Ok(())
    }

    /// Load `locales/<lang>/<namespace>.json` for every declared namespace.
    pub fn load(root: &Path, namespaces: &[String]) -> Result<ContentStore, ContentError> {
        let mut store = ContentStore::new();
        for namespace in namespaces {
            for language in Language::ALL {
                let path = bundle_path(root, namespace, language);
                if !path.is_file() {
                    tracing::debug!(path = %path.display(), "no bundle file");
                    continue;
                }
                let bundle = read_bundle(&path)?;
                store.register(namespace.clone(), language, bundle)?;
            }
        }
        tracing::debug!(bundles = store.len(), "content bundles loaded");
        Ok(store)
    }

    /// Return the bundle for `(namespace, language)`.
    ///
    /// A miss is logged and degrades to [`ContentBundle::empty`], so pages
    /// render blank strings instead of failing.
    pub fn resolve(&self, namespace: &str, language: Language) -> ContentBundle {
        match self.try_resolve(namespace, language) {
            Ok(bundle) => bundle.clone(),
            Err(err) => {
                tracing::warn!(namespace, language = %language, "{err}");
                ContentBundle::empty()
            }
        }
    }

    /// Strict variant of [`resolve`](Self::resolve).
    pub fn try_resolve(
        &self,
        namespace: &str,
        language: Language,
    ) -> Result<&ContentBundle, ContentError> {
        self.bundles
            .get(&(namespace.to_string(), language))
            .ok_or_else(|| ContentError::NotFound {
                namespace: namespace.to_string(),
                language,
            })
    }

    pub fn contains(&self, namespace: &str, language: Language) -> bool {
        self.bundles.contains_key(&(namespace.to_string(), language))
    }

    /// Every namespace registered for at least one language, sorted.
    pub fn namespaces(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.bundles.keys().map(|(ns, _)| ns.as_str()).collect();
        set.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Bundles or keys present in one language but not the other, plus
    /// `declared` namespaces that have no bundle at all.
    pub fn parity_report(&self, declared: &[String]) -> Vec<ParityGap> {
        let mut gaps = Vec::new();
        let namespaces: BTreeSet<&str> = self
            .namespaces()
            .into_iter()
            .chain(declared.iter().map(String::as_str))
            .collect();
        for namespace in namespaces {
            let present: Vec<(Language, &ContentBundle)> = Language::ALL
                .iter()
                .filter_map(|&lang| {
                    self.bundles
                        .get(&(namespace.to_string(), lang))
                        .map(|b| (lang, b))
                })
                .collect();

            if present.is_empty() {
                gaps.push(ParityGap::Unregistered {
                    namespace: namespace.to_string(),
                });
                continue;
            }

            for language in Language::ALL {
                if !present.iter().any(|(lang, _)| *lang == language) {
                    gaps.push(ParityGap::MissingBundle {
                        namespace: namespace.to_string(),
                        language,
                    });
                }
            }

            let all_keys: BTreeSet<String> =
                present.iter().flat_map(|(_, b)| b.leaf_keys()).collect();
            for (language, bundle) in &present {
                let keys = bundle.leaf_keys();
                for key in all_keys.difference(&keys) {
                    gaps.push(ParityGap::MissingKey {
                        namespace: namespace.to_string(),
                        language: *language,
                        key: key.clone(),
                    });
                }
            }
        }
        gaps
    }
}

fn bundle_path(root: &Path, namespace: &str, language: Language) -> PathBuf {
    root.join("locales")
        .join(language.code())
        .join(format!("{namespace}.json"))
}

fn read_bundle(path: &Path) -> Result<ContentBundle, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if !value.is_object() {
        return Err(ContentError::NotAnObject(path.to_path_buf()));
    }
    Ok(ContentBundle::new(value))
}
