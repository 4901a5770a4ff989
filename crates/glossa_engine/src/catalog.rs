//! Catalogs and the store that loads them.
//!
//! A catalog is one language's mapping from message key to
//! [`TemplateEntry`]. The wire format (one JSON object per language,
//! key → array of strings) is preserved bit-exact on round trip, and the
//! key order of the source resource is kept: the matcher's first-match
//! semantics iterate in exactly that order.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;
use futures_util::future::try_join_all;
use indexmap::IndexMap;
use tracing::debug;

use crate::entry::TemplateEntry;
use crate::error::{CatalogParseError, EngineError};

/// One language's key → template entry mapping, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: IndexMap<String, TemplateEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog resource: a JSON object mapping message key to
    /// `[template, slot₁, …, slotₙ]`. Entries with arity inconsistencies
    /// are accepted (they are inert; see the matcher), but non-conforming
    /// JSON is a load-time error.
    pub fn parse(src: &str) -> Result<Self, CatalogParseError> {
        let entries: IndexMap<String, TemplateEntry> = serde_json::from_str(src)?;
        Ok(Self { entries })
    }

    /// Serialize back to the wire format, keys in insertion order.
    pub fn to_json(&self) -> String {
        // IndexMap serialization cannot fail for string keys.
        serde_json::to_string(&self.entries).unwrap_or_default()
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: TemplateEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&TemplateEntry> {
        self.entries.get(key)
    }

    /// Iterate entries in the insertion order of the source resource.
    /// This order is a documented contract: it decides which entry wins
    /// when several could reproduce the same probe.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where catalog resources come from: disk, network, or memory.
///
/// `fetch` returns the raw resource text for one locale; parsing and
/// caching belong to the [`CatalogStore`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, locale: &str) -> Result<String, EngineError>;
}

/// Reads `<root>/<locale>.json`, the on-disk layout of the static
/// catalog directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl CatalogSource for DirSource {
    async fn fetch(&self, locale: &str) -> Result<String, EngineError> {
        let path = self.root.join(format!("{locale}.json"));
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| EngineError::Fetch {
                locale: locale.to_string(),
                message: format!("{}: {err}", path.display()),
            })
    }
}

/// In-memory source for tests and embedders that bundle their catalogs.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    resources: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: impl Into<String>, resource: impl Into<String>) -> Self {
        self.resources.insert(locale.into(), resource.into());
        self
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self, locale: &str) -> Result<String, EngineError> {
        self.resources
            .get(locale)
            .cloned()
            .ok_or_else(|| EngineError::Fetch {
                locale: locale.to_string(),
                message: "no such resource".to_string(),
            })
    }
}

/// Holds the loaded catalogs, one per language code.
///
/// Loading is asynchronous and idempotent: a language already in the
/// store is not re-fetched. Lookup never blocks — a language that was
/// never loaded fails fast with [`EngineError::CatalogNotLoaded`].
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    reference: String,
    catalogs: RwLock<HashMap<String, Catalog>>,
}

impl CatalogStore {
    /// Create a store over `source`. `reference` names the language
    /// whose catalog is authoritative for key inference.
    pub fn new(source: impl CatalogSource + 'static, reference: impl Into<String>) -> Self {
        Self {
            source: Box::new(source),
            reference: reference.into(),
            catalogs: RwLock::new(HashMap::new()),
        }
    }

    pub fn reference_locale(&self) -> &str {
        &self.reference
    }

    /// Fetch and parse one language's catalog. A locale already loaded
    /// returns immediately without re-fetching. A malformed resource
    /// propagates to this caller and leaves the store untouched.
    pub async fn load(&self, locale: &str) -> Result<(), EngineError> {
        {
            let loaded = self.catalogs.read().unwrap();
            if loaded.contains_key(locale) {
                return Ok(());
            }
        }

        let raw = self.source.fetch(locale).await?;
        let catalog = Catalog::parse(&raw).map_err(|source| EngineError::Malformed {
            locale: locale.to_string(),
            source,
        })?;

        debug!(locale, entries = catalog.len(), "catalog loaded");

        // Two tasks may race past the fast path; the first insert wins so
        // "already loaded is not re-fetched" stays observable.
        self.catalogs
            .write()
            .unwrap()
            .entry(locale.to_string())
            .or_insert(catalog);
        Ok(())
    }

    /// Load several languages concurrently; fails on the first error.
    pub async fn load_all<I, S>(&self, locales: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locales: Vec<String> = locales
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect();
        try_join_all(locales.iter().map(|locale| self.load(locale))).await?;
        Ok(())
    }

    /// The loaded catalog for `locale`, or `CatalogNotLoaded`. Returns a
    /// clone; the engine's own hot path reads in place via [`Self::read`].
    pub fn get(&self, locale: &str) -> Result<Catalog, EngineError> {
        self.catalogs
            .read()
            .unwrap()
            .get(locale)
            .cloned()
            .ok_or_else(|| EngineError::CatalogNotLoaded {
                locale: locale.to_string(),
            })
    }

    pub fn is_loaded(&self, locale: &str) -> bool {
        self.catalogs.read().unwrap().contains_key(locale)
    }

    pub fn loaded_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.catalogs.read().unwrap().keys().cloned().collect();
        locales.sort_unstable();
        locales
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Catalog>> {
        self.catalogs.read().unwrap()
    }
}
