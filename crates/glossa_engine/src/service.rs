//! The localizer service: the one object call sites are handed.
//!
//! Wires the catalog store, matcher, and render cache into the full
//! pipeline: probe → cache → (on miss) catalog scan → render. State is
//! explicit and injected; there is no process-global singleton.

use tracing::{debug, trace};

use crate::cache::{CacheStats, RenderCache, RenderPlan};
use crate::catalog::{CatalogSource, CatalogStore};
use crate::error::EngineError;
use crate::matcher::match_probe;
use crate::phrase::Phrase;

/// Runtime localization service.
///
/// Construct once at startup, load the languages you need, then hand a
/// shared reference to call sites:
///
/// ```
/// use glossa_engine::{Localizer, StaticSource, phrase};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = StaticSource::new()
///     .with("en_AU", r#"{"greeting": ["Hello $name!", "name"]}"#)
///     .with("de_DE", r#"{"greeting": ["Hallo $name!", "name"]}"#);
///
/// let localizer = Localizer::new(source, "en_AU");
/// localizer.load_all(["en_AU", "de_DE"]).await.unwrap();
///
/// let name = "Ada";
/// assert_eq!(localizer.localize("de_DE", &phrase!["Hello ", {name}, "!"]), "Hallo Ada!");
/// # }
/// ```
pub struct Localizer {
    store: CatalogStore,
    cache: RenderCache,
}

impl Localizer {
    /// Create a localizer over `source`, with `reference` as the
    /// language whose catalog drives key inference.
    pub fn new(source: impl CatalogSource + 'static, reference: impl Into<String>) -> Self {
        Self {
            store: CatalogStore::new(source, reference),
            cache: RenderCache::new(),
        }
    }

    /// Wrap an already-configured store.
    pub fn with_store(store: CatalogStore) -> Self {
        Self {
            store,
            cache: RenderCache::new(),
        }
    }

    pub fn reference_locale(&self) -> &str {
        self.store.reference_locale()
    }

    /// Load one language's catalog; idempotent.
    pub async fn load(&self, locale: &str) -> Result<(), EngineError> {
        self.store.load(locale).await
    }

    /// Load several languages concurrently, typically at startup.
    pub async fn load_all<I, S>(&self, locales: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.store.load_all(locales).await
    }

    pub fn loaded_locales(&self) -> Vec<String> {
        self.store.loaded_locales()
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Localize a phrase into `locale`. Never fails: every miss path
    /// falls back to the literal probe text —
    ///
    /// - catalogs not loaded yet (call sites may render before startup
    ///   loading finishes),
    /// - no catalog entry reproduces the probe (a translator has not
    ///   added it yet),
    /// - the target catalog lacks the matched key (that locale only).
    ///
    /// Use [`Self::try_localize`] to surface unloaded catalogs instead.
    pub fn localize(&self, locale: &str, phrase: &Phrase) -> String {
        let probe = phrase.probe();
        let values = phrase.values();

        if self.cache.contains_probe(&probe) {
            self.cache.record_hit();
            self.extend_for_locale(&probe, locale);
        } else {
            self.match_and_cache(&probe, values, locale);
        }

        match self.cache.plan(&probe, locale) {
            Some(plan) => plan.render(values),
            None => probe,
        }
    }

    /// Fail-fast variant: requires both the reference catalog and the
    /// requested locale's catalog to be loaded, then localizes with the
    /// same fallback-to-probe semantics for unmatched phrases.
    pub fn try_localize(&self, locale: &str, phrase: &Phrase) -> Result<String, EngineError> {
        for required in [self.store.reference_locale(), locale] {
            if !self.store.is_loaded(required) {
                return Err(EngineError::CatalogNotLoaded {
                    locale: required.to_string(),
                });
            }
        }
        Ok(self.localize(locale, phrase))
    }

    /// Miss path: scan the reference catalog once and cache plans for
    /// the reference language and, when available, the requested one.
    fn match_and_cache(&self, probe: &str, values: &[String], locale: &str) {
        self.cache.record_miss();

        let catalogs = self.store.read();
        let reference_locale = self.store.reference_locale();
        let Some(reference) = catalogs.get(reference_locale) else {
            trace!(probe, "reference catalog not loaded; probe left untranslated");
            return;
        };

        let Some((key, entry)) = match_probe(reference, probe, values) else {
            debug!(probe, "no catalog entry reproduces probe");
            return;
        };

        self.cache.insert(
            probe,
            reference_locale,
            RenderPlan::new(key, entry.template(), entry.slots()),
        );

        if locale != reference_locale {
            if let Some(target) = catalogs.get(locale).and_then(|cat| cat.get(key)) {
                self.cache.insert(
                    probe,
                    locale,
                    RenderPlan::new(key, target.template(), entry.slots()),
                );
            } else {
                debug!(key, locale, "matched key missing from target catalog");
            }
        }
    }

    /// Hit path for a locale the probe has no plan for yet: derive one
    /// from the cached key instead of rescanning the catalog.
    fn extend_for_locale(&self, probe: &str, locale: &str) {
        if self.cache.plan(probe, locale).is_some() {
            return;
        }
        let Some(known) = self.cache.any_plan(probe) else {
            return;
        };
        let catalogs = self.store.read();
        if let Some(target) = catalogs.get(locale).and_then(|cat| cat.get(known.key())) {
            self.cache.insert(
                probe,
                locale,
                RenderPlan::new(known.key(), target.template(), known.slots()),
            );
        }
    }
}
