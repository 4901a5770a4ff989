//! The render cache: probe string → per-locale render plans.
//!
//! Entries are created lazily after a successful match and never
//! evicted; the number of distinct probes is bounded by the embedder's
//! static call sites, so the structure stays small for the life of the
//! process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::trace;

use crate::subst::substitute;

/// Everything needed to re-render one (probe, locale) pair without
/// another catalog scan: the matched key, that locale's template text,
/// and the *reference* entry's slot names in positional order.
///
/// Rendering maps the n-th value onto the n-th reference slot name and
/// substitutes by name, so a translation may order its placeholders
/// differently from the reference template and still receive each value
/// in the right slot. Slot names with no token in the template leave no
/// trace; tokens with no matching slot name stay visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    key: String,
    template: String,
    slots: Vec<String>,
}

impl RenderPlan {
    pub fn new(key: impl Into<String>, template: impl Into<String>, slots: &[String]) -> Self {
        Self {
            key: key.into(),
            template: template.into(),
            slots: slots.to_vec(),
        }
    }

    /// The catalog key this plan was derived from.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn render(&self, values: &[String]) -> String {
        self.slots
            .iter()
            .zip(values)
            .fold(self.template.clone(), |acc, (slot, value)| {
                substitute(&acc, slot, value)
            })
    }

    pub(crate) fn slots(&self) -> &[String] {
        &self.slots
    }
}

/// Cache hit/miss counters, cumulative for the process lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Probes answered from the cache without a catalog scan.
    pub hits: u64,
    /// Probes that required a catalog scan.
    pub misses: u64,
}

/// Memoizes render plans per distinct probe string.
///
/// `insert` merges: a probe matched once for locale A and later needed
/// for locale B extends the same slot rather than overwriting it.
#[derive(Debug, Default)]
pub struct RenderCache {
    entries: RwLock<HashMap<String, HashMap<String, RenderPlan>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any locale's plan exists for this probe. This is the
    /// "scan already happened" signal: a probe present here is never
    /// matched against the catalog again.
    pub fn contains_probe(&self, probe: &str) -> bool {
        self.entries.read().unwrap().contains_key(probe)
    }

    /// The cached plan for one (probe, locale) pair.
    pub fn plan(&self, probe: &str, locale: &str) -> Option<RenderPlan> {
        self.entries
            .read()
            .unwrap()
            .get(probe)
            .and_then(|locales| locales.get(locale))
            .cloned()
    }

    /// Any cached plan for this probe, regardless of locale. All plans
    /// for one probe share the same key and slot list, so this is enough
    /// to derive a plan for a newly requested locale without rescanning.
    pub(crate) fn any_plan(&self, probe: &str) -> Option<RenderPlan> {
        self.entries
            .read()
            .unwrap()
            .get(probe)
            .and_then(|locales| locales.values().next())
            .cloned()
    }

    /// Merge a plan into the probe's entry, keeping plans other locales
    /// already cached. An existing plan for the same locale stands.
    pub fn insert(&self, probe: &str, locale: &str, plan: RenderPlan) {
        trace!(probe, locale, key = plan.key(), "render plan cached");
        self.entries
            .write()
            .unwrap()
            .entry(probe.to_string())
            .or_default()
            .entry(locale.to_string())
            .or_insert(plan);
    }

    /// Number of distinct probes cached.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }
}
