use thiserror::Error;

/// Failures while parsing a catalog resource.
///
/// Arity inconsistencies (an entry naming more or fewer slots than its
/// template uses) are deliberately *not* parse errors: such entries are
/// accepted and simply never matched.
#[derive(Debug, Error)]
pub enum CatalogParseError {
    #[error("catalog resource is not a JSON object of string arrays: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template entry must contain at least the template text")]
    EmptyEntry,
}

/// Errors surfaced by the engine's fail-fast paths.
///
/// `NoMatch` and `ArityMismatch` are intentionally absent: an unmatched
/// probe falls back to its literal text and a mismatched entry is inert
/// data, neither is an error condition.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The locale's catalog was never loaded. Render calls that must not
    /// block return this instead of waiting for a fetch.
    #[error("catalog for locale `{locale}` was never loaded")]
    CatalogNotLoaded { locale: String },

    /// The fetched resource did not conform to the catalog wire format.
    /// Propagated to the caller awaiting the load; already-cached renders
    /// are unaffected.
    #[error("catalog resource for locale `{locale}` is malformed: {source}")]
    Malformed {
        locale: String,
        #[source]
        source: CatalogParseError,
    },

    /// The catalog source failed to produce a resource at all.
    #[error("failed to fetch catalog for locale `{locale}`: {message}")]
    Fetch { locale: String, message: String },
}
