//! Glossa localization engine
//!
//! Glossa localizes without translation keys at the call site. A phrase
//! is written in the reference language — literal segments plus dynamic
//! values — and the engine works backwards:
//!
//! - **Reverse matching**: the rendered probe string is matched against
//!   the reference catalog to infer the message key (arity-filtered,
//!   case-insensitive, deterministic first-match).
//! - **Render caching**: a successful match memoizes per-locale render
//!   plans per distinct probe, so repeated calls skip the scan.
//! - **Positional slots**: catalog templates carry `$slotName` tokens;
//!   values fill slots positionally on match and by name on render, so
//!   translations may reorder their placeholders.
//!
//! # Example
//!
//! ```
//! use glossa_engine::{Localizer, StaticSource, phrase};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = StaticSource::new()
//!     .with("en_AU", r#"{"greeting": ["Hello $name!", "name"]}"#)
//!     .with("de_DE", r#"{"greeting": ["Hallo $name!", "name"]}"#);
//!
//! let localizer = Localizer::new(source, "en_AU");
//! localizer.load_all(["en_AU", "de_DE"]).await.unwrap();
//!
//! let name = "Ada";
//! let greeting = phrase!["Hello ", {name}, "!"];
//! assert_eq!(localizer.localize("de_DE", &greeting), "Hallo Ada!");
//!
//! // No catalog entry: the literal text is the graceful fallback.
//! let missing = phrase!["Goodbye ", {name}, "!"];
//! assert_eq!(localizer.localize("de_DE", &missing), "Goodbye Ada!");
//! # }
//! ```

mod cache;
mod catalog;
mod entry;
mod error;
mod locale;
mod matcher;
mod phrase;
mod service;
mod subst;

pub use cache::{CacheStats, RenderCache, RenderPlan};
pub use catalog::{Catalog, CatalogSource, CatalogStore, DirSource, StaticSource};
pub use entry::TemplateEntry;
pub use error::{CatalogParseError, EngineError};
pub use locale::canonical_tag;
pub use matcher::match_probe;
pub use phrase::Phrase;
pub use service::Localizer;
pub use subst::{expand, substitute};
