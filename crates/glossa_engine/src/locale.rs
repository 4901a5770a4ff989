//! Locale tag helpers.
//!
//! The engine itself treats language codes as opaque catalog partition
//! keys; `en_AU` on the wire is `en_AU` in the store, verbatim. The one
//! helper here is for embedders mapping an OS-reported locale onto a
//! catalog tag before handing it to the engine.

/// Map an OS-reported locale onto Glossa's underscore tag style.
///
/// Desktop and web platforms usually report `en-AU`; Glossa catalogs are
/// keyed `en_AU`. Trims whitespace and converts `-` to `_`. Never applied
/// implicitly — the store looks tags up exactly as given.
pub fn canonical_tag(s: &str) -> String {
    s.trim().replace('-', "_")
}
