//! Reverse template matching: from a rendered probe back to its key.

use tracing::trace;

use crate::catalog::Catalog;
use crate::entry::TemplateEntry;

/// Find the catalog entry that reproduces `probe` when instantiated with
/// `values`.
///
/// Candidates are filtered to those whose arity equals `values.len()`,
/// then each is instantiated positionally and compared to the probe with
/// both sides lowercased. The first match in the catalog's insertion
/// order wins; `Catalog::iter` documents that order as the key order of
/// the source resource, so results are deterministic.
///
/// `None` is not an error: an unmatched probe falls back to its literal
/// text at the render layer.
pub fn match_probe<'a>(
    catalog: &'a Catalog,
    probe: &str,
    values: &[String],
) -> Option<(&'a str, &'a TemplateEntry)> {
    let probe_lower = probe.to_lowercase();

    for (key, entry) in catalog.iter() {
        if entry.arity() != values.len() {
            continue;
        }
        if entry.instantiate(values).to_lowercase() == probe_lower {
            trace!(key, probe, "probe matched catalog entry");
            return Some((key, entry));
        }
    }

    trace!(probe, "no catalog entry reproduces probe");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::parse(
            r#"{
                "greeting": ["Hello $name!", "name"],
                "farewell": ["Goodbye $name, see you $when.", "name", "when"],
                "plain": ["Save"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn matches_reconstructed_probe() {
        let cat = catalog();
        let values = vec!["Ada".to_string()];
        let (key, _) = match_probe(&cat, "Hello Ada!", &values).unwrap();
        assert_eq!(key, "greeting");
    }

    #[test]
    fn match_is_case_insensitive() {
        let cat = catalog();
        let values = vec!["Bob".to_string()];
        let (key, _) = match_probe(&cat, "hello bob!", &values).unwrap();
        assert_eq!(key, "greeting");
    }

    #[test]
    fn arity_filter_excludes_wrong_value_count() {
        let cat = catalog();
        // "Hello Ada!" is reproducible only with exactly one value.
        assert!(match_probe(&cat, "Hello Ada!", &[]).is_none());
        let two = vec!["Ada".to_string(), "tomorrow".to_string()];
        assert!(match_probe(&cat, "Hello Ada!", &two).is_none());
    }

    #[test]
    fn zero_arity_entries_match_literal_probes() {
        let cat = catalog();
        let (key, _) = match_probe(&cat, "Save", &[]).unwrap();
        assert_eq!(key, "plain");
    }

    #[test]
    fn unknown_probe_matches_nothing() {
        let cat = catalog();
        let values = vec!["Ada".to_string()];
        assert!(match_probe(&cat, "Goodbye Ada!", &values).is_none());
    }

    #[test]
    fn reflexivity_over_all_entries() {
        // Instantiating any entry with its own arity and re-matching must
        // find an entry that reproduces the same text.
        let cat = catalog();
        for (_, entry) in cat.iter() {
            let values: Vec<String> = (0..entry.arity()).map(|i| format!("v{i}")).collect();
            let probe = entry.instantiate(&values);
            let (_, found) = match_probe(&cat, &probe, &values)
                .unwrap_or_else(|| panic!("no match for probe {probe:?}"));
            assert_eq!(found.instantiate(&values), probe);
        }
    }

    #[test]
    fn first_match_follows_insertion_order() {
        let cat = Catalog::parse(
            r#"{
                "second": ["Pick $x", "x"],
                "first": ["pick $y", "y"]
            }"#,
        )
        .unwrap();
        // Both entries reproduce the probe; the one inserted first wins.
        let values = vec!["me".to_string()];
        let (key, _) = match_probe(&cat, "Pick me", &values).unwrap();
        assert_eq!(key, "second");
    }
}
