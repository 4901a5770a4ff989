//! `$name` token replacement.
//!
//! The entire engine rests on one textual primitive: replacing every
//! occurrence of a literal `$name` token inside a template. The same
//! primitive expands `$var` references in configuration strings, so it
//! is exposed publicly.

/// Replace every occurrence of `$name` in `template` with `value`.
///
/// Matching is case-sensitive and purely textual: there is no word
/// boundary handling, so a slot named `a` also rewrites the `$a` inside
/// `$abc`. Catalog authors avoid prefix-overlapping slot names.
pub fn substitute(template: &str, name: &str, value: &str) -> String {
    let token = format!("${name}");
    template.replace(&token, value)
}

/// Fold [`substitute`] over `(name, value)` pairs, left to right.
///
/// Later pairs see the output of earlier ones; values containing `$`
/// tokens are therefore expanded too. Callers that need literal values
/// must not embed `$` names that collide with later pairs.
pub fn expand<'a, I>(template: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .fold(template.to_string(), |acc, (name, value)| {
            substitute(&acc, name, value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(substitute("$x and $x", "x", "A"), "A and A");
    }

    #[test]
    fn token_is_case_sensitive() {
        assert_eq!(substitute("$Name", "name", "Ada"), "$Name");
    }

    #[test]
    fn unknown_token_left_as_is() {
        assert_eq!(substitute("Hello $name!", "user", "Ada"), "Hello $name!");
    }

    #[test]
    fn expand_folds_pairs_in_order() {
        let url = expand(
            "$baseUrl/oauth?client=$clientId",
            [("baseUrl", "https://example.test"), ("clientId", "abc123")],
        );
        assert_eq!(url, "https://example.test/oauth?client=abc123");
    }

    #[test]
    fn expand_over_empty_pairs_is_identity() {
        assert_eq!(expand("Hello $name!", []), "Hello $name!");
    }
}
