//! The caller-side phrase: literal segments interleaved with values.

use std::fmt::Display;

/// A phrase as written at the call site: ordered literal segments and
/// the dynamic values interpolated between them.
///
/// The probe string — the thing matched against the reference catalog —
/// is `seg₀ value₀ seg₁ value₁ … segₙ`. Values are stringified when
/// added; the engine matches and renders plain text only.
///
/// ```
/// use glossa_engine::Phrase;
///
/// let p = Phrase::new().text("Hello ").value("Ada").text("!");
/// assert_eq!(p.probe(), "Hello Ada!");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Phrase {
    segments: Vec<String>,
    values: Vec<String>,
}

impl Phrase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build directly from the two ordered lists. `segments` should have
    /// one more element than `values`; shorter lists are tolerated and
    /// render as if padded with empty segments.
    pub fn from_parts(segments: Vec<String>, values: Vec<String>) -> Self {
        Self { segments, values }
    }

    /// Append literal text. Consecutive `text` calls with no value in
    /// between extend the same segment.
    pub fn text(mut self, s: impl Into<String>) -> Self {
        if self.segments.len() > self.values.len() {
            // Still inside the current segment.
            if let Some(last) = self.segments.last_mut() {
                last.push_str(&s.into());
            }
        } else {
            self.segments.push(s.into());
        }
        self
    }

    /// Append an interpolated value. Consecutive `value` calls insert an
    /// empty segment between them to keep the interleaving aligned.
    pub fn value(mut self, v: impl Display) -> Self {
        if self.segments.len() == self.values.len() {
            self.segments.push(String::new());
        }
        self.values.push(v.to_string());
        self
    }

    /// The interpolated values, in order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Render the reference-language probe string by interleaving
    /// segments and values.
    pub fn probe(&self) -> String {
        let mut out = String::new();
        for (i, seg) in self.segments.iter().enumerate() {
            out.push_str(seg);
            if let Some(value) = self.values.get(i) {
                out.push_str(value);
            }
        }
        for value in self.values.iter().skip(self.segments.len()) {
            out.push_str(value);
        }
        out
    }
}

/// Build a [`Phrase`] from literal segments and `{value}` interpolations.
///
/// ```
/// use glossa_engine::phrase;
///
/// let name = "Ada";
/// let p = phrase!["Hello ", {name}, "!"];
/// assert_eq!(p.probe(), "Hello Ada!");
/// ```
#[macro_export]
macro_rules! phrase {
    (@build $p:expr) => { $p };
    (@build $p:expr,) => { $p };
    (@build $p:expr, {$v:expr} $(, $($rest:tt)*)?) => {
        $crate::phrase!(@build $p.value($v) $(, $($rest)*)?)
    };
    (@build $p:expr, $t:expr $(, $($rest:tt)*)?) => {
        $crate::phrase!(@build $p.text($t) $(, $($rest)*)?)
    };
    () => { $crate::Phrase::new() };
    ($($tok:tt)+) => { $crate::phrase!(@build $crate::Phrase::new(), $($tok)+) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn probe_interleaves_segments_and_values() {
        let p = Phrase::from_parts(
            vec!["Hello ".into(), "!".into()],
            vec!["Ada".into()],
        );
        assert_eq!(p.probe(), "Hello Ada!");
    }

    #[test]
    fn builder_matches_from_parts() {
        let built = Phrase::new().text("Hello ").value("Ada").text("!");
        let parts = Phrase::from_parts(
            vec!["Hello ".into(), "!".into()],
            vec!["Ada".into()],
        );
        assert_eq!(built, parts);
    }

    #[test]
    fn adjacent_values_stay_ordered() {
        let p = Phrase::new().value(3).value(7);
        assert_eq!(p.probe(), "37");
        assert_eq!(p.values(), ["3", "7"]);
    }

    #[test]
    fn adjacent_text_extends_segment() {
        let p = Phrase::new().text("Hello").text(" there");
        assert_eq!(p.probe(), "Hello there");
    }

    #[test]
    fn leading_value_is_allowed() {
        let p = Phrase::new().value("Ada").text(" says hi");
        assert_eq!(p.probe(), "Ada says hi");
    }

    #[test]
    fn values_are_stringified_on_insert() {
        let p = Phrase::new().text("count: ").value(42);
        assert_eq!(p.probe(), "count: 42");
        assert_eq!(p.values(), ["42"]);
    }

    #[test]
    fn macro_mixes_text_and_values() {
        let name = "Ada";
        let p = phrase!["Hello ", {name}, "!"];
        assert_eq!(p.probe(), "Hello Ada!");
        assert_eq!(p.values(), ["Ada"]);
    }

    #[test]
    fn macro_empty_is_empty_phrase() {
        let p = phrase![];
        assert_eq!(p, Phrase::new());
    }

    #[test]
    fn macro_value_only() {
        let p = phrase![{1 + 2}];
        assert_eq!(p.probe(), "3");
    }
}
