//! Template entries: template text plus its ordered slot names.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::CatalogParseError;
use crate::subst::substitute;

/// One catalog message: template text containing `$slotName` tokens and
/// the slot names in the order positional values fill them.
///
/// The on-wire shape is a JSON array of strings — element 0 the template,
/// elements 1..n the slot names — preserved bit-exact on round trip.
///
/// An entry whose slot list disagrees with the tokens its template
/// actually uses is accepted as-is; the matcher's arity filter simply
/// never selects it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateEntry {
    template: String,
    slots: Vec<String>,
}

impl TemplateEntry {
    pub fn new(template: impl Into<String>, slots: Vec<String>) -> Self {
        Self {
            template: template.into(),
            slots,
        }
    }

    /// Build an entry from its wire shape. Only the empty array is
    /// rejected; a bare `[template]` is a valid zero-slot entry.
    pub fn from_parts(mut parts: Vec<String>) -> Result<Self, CatalogParseError> {
        if parts.is_empty() {
            return Err(CatalogParseError::EmptyEntry);
        }
        let slots = parts.split_off(1);
        let template = parts.pop().unwrap_or_default();
        Ok(Self { template, slots })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Number of interpolated values this entry expects.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// Positional substitution: the n-th value replaces `$slots[n]`
    /// wherever it occurs in the template.
    pub fn instantiate(&self, values: &[String]) -> String {
        self.slots
            .iter()
            .zip(values)
            .fold(self.template.clone(), |acc, (slot, value)| {
                substitute(&acc, slot, value)
            })
    }

    /// By-name substitution: each `(name, value)` pair replaces `$name`
    /// wherever it occurs, regardless of the entry's own slot order.
    /// This is what target-language rendering uses so that a translation
    /// may reorder its placeholders freely.
    pub fn render_named<'a, I>(&self, pairs: I) -> String
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        crate::subst::expand(&self.template, pairs)
    }
}

impl Serialize for TemplateEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1 + self.slots.len()))?;
        seq.serialize_element(&self.template)?;
        for slot in &self.slots {
            seq.serialize_element(slot)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TemplateEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = Vec::<String>::deserialize(deserializer)?;
        Self::from_parts(parts).map_err(de::Error::custom)
    }
}

impl fmt::Display for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
