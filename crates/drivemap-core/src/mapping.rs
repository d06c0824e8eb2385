//! Ordered pattern → label mapping.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{MappingError, PatternError};
use crate::pattern::Pattern;

/// What to do with a key that does not compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidPatternPolicy {
    /// Reject the whole mapping.
    #[default]
    Fail,
    /// Drop the entry with a warning and keep the rest.
    Skip,
}

/// One row of the mapping table.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub pattern: Pattern,
    pub label: String,
}

impl MappingEntry {
    pub fn new(pattern: Pattern, label: impl Into<String>) -> Self {
        Self {
            pattern,
            label: label.into(),
        }
    }
}

/// First-match classification table.
///
/// Entries keep the key order of the source JSON object. A duplicated key
/// keeps the position of its first occurrence and the label of its last.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<MappingEntry>,
    skipped: Vec<PatternError>,
}

impl Mapping {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self {
            entries,
            skipped: Vec::new(),
        }
    }

    /// Parse a JSON document into a mapping.
    pub fn from_json_str(text: &str, policy: InvalidPatternPolicy) -> Result<Self, MappingError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value, policy)
    }

    /// Build a mapping from an already decoded JSON value.
    pub fn from_json_value(value: Value, policy: InvalidPatternPolicy) -> Result<Self, MappingError> {
        let Value::Object(object) = value else {
            return Err(MappingError::NotAnObject {
                found: json_type_name(&value),
            });
        };

        let mut mapping = Self::default();
        for (key, value) in object {
            let label = label_from_value(&key, &value)?;
            match Pattern::compile(&key) {
                Ok(pattern) => {
                    debug!(pattern = %pattern, label = %label, "compiled mapping entry");
                    mapping.entries.push(MappingEntry::new(pattern, label));
                }
                Err(error) if policy == InvalidPatternPolicy::Skip => {
                    warn!(pattern = %key, %error, "skipping invalid pattern");
                    mapping.skipped.push(error);
                }
                Err(error) => return Err(error.into()),
            }
        }
        Ok(mapping)
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patterns dropped under [`InvalidPatternPolicy::Skip`].
    pub fn skipped(&self) -> &[PatternError] {
        &self.skipped
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Coerce a JSON scalar into a printable label.
///
/// Booleans print as `1` and the empty string, the way PHP's `%s` renders them.
fn label_from_value(pattern: &str, value: &Value) -> Result<String, MappingError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) | Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(MappingError::InvalidLabel {
            pattern: pattern.to_string(),
            found: json_type_name(value),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
