use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

use super::Extension;

/// A single key stored in a secondary index.
///
/// Keys of one index are always the same variant, so the derived ordering
/// only ever compares like with like.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndexValue {
    Int(i64),
    Time(DateTime<Utc>),
    Text(String),
}

impl IndexValue {
    /// Compares against the textual form used by field selectors and queries.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            IndexValue::Int(value) => raw.trim().parse::<i64>().map_or(false, |v| v == *value),
            IndexValue::Time(value) => DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc) == *value)
                .unwrap_or(false),
            IndexValue::Text(value) => value == raw,
        }
    }

    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.to_string()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexValue::Int(value) => write!(f, "{value}"),
            IndexValue::Time(value) => {
                write!(f, "{}", value.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            IndexValue::Text(value) => f.write_str(value),
        }
    }
}

pub type IndexKeyFn<E> = fn(&E) -> Option<IndexValue>;

/// Derives the key an extension is filed under for one indexed field.
pub struct IndexSpec<E> {
    pub name: &'static str,
    pub key: IndexKeyFn<E>,
}

impl<E> Clone for IndexSpec<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            key: self.key,
        }
    }
}

impl<E> fmt::Debug for IndexSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexSpec").field("name", &self.name).finish()
    }
}

pub const METADATA_NAME: &str = "metadata.name";
pub const METADATA_CREATION_TIMESTAMP: &str = "metadata.creationTimestamp";

fn name_key<E: Extension>(extension: &E) -> Option<IndexValue> {
    Some(IndexValue::Text(extension.metadata().name.clone()))
}

fn creation_timestamp_key<E: Extension>(extension: &E) -> Option<IndexValue> {
    extension.metadata().creation_timestamp.map(IndexValue::Time)
}

impl<E: Extension> IndexSpec<E> {
    pub fn new(name: &'static str, key: IndexKeyFn<E>) -> Self {
        Self { name, key }
    }

    /// Indexes every kind gets regardless of its spec.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(METADATA_NAME, name_key::<E>),
            Self::new(METADATA_CREATION_TIMESTAMP, creation_timestamp_key::<E>),
        ]
    }

    pub fn key_of(&self, extension: &E) -> Option<IndexValue> {
        (self.key)(extension)
    }
}

pub fn find_index<'a, E>(indexes: &'a [IndexSpec<E>], name: &str) -> Option<&'a IndexSpec<E>> {
    indexes.iter().find(|index| index.name == name)
}
