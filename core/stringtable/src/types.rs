use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, StringTableError};

pub const DEFAULT_LANGUAGE: &str = "English";

/// Options controlling how a stringtable XML is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Name of the per-key child element that carries the display text.
    pub language: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Key -> display text map, built once and read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct StringTable {
    entries: BTreeMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `key`, failing with [`StringTableError::MissingKey`] when absent.
    pub fn lookup(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| StringTableError::MissingKey(key.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the previous text when `key` was already present.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), text.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
