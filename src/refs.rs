//! Bibliographic reference table.
//!
//! A flat JSON object mapping citation labels to display text, e.g.:
//!
//! ```json
//! {
//!     "RFC2119": "Key words for use in RFCs ...",
//!     "OCFL-Implementation": "OCFL Implementation Notes ..."
//! }
//! ```
//!
//! Loaded once before any conversion and read-only afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Citation label → bibliographic display text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: HashMap<String, String>,
}

impl ReferenceTable {
    /// Load from a `references.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ReferenceTable {
    /// Build a table from literal pairs; handy in tests.
    fn from(pairs: [(&str, &str); N]) -> Self {
        ReferenceTable {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
