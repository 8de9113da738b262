//! Entity name remapping table
//!
//! Loaded from a JSON object whose keys are entity names as written in
//! annotations:
//!
//! ```json
//! {
//!     "dom.Node": { "name": "Node", "from": "./dom" },
//!     "Element": { "from": "./dom" },
//!     "int": "number"
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// How one raw entity name is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameMapping {
    Rename(String),
    Detailed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
}

/// Replacement looked up for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement<'a> {
    pub name: &'a str,
    /// Module the name has to be imported from, if any
    pub from: Option<&'a str>,
}

/// Ordered table of entity replacements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameMap {
    entries: IndexMap<String, NameMapping>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn rename(&mut self, raw: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(raw.into(), NameMapping::Rename(name.into()));
    }

    pub fn import(&mut self, raw: impl Into<String>, name: Option<String>, from: impl Into<String>) {
        self.entries.insert(
            raw.into(),
            NameMapping::Detailed {
                name,
                from: Some(from.into()),
            },
        );
    }

    pub fn resolve<'a>(&'a self, raw: &'a str) -> Option<Replacement<'a>> {
        let mapping = self.entries.get(raw)?;
        Some(match mapping {
            NameMapping::Rename(name) => Replacement {
                name: name.as_str(),
                from: None,
            },
            NameMapping::Detailed { name, from } => Replacement {
                name: name.as_deref().unwrap_or(raw),
                from: from.as_deref(),
            },
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
