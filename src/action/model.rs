//! Experiment model: the resolved flags of a single action request

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpModel {
    pub target: String,
    pub action: String,
    pub flags: BTreeMap<String, String>,
}

impl ExpModel {
    pub fn new(target: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            action: action.into(),
            flags: BTreeMap::new(),
        }
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Flag value, with empty strings treated as absent
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Whether a boolean switch was set
    pub fn is_set(&self, name: &str) -> bool {
        self.flag(name) == Some("true")
    }
}
