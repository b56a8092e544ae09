//! The symbol environment completion resolves names against.
//!
//! Names are looked up in additional-context bindings supplied for this
//! editor first, then in globals. A `null` or `undefined` additional binding
//! does not hide the global of the same name.

use crate::error::{Result, read_config_file};
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolEnvironment {
    pub additional_context: IndexMap<String, Value>,
    pub globals: IndexMap<String, Value>,
}

impl SymbolEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"globals": {...}, "additionalContext": {...}}`.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&read_config_file(path.as_ref())?)
    }

    pub fn with_global(mut self, name: impl Into<String>, value: Value) -> Self {
        self.globals.insert(name.into(), value);
        self
    }

    pub fn with_additional(mut self, name: impl Into<String>, value: Value) -> Self {
        self.additional_context.insert(name.into(), value);
        self
    }

    pub fn set_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    pub fn set_additional(&mut self, name: impl Into<String>, value: Value) {
        self.additional_context.insert(name.into(), value);
    }

    /// Value of `name` from additional context, then globals.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.additional_context
            .get(name)
            .filter(|value| !value.is_nullish())
            .or_else(|| self.globals.get(name))
    }

    pub fn additional_names(&self) -> impl Iterator<Item = &str> {
        self.additional_context.keys().map(String::as_str)
    }

    pub fn global_names(&self) -> impl Iterator<Item = &str> {
        self.globals.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../tests/environment_tests.rs"]
mod environment_tests;
