//! Completion options.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a valid
//! configuration.

use crate::error::{Result, read_config_file};
use acomp_common::limits::{DEFAULT_MAX_REPLACE_LENGTH, MAX_CONTEXT_SCAN_TOKENS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JavaScript keywords offered when completing a bare identifier.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionOptions {
    /// Keywords appended after scope and environment names.
    pub keywords: Vec<String>,
    /// Width of the replacement range recorded on activation.
    pub max_replace_length: u32,
    /// Token budget for the leftward context scan.
    pub max_context_scan_tokens: u32,
    /// Turn soft tabs off while a session is active and restore them after.
    pub override_soft_tabs: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_replace_length: DEFAULT_MAX_REPLACE_LENGTH,
            max_context_scan_tokens: MAX_CONTEXT_SCAN_TOKENS,
            override_soft_tabs: true,
        }
    }
}

impl CompletionOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&read_config_file(path.as_ref())?)
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
