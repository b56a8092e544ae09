//! Token types produced by the scanner.

use crate::scope::ScopeState;
use serde::{Deserialize, Serialize};

/// Lexical classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// An identifier in expression position
    Word,
    /// An identifier directly after a member-access dot
    Property,
    /// A quoted string or template literal
    String,
    /// A numeric literal
    Number,
    /// A literal keyword: `true`, `false`, `null`, `undefined`, `NaN`, `Infinity`
    Atom,
    /// An identifier known to be called, e.g. `$` in `$(sel).`
    Function,
    /// Punctuation and operators
    Operator,
    /// Keywords, whitespace, comments, anything else
    Other,
}

/// A classified run of text on a single row.
///
/// Columns are byte offsets into the row; `start..end` is half-open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub row: u32,
    pub start: u32,
    pub end: u32,
    /// Whitespace or comment text.
    pub trivia: bool,
    /// Scope in effect where the token starts.
    pub scope: ScopeState,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        kind: TokenKind,
        row: u32,
        start: u32,
        end: u32,
        scope: ScopeState,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            row,
            start,
            end,
            trivia: false,
            scope,
        }
    }

    /// An empty token at `column`, used when nothing word-like is under the cursor.
    pub fn empty_at(kind: TokenKind, row: u32, column: u32, scope: ScopeState) -> Self {
        Self::new(String::new(), kind, row, column, column, scope)
    }

    pub(crate) fn trivia(mut self) -> Self {
        self.trivia = true;
        self
    }

    /// Return a copy with a different classification.
    pub fn reclassified(&self, kind: TokenKind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether this token is a member-access dot (`.` or `?.`).
    pub fn is_member_dot(&self) -> bool {
        self.kind == TokenKind::Operator && (self.text == "." || self.text == "?.")
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == op
    }
}
