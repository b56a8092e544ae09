//! JavaScript scanner/tokenizer for the acomp completion engine.
//!
//! This crate provides the lexical layer:
//! - `TokenKind` / `Token` - Classified tokens with their scope snapshot
//! - `ScannerState` - Line-at-a-time tokenizer state machine
//! - `ScopeState` / `LocalVars` - Persistent chains of visible local names
//! - `Document` - A tokenized buffer that re-scans after edits
//! - `token_at` - The cursor token adapter used by completion

pub mod adapter;
pub use adapter::{is_word_text, token_at};

pub mod document;
pub use document::Document;

pub mod scanner;
pub use scanner::{ScannerState, is_word_byte};

pub mod scope;
pub use scope::{LocalVars, ScopeState};

pub mod token;
pub use token::{Token, TokenKind};
