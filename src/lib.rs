//! Scope-aware code completion for JavaScript-like source buffers.
//!
//! The workspace is split by layer:
//! - [`acomp_common`] - Positions, ranges, and centralized limits
//! - [`acomp_scanner`] - Line-at-a-time tokenizer with scope tracking and the
//!   tokenized [`Document`]
//! - [`acomp_engine`] - Context chains, candidate gathering, and the
//!   [`CompletionSession`] state machine
//!
//! This crate re-exports the public surface of all three and adds
//! [`tracing_config`] for hosts that want the engine's logs.
//!
//! ```
//! use acomp::{Activation, CompletionSession, MemoryEditor};
//!
//! let mut editor = MemoryEditor::new("var alpha = 1; al");
//! let mut session = CompletionSession::default();
//! assert!(matches!(
//!     session.activate_at_cursor(&mut editor),
//!     Activation::Activated { .. }
//! ));
//! assert_eq!(session.selected(), Some("alpha"));
//! ```

pub use acomp_common::{LineRange, Position, limits};

pub use acomp_scanner::{Document, ScopeState, Token, TokenKind, is_word_text, token_at};

pub use acomp_engine::{
    Activation, CandidateList, Completion, CompletionEngine, CompletionOptions,
    CompletionSession, ConfigError, ContextChain, EditorHost, FunctionValue, MemoryEditor,
    ResolverRegistry, SymbolEnvironment, Value, ValueKind, gather, resolve_context,
};

pub mod tracing_config;
pub use tracing_config::init_tracing;
