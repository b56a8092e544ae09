//! Completion engine for acomp.
//!
//! This crate turns a cursor position in a tokenized [`acomp_scanner::Document`]
//! into completion candidates and drives the interactive session:
//! - `context` - Leftward reconstruction of `a.b().c.` member chains
//! - `resolvers` - Pluggable resolution of a chain's leading segment
//! - `gather` - Candidate enumeration and prefix filtering
//! - `engine` - The pipeline behind a single completion request
//! - `session` - Activation, navigation, commit, and deferred deactivation
//! - `host` - The editor interface a session drives
//! - `environment` / `value` - The injected symbol environment
//! - `options` / `error` - Configuration and its loading errors

pub mod context;
pub use context::{ContextChain, resolve_context};

pub mod engine;
pub use engine::{Completion, CompletionEngine};

pub mod environment;
pub use environment::SymbolEnvironment;

pub mod error;
pub use error::ConfigError;

pub mod gather;
pub use gather::{CandidateList, gather};

pub mod host;
pub use host::{EditorHost, MemoryEditor};

pub mod options;
pub use options::CompletionOptions;

pub mod resolvers;
pub use resolvers::ResolverRegistry;

pub mod scheduler;
pub use scheduler::{DeferredTask, TaskQueue};

pub mod session;
pub use session::{Activation, CompletionSession};

pub mod value;
pub use value::{FunctionValue, Value, ValueKind};
