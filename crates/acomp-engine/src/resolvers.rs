//! Pluggable resolution of the leading segment of a context chain.
//!
//! The first segment of `foo.bar.` (or `"s".`, `1.`, `$(x).`) has to be
//! turned into a base value before members can be stepped through. How that
//! happens depends on the segment's token kind, and for call expressions on
//! the callee's name. Both are table-driven so embedders can add or replace
//! behaviour without touching the gatherer.

use crate::environment::SymbolEnvironment;
use crate::value::Value;
use acomp_scanner::{Token, TokenKind};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::trace;

/// Resolve a leading token of a given kind to a base value.
pub type KindResolver =
    Box<dyn Fn(&Token, &SymbolEnvironment, &ResolverRegistry) -> Option<Value>>;

/// Produce the value of calling a named function with no arguments.
pub type CallResolver = Box<dyn Fn(&SymbolEnvironment) -> Option<Value>>;

/// Utility globals whose zero-argument call result is completed by default.
pub const DEFAULT_CALL_NAMES: &[&str] = &["$", "jQuery", "_"];

pub struct ResolverRegistry {
    kinds: FxHashMap<TokenKind, KindResolver>,
    calls: FxHashMap<String, CallResolver>,
}

impl ResolverRegistry {
    /// A registry that resolves nothing.
    pub fn empty() -> Self {
        Self {
            kinds: FxHashMap::default(),
            calls: FxHashMap::default(),
        }
    }

    /// The standard resolvers:
    /// - `Word`: additional context, then globals
    /// - `String` / `Number`: a value of that primitive kind
    /// - `Atom`: booleans and the numeric atoms; `null`/`undefined` do not resolve
    /// - `Function`: the registered call resolver for the callee's name
    ///
    /// plus zero-argument call resolvers for [`DEFAULT_CALL_NAMES`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register_kind(TokenKind::Word, |token, env, _| {
            env.lookup(&token.text).cloned()
        });
        registry.register_kind(TokenKind::String, |token, _, _| {
            Some(Value::String(unquote(&token.text).to_string()))
        });
        registry.register_kind(TokenKind::Number, |token, _, _| {
            Some(Value::Number(token.text.parse().unwrap_or(0.0)))
        });
        registry.register_kind(TokenKind::Atom, |token, _, _| {
            match token.text.as_str() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                "NaN" => Some(Value::Number(f64::NAN)),
                "Infinity" => Some(Value::Number(f64::INFINITY)),
                _ => None,
            }
        });
        registry.register_kind(TokenKind::Function, |token, env, registry| {
            registry.resolve_call(&token.text, env)
        });
        for name in DEFAULT_CALL_NAMES {
            registry.register_zero_arg_call(*name);
        }
        registry
    }

    pub fn register_kind<F>(&mut self, kind: TokenKind, resolver: F)
    where
        F: Fn(&Token, &SymbolEnvironment, &ResolverRegistry) -> Option<Value> + 'static,
    {
        self.kinds.insert(kind, Box::new(resolver));
    }

    pub fn unregister_kind(&mut self, kind: TokenKind) {
        self.kinds.remove(&kind);
    }

    pub fn register_call<F>(&mut self, name: impl Into<String>, resolver: F)
    where
        F: Fn(&SymbolEnvironment) -> Option<Value> + 'static,
    {
        self.calls.insert(name.into(), Box::new(resolver));
    }

    /// Resolve `name()` by calling the function bound to `name` in the
    /// environment, when there is one.
    pub fn register_zero_arg_call(&mut self, name: impl Into<String>) {
        let name = name.into();
        let key = name.clone();
        self.register_call(key, move |env| env.lookup(&name)?.call());
    }

    pub fn unregister_call(&mut self, name: &str) {
        self.calls.remove(name);
    }

    pub fn has_call(&self, name: &str) -> bool {
        self.calls.contains_key(name)
    }

    /// Resolve a leading chain segment.
    pub fn resolve(&self, token: &Token, env: &SymbolEnvironment) -> Option<Value> {
        let Some(resolver) = self.kinds.get(&token.kind) else {
            trace!(kind = ?token.kind, text = %token.text, "no resolver for token kind");
            return None;
        };
        resolver(token, env, self)
    }

    pub fn resolve_call(&self, name: &str, env: &SymbolEnvironment) -> Option<Value> {
        let resolver = self.calls.get(name)?;
        resolver(env)
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.kinds.keys().map(|k| format!("{k:?}")).collect();
        kinds.sort();
        let mut calls: Vec<_> = self.calls.keys().collect();
        calls.sort();
        f.debug_struct("ResolverRegistry")
            .field("kinds", &kinds)
            .field("calls", &calls)
            .finish()
    }
}

/// Strip matching surrounding quotes from a string literal's text.
fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2
        && matches!(bytes[0], b'"' | b'\'' | b'`')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &text[1..text.len() - 1]
    } else {
        text.get(1..).unwrap_or("")
    }
}

#[cfg(test)]
#[path = "../tests/resolvers_tests.rs"]
mod resolvers_tests;
