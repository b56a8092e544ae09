//! Candidate gathering.
//!
//! With context, candidates are the members of the value the context chain
//! resolves to: built-in members of its kind, then its own properties. With
//! no context they are the names visible at the cursor: locals, additional
//! context, globals, then keywords. Every candidate starts with the partial
//! token's text; the first occurrence of a name wins.

use crate::context::ContextChain;
use crate::environment::SymbolEnvironment;
use crate::resolvers::ResolverRegistry;
use crate::value::{Value, apparent_members};
use acomp_common::limits::MAX_CANDIDATES;
use acomp_scanner::{Token, TokenKind};
use indexmap::IndexSet;
use std::ops::Index;
use tracing::{debug, trace};

/// Deduplicated candidate names in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateList {
    names: IndexSet<String>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from host-supplied names, dropping repeats.
    pub fn from_vec(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }

    /// Append `name` unless already present. Returns whether it was added.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get_index(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Index<usize> for CandidateList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}

/// Prefix-filtering, capacity-bounded accumulator.
struct Collector<'p> {
    prefix: &'p str,
    list: CandidateList,
}

impl<'p> Collector<'p> {
    fn new(prefix: &'p str) -> Self {
        Self {
            prefix,
            list: CandidateList::new(),
        }
    }

    fn offer(&mut self, name: &str) {
        if self.list.len() >= MAX_CANDIDATES || !name.starts_with(self.prefix) {
            return;
        }
        if !self.list.contains(name) {
            self.list.push(name);
        }
    }

    fn offer_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.offer(name);
        }
    }

    fn finish(self) -> CandidateList {
        self.list
    }
}

/// Gather the candidates for `chain`.
pub fn gather(
    chain: &ContextChain,
    env: &SymbolEnvironment,
    keywords: &[String],
    resolvers: &ResolverRegistry,
) -> CandidateList {
    let partial = chain.partial();
    let mut collector = Collector::new(&partial.text);

    if chain.has_context() {
        match resolve_base(chain.context(), env, resolvers) {
            Some(base) => collect_members(&mut collector, &base),
            None => trace!(
                segments = chain.context().len(),
                "context chain did not resolve"
            ),
        }
    } else if partial.kind == TokenKind::Property {
        // A dot with nothing resolvable in front of it.
        trace!("property access without context");
    } else {
        collect_visible_names(&mut collector, partial, env, keywords);
    }

    let list = collector.finish();
    debug!(
        prefix = %partial.text,
        context = chain.context().len(),
        candidates = list.len(),
        "gathered candidates"
    );
    list
}

/// Resolve the context segments to the value being completed on.
///
/// The leading segment goes through the resolver registry; every later
/// segment is a member step, followed by a zero-argument call for
/// [`TokenKind::Function`] segments. `null` and `undefined` count as absent.
pub fn resolve_base(
    context: &[Token],
    env: &SymbolEnvironment,
    resolvers: &ResolverRegistry,
) -> Option<Value> {
    let (first, rest) = context.split_first()?;
    let mut base = resolvers.resolve(first, env).filter(|v| !v.is_nullish())?;
    for segment in rest {
        let member = base.member(&segment.text)?;
        base = if segment.kind == TokenKind::Function {
            member.call()?
        } else {
            member
        };
        if base.is_nullish() {
            return None;
        }
    }
    Some(base)
}

fn collect_members(collector: &mut Collector<'_>, base: &Value) {
    collector.offer_all(apparent_members(base.kind()).iter().map(|m| m.name));
    for name in base.own_property_names() {
        collector.offer(&name);
    }
}

fn collect_visible_names(
    collector: &mut Collector<'_>,
    partial: &Token,
    env: &SymbolEnvironment,
    keywords: &[String],
) {
    collector.offer_all(partial.scope.local_vars().iter());
    collector.offer_all(env.additional_names());
    collector.offer_all(env.global_names());
    collector.offer_all(keywords.iter().map(String::as_str));
}

#[cfg(test)]
#[path = "../tests/gather_tests.rs"]
mod gather_tests;
