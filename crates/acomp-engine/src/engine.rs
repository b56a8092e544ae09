//! The completion pipeline: cursor token, context chain, candidates.

use crate::context::{ContextChain, resolve_context};
use crate::environment::SymbolEnvironment;
use crate::gather::{CandidateList, gather};
use crate::options::CompletionOptions;
use crate::resolvers::ResolverRegistry;
use acomp_scanner::{Document, Token, token_at};
use tracing::trace;

/// Result of running the pipeline at one position.
#[derive(Clone, Debug)]
pub struct Completion {
    /// The token being completed.
    pub token: Token,
    pub chain: ContextChain,
    pub candidates: CandidateList,
}

impl Completion {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Options, symbol environment and resolvers shared by every completion.
#[derive(Debug, Default)]
pub struct CompletionEngine {
    options: CompletionOptions,
    environment: SymbolEnvironment,
    resolvers: ResolverRegistry,
}

impl CompletionEngine {
    pub fn new(options: CompletionOptions, environment: SymbolEnvironment) -> Self {
        Self {
            options,
            environment,
            resolvers: ResolverRegistry::default(),
        }
    }

    pub fn with_resolvers(mut self, resolvers: ResolverRegistry) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CompletionOptions {
        &mut self.options
    }

    pub fn environment(&self) -> &SymbolEnvironment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut SymbolEnvironment {
        &mut self.environment
    }

    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }

    pub fn resolvers_mut(&mut self) -> &mut ResolverRegistry {
        &mut self.resolvers
    }

    /// Compute the candidates for the cursor at (`row`, `column`).
    pub fn complete_at(&self, document: &Document, row: u32, column: u32) -> Completion {
        let token = token_at(document, row, column);
        let chain = resolve_context(document, &token, self.options.max_context_scan_tokens);
        let candidates = gather(
            &chain,
            &self.environment,
            &self.options.keywords,
            &self.resolvers,
        );
        trace!(row, column, token = %token.text, candidates = candidates.len(), "complete_at");
        Completion {
            token,
            chain,
            candidates,
        }
    }
}

#[cfg(test)]
#[path = "../tests/engine_tests.rs"]
mod engine_tests;
