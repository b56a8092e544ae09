//! Leftward reconstruction of the member-access chain in front of the cursor.
//!
//! For `a.b().c.pa|` the chain is `[a, b(), c, pa]`: every segment but the
//! last is context, the last is the partial token being completed. Call
//! argument lists are skipped and the callee is reclassified as
//! [`TokenKind::Function`].
//!
//! The scan is bounded by a token budget, a maximum chain length and a
//! maximum parenthesis depth. Hitting any bound, or reaching the start of
//! the buffer inside an argument list, stops the scan and keeps the segments
//! collected so far.

use acomp_common::Position;
use acomp_common::limits::{CONTEXT_CHAIN_INLINE, MAX_CONTEXT_CHAIN_LENGTH, MAX_PAREN_SKIP_DEPTH};
use acomp_scanner::{Document, Token, TokenKind};
use smallvec::SmallVec;
use tracing::debug;

/// Segments of a member-access expression, leading segment first and the
/// partial token last. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextChain {
    tokens: SmallVec<[Token; CONTEXT_CHAIN_INLINE]>,
    truncated: bool,
}

impl ContextChain {
    /// A chain with no context.
    pub fn new(partial: Token) -> Self {
        let mut tokens = SmallVec::new();
        tokens.push(partial);
        Self {
            tokens,
            truncated: false,
        }
    }

    /// The token being completed.
    pub fn partial(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// The segments before the partial token.
    pub fn context(&self) -> &[Token] {
        &self.tokens[..self.tokens.len() - 1]
    }

    pub fn has_context(&self) -> bool {
        self.tokens.len() > 1
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether the scan stopped on a bound rather than at the chain's start.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Why a leftward scan gave up early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Truncation {
    ScanBudget,
    ChainLength,
    ParenDepth,
    UnbalancedParens,
}

/// Walks significant tokens leftward, charging each step to the budget.
struct Walker<'a> {
    document: &'a Document,
    remaining: u32,
}

impl<'a> Walker<'a> {
    /// The significant token before `token`.
    fn before(&mut self, token: &Token) -> Result<Option<&'a Token>, Truncation> {
        if self.remaining == 0 {
            return Err(Truncation::ScanBudget);
        }
        self.remaining -= 1;
        Ok(self
            .document
            .significant_token_before(Position::new(token.row, token.start)))
    }

    /// Starting at a `)`, find the matching `(`.
    fn skip_arguments(&mut self, close: &'a Token) -> Result<&'a Token, Truncation> {
        let mut depth = 1u32;
        let mut cursor = close;
        loop {
            let Some(token) = self.before(cursor)? else {
                return Err(Truncation::UnbalancedParens);
            };
            if token.is_operator(")") {
                depth += 1;
                if depth > MAX_PAREN_SKIP_DEPTH {
                    return Err(Truncation::ParenDepth);
                }
            } else if token.is_operator("(") {
                depth -= 1;
                if depth == 0 {
                    return Ok(token);
                }
            }
            cursor = token;
        }
    }
}

/// Build the context chain ending at `token`, visiting at most
/// `max_scan_tokens` tokens.
pub fn resolve_context(document: &Document, token: &Token, max_scan_tokens: u32) -> ContextChain {
    let mut walker = Walker {
        document,
        remaining: max_scan_tokens,
    };
    // Collected right to left, reversed at the end.
    let mut reversed: SmallVec<[Token; CONTEXT_CHAIN_INLINE]> = SmallVec::new();
    reversed.push(token.clone());

    let outcome = scan_segments(&mut walker, &mut reversed);
    reversed.reverse();
    let chain = ContextChain {
        tokens: reversed,
        truncated: outcome.is_err(),
    };
    if let Err(reason) = outcome {
        debug!(
            ?reason,
            row = token.row,
            column = token.start,
            segments = chain.len(),
            "context scan truncated"
        );
    }
    chain
}

fn scan_segments(
    walker: &mut Walker<'_>,
    reversed: &mut SmallVec<[Token; CONTEXT_CHAIN_INLINE]>,
) -> Result<(), Truncation> {
    loop {
        let Some(current) = reversed.last() else {
            return Ok(());
        };
        let Some(dot) = walker.before(current)? else {
            return Ok(());
        };
        if !dot.is_member_dot() {
            return Ok(());
        }
        let Some(target) = walker.before(dot)? else {
            return Ok(());
        };
        if reversed.len() >= MAX_CONTEXT_CHAIN_LENGTH {
            return Err(Truncation::ChainLength);
        }

        let segment = if target.is_operator(")") {
            let open = walker.skip_arguments(target)?;
            match walker.before(open)? {
                Some(callee) if matches!(callee.kind, TokenKind::Word | TokenKind::Property) => {
                    callee.reclassified(TokenKind::Function)
                }
                Some(callee) => callee.clone(),
                // `(expr).` at the buffer start: keep the paren so the chain
                // does not resolve.
                None => open.clone(),
            }
        } else {
            target.clone()
        };

        let stop = segment.kind == TokenKind::Operator;
        reversed.push(segment);
        if stop {
            return Ok(());
        }
    }
}

#[cfg(test)]
#[path = "../tests/context_tests.rs"]
mod context_tests;
