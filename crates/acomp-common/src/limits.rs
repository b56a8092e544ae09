//! Centralized limits and thresholds for the completion engine.
//!
//! Completion runs inside the editor's keystroke handler, so every loop that
//! walks the buffer needs a hard bound. Keeping the values here:
//! - Prevents duplicate definitions with inconsistent values
//! - Makes it easy to tune limits for large buffers
//! - Documents the rationale for each limit
//!
//! # Categories
//!
//! - **Scan Limits**: Bounds on leftward token scanning during context resolution
//! - **Capacity Limits**: Pre-allocation sizes and maximum collection sizes
//! - **Edit Limits**: Defaults for buffer replacement

// =============================================================================
// Scan Limits (Context Resolver)
// =============================================================================

/// Maximum number of tokens the context resolver visits while walking left.
///
/// Covers both the `.`-chain walk and the balanced-parenthesis skip over call
/// arguments. When the budget runs out the resolver stops and hands back the
/// chain it has built so far.
///
/// # JavaScript example
///
/// ```javascript
/// // Unterminated call: the resolver never finds the matching `(`.
/// foo(a, b, c /* ... thousands of tokens ... */ ).bar.
///
/// // Very long argument list that is balanced but huge.
/// build(1, 2, 3, /* ... */ 9999).result.
/// ```
pub const MAX_CONTEXT_SCAN_TOKENS: u32 = 4_096;

/// Maximum number of segments in a context chain.
///
/// A property path deeper than this is almost certainly not typed by hand;
/// the resolver stops prepending and keeps what it has.
///
/// # JavaScript example
///
/// ```javascript
/// a.b.c.d.e.f.g.h.i.j.k.l.m.n.o.p /* ... hundreds of levels ... */.
/// ```
pub const MAX_CONTEXT_CHAIN_LENGTH: usize = 64;

/// Maximum parenthesis nesting tracked while skipping call arguments.
///
/// Exceeding it is treated the same as an unbalanced run.
pub const MAX_PAREN_SKIP_DEPTH: u32 = 256;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for context chains before they spill to the heap.
///
/// Most chains are `foo.` or `foo.bar.`, so four segments (including the
/// partial token) cover nearly every request without allocating.
pub const CONTEXT_CHAIN_INLINE: usize = 4;

/// Maximum number of candidates a single gather pass returns.
///
/// Enumerating a huge injected object (for example a global namespace with
/// tens of thousands of keys) would otherwise stall typing.
pub const MAX_CANDIDATES: usize = 10_000;

// =============================================================================
// Edit Limits
// =============================================================================

/// Default width of a session's replacement range, in columns.
///
/// The range is deliberately generous: commit only consumes the identifier
/// run actually present at the range start, never the whole width.
pub const DEFAULT_MAX_REPLACE_LENGTH: u32 = 1_000;
