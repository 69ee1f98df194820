//! Stack safety for recursive rule evaluation.
//!
//! Two independent guards:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so deep
//!   but legitimate derivations do not overflow.
//! - [`DepthBudget`] caps nesting outright, so adversarial input or a
//!   malformed grammar ends in an error instead of exhausting memory.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack in 1 MiB segments
//!   whenever less than 100 KiB remains.
//! - **WASM targets**: passthrough; the depth budget still applies.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// ```text
/// fn eval_rule(&mut self, rule: NonTerminal, at: Cursor) -> Result<Outcome, Error> {
///     ensure_sufficient_stack(|| self.eval_alternatives(rule, at))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Nesting went past the configured ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("recursion depth limit of {limit} exceeded")]
pub struct DepthExceeded {
    pub limit: usize,
}

/// Counts active recursion levels against a fixed ceiling.
///
/// Callers pair every successful [`descend`](Self::descend) with one
/// [`ascend`](Self::ascend). A failed `descend` does not count a level.
#[derive(Clone, Copy, Debug)]
pub struct DepthBudget {
    depth: usize,
    limit: usize,
}

impl DepthBudget {
    pub fn new(limit: usize) -> Self {
        DepthBudget { depth: 0, limit }
    }

    /// Enter one level, failing if that would pass the limit.
    #[inline]
    pub fn descend(&mut self) -> Result<(), DepthExceeded> {
        if self.depth >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one level.
    #[inline]
    pub fn ascend(&mut self) {
        debug_assert!(self.depth > 0, "ascend without matching descend");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Currently active levels.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
