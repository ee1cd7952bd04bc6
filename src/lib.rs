//! # Range-style lazy sequences
//!
//! This library offers begin/end iteration over two kinds of sequences
//! that are never materialized:
//!
//! 1. **Stepped progressions** ([`Sequence`]): `[begin, end)` where "next"
//!    is any caller-supplied [`StepRule`] (successor, doubling, ...)
//! 2. **Generated sequences** ([`GenerativeSequence`]): the first `max`
//!    outputs of a stateful zero-argument generator
//!
//! Both hand out cursors following the same protocol ([`Cursor`]):
//! compare begin against end, read begin, advance begin. Both also work as
//! plain Rust iterators.
//!
//! ## Usage Example
//!
//! ```
//! use lazyseq::{GenerativeSequence, Sequence};
//!
//! let powers: Vec<u32> = Sequence::with_step(1, 16, |v: &mut u32| *v *= 2).iter().collect();
//! assert_eq!(powers, vec![1, 2, 4, 8]);
//!
//! let mut next = 0;
//! let counted = GenerativeSequence::new(3, move || {
//!     next += 1;
//!     next - 1
//! });
//! assert_eq!(counted.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```
//!
//! ## Termination
//!
//! A [`Sequence`] ends when stepping lands exactly on `end`. A rule that
//! skips over `end` loops forever; [`Sequence::checked_iter`] with a
//! [`TraversalConfig`] step budget turns that into an error instead.

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod step;       // Step rules (successor, predecessor, closures)
pub mod cursor;     // Begin/end cursor protocol
pub mod sequence;   // Stepped progressions
pub mod generative; // Generator-driven sequences
pub mod config;     // Traversal configuration
pub mod algorithm;  // Single-pass helpers
pub mod ranges;     // Whole-range algorithms over cursor ranges

// Re-exports for convenience
pub use config::TraversalConfig;
pub use cursor::{Cursor, CursorRange, Walk};
pub use generative::{GenerativeError, GenerativeIterator, GenerativeSequence};
pub use sequence::{CheckedIter, Sequence, SequenceError, SequenceIterator};
pub use step::{Predecessor, StepRule, Successor};

/// Errors that can occur anywhere in the crate
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Budgeted traversal of a stepped sequence failed
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// A generative iterator was used outside its mode
    #[error(transparent)]
    Generative(#[from] GenerativeError),
}

/// Result alias using the crate-wide [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
