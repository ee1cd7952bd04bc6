//! Generator-driven sequences
//!
//! A [`GenerativeSequence`] yields `max` successive outputs of a
//! zero-argument generator. It is bounded by an iteration count, not by
//! comparing values: `begin()` is a value-mode [`GenerativeIterator`] and
//! `end()` is a sentinel holding `max`.
//!
//! The range keeps a canonical generator and never invokes it directly.
//! Each `begin()` clones it, so two traversals start from the same
//! captured state and run independently.

mod iterator;

pub use iterator::GenerativeIterator;

use std::fmt;

use thiserror::Error;

use crate::cursor::{CursorRange, Walk};

/// Misuse of a [`GenerativeIterator`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerativeError {
    /// A sentinel holds no value to read.
    #[error("cannot dereference a sentinel generative iterator")]
    SentinelDereference,

    /// A sentinel holds no generator to invoke.
    #[error("cannot advance a sentinel generative iterator")]
    SentinelAdvance,

    /// Only a value-mode cursor compared against a sentinel is defined.
    #[error("unsupported comparison of a {lhs}-mode iterator against a {rhs}-mode iterator")]
    UnsupportedComparison {
        /// Mode of the left operand.
        lhs: &'static str,
        /// Mode of the right operand.
        rhs: &'static str,
    },
}

/// Range over the first `max` outputs of a generator.
///
/// ```
/// use lazyseq::GenerativeSequence;
///
/// let mut n = 0;
/// let squares = GenerativeSequence::new(4, move || {
///     n += 1;
///     n * n
/// });
/// assert_eq!(squares.iter().collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// ```
#[derive(Clone)]
pub struct GenerativeSequence<T, G> {
    generator: G,
    max: usize,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T, G> GenerativeSequence<T, G>
where
    G: FnMut() -> T,
{
    /// Range over `max` outputs of `generator`.
    pub fn new(max: usize, generator: G) -> Self {
        Self {
            generator,
            max,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, G> GenerativeSequence<T, G> {
    /// Number of elements a full traversal yields.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Fresh sentinel holding `max`.
    pub fn end(&self) -> GenerativeIterator<T, G> {
        GenerativeIterator::sentinel(self.max)
    }

    /// Same as [`end`](Self::end).
    pub fn cend(&self) -> GenerativeIterator<T, G> {
        self.end()
    }

    /// True when a traversal yields nothing. Does not invoke the generator.
    pub fn is_empty(&self) -> bool {
        self.max == 0
    }
}

impl<T, G> GenerativeSequence<T, G>
where
    G: FnMut() -> T + Clone,
{
    /// Fresh value-mode iterator.
    ///
    /// Invokes a clone of the generator once, so every call starts a new,
    /// independent stream.
    pub fn begin(&self) -> GenerativeIterator<T, G> {
        GenerativeIterator::new(self.generator.clone())
    }

    /// Same as [`begin`](Self::begin).
    pub fn cbegin(&self) -> GenerativeIterator<T, G> {
        self.begin()
    }

    /// Lazily yield exactly `max` generated values.
    pub fn iter(&self) -> Walk<GenerativeIterator<T, G>>
    where
        T: Clone,
    {
        Walk::new(self.begin(), self.end())
    }
}

impl<T, G> CursorRange for GenerativeSequence<T, G>
where
    G: FnMut() -> T + Clone,
{
    type Cursor = GenerativeIterator<T, G>;

    fn begin(&self) -> Self::Cursor {
        GenerativeSequence::begin(self)
    }

    fn end(&self) -> Self::Cursor {
        GenerativeSequence::end(self)
    }

    fn is_empty(&self) -> bool {
        GenerativeSequence::is_empty(self)
    }
}

impl<T, G> IntoIterator for GenerativeSequence<T, G>
where
    T: Clone,
    G: FnMut() -> T,
{
    type Item = T;
    type IntoIter = Walk<GenerativeIterator<T, G>>;

    fn into_iter(self) -> Self::IntoIter {
        let end = GenerativeIterator::sentinel(self.max);
        Walk::new(GenerativeIterator::new(self.generator), end)
    }
}

impl<'a, T, G> IntoIterator for &'a GenerativeSequence<T, G>
where
    T: Clone,
    G: FnMut() -> T + Clone,
{
    type Item = T;
    type IntoIter = Walk<GenerativeIterator<T, G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, G> fmt::Debug for GenerativeSequence<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerativeSequence")
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
