//! Generative iterator
//!
//! Two disjoint modes fixed at construction:
//! - value mode: owns a generator and the last value it produced, plus a
//!   count of how many times it has been advanced
//! - sentinel mode: holds nothing but a limit
//!
//! Termination compares a value-mode cursor's count against a sentinel's
//! limit. That relation is asymmetric, so it is exposed through
//! [`GenerativeIterator::equals`] and [`GenerativeIterator::less_than`]
//! instead of `PartialEq<Self>`.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use super::GenerativeError;
use crate::cursor::Cursor;

#[derive(Clone)]
enum Mode<T, G> {
    Value { generator: G, value: T, count: usize },
    Sentinel { limit: usize },
}

/// Cursor over the outputs of a zero-argument generator.
///
/// Cloning a value-mode iterator clones its generator: the copy continues
/// from the captured state at the time of the clone and evolves on its own
/// from then on. Only state the generator reaches through a shared handle
/// (`Rc<Cell<_>>`, a borrowed `Cell`, ...) is observed by both.
#[derive(Clone)]
pub struct GenerativeIterator<T, G> {
    mode: Mode<T, G>,
}

impl<T, G> GenerativeIterator<T, G>
where
    G: FnMut() -> T,
{
    /// Value mode: invoke `generator` once for the first element, count 0.
    pub fn new(mut generator: G) -> Self {
        let value = generator();
        trace!("seeded generative cursor");
        Self {
            mode: Mode::Value {
                generator,
                value,
                count: 0,
            },
        }
    }

    /// Invoke the generator, replace the current value and bump the count.
    ///
    /// # Panics
    ///
    /// Panics on a sentinel-mode iterator.
    pub fn advance(&mut self) -> &mut Self {
        match self.try_advance() {
            Ok(this) => this,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked form of [`advance`](Self::advance).
    pub fn try_advance(&mut self) -> Result<&mut Self, GenerativeError> {
        match &mut self.mode {
            Mode::Value {
                generator,
                value,
                count,
            } => {
                *value = generator();
                *count += 1;
                Ok(self)
            }
            Mode::Sentinel { .. } => Err(GenerativeError::SentinelAdvance),
        }
    }

    /// Post-increment: a copy of `self` from before the advance.
    ///
    /// # Panics
    ///
    /// Panics on a sentinel-mode iterator.
    pub fn advance_copy(&mut self) -> Self
    where
        T: Clone,
        G: Clone,
    {
        let prior = self.clone();
        self.advance();
        prior
    }
}

impl<T, G> GenerativeIterator<T, G> {
    /// Sentinel mode: a termination bound of `limit` advances.
    pub fn sentinel(limit: usize) -> Self {
        Self {
            mode: Mode::Sentinel { limit },
        }
    }

    /// True for a sentinel-mode iterator.
    pub fn is_sentinel(&self) -> bool {
        matches!(self.mode, Mode::Sentinel { .. })
    }

    /// Last produced value. Never invokes the generator.
    ///
    /// # Panics
    ///
    /// Panics on a sentinel-mode iterator, which holds no value.
    pub fn current(&self) -> &T {
        match self.try_current() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked form of [`current`](Self::current).
    pub fn try_current(&self) -> Result<&T, GenerativeError> {
        match &self.mode {
            Mode::Value { value, .. } => Ok(value),
            Mode::Sentinel { .. } => Err(GenerativeError::SentinelDereference),
        }
    }

    /// Number of advances so far. A sentinel reports 0.
    pub fn count(&self) -> usize {
        match self.mode {
            Mode::Value { count, .. } => count,
            Mode::Sentinel { .. } => 0,
        }
    }

    /// Termination bound. A value-mode iterator reports 0.
    pub fn limit(&self) -> usize {
        match self.mode {
            Mode::Value { .. } => 0,
            Mode::Sentinel { limit } => limit,
        }
    }

    /// Compare this cursor's count against `end`'s limit.
    ///
    /// Only a value-mode `self` against a sentinel-mode `end` is meaningful.
    pub fn try_cmp_end(&self, end: &Self) -> Result<Ordering, GenerativeError> {
        match (&self.mode, &end.mode) {
            (Mode::Value { count, .. }, Mode::Sentinel { limit }) => Ok(count.cmp(limit)),
            _ => Err(GenerativeError::UnsupportedComparison {
                lhs: self.mode_name(),
                rhs: end.mode_name(),
            }),
        }
    }

    /// `self.count == end.limit`.
    ///
    /// # Panics
    ///
    /// Panics unless `self` is in value mode and `end` is a sentinel.
    pub fn equals(&self, end: &Self) -> bool {
        self.expect_cmp_end(end) == Ordering::Equal
    }

    /// `self.count < end.limit`.
    ///
    /// # Panics
    ///
    /// Panics unless `self` is in value mode and `end` is a sentinel.
    pub fn less_than(&self, end: &Self) -> bool {
        self.expect_cmp_end(end) == Ordering::Less
    }

    fn expect_cmp_end(&self, end: &Self) -> Ordering {
        match self.try_cmp_end(end) {
            Ok(ordering) => ordering,
            Err(err) => panic!("{err}"),
        }
    }

    fn mode_name(&self) -> &'static str {
        match self.mode {
            Mode::Value { .. } => "value",
            Mode::Sentinel { .. } => "sentinel",
        }
    }
}

impl<T: fmt::Debug, G> fmt::Debug for GenerativeIterator<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            Mode::Value { value, count, .. } => f
                .debug_struct("GenerativeIterator")
                .field("value", value)
                .field("count", count)
                .finish_non_exhaustive(),
            Mode::Sentinel { limit } => f
                .debug_struct("GenerativeIterator")
                .field("limit", limit)
                .finish(),
        }
    }
}

/// Compare the iteration count directly against a plain bound.
impl<T, G> PartialEq<usize> for GenerativeIterator<T, G> {
    fn eq(&self, bound: &usize) -> bool {
        self.count() == *bound
    }
}

impl<T, G> PartialOrd<usize> for GenerativeIterator<T, G> {
    fn partial_cmp(&self, bound: &usize) -> Option<Ordering> {
        Some(self.count().cmp(bound))
    }
}

impl<T, G> Cursor for GenerativeIterator<T, G>
where
    G: FnMut() -> T,
{
    type Item = T;

    fn current(&self) -> &T {
        GenerativeIterator::current(self)
    }

    fn advance(&mut self) {
        GenerativeIterator::advance(self);
    }

    fn equals(&self, end: &Self) -> bool {
        GenerativeIterator::equals(self, end)
    }

    fn less_than(&self, end: &Self) -> bool {
        GenerativeIterator::less_than(self, end)
    }

    fn remaining(&self, end: &Self) -> Option<usize> {
        match self.try_cmp_end(end) {
            Ok(_) => Some(end.limit().saturating_sub(self.count())),
            Err(_) => None,
        }
    }
}
