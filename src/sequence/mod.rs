//! Stepped progressions
//!
//! A [`Sequence`] is the range `[begin, end)` under a caller-supplied step
//! rule. Nothing is materialized: every call to [`Sequence::begin`] or
//! [`Sequence::end`] builds a fresh [`SequenceIterator`] carrying its own
//! copy of the rule.
//!
//! Iteration stops when stepping lands *exactly* on `end`. A rule that
//! jumps over `end` never terminates; use [`Sequence::checked_iter`] when
//! that is a possibility.

mod checked;
mod iterator;

pub use checked::CheckedIter;
pub use iterator::SequenceIterator;

use thiserror::Error;

use crate::config::TraversalConfig;
use crate::cursor::{CursorRange, Walk};
use crate::step::{StepRule, Successor};

/// Errors raised by budgeted traversal of a [`Sequence`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The end value was not reached within the configured number of steps.
    #[error("end value not reached within {budget} steps")]
    StepBudgetExhausted {
        /// Number of steps that were allowed.
        budget: usize,
    },

    /// A step budget of zero can never make progress.
    #[error("step budget must be greater than zero")]
    InvalidBudget,
}

/// Range over a stepped progression `[begin, end)`.
#[derive(Debug, Clone)]
pub struct Sequence<T, S = Successor> {
    begin: T,
    end: T,
    step: S,
}

impl<T> Sequence<T, Successor> {
    /// Range `[begin, end)` stepping with [`Successor`].
    ///
    /// ```
    /// use lazyseq::Sequence;
    ///
    /// let values: Vec<i32> = Sequence::new(0, 5).iter().collect();
    /// assert_eq!(values, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn new(begin: T, end: T) -> Self {
        Self::with_step(begin, end, Successor)
    }
}

impl<T, S> Sequence<T, S> {
    /// Range `[begin, end)` stepping with `step`.
    pub fn with_step(begin: T, end: T, step: S) -> Self {
        Self { begin, end, step }
    }

    /// Stored begin value.
    pub fn begin_value(&self) -> &T {
        &self.begin
    }

    /// Stored end value.
    pub fn end_value(&self) -> &T {
        &self.end
    }

    /// Canonical step rule.
    pub fn step_rule(&self) -> &S {
        &self.step
    }
}

impl<T: Clone, S: Clone> Sequence<T, S> {
    /// Fresh iterator at the begin value.
    pub fn begin(&self) -> SequenceIterator<T, S> {
        SequenceIterator::with_step(self.begin.clone(), self.step.clone())
    }

    /// Fresh iterator at the end value.
    pub fn end(&self) -> SequenceIterator<T, S> {
        SequenceIterator::with_step(self.end.clone(), self.step.clone())
    }

    /// Same as [`begin`](Self::begin).
    pub fn cbegin(&self) -> SequenceIterator<T, S> {
        self.begin()
    }

    /// Same as [`end`](Self::end).
    pub fn cend(&self) -> SequenceIterator<T, S> {
        self.end()
    }
}

impl<T, S> Sequence<T, S>
where
    T: Clone + PartialOrd,
    S: StepRule<T> + Clone,
{
    /// True when a fresh begin iterator equals a fresh end iterator.
    pub fn is_empty(&self) -> bool {
        self.begin() == self.end()
    }

    /// Lazily yield `begin`, `step(begin)`, ... up to but excluding `end`.
    pub fn iter(&self) -> Walk<SequenceIterator<T, S>> {
        Walk::new(self.begin(), self.end())
    }

    /// Like [`iter`](Self::iter), but gives up after the configured step
    /// budget instead of looping forever.
    ///
    /// A budget of zero is rejected: the walk yields a single
    /// `Err(SequenceError::InvalidBudget)`, even for an empty range.
    pub fn checked_iter(&self, config: &TraversalConfig) -> CheckedIter<T, S> {
        CheckedIter::new(self.begin(), self.end(), config)
    }

    /// Number of steps from begin to end, bounded by the step budget.
    pub fn step_count(&self, config: &TraversalConfig) -> Result<usize, SequenceError> {
        let mut steps = 0;
        for item in self.checked_iter(config) {
            item?;
            steps += 1;
        }
        Ok(steps)
    }
}

impl<T, S> CursorRange for Sequence<T, S>
where
    T: Clone + PartialOrd,
    S: StepRule<T> + Clone,
{
    type Cursor = SequenceIterator<T, S>;

    fn begin(&self) -> Self::Cursor {
        Sequence::begin(self)
    }

    fn end(&self) -> Self::Cursor {
        Sequence::end(self)
    }
}

impl<T, S> IntoIterator for Sequence<T, S>
where
    T: Clone + PartialOrd,
    S: StepRule<T> + Clone,
{
    type Item = T;
    type IntoIter = Walk<SequenceIterator<T, S>>;

    fn into_iter(self) -> Self::IntoIter {
        let end = SequenceIterator::with_step(self.end, self.step.clone());
        Walk::new(SequenceIterator::with_step(self.begin, self.step), end)
    }
}

impl<'a, T, S> IntoIterator for &'a Sequence<T, S>
where
    T: Clone + PartialOrd,
    S: StepRule<T> + Clone,
{
    type Item = T;
    type IntoIter = Walk<SequenceIterator<T, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
