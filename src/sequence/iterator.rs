//! Position iterator
//!
//! Holds the current position and an owned copy of the step rule.
//! Identity is the position alone: the rule never takes part in
//! comparisons.

use std::cmp::Ordering;

use crate::cursor::Cursor;
use crate::step::{StepRule, Successor};

/// Cursor over a stepped progression.
///
/// There is deliberately no `Default`: a position iterator always starts
/// from an explicit value. Cloning clones the step rule too, so any state
/// the rule captures evolves independently in each copy.
#[derive(Debug, Clone)]
pub struct SequenceIterator<T, S = Successor> {
    value: T,
    step: S,
}

impl<T> SequenceIterator<T, Successor> {
    /// Start at `value`, stepping with [`Successor`].
    pub fn new(value: T) -> Self {
        Self::with_step(value, Successor)
    }
}

impl<T, S> SequenceIterator<T, S> {
    /// Start at `value`, stepping with `step`.
    pub fn with_step(value: T, step: S) -> Self {
        Self { value, step }
    }

    /// Current position. Never invokes the step rule.
    pub fn current(&self) -> &T {
        &self.value
    }

    /// Consume the iterator, returning the current position.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T, S: StepRule<T>> SequenceIterator<T, S> {
    /// Apply the step rule to the current position in place.
    ///
    /// A panicking rule propagates to the caller untouched.
    pub fn advance(&mut self) -> &mut Self {
        self.step.step(&mut self.value);
        self
    }

    /// Post-increment: a copy of `self` from before the advance.
    pub fn advance_copy(&mut self) -> Self
    where
        T: Clone,
        S: Clone,
    {
        let prior = self.clone();
        self.advance();
        prior
    }
}

impl<T: PartialEq, S> PartialEq for SequenceIterator<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, S> Eq for SequenceIterator<T, S> {}

impl<T: PartialOrd, S> PartialOrd for SequenceIterator<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T, S> Cursor for SequenceIterator<T, S>
where
    T: PartialOrd,
    S: StepRule<T>,
{
    type Item = T;

    fn current(&self) -> &T {
        &self.value
    }

    fn advance(&mut self) {
        self.step.step(&mut self.value);
    }

    fn equals(&self, end: &Self) -> bool {
        self == end
    }

    fn less_than(&self, end: &Self) -> bool {
        self < end
    }
}
