//! Step rules
//!
//! A step rule advances a position in place and so defines what "next"
//! means for a [`Sequence`](crate::Sequence). Rules are owned by value:
//! every iterator carries its own clone, so cloning a rule that captures
//! mutable state duplicates that state.

use std::ops::{AddAssign, SubAssign};

use num_traits::One;

/// Advance a position of type `T` in place.
///
/// Implemented for every `FnMut(&mut T)` closure, so most callers never
/// name this trait:
///
/// ```
/// use lazyseq::Sequence;
///
/// let powers: Vec<u32> = Sequence::with_step(1, 16, |v: &mut u32| *v *= 2).iter().collect();
/// assert_eq!(powers, vec![1, 2, 4, 8]);
/// ```
pub trait StepRule<T> {
    /// Move `value` to its successor under this rule.
    fn step(&mut self, value: &mut T);
}

impl<T, F> StepRule<T> for F
where
    F: FnMut(&mut T),
{
    fn step(&mut self, value: &mut T) {
        self(value)
    }
}

/// Default step rule: `value += 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Successor;

impl<T> StepRule<T> for Successor
where
    T: AddAssign + One,
{
    fn step(&mut self, value: &mut T) {
        increment(value);
    }
}

/// Decrementing step rule: `value -= 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Predecessor;

impl<T> StepRule<T> for Predecessor
where
    T: SubAssign + One,
{
    fn step(&mut self, value: &mut T) {
        decrement(value);
    }
}

/// Add one to `value` in place.
pub fn increment<T: AddAssign + One>(value: &mut T) {
    *value += T::one();
}

/// Subtract one from `value` in place.
pub fn decrement<T: SubAssign + One>(value: &mut T) {
    *value -= T::one();
}
