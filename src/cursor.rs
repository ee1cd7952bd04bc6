//! Cursor protocol
//!
//! The pull-based begin/end protocol shared by both sequence kinds:
//! compare begin against end, read begin, advance begin, repeat. "End"
//! never holds live data, only a termination criterion.

use std::iter::FusedIterator;

/// A position within a lazy sequence.
pub trait Cursor: Sized {
    /// Element type produced by this cursor.
    type Item;

    /// Read the current element without advancing.
    fn current(&self) -> &Self::Item;

    /// Move to the next element in place.
    fn advance(&mut self);

    /// Termination test against an end cursor.
    fn equals(&self, end: &Self) -> bool;

    /// Ordering test against an end cursor.
    fn less_than(&self, end: &Self) -> bool;

    /// Post-increment: return the cursor as it was, then advance.
    fn advance_copy(&mut self) -> Self
    where
        Self: Clone,
    {
        let prior = self.clone();
        self.advance();
        prior
    }

    /// Number of elements left before reaching `end`, when known.
    fn remaining(&self, _end: &Self) -> Option<usize> {
        None
    }
}

/// Something that can hand out a fresh begin/end cursor pair.
pub trait CursorRange {
    /// Cursor type produced by [`begin`](Self::begin) and [`end`](Self::end).
    type Cursor: Cursor;

    /// Fresh cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// Fresh end cursor.
    fn end(&self) -> Self::Cursor;

    /// True when a fresh begin cursor already equals the end cursor.
    fn is_empty(&self) -> bool {
        self.begin().equals(&self.end())
    }

    /// Drive the range through [`Walk`].
    fn walk(&self) -> Walk<Self::Cursor> {
        Walk::new(self.begin(), self.end())
    }
}

/// Adapts a begin/end cursor pair into an [`Iterator`].
///
/// Each call to `next` checks `begin` against `end`, clones the current
/// element and then advances, exactly like a hand-written cursor loop.
#[derive(Debug, Clone)]
pub struct Walk<C> {
    begin: C,
    end: C,
    done: bool,
}

impl<C: Cursor> Walk<C> {
    /// Walk from `begin` until it equals `end`.
    pub fn new(begin: C, end: C) -> Self {
        Self {
            begin,
            end,
            done: false,
        }
    }

    /// Cursor the walk will read next.
    pub fn position(&self) -> &C {
        &self.begin
    }
}

impl<C> Iterator for Walk<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.begin.equals(&self.end) {
            self.done = true;
            return None;
        }
        let item = self.begin.current().clone();
        self.begin.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.begin.remaining(&self.end) {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<C> FusedIterator for Walk<C>
where
    C: Cursor,
    C::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal countdown cursor used to exercise the default methods.
    #[derive(Debug, Clone)]
    struct Countdown(u8);

    impl Cursor for Countdown {
        type Item = u8;

        fn current(&self) -> &u8 {
            &self.0
        }

        fn advance(&mut self) {
            self.0 -= 1;
        }

        fn equals(&self, end: &Self) -> bool {
            self.0 == end.0
        }

        fn less_than(&self, end: &Self) -> bool {
            self.0 < end.0
        }
    }

    struct Countdowns(u8);

    impl CursorRange for Countdowns {
        type Cursor = Countdown;

        fn begin(&self) -> Countdown {
            Countdown(self.0)
        }

        fn end(&self) -> Countdown {
            Countdown(0)
        }
    }

    #[test]
    fn test_walk_and_defaults() {
        let range = Countdowns(3);
        assert!(!range.is_empty());
        assert!(Countdowns(0).is_empty());

        let items: Vec<u8> = range.walk().collect();
        assert_eq!(items, vec![3, 2, 1]);

        let mut walk = range.walk();
        assert_eq!(*walk.position().current(), 3);
        walk.next();
        assert_eq!(*walk.position().current(), 2);
        assert_eq!(walk.by_ref().count(), 2);
        assert_eq!(*walk.position().current(), 0);
        assert_eq!(range.walk().size_hint(), (0, None));

        let mut cursor = range.begin();
        let prior = cursor.advance_copy();
        assert_eq!(*prior.current(), 3);
        assert_eq!(*cursor.current(), 2);
    }
}
