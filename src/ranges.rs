//! Whole-range algorithms
//!
//! Each helper takes a [`CursorRange`] and drives its begin/end cursors
//! directly, so callers never handle the cursor pair themselves.

use crate::cursor::{Cursor, CursorRange};

type Item<R> = <<R as CursorRange>::Cursor as Cursor>::Item;

/// True if `pred` holds for every element (vacuously true when empty).
pub fn all_of<R, P>(range: &R, mut pred: P) -> bool
where
    R: CursorRange,
    P: FnMut(&Item<R>) -> bool,
{
    !any_of(range, |item| !pred(item))
}

/// True if `pred` holds for at least one element.
pub fn any_of<R, P>(range: &R, mut pred: P) -> bool
where
    R: CursorRange,
    P: FnMut(&Item<R>) -> bool,
{
    let mut cursor = range.begin();
    let end = range.end();
    while !cursor.equals(&end) {
        if pred(cursor.current()) {
            return true;
        }
        cursor.advance();
    }
    false
}

/// True if `pred` holds for no element.
pub fn none_of<R, P>(range: &R, pred: P) -> bool
where
    R: CursorRange,
    P: FnMut(&Item<R>) -> bool,
{
    !any_of(range, pred)
}

/// Call `func` on every element and hand the closure back.
pub fn for_each<R, F>(range: &R, func: F) -> F
where
    R: CursorRange,
    F: FnMut(&Item<R>),
{
    for_each_n(range, usize::MAX, func)
}

/// Call `func` on at most `n` leading elements and hand the closure back.
pub fn for_each_n<R, F>(range: &R, n: usize, mut func: F) -> F
where
    R: CursorRange,
    F: FnMut(&Item<R>),
{
    let mut cursor = range.begin();
    let end = range.end();
    let mut calls = 0;
    while calls != n && !cursor.equals(&end) {
        func(cursor.current());
        cursor.advance();
        calls += 1;
    }
    func
}

/// Number of elements equal to `value`.
pub fn count<R>(range: &R, value: &Item<R>) -> usize
where
    R: CursorRange,
    Item<R>: PartialEq,
{
    count_if(range, |item| item == value)
}

/// Number of elements for which `pred` holds.
pub fn count_if<R, P>(range: &R, mut pred: P) -> usize
where
    R: CursorRange,
    P: FnMut(&Item<R>) -> bool,
{
    let mut total = 0;
    let _ = for_each(range, |item| {
        if pred(item) {
            total += 1;
        }
    });
    total
}

/// Materialize every element.
pub fn collect<R>(range: &R) -> Vec<Item<R>>
where
    R: CursorRange,
    Item<R>: Clone,
{
    let mut out = Vec::new();
    let _ = for_each(range, |item| out.push(item.clone()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenerativeSequence, Sequence};

    #[test]
    fn test_predicates() {
        let seq = Sequence::new(0, 10);
        assert!(all_of(&seq, |v| *v < 10));
        assert!(any_of(&seq, |v| *v == 9));
        assert!(none_of(&seq, |v| *v < 0));
        assert!(all_of(&Sequence::new(4, 4), |_| false));
    }

    #[test]
    fn test_counting() {
        let mut flip = false;
        let alternating = GenerativeSequence::new(7, move || {
            flip = !flip;
            flip
        });
        assert_eq!(count(&alternating, &true), 4);
        assert_eq!(count_if(&alternating, |v| !*v), 3);
    }

    #[test]
    fn test_for_each_returns_closure_state() {
        let mut sum = 0;
        let _ = for_each(&Sequence::new(1, 5), |v| sum += v);
        assert_eq!(sum, 10);

        let mut seen = Vec::new();
        let _ = for_each_n(&Sequence::new(0, 100), 3, |v| seen.push(*v));
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(collect(&Sequence::new(7, 9)), vec![7, 8]);
    }
}
