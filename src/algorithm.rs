//! Traversal helpers over lazy sequences
//!
//! Small algorithms that only need a single forward pass, so they work
//! unchanged on [`Sequence`](crate::Sequence) and
//! [`GenerativeSequence`](crate::GenerativeSequence) iterators.

/// Last element of a finite sequence, or `None` if it is empty.
pub fn last<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().last()
}

/// Call `func(previous, next)` for every adjacent pair.
///
/// `[1, 2, 3]` produces `func(1, 2)` then `func(2, 3)`.
pub fn for_each_adjacent<I, F>(iter: I, func: F)
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item),
{
    for_each_adjacent_n(iter, usize::MAX, func);
}

/// Like [`for_each_adjacent`], but makes at most `n` calls.
pub fn for_each_adjacent_n<I, F>(iter: I, n: usize, mut func: F)
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item),
{
    let mut iter = iter.into_iter();
    let Some(mut follower) = iter.next() else {
        return;
    };
    for leader in iter.take(n) {
        func(follower, leader.clone());
        follower = leader;
    }
}

/// Transform only the elements accepted by `pred`.
pub fn transform_if<I, P, F, U>(iter: I, mut pred: P, func: F) -> Vec<U>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> U,
{
    iter.into_iter().filter(|item| pred(item)).map(func).collect()
}

/// True if any element equals `value`.
pub fn contains<I>(iter: I, value: &I::Item) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    iter.into_iter().any(|item| item == *value)
}
