//! Budgeted traversal
//!
//! Equality-based termination never ends if the step rule skips over the
//! end value. A [`CheckedIter`] walks the same cursors but stops with
//! [`SequenceError::StepBudgetExhausted`] once the configured budget runs
//! out. A zero budget is a configuration error: the walk reports
//! [`SequenceError::InvalidBudget`] before looking at any element.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::{SequenceError, SequenceIterator};
use crate::config::TraversalConfig;
use crate::step::StepRule;

/// Iterator yielding `Ok(value)` per element, or one terminal error.
#[derive(Debug, Clone)]
pub struct CheckedIter<T, S> {
    begin: SequenceIterator<T, S>,
    end: SequenceIterator<T, S>,
    budget: Option<usize>,
    trace_steps: bool,
    taken: usize,
    invalid: Option<SequenceError>,
    done: bool,
}

impl<T, S> CheckedIter<T, S> {
    pub(super) fn new(
        begin: SequenceIterator<T, S>,
        end: SequenceIterator<T, S>,
        config: &TraversalConfig,
    ) -> Self {
        Self {
            begin,
            end,
            budget: config.step_budget,
            trace_steps: config.trace_steps,
            taken: 0,
            invalid: config.validate().err(),
            done: false,
        }
    }

    /// Number of elements yielded so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl<T, S> Iterator for CheckedIter<T, S>
where
    T: Clone + PartialEq,
    S: StepRule<T>,
{
    type Item = Result<T, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(err) = self.invalid.take() {
            self.done = true;
            return Some(Err(err));
        }
        if self.begin == self.end {
            self.done = true;
            return None;
        }
        if let Some(budget) = self.budget {
            if self.taken >= budget {
                debug!(budget, "stepped walk gave up before reaching end");
                self.done = true;
                return Some(Err(SequenceError::StepBudgetExhausted { budget }));
            }
        }

        let item = self.begin.current().clone();
        self.begin.advance();
        self.taken += 1;
        if self.trace_steps {
            trace!(step = self.taken, "advanced stepped cursor");
        }
        Some(Ok(item))
    }
}

impl<T, S> FusedIterator for CheckedIter<T, S>
where
    T: Clone + PartialEq,
    S: StepRule<T>,
{
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use crate::{Sequence, SequenceError, TraversalConfig};

    #[test]
    fn test_zero_budget_fails_before_any_element() {
        let config = TraversalConfig::default().with_step_budget(0);
        for seq in [Sequence::new(0, 2), Sequence::new(0, 0)] {
            let items: Vec<_> = seq.checked_iter(&config).collect();
            assert_eq!(items, vec![Err(SequenceError::InvalidBudget)]);
            assert_eq!(seq.step_count(&config), Err(SequenceError::InvalidBudget));
        }
    }

    #[test]
    fn test_traced_walk_yields_same_values() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .finish();
        let config = TraversalConfig::default().with_trace_steps(true);

        let values: Result<Vec<_>, _> = tracing::subscriber::with_default(subscriber, || {
            Sequence::new(2u8, 5).checked_iter(&config).collect()
        });
        assert_eq!(values, Ok(vec![2, 3, 4]));
    }

    #[test]
    fn test_overshooting_rule_is_caught() {
        // 0, 3, 6, 9, ... never equals 10
        let seq = Sequence::with_step(0, 10, |v: &mut i32| *v += 3);
        let config = TraversalConfig::default().with_step_budget(5);

        let items: Vec<_> = seq.checked_iter(&config).collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[4], Ok(12));
        assert_eq!(
            items[5],
            Err(SequenceError::StepBudgetExhausted { budget: 5 })
        );
    }

    #[test]
    fn test_budget_exactly_sufficient() {
        let seq = Sequence::new(0, 3);
        let config = TraversalConfig::default().with_step_budget(3);
        let mut iter = seq.checked_iter(&config);
        let values: Result<Vec<_>, _> = iter.by_ref().collect();
        assert_eq!(values, Ok(vec![0, 1, 2]));
        assert_eq!(iter.taken(), 3);
        assert!(iter.next().is_none());
    }
}
