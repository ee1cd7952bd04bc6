//! Traversal configuration
//!
//! Controls budgeted walks over stepped sequences. The default is the
//! unguarded behaviour: no step budget and no per-step tracing.

use std::env;

use crate::sequence::SequenceError;

/// Environment variable holding a step budget.
pub const STEP_BUDGET_ENV: &str = "LAZYSEQ_STEP_BUDGET";

/// Environment variable enabling per-step trace events.
pub const TRACE_STEPS_ENV: &str = "LAZYSEQ_TRACE_STEPS";

/// Configuration parameters for budgeted traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraversalConfig {
    /// Maximum number of steps before a walk gives up (`None` = unbounded)
    pub step_budget: Option<usize>,

    /// Emit a trace event for every step taken
    pub trace_steps: bool,
}

impl TraversalConfig {
    /// Unbounded, silent configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from `LAZYSEQ_STEP_BUDGET` and `LAZYSEQ_TRACE_STEPS`.
    ///
    /// Unparseable budgets are ignored; any value other than `0`, `false`
    /// or empty enables step tracing.
    pub fn from_env() -> Self {
        let step_budget = env::var(STEP_BUDGET_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok());
        let trace_steps = env::var(TRACE_STEPS_ENV)
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        Self {
            step_budget,
            trace_steps,
        }
    }

    /// Give up after `budget` steps.
    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = Some(budget);
        self
    }

    /// Remove any step budget.
    pub fn unbounded(mut self) -> Self {
        self.step_budget = None;
        self
    }

    /// Toggle per-step trace events.
    pub fn with_trace_steps(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }

    /// Reject budgets that can never make progress.
    pub fn validate(&self) -> Result<(), SequenceError> {
        match self.step_budget {
            Some(0) => Err(SequenceError::InvalidBudget),
            _ => Ok(()),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "" | "0" | "false")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = TraversalConfig::new()
            .with_step_budget(64)
            .with_trace_steps(true);
        assert_eq!(config.step_budget, Some(64));
        assert!(config.trace_steps);
        assert!(config.validate().is_ok());
        assert_eq!(config.unbounded().step_budget, None);
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = TraversalConfig::new().with_step_budget(0);
        assert_eq!(config.validate(), Err(SequenceError::InvalidBudget));
    }

    #[test]
    fn test_from_env() {
        // The only test touching these variables, so no other test races it
        env::remove_var(STEP_BUDGET_ENV);
        env::remove_var(TRACE_STEPS_ENV);
        assert_eq!(TraversalConfig::from_env(), TraversalConfig::default());

        env::set_var(STEP_BUDGET_ENV, " 12 ");
        env::set_var(TRACE_STEPS_ENV, "yes");
        let config = TraversalConfig::from_env();
        assert_eq!(config.step_budget, Some(12));
        assert!(config.trace_steps);

        env::set_var(STEP_BUDGET_ENV, "twelve");
        env::set_var(TRACE_STEPS_ENV, "0");
        let config = TraversalConfig::from_env();
        assert_eq!(config.step_budget, None);
        assert!(!config.trace_steps);

        env::remove_var(STEP_BUDGET_ENV);
        env::remove_var(TRACE_STEPS_ENV);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" 0 "));
        assert!(!parse_flag(""));
    }
}
