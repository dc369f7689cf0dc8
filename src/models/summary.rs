use serde::{Deserialize, Serialize};

/// What the monitor loop did over its whole run. Feeds the process
/// exit code and the completion banner, nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSummary {
    /// Rounds that actually ran.
    pub rounds_completed: u32,
    /// Rounds with at least one non-clean check.
    pub failing_rounds: u32,
    /// True when cancellation ended the loop before the final round.
    pub interrupted: bool,
    /// Wall-clock duration of the whole run in milliseconds.
    pub duration_ms: u64,
}

impl MonitorSummary {
    pub fn all_clean(&self) -> bool {
        self.failing_rounds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_clean() {
        let summary = MonitorSummary {
            rounds_completed: 4,
            failing_rounds: 0,
            interrupted: false,
            duration_ms: 1800,
        };
        assert!(summary.all_clean());
    }

    #[test]
    fn test_not_clean_with_failing_round() {
        let summary = MonitorSummary {
            rounds_completed: 4,
            failing_rounds: 1,
            interrupted: false,
            duration_ms: 1800,
        };
        assert!(!summary.all_clean());
    }
}
