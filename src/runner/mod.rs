use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, warn};

use crate::checks::Checker;
use crate::models::ScanRound;

/// Executes one round of checks against the target project.
///
/// Checks run strictly in registry order, one at a time. A non-clean
/// result never stops the remaining checks: the round always attempts
/// every registered check and reports whatever it saw.
pub struct ScanRunner {
    target: PathBuf,
    checks: Vec<Box<dyn Checker>>,
}

impl ScanRunner {
    pub fn new(target: PathBuf, checks: Vec<Box<dyn Checker>>) -> Self {
        Self { target, checks }
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    pub async fn run_round(&self, index: u32) -> ScanRound {
        let started_at = Utc::now();
        let mut results = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            info!(check = check.name(), round = index, "Running check");
            let result = check.run(&self.target).await;
            if !result.status.is_clean() {
                warn!(
                    check = check.name(),
                    status = %result.status,
                    detail = %result.detail,
                    "Check did not pass"
                );
            }
            results.push(result);
        }

        ScanRound {
            index,
            started_at,
            results,
        }
    }
}
