pub mod dependency_audit;
pub mod process;
pub mod static_analysis;
pub mod test_suite;

pub use dependency_audit::DependencyAudit;
pub use static_analysis::StaticAnalysis;
pub use test_suite::TestSuite;

use std::path::Path;

use async_trait::async_trait;

use crate::config::MonitorConfig;
use crate::models::CheckResult;

/// A single external security/quality check.
///
/// Implementations invoke one opaque tool against the target directory
/// and map its termination status into a `CheckResult`. A check never
/// returns an error: anything that goes wrong is folded into the
/// result's status so the round can keep going.
#[async_trait]
pub trait Checker: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, target: &Path) -> CheckResult;
}

/// The fixed check order: dependency audit, static analysis, test suite.
pub fn default_checks(config: &MonitorConfig) -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(DependencyAudit::new()),
        Box::new(StaticAnalysis::new(&config.source_dir, &config.report_path)),
        Box::new(TestSuite::new(&config.test_entry)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_checks_order_is_fixed() {
        let config = MonitorConfig {
            target: PathBuf::from("."),
            max_iterations: 1,
            interval_secs: 0,
            source_dir: "src".to_string(),
            report_path: PathBuf::from("bandit_report.json"),
            test_entry: "tests/test_basic.py".to_string(),
        };
        let checks = default_checks(&config);
        let names: Vec<&str> = checks.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["dependency-audit", "static-analysis", "test-suite"]);
    }
}
