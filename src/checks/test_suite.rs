use std::path::Path;

use async_trait::async_trait;

use super::{process, Checker};
use crate::models::CheckResult;

/// Functional test suite run: `pytest` against the configured entry
/// point, verbose with short tracebacks.
pub struct TestSuite {
    test_entry: String,
}

impl TestSuite {
    pub fn new(test_entry: &str) -> Self {
        Self {
            test_entry: test_entry.to_string(),
        }
    }
}

#[async_trait]
impl Checker for TestSuite {
    fn name(&self) -> &'static str {
        "test-suite"
    }

    async fn run(&self, target: &Path) -> CheckResult {
        let args = vec![
            self.test_entry.clone(),
            "-v".to_string(),
            "--tb=short".to_string(),
        ];
        let (status, detail) = process::run_tool("pytest", &args, target).await;
        CheckResult {
            name: self.name().to_string(),
            status,
            report: None,
            detail,
        }
    }
}
