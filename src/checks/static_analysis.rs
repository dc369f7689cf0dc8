use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{process, Checker};
use crate::models::CheckResult;

/// Static-analysis security scan: `bandit` over the configured source
/// subdirectory, writing its JSON report to a fixed path that gets
/// overwritten every round.
pub struct StaticAnalysis {
    source_dir: String,
    report_path: PathBuf,
}

impl StaticAnalysis {
    pub fn new(source_dir: &str, report_path: &Path) -> Self {
        Self {
            source_dir: source_dir.to_string(),
            report_path: report_path.to_path_buf(),
        }
    }
}

#[async_trait]
impl Checker for StaticAnalysis {
    fn name(&self) -> &'static str {
        "static-analysis"
    }

    async fn run(&self, target: &Path) -> CheckResult {
        let args = vec![
            "-r".to_string(),
            self.source_dir.clone(),
            "-f".to_string(),
            "json".to_string(),
            "-o".to_string(),
            self.report_path.display().to_string(),
        ];
        let (status, detail) = process::run_tool("bandit", &args, target).await;
        CheckResult {
            name: self.name().to_string(),
            status,
            report: Some(self.report_path.clone()),
            detail,
        }
    }
}
