use std::path::Path;

use async_trait::async_trait;

use super::{process, Checker};
use crate::models::CheckResult;

/// Dependency vulnerability scan: `safety check` against the target's
/// declared dependency manifest, default arguments only.
pub struct DependencyAudit;

impl DependencyAudit {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Checker for DependencyAudit {
    fn name(&self) -> &'static str {
        "dependency-audit"
    }

    async fn run(&self, target: &Path) -> CheckResult {
        let args = vec!["check".to_string()];
        let (status, detail) = process::run_tool("safety", &args, target).await;
        CheckResult {
            name: self.name().to_string(),
            status,
            report: None,
            detail,
        }
    }
}
