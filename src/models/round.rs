use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Termination status of one external check.
///
/// A tool that launched and exited non-zero is kept apart from a tool
/// that could not be launched at all; both count as non-clean when a
/// round is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckStatus {
    /// The tool ran and exited zero.
    Clean,
    /// The tool ran and exited non-zero: it flagged something.
    IssuesFound,
    /// The tool could not be started or its status could not be read.
    Failed,
}

impl CheckStatus {
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::IssuesFound => "issues-found",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one external check. Built right after the tool
/// terminates and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check identifier, e.g. "static-analysis".
    pub name: String,
    /// How the invoked process terminated.
    pub status: CheckStatus,
    /// Structured report artifact written by the tool, if it writes one.
    pub report: Option<PathBuf>,
    /// Human-readable status line for the console.
    pub detail: String,
}

/// One complete pass through the registered checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRound {
    /// 1-based iteration index.
    pub index: u32,
    /// When the round started.
    pub started_at: DateTime<Utc>,
    /// One entry per registered check, in registry order.
    pub results: Vec<CheckResult>,
}

impl ScanRound {
    /// A round is clean when every check came back clean.
    pub fn is_clean(&self) -> bool {
        self.results.iter().all(|r| r.status.is_clean())
    }

    /// Number of non-clean checks in this round.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.status.is_clean()).count()
    }
}
