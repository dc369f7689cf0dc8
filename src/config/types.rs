use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ITERATIONS: u32 = 4;
pub const DEFAULT_INTERVAL_SECS: u64 = 600;
pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_REPORT_PATH: &str = "bandit_report.json";
pub const DEFAULT_TEST_ENTRY: &str = "tests/test_basic.py";

/// On-disk YAML configuration. Every field is optional; CLI flags take
/// precedence over file values and built-in defaults fill the rest.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PatrolConfig {
    pub target: Option<PathBuf>,
    pub schedule: Option<ScheduleConfig>,
    pub checks: Option<ChecksConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ScheduleConfig {
    pub iterations: Option<u32>,
    pub interval_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ChecksConfig {
    /// Subdirectory the static-analysis scan walks.
    pub source_dir: Option<String>,
    /// Output path for the static-analysis report, relative to the target.
    pub report_path: Option<PathBuf>,
    /// Entry point handed to the test runner.
    pub test_entry: Option<String>,
}

/// Fully resolved monitor configuration. Built once before the first
/// round and never mutated while the loop runs.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Project root every check runs against (subprocess cwd).
    pub target: PathBuf,
    /// Total number of scan rounds, at least 1.
    pub max_iterations: u32,
    /// Delay between the end of one round and the start of the next.
    pub interval_secs: u64,
    pub source_dir: String,
    pub report_path: PathBuf,
    pub test_entry: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patrol_config_default_is_empty() {
        let config = PatrolConfig::default();
        assert!(config.target.is_none());
        assert!(config.schedule.is_none());
        assert!(config.checks.is_none());
    }

    #[test]
    fn test_patrol_config_yaml_roundtrip() {
        let yaml = "\
target: /srv/app
schedule:
  iterations: 2
  interval_secs: 30
checks:
  source_dir: app
";
        let config: PatrolConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.target, Some(PathBuf::from("/srv/app")));
        assert_eq!(config.schedule.as_ref().unwrap().iterations, Some(2));
        assert_eq!(config.schedule.as_ref().unwrap().interval_secs, Some(30));
        assert_eq!(
            config.checks.as_ref().unwrap().source_dir.as_deref(),
            Some("app")
        );
        assert!(config.checks.as_ref().unwrap().report_path.is_none());
    }

    #[test]
    fn test_partial_yaml_leaves_rest_unset() {
        let config: PatrolConfig = serde_yaml::from_str("schedule:\n  iterations: 1\n").unwrap();
        assert!(config.target.is_none());
        assert_eq!(config.schedule.unwrap().iterations, Some(1));
    }
}
