use std::path::PathBuf;

use tracing::{info, warn};

use crate::checks::default_checks;
use crate::cli::commands::{CommonArgs, WatchArgs};
use crate::config::{
    self, MonitorConfig, PatrolConfig, DEFAULT_INTERVAL_SECS, DEFAULT_ITERATIONS,
    DEFAULT_REPORT_PATH, DEFAULT_SOURCE_DIR, DEFAULT_TEST_ENTRY,
};
use crate::errors::PatrolError;
use crate::models::MonitorSummary;
use crate::monitor::MonitorLoop;
use crate::runner::ScanRunner;

pub async fn handle_watch(args: WatchArgs) -> Result<MonitorSummary, PatrolError> {
    let file_config = load_file_config(&args.common).await?;
    let config = build_monitor_config(
        &args.common,
        args.iterations,
        args.interval,
        file_config.as_ref(),
    )?;

    info!(
        target = %config.target.display(),
        iterations = config.max_iterations,
        interval_secs = config.interval_secs,
        "Starting monitor"
    );

    let runner = ScanRunner::new(config.target.clone(), default_checks(&config));
    let monitor = MonitorLoop::new(config, runner);

    // Wire ctrl-c to the loop's cancel token so shutdown lands on a
    // round boundary instead of killing a half-reported round.
    let cancel = monitor.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping at the next round boundary");
            cancel.cancel();
        }
    });

    Ok(monitor.start().await)
}

pub(crate) async fn load_file_config(
    common: &CommonArgs,
) -> Result<Option<PatrolConfig>, PatrolError> {
    match &common.config {
        Some(path) => Ok(Some(config::parse_config(&PathBuf::from(path)).await?)),
        None => Ok(None),
    }
}

/// Merge CLI flags over file config over built-in defaults into the
/// immutable monitor configuration, rejecting values the loop must
/// never start with.
pub(crate) fn build_monitor_config(
    common: &CommonArgs,
    iterations: Option<u32>,
    interval: Option<u64>,
    file_config: Option<&PatrolConfig>,
) -> Result<MonitorConfig, PatrolError> {
    let schedule = file_config.and_then(|c| c.schedule.as_ref());
    let checks = file_config.and_then(|c| c.checks.as_ref());

    let max_iterations = iterations
        .or_else(|| schedule.and_then(|s| s.iterations))
        .unwrap_or(DEFAULT_ITERATIONS);
    if max_iterations < 1 {
        return Err(PatrolError::Config("iterations must be at least 1".into()));
    }

    let interval_secs = interval
        .or_else(|| schedule.and_then(|s| s.interval_secs))
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let target = common
        .target
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| file_config.and_then(|c| c.target.clone()))
        .unwrap_or_else(|| PathBuf::from("."));
    if target.as_os_str().is_empty() {
        return Err(PatrolError::Config("target must not be empty".into()));
    }

    let source_dir = common
        .source_dir
        .clone()
        .or_else(|| checks.and_then(|c| c.source_dir.clone()))
        .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string());

    let report_path = common
        .report
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| checks.and_then(|c| c.report_path.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

    let test_entry = common
        .test_entry
        .clone()
        .or_else(|| checks.and_then(|c| c.test_entry.clone()))
        .unwrap_or_else(|| DEFAULT_TEST_ENTRY.to_string());

    Ok(MonitorConfig {
        target,
        max_iterations,
        interval_secs,
        source_dir,
        report_path,
        test_entry,
    })
}
