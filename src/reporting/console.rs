use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use console::style;

use crate::models::{CheckResult, CheckStatus, MonitorSummary};

fn timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Header printed once when the monitor starts.
pub fn render_start(target: &Path, iterations: u32, interval_secs: u64) -> String {
    format!(
        "{} Monitoring {} | {} rounds | {}s interval",
        style("▶").green().bold(),
        style(target.display().to_string()).white().bold(),
        iterations,
        interval_secs,
    )
}

/// Round-start banner with iteration index and timestamp.
pub fn render_round_banner(index: u32, total: u32, ts: DateTime<Utc>) -> String {
    format!(
        "\n{} {} {}",
        style("---").cyan().bold(),
        style(format!("Round {}/{} | {}", index, total, timestamp(ts)))
            .cyan()
            .bold(),
        style("---").cyan().bold(),
    )
}

/// One status line per check, from a small fixed set of phrasings.
pub fn render_check_line(result: &CheckResult) -> String {
    let report = result
        .report
        .as_ref()
        .map(|p| format!(" (report: {})", p.display()))
        .unwrap_or_default();

    match result.status {
        CheckStatus::Clean => format!(
            "  {} {} {}{}",
            style("✓").green(),
            style(&result.name).green(),
            style("clean").dim(),
            style(report).dim(),
        ),
        CheckStatus::IssuesFound => format!(
            "  {} {} issues found{} {}",
            style("✗").red(),
            style(&result.name).red(),
            report,
            style(&result.detail).red().dim(),
        ),
        CheckStatus::Failed => format!(
            "  {} {} could not run {}",
            style("✗").red(),
            style(&result.name).red(),
            style(&result.detail).red().dim(),
        ),
    }
}

/// Completion banner, printed after the final round only.
pub fn render_completion(ts: DateTime<Utc>, summary: &MonitorSummary) -> String {
    let verdict = if summary.all_clean() {
        style("all rounds clean".to_string()).green().bold()
    } else {
        style(format!(
            "{} of {} rounds had failures",
            summary.failing_rounds, summary.rounds_completed
        ))
        .red()
        .bold()
    };
    format!(
        "\n{} {} | {} | {}\n",
        style("✓ Monitoring complete:").green().bold(),
        verdict,
        format_elapsed(Duration::from_millis(summary.duration_ms)),
        timestamp(ts),
    )
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 1 {
        format!("{}ms", elapsed.as_millis())
    } else if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_clean_check_line() {
        console::set_colors_enabled(false);
        let line = render_check_line(&CheckResult {
            name: "dependency-audit".to_string(),
            status: CheckStatus::Clean,
            report: None,
            detail: "safety exited cleanly".to_string(),
        });
        assert!(line.contains("✓"));
        assert!(line.contains("dependency-audit"));
        assert!(line.contains("clean"));
    }

    #[test]
    fn test_render_issues_line_includes_report_path() {
        console::set_colors_enabled(false);
        let line = render_check_line(&CheckResult {
            name: "static-analysis".to_string(),
            status: CheckStatus::IssuesFound,
            report: Some(PathBuf::from("bandit_report.json")),
            detail: "bandit exited with status 1".to_string(),
        });
        assert!(line.contains("✗"));
        assert!(line.contains("issues found"));
        assert!(line.contains("bandit_report.json"));
    }

    #[test]
    fn test_render_failed_line_phrasing() {
        console::set_colors_enabled(false);
        let line = render_check_line(&CheckResult {
            name: "test-suite".to_string(),
            status: CheckStatus::Failed,
            report: None,
            detail: "could not start pytest".to_string(),
        });
        assert!(line.contains("could not run"));
    }

    #[test]
    fn test_round_banner_has_index_and_timestamp() {
        console::set_colors_enabled(false);
        let banner = render_round_banner(2, 4, Utc::now());
        assert!(banner.contains("Round 2/4"));
        assert!(banner.contains("UTC"));
    }

    #[test]
    fn test_completion_banner_reports_failures() {
        console::set_colors_enabled(false);
        let summary = MonitorSummary {
            rounds_completed: 4,
            failing_rounds: 2,
            interrupted: false,
            duration_ms: 5000,
        };
        let banner = render_completion(Utc::now(), &summary);
        assert!(banner.contains("2 of 4 rounds had failures"));
        assert!(banner.contains("Monitoring complete"));
    }

    #[test]
    fn test_format_elapsed_buckets() {
        assert_eq!(format_elapsed(Duration::from_millis(250)), "250ms");
        assert_eq!(format_elapsed(Duration::from_secs(5)), "5s");
        assert_eq!(format_elapsed(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_elapsed(Duration::from_secs(3660)), "1h 1m");
    }
}
