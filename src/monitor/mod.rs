use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::MonitorConfig;
use crate::models::MonitorSummary;
use crate::reporting::console;
use crate::runner::ScanRunner;

/// Drives the scan runner for a bounded number of rounds with a fixed
/// delay between them.
///
/// Failure handling is visibility-only: a failing round is reported and
/// counted, never retried, and never stops the schedule. The only early
/// exit is cancellation, which is checked before each round and raced
/// against the inter-round sleep so shutdown lands on a round boundary.
pub struct MonitorLoop {
    config: MonitorConfig,
    runner: ScanRunner,
    cancel_token: CancellationToken,
}

impl MonitorLoop {
    pub fn new(config: MonitorConfig, runner: ScanRunner) -> Self {
        Self {
            config,
            runner,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Replace the loop's cancel token with an external one (e.g. wired
    /// to ctrl-c by the CLI) so cancelling that token actually stops the loop.
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Run the full schedule: `max_iterations` rounds, `interval_secs`
    /// between consecutive rounds, no wait after the final one.
    pub async fn start(&self) -> MonitorSummary {
        let started = std::time::Instant::now();
        info!(
            target = %self.config.target.display(),
            iterations = self.config.max_iterations,
            interval_secs = self.config.interval_secs,
            "Monitor started"
        );
        println!(
            "{}",
            console::render_start(
                &self.config.target,
                self.config.max_iterations,
                self.config.interval_secs
            )
        );

        let mut rounds_completed = 0u32;
        let mut failing_rounds = 0u32;
        let mut interrupted = false;

        for index in 1..=self.config.max_iterations {
            if self.cancel_token.is_cancelled() {
                interrupted = true;
                break;
            }

            println!(
                "{}",
                console::render_round_banner(index, self.config.max_iterations, Utc::now())
            );

            let round = self.runner.run_round(index).await;
            for result in &round.results {
                println!("{}", console::render_check_line(result));
            }

            rounds_completed += 1;
            if !round.is_clean() {
                failing_rounds += 1;
            }

            if index < self.config.max_iterations && !self.wait_between_rounds().await {
                interrupted = true;
                break;
            }
        }

        let summary = MonitorSummary {
            rounds_completed,
            failing_rounds,
            interrupted,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        if interrupted {
            info!(rounds = rounds_completed, "Monitor interrupted");
        } else {
            println!("{}", console::render_completion(Utc::now(), &summary));
        }

        summary
    }

    /// Block for the configured interval. Returns false when the wait
    /// ended because of cancellation rather than the timer.
    async fn wait_between_rounds(&self) -> bool {
        info!(
            interval_secs = self.config.interval_secs,
            "Waiting before next round"
        );
        tokio::select! {
            _ = self.cancel_token.cancelled() => false,
            _ = tokio::time::sleep(Duration::from_secs(self.config.interval_secs)) => {
                !self.cancel_token.is_cancelled()
            }
        }
    }
}
