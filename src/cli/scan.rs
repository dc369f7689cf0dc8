use tracing::info;

use crate::checks::default_checks;
use crate::cli::commands::ScanArgs;
use crate::errors::PatrolError;
use crate::models::ScanRound;
use crate::reporting::console;
use crate::runner::ScanRunner;

/// One round, no schedule: the headless single-shot variant of `watch`.
pub async fn handle_scan(args: ScanArgs) -> Result<ScanRound, PatrolError> {
    let file_config = super::watch::load_file_config(&args.common).await?;
    let config =
        super::watch::build_monitor_config(&args.common, Some(1), Some(0), file_config.as_ref())?;

    info!(target = %config.target.display(), "Running single scan round");

    let runner = ScanRunner::new(config.target.clone(), default_checks(&config));
    let round = runner.run_round(1).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&round)?);
    } else {
        println!(
            "{}",
            console::render_round_banner(round.index, 1, round.started_at)
        );
        for result in &round.results {
            println!("{}", console::render_check_line(result));
        }
    }

    Ok(round)
}
