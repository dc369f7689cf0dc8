use clap::Parser;
use tracing_subscriber::EnvFilter;

use patrol::cli;
use patrol::errors::PatrolError;
use patrol::models::MonitorSummary;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Diagnostics go to stderr; stdout carries the round reports.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let code = match cli.command {
        cli::Commands::Watch(args) => match cli::watch::handle_watch(args).await {
            Ok(summary) => exit_code(&summary),
            Err(e) => report_error(e),
        },
        cli::Commands::Scan(args) => match cli::scan::handle_scan(args).await {
            Ok(round) => {
                if round.is_clean() {
                    0
                } else {
                    1
                }
            }
            Err(e) => report_error(e),
        },
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    std::process::exit(code);
}

fn exit_code(summary: &MonitorSummary) -> i32 {
    if summary.interrupted {
        130
    } else if summary.all_clean() {
        0
    } else {
        1
    }
}

fn report_error(e: PatrolError) -> i32 {
    eprintln!("Error: {}", e);
    match e {
        PatrolError::Config(_) => 2,
        _ => 1,
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> i32 {
    let path = std::path::PathBuf::from(&args.config);
    match patrol::config::parse_config(&path).await {
        Ok(_) => {
            println!("Configuration is valid: {}", args.config);
            0
        }
        Err(e) => report_error(e),
    }
}
