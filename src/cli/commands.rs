use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "patrol", version, about = "Recurring security scan monitor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the recurring scan loop
    Watch(WatchArgs),
    /// Run a single scan round and exit
    Scan(ScanArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct WatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of scan rounds to run
    #[arg(short = 'n', long)]
    pub iterations: Option<u32>,

    /// Delay between rounds in seconds
    #[arg(short, long)]
    pub interval: Option<u64>,
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the round result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Default)]
pub struct CommonArgs {
    /// Target project directory the checks run against
    #[arg(short, long)]
    pub target: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Source subdirectory for the static-analysis scan
    #[arg(long)]
    pub source_dir: Option<String>,

    /// Output path for the static-analysis JSON report
    #[arg(long)]
    pub report: Option<String>,

    /// Test suite entry point
    #[arg(long)]
    pub test_entry: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
