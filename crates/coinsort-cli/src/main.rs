mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coinsort", about = "Coin detection and denomination tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify coins in images and write annotated results
    Run(commands::run::RunArgs),
    /// Detect and classify coins in one image without writing anything
    Detect(commands::detect::DetectArgs),
    /// Print or save the default pipeline config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn,coinsort_core=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
