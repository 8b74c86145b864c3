//! CLI application for loan application field extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{batch, config, process};

/// Loan application extraction - Read applicant fields from document text
#[derive(Parser)]
#[command(name = "loandoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and validate fields from a single document
    Process(process::ProcessArgs),

    /// Extract and validate fields from many documents
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Process(args) => process::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
