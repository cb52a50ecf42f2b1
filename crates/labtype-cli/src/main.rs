//! labtype CLI — take the AI researcher personality assessment in a terminal.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;
mod render;

#[derive(Parser)]
#[command(
    name = "labtype",
    version,
    about = "AI researcher personality assessment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by every command that produces result cards.
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Output directory for result cards
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output formats: svg, html, json, text, all (comma-separated)
    #[arg(long)]
    format: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the 40 questions interactively
    Take {
        /// Fixed seed for the question order
        #[arg(long)]
        seed: Option<u64>,

        /// Allow the `debug` random-fill shortcut
        #[arg(long)]
        debug: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Fill every answer at random and show the result
    Random {
        /// Fixed seed for the question order and answers
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// List all 16 personality profiles
    Profiles,

    /// Show the full profile for a personality code
    Describe {
        /// Four-letter code, e.g. FEMI
        code: String,
    },

    /// Print the question corpus
    Questions {
        /// Only show one dimension: horizon, paradigm, lever, strategy
        #[arg(long)]
        dimension: Option<String>,
    },

    /// Re-render a saved JSON result
    Export {
        /// Result JSON written by a previous run
        #[arg(long)]
        result: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Create a starter labtype.toml
    Init,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("labtype=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take { seed, debug, export } => commands::take::execute(seed, debug, export).await,
        Commands::Random { seed, export } => commands::random::execute(seed, export).await,
        Commands::Profiles => commands::profiles::execute(),
        Commands::Describe { code } => commands::describe::execute(&code),
        Commands::Questions { dimension } => commands::questions::execute(dimension.as_deref()),
        Commands::Export { result, export } => commands::export::execute(result, export).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
