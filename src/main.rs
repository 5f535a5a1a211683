mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cli::rank::DimensionArg;
use llm_value::config::Config;

#[derive(Parser)]
#[command(name = "llm-value")]
#[command(about = "Rank LLMs by benchmark value per dollar across pricing and leaderboard sources")]
#[command(version)]
struct Cli {
    /// Log progress and match decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the OpenRouter pricing catalog into the data directory
    Fetch {
        /// Data directory (defaults to config, then the platform data dir)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Merge pricing with benchmark sources and write the final dataset
    Merge {
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Output path for the dataset JSON
        #[arg(long)]
        out: Option<PathBuf>,
        /// Maximum entries per ranking
        #[arg(long)]
        limit: Option<usize>,
        /// Print the dataset as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one leaderboard from a merged dataset
    Rank {
        /// Ranking dimension
        #[arg(value_enum)]
        dimension: DimensionArg,
        #[arg(long)]
        limit: Option<usize>,
        /// Dataset JSON to read (defaults to the last merge output)
        #[arg(long)]
        dataset: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Show the unified record for a model
    Show {
        /// Model ID (e.g., anthropic/claude-opus-4.6)
        model_id: String,
        #[arg(long)]
        dataset: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Fetch { data_dir } => cli::fetch::run(&config, data_dir)?,
        Commands::Merge {
            data_dir,
            out,
            limit,
            json,
        } => cli::merge::run(&config, data_dir, out, limit, json)?,
        Commands::Rank {
            dimension,
            limit,
            dataset,
            json,
        } => cli::rank::run(&config, dimension.into(), limit, dataset, json)?,
        Commands::Show {
            model_id,
            dataset,
            json,
        } => cli::show::model(&config, &model_id, dataset, json)?,
    }

    Ok(())
}
