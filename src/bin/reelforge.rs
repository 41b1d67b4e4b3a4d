//! reelforge: Normalize the movie catalog and load it
//!
//! Usage:
//!   # Load into MySQL, credentials from MYSQL_* (or a .env file)
//!   reelforge --data-dir ./data/
//!
//!   # Write one .jsonl file per table instead
//!   reelforge --data-dir ./data/ --output-dir ./tables

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use reelforge::config::{DatabaseConfig, DatasetFiles, DEFAULT_APPEARANCES_FILE, DEFAULT_MOVIES_FILE};
use reelforge::logging::init_logging;
use reelforge::sink::{JsonLinesSink, MySqlSink};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "reelforge")]
#[command(about = "Normalize a movie catalog into relational tables", long_about = None)]
struct Args {
    /// Directory holding the raw datasets (zip archives or CSV files)
    #[arg(long, default_value = "./data/")]
    data_dir: PathBuf,

    /// Write JSON Lines files here instead of loading into MySQL
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Env file to read MYSQL_* settings from (default: .env if present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// File name of the movie catalog dataset
    #[arg(long, default_value = DEFAULT_MOVIES_FILE)]
    movies_file: String,

    /// File name of the actor appearance dataset
    #[arg(long, default_value = DEFAULT_APPEARANCES_FILE)]
    appearances_file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let files = DatasetFiles {
        movies: args.movies_file,
        appearances: args.appearances_file,
    };

    if let Some(output_dir) = args.output_dir {
        let mut sink = JsonLinesSink::new(&output_dir)
            .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
        reelforge::run(&args.data_dir, &files, &mut sink)?;
        info!(output_dir = %output_dir.display(), "wrote JSON Lines tables");
        return Ok(());
    }

    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path).with_context(|| format!("Failed to read {}", path.display()))?;
        }
        None => {
            // a missing .env is fine, the variables may already be set
            let _ = dotenvy::dotenv();
        }
    }

    let config = DatabaseConfig::from_env().context("Incomplete database configuration")?;
    info!(database = %config.redacted_url(), "connecting");
    let mut sink = MySqlSink::connect(&config).context("Failed to connect to MySQL")?;

    reelforge::run(&args.data_dir, &files, &mut sink)?;
    Ok(())
}
