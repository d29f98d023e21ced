/// The Big IDEA:
/// Terraform files grow. What starts as one tidy main.tf ends up as a
/// few hundred lines of resources, variables and locals all living
/// together, and sooner or later I want to pull one kind of block out
/// into its own file without hand-copying line ranges. This tool scans
/// a .tf file once, groups its top-level blocks by type, lists what it
/// found, and can write any one type back out as <type>.tf next to the
/// input.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tf_block_extract::utils;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tf-block-extract")]
#[command(about = "List and extract top-level blocks from a terraform file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path of the terraform file to scan.
    #[arg(long, short)]
    file: PathBuf,

    /// Enable verbose logging.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every named block in the file, grouped by type.
    List {
        /// Render the inventory as `json`, `yaml` or `toml` instead of
        /// the console report.
        #[arg(long)]
        format: Option<String>,
    },
    /// Write one block type's lines to <type>.tf next to the input file.
    Extract {
        /// Type of block to extract.
        #[arg(long, short = 'b', default_value = "locals")]
        block_type: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("starting terraform file scan");
    match cli.command {
        Commands::List { format } => utils::list_blocks(&cli.file, format.as_deref())?,
        Commands::Extract { block_type } => utils::extract_blocks(&cli.file, &block_type)?,
    }
    info!("scan completed");

    Ok(())
}
