//! Tensority CLI
//!
//! Computes the Tensority digest of a block-header digest under an epoch seed.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "tensority")]
#[command(about = "Matrix-multiplication proof-of-work hash (AVX2 accelerated)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash one or more headers under a single epoch seed
    Hash {
        /// 32-byte epoch seed, hex encoded
        #[arg(value_name = "SEED")]
        seed: String,

        /// 32-byte block-header digests, hex encoded
        #[arg(value_name = "HEADER", required = true)]
        headers: Vec<String>,
    },
    /// Print the matrix-multiply backend selected for this CPU
    Backend,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Hash { seed, headers } => commands::hash_headers(seed, headers)?,
        Commands::Backend => println!("{}", tensority::active_backend()),
    }

    Ok(())
}
