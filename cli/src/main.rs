#![deny(missing_docs)]

//! # Reduxa CLI
//!
//! Command Line Interface for the Redux client generator.
//!
//! Supported Commands:
//! - `generate`: API description -> action creators, actions and action types.
//! - `ident`: Prints the canonical JavaScript identifier for arbitrary text.

use clap::{Parser, Subcommand};
use reduxa_core::AppResult;
use tracing_subscriber::EnvFilter;

mod generate;
mod ident;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Redux client generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Redux action creators from an API description.
    Generate(generate::GenerateArgs),
    /// Canonicalize words into a JavaScript identifier.
    Ident(ident::IdentArgs),
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            for path in generate::execute(args)? {
                println!("{}", path.display());
            }
        }
        Commands::Ident(args) => {
            for line in ident::execute(args) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
