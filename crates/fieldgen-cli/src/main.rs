//! fieldgen CLI - C# field code generator
//!
//! Commands:
//! - `fieldgen generate` - Print the C# fragments for every field
//! - `fieldgen context` - Print each field's substitution variables as JSON
//! - `fieldgen check` - Validate field schemas and generator options

use clap::{Parser, Subcommand};
use fieldgen_core::LogLevel;
use fieldgen_csharp::Operation;
use std::path::PathBuf;

mod check;
mod context;
mod generate;
mod input;

#[derive(Parser)]
#[command(name = "fieldgen")]
#[command(author, version, about = "Per-field C# code generator for Google.Protobuf", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C# fragments for every field
    Generate {
        /// Path to the JSON field schema list
        #[arg(short, long)]
        input: PathBuf,

        /// Path to generator options (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only emit this operation (e.g. members, parsing, serialized-size)
        #[arg(short, long)]
        operation: Option<Operation>,
    },

    /// Print the variable context of every field as JSON
    Context {
        /// Path to the JSON field schema list
        #[arg(short, long)]
        input: PathBuf,

        /// Path to generator options (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate field schemas and generator options
    Check {
        /// Path to the JSON field schema list
        #[arg(short, long)]
        input: PathBuf,

        /// Path to generator options (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    fn config(&self) -> Option<&PathBuf> {
        match self {
            Commands::Generate { config, .. }
            | Commands::Context { config, .. }
            | Commands::Check { config, .. } => config.as_ref(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = input::load_options(cli.command.config())?;
    let level = match cli.log_level {
        Some(level) => level,
        None => options.log_level()?,
    };
    fieldgen_logging::init_logging(level);

    match cli.command {
        Commands::Generate {
            input, operation, ..
        } => {
            generate::run(&input, &options, operation)?;
        }
        Commands::Context { input, .. } => {
            context::run(&input, &options)?;
        }
        Commands::Check { input, config } => {
            check::run(&input, config.as_deref(), &options)?;
        }
    }

    Ok(())
}
