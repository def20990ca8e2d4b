//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use receipt_processor::output::OutputMode;

/// receipt-processor - Validate receipts and award points
#[derive(Parser, Debug)]
#[command(
    name = "receipt-processor",
    version,
    about = "Validate receipts and award points",
    long_about = "A small web service that validates purchase receipts and scores them.\n\n\
                  Submitted receipts get an id that can be redeemed for points.\n\
                  The score and validate commands apply the same rules to local files."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP service
    Serve {
        /// Interface to bind (overrides config and environment)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config and environment)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate and score a receipt JSON file
    Score {
        /// Receipt file
        file: PathBuf,

        /// Show the points awarded by each rule
        #[arg(short, long)]
        explain: bool,

        /// Path to a TOML config file (validation options)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check a receipt JSON file without scoring it
    Validate {
        /// Receipt file
        file: PathBuf,

        /// Path to a TOML config file (validation options)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show an OpenAPI document (the bundled one by default)
    Spec {
        /// OpenAPI YAML or JSON file
        file: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve { host, port, config }) => {
            commands::serve(host, port, config.as_deref())
        },
        Some(Command::Score {
            file,
            explain,
            config,
        }) => commands::score(&file, explain, config.as_deref(), output_mode),
        Some(Command::Validate { file, config }) => {
            commands::validate(&file, config.as_deref(), output_mode)
        },
        Some(Command::Spec { file }) => commands::spec(file.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("receipt-processor v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("receipt-processor v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'receipt-processor --help' for usage");
                println!("Run 'receipt-processor serve' to start the service");
            }
            Ok(())
        },
    }
}
