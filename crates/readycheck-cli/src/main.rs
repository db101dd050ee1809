//! readycheck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "readycheck", version, about = "AI Ops readiness self-assessment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the assessment interactively
    Take {
        /// Path to a custom catalog TOML (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Directory to write the report to
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, markdown, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Score an already-collected responses file
    Score {
        /// Responses JSON file
        #[arg(long)]
        responses: PathBuf,

        /// Path to a custom catalog TOML (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "./readycheck-results")]
        output: PathBuf,

        /// Output format: json, markdown, html, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// List catalog questions
    Questions {
        /// Path to a custom catalog TOML (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter to one category (trait-survey, knowledge-check, readiness)
        #[arg(long)]
        category: Option<String>,
    },

    /// Create a starter catalog and sample responses file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("readycheck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            catalog,
            output,
            format,
        } => commands::take::execute(catalog, output, format),
        Commands::Score {
            responses,
            catalog,
            output,
            format,
        } => commands::score::execute(responses, catalog, output, format),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Questions { catalog, category } => {
            commands::questions::execute(catalog, category)
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
