mod commands;
mod output;

use blocklot_core::error::GuideError;
use clap::{Parser, Subcommand};
use commands::extract::{OutputFormat, SourceKind};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "blocklot",
    version,
    about = "Convert the NYCHA Block and Lot Guide into a table"
)]
struct Cli {
    /// Log progress for every page
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reconstruct the table from a positioned-text dump of the guide
    Extract {
        /// Path to the text dump
        input_file: PathBuf,

        /// Input format
        #[arg(short, long, value_enum, default_value = "pdfjs")]
        source: SourceKind,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Write the table to FILE instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom JSON page template
        #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
        template: Option<PathBuf>,

        /// Builtin page template (default: nycha-2024)
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Write rows set aside for review to a JSON file
        #[arg(long, value_name = "FILE")]
        rejects: Option<PathBuf>,
    },
    /// Inspect page templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
}

#[derive(Debug, Subcommand)]
enum TemplateAction {
    /// List builtin templates
    List,
    /// Print a builtin template as JSON
    Show {
        /// Preset name (e.g., "nycha-2024")
        #[arg(default_value = blocklot_core::template::DEFAULT_PRESET)]
        preset: String,
    },
    /// Validate a custom template file
    Validate {
        /// Path to JSON template file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            source,
            format,
            out,
            template,
            preset,
            rejects,
        } => commands::extract::run(commands::extract::ExtractArgs {
            input_file,
            source,
            format,
            out,
            template,
            preset,
            rejects,
        }),
        Commands::Template { action } => match action {
            TemplateAction::List => commands::template::list(),
            TemplateAction::Show { preset } => commands::template::show(&preset),
            TemplateAction::Validate { file } => commands::template::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(hint) = error_hint(&e) {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

const TEMPLATE_MISMATCH_HINT: &str =
    "The document does not match the page template; no table was written.";

/// Extra context for errors that mean the document, not the invocation, is at fault.
fn error_hint(e: &GuideError) -> Option<&'static str> {
    e.is_validation().then_some(TEMPLATE_MISMATCH_HINT)
}
