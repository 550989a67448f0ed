use blocklot_core::error::GuideError;
use blocklot_core::extraction::fragments::FragmentJsonSource;
use blocklot_core::extraction::pdfjs::PdfJsTextSource;
use blocklot_core::extraction::FragmentSource;
use blocklot_core::template::{self, PageTemplate};
use clap::ValueEnum;
use std::path::PathBuf;

use crate::output;

/// Shape of the positioned-text dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// pdf.js `getTextContent()` pages
    Pdfjs,
    /// Plain `[{"page_index", "fragments"}]` JSON
    Fragments,
}

impl SourceKind {
    fn reader(self) -> Box<dyn FragmentSource> {
        match self {
            SourceKind::Pdfjs => Box::new(PdfJsTextSource::new()),
            SourceKind::Fragments => Box::new(FragmentJsonSource::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// CSV with a BOROUGH column first
    Csv,
    /// Pages and rejected rows as JSON
    Json,
}

pub struct ExtractArgs {
    pub input_file: PathBuf,
    pub source: SourceKind,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub preset: Option<String>,
    pub rejects: Option<PathBuf>,
}

pub fn run(args: ExtractArgs) -> Result<(), GuideError> {
    let page_template = load_page_template(args.template, args.preset)?;

    let source = args.source.reader();

    eprintln!("Reading {}...", args.input_file.display());
    let bytes = std::fs::read(&args.input_file)?;
    let result = blocklot_core::extract_guide(&bytes, source.as_ref(), page_template)?;

    eprintln!(
        "Found {} good rows and {} bad ones.",
        result.row_count(),
        result.rejected.len()
    );

    match args.format {
        OutputFormat::Json => output::json::write(&result, args.out.as_deref())?,
        OutputFormat::Csv => output::csv::write(&result, args.out.as_deref())?,
    }
    if let Some(path) = &args.out {
        eprintln!("Wrote {}.", path.display());
    }

    if !result.rejected.is_empty() {
        output::table::print_rejected(&result.rejected);
    }
    if let Some(path) = &args.rejects {
        output::json::write(&result.rejected, Some(path.as_path()))?;
        eprintln!(
            "Wrote {} row(s) for review to {}.",
            result.rejected.len(),
            path.display()
        );
    }

    Ok(())
}

fn load_page_template(
    path: Option<PathBuf>,
    preset: Option<String>,
) -> Result<PageTemplate, GuideError> {
    match (path, preset) {
        (Some(path), _) => template::load_template(&path),
        (None, Some(name)) => template::load_preset(&name),
        (None, None) => template::load_preset(template::DEFAULT_PRESET),
    }
}
