pub mod coalesce;
pub mod emit;
pub mod error;
pub mod extraction;
pub mod layout;
pub mod model;
pub mod segment;
pub mod template;
pub mod values;

use emit::PageOutput;
use error::GuideError;
use extraction::{FragmentSource, PageFragments};
use model::{RunResult, TextFragment};
use rayon::prelude::*;
use template::{CompiledTemplate, PageTemplate};

/// Main API entry point: turn a document into the block and lot table.
///
/// Extracts positioned fragments with `source`, then validates and
/// reconstructs every page against `template`.
pub fn extract_guide(
    bytes: &[u8],
    source: &dyn FragmentSource,
    template: PageTemplate,
) -> Result<RunResult, GuideError> {
    let pages = source.extract_pages(bytes)?;
    tracing::debug!(
        backend = source.backend_name(),
        pages = pages.len(),
        "extracted fragments"
    );
    let template = CompiledTemplate::new(template)?;
    process_pages(pages, &template)
}

/// Process all pages and merge them into one result in page order.
///
/// Pages are independent and run in parallel. Any validation failure aborts
/// the run; when several pages fail, the error of the earliest page is
/// returned.
pub fn process_pages(
    pages: Vec<PageFragments>,
    template: &CompiledTemplate,
) -> Result<RunResult, GuideError> {
    let mut outputs: Vec<(usize, Result<PageOutput, GuideError>)> = pages
        .into_par_iter()
        .map(|page| {
            let output = process_page(page.page_index, page.fragments, template);
            (page.page_index, output)
        })
        .collect();
    outputs.sort_by_key(|(page_index, _)| *page_index);

    let mut run = RunResult::default();
    for (_, output) in outputs {
        emit::append_page(&mut run, output?);
    }

    tracing::info!(
        good = run.row_count(),
        bad = run.rejected.len(),
        "run complete"
    );
    Ok(run)
}

/// Run one page through grouping, sorting, segmentation, coalescing and emission.
pub fn process_page(
    page_index: usize,
    fragments: Vec<TextFragment>,
    template: &CompiledTemplate,
) -> Result<PageOutput, GuideError> {
    let page = layout::build_page(fragments);
    let segmented = segment::segment_page(page_index, page, template)?;
    let candidates = coalesce::coalesce_rows(segmented.page_number, segmented.body, template)?;
    Ok(emit::emit_rows(
        segmented.section,
        segmented.page_number,
        candidates,
    ))
}
