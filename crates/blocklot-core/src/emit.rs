use crate::coalesce::{CandidateRow, RowStatus};
use crate::model::{PageResult, RejectedRow, Row, RunResult, Section, NUM_COLS};

/// Rows of one page, split into emitted and rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutput {
    pub result: PageResult,
    pub rejected: Vec<RejectedRow>,
}

/// Keep rows with exactly [`NUM_COLS`] cells; set the rest aside.
pub fn emit_rows(section: Section, page_number: u32, candidates: Vec<CandidateRow>) -> PageOutput {
    let mut rows = Vec::new();
    let mut rejected = Vec::new();

    for candidate in candidates {
        if candidate.status != RowStatus::Rejected && candidate.cells.len() == NUM_COLS {
            rows.push(Row {
                cells: candidate.cells,
            });
        } else {
            rejected.push(RejectedRow {
                page_number,
                section,
                cells: candidate.cells,
            });
        }
    }

    PageOutput {
        result: PageResult {
            section,
            page_number,
            rows,
        },
        rejected,
    }
}

/// Append one page's output to the run. Callers append in page order.
pub fn append_page(run: &mut RunResult, output: PageOutput) {
    run.rejected.extend(output.rejected);
    run.pages.push(output.result);
}
