//! Merge continuation lines back into the rows they belong to.
//!
//! A body line whose first fragment starts with an integer (the block number)
//! begins a new row. Any other line continues the row above it: each of its
//! fragments is appended to the cell sitting at exactly the same `x`.

use crate::error::GuideError;
use crate::model::{join_cell_text, Cell, Line, NUM_COLS};
use crate::template::CompiledTemplate;
use crate::values::starts_with_integer;

/// How a row looked when it was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// All columns present.
    Complete,
    /// The trailing column was blank and a synthetic empty cell was added.
    Padded,
    /// Wrong number of columns; set aside for review.
    Rejected,
}

/// A row after coalescing, before emission.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    pub cells: Vec<Cell>,
    pub status: RowStatus,
}

/// Whether a freshly started row is missing only a blank FACILITY column.
///
/// Triggers on exactly `NUM_COLS - 1` cells whose last cell (the CD# column)
/// starts with an integer.
pub fn needs_blank_trailing_column(cells: &[Cell]) -> bool {
    cells.len() == NUM_COLS - 1 && starts_with_integer(&cells[NUM_COLS - 2].text)
}

/// Append the synthetic empty trailing cell if [`needs_blank_trailing_column`] holds.
pub fn pad_blank_trailing_column(cells: &mut Vec<Cell>) -> bool {
    if !needs_blank_trailing_column(cells) {
        return false;
    }
    cells.push(Cell {
        x: 0.0,
        text: String::new(),
    });
    true
}

/// Walk the body lines of one page, starting and extending rows.
pub fn coalesce_rows(
    page_number: u32,
    body: Vec<Line>,
    template: &CompiledTemplate,
) -> Result<Vec<CandidateRow>, GuideError> {
    let mut rows: Vec<CandidateRow> = Vec::new();

    for line in body {
        let starts_row = line.first_text().is_some_and(starts_with_integer);
        if starts_row {
            rows.push(start_row(page_number, line, template)?);
        } else {
            continue_row(page_number, rows.last_mut(), line)?;
        }
    }

    Ok(rows)
}

fn start_row(
    page_number: u32,
    line: Line,
    template: &CompiledTemplate,
) -> Result<CandidateRow, GuideError> {
    let mut cells: Vec<Cell> = line.fragments.into_iter().map(Cell::from).collect();

    if cells.len() == NUM_COLS {
        return Ok(CandidateRow {
            cells,
            status: RowStatus::Complete,
        });
    }

    if pad_blank_trailing_column(&mut cells) {
        tracing::debug!(page_number, block = %cells[0].text, "padded blank trailing column");
        return Ok(CandidateRow {
            cells,
            status: RowStatus::Padded,
        });
    }

    let row_text = join_cell_text(&cells);
    tracing::warn!(
        page_number,
        columns = cells.len(),
        "not sure what to do with: {row_text}"
    );
    if template.is_forbidden(&row_text) {
        return Err(GuideError::ForbiddenBadRow {
            page_number,
            row_text,
        });
    }

    Ok(CandidateRow {
        cells,
        status: RowStatus::Rejected,
    })
}

fn continue_row(
    page_number: u32,
    current: Option<&mut CandidateRow>,
    line: Line,
) -> Result<(), GuideError> {
    let Some(current) = current else {
        let first = line.fragments.into_iter().next();
        return Err(GuideError::UnmatchedContinuation {
            page_number,
            x: first.as_ref().map_or(0.0, |f| f.x),
            text: first.map(|f| f.text).unwrap_or_default(),
        });
    };

    for fragment in line.fragments {
        let Some(cell) = current.cells.iter_mut().find(|c| c.x == fragment.x) else {
            return Err(GuideError::UnmatchedContinuation {
                page_number,
                x: fragment.x,
                text: fragment.text,
            });
        };
        cell.text.push_str(&fragment.text);
    }
    Ok(())
}
