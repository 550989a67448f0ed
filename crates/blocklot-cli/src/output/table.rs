use blocklot_core::model::RejectedRow;

/// Print rows set aside for review to stderr, one per line.
pub fn print_rejected(rejected: &[RejectedRow]) {
    let max_section = rejected
        .iter()
        .map(|r| r.section.label().len())
        .max()
        .unwrap_or(5);

    eprintln!("\nRows needing review:");
    for row in rejected {
        eprintln!(
            "  p.{:<4} {:<width$}  [{} col]  {}",
            row.page_number,
            row.section,
            row.cells.len(),
            row.text(),
            width = max_section
        );
    }
    eprintln!();
}
