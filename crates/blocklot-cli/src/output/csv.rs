use blocklot_core::error::GuideError;
use blocklot_core::model::RunResult;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write the table as CSV with a `BOROUGH,BLOCK,...` header row.
pub fn write(result: &RunResult, out: Option<&Path>) -> Result<(), GuideError> {
    let writer: Box<dyn Write> = match out {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    write_to(result, writer)
}

fn write_to<W: Write>(result: &RunResult, writer: W) -> Result<(), GuideError> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(RunResult::header_row())
        .map_err(io::Error::from)?;
    for row in result.table_rows() {
        wtr.write_record(&row).map_err(io::Error::from)?;
    }
    wtr.flush()?;
    Ok(())
}
