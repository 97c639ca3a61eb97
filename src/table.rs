use polars::prelude::*;
use std::io::Cursor;

/// Name given to the synthetic column holding row labels, dropped after the parse.
const ROW_LABEL: &str = "__row_label__";

/// Parses CSV text with a header row into a `DataFrame`, inferring column
/// types from the data.
///
/// A data row may carry exactly one field more than the header names; that
/// leading field is a row label, not a column, and is dropped so the parsed
/// columns line up with the header.
pub(crate) fn read_csv(text: &str) -> PolarsResult<DataFrame> {
    let trimmed = text.trim();
    let labeled = has_row_labels(trimmed);
    let input = if labeled {
        format!("{},{}", ROW_LABEL, trimmed)
    } else {
        trimmed.to_string()
    };

    let mut frame = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(input))
        .finish()?;

    if labeled {
        frame.drop_in_place(ROW_LABEL)?;
    }

    Ok(frame)
}

fn has_row_labels(text: &str) -> bool {
    let mut lines = text.lines();
    match (lines.next(), lines.next()) {
        (Some(header), Some(first_row)) => field_count(first_row) == field_count(header) + 1,
        _ => false,
    }
}

// Naive about quoted commas; provider rows are plain scalars.
fn field_count(line: &str) -> usize {
    line.split(',').count()
}
