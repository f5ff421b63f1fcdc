//! Grid table rendering.
//!
//! Rows are copied into an all-`Utf8` Arrow [`RecordBatch`] and printed with
//! Arrow's pretty printer, which draws the bordered, column-aligned grid.

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{Dataset, Row};

/// Render every row of `dataset`.
pub fn render_all(dataset: &Dataset) -> Result<String, ArrowError> {
    render_rows(dataset.columns(), dataset.rows().iter())
}

/// Render the rows at `indices`, in the given order.
pub fn render_selected(dataset: &Dataset, indices: &[usize]) -> Result<String, ArrowError> {
    render_rows(
        dataset.columns(),
        indices.iter().filter_map(|&i| dataset.rows().get(i)),
    )
}

fn render_rows<'a, I>(columns: &[String], rows: I) -> Result<String, ArrowError>
where
    I: Iterator<Item = &'a Row>,
{
    let schema = Arc::new(Schema::new(
        columns
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, false))
            .collect::<Vec<_>>(),
    ));

    // Rows already have exactly one cell per header column.
    let mut by_column: Vec<Vec<&str>> = vec![Vec::new(); columns.len()];
    for row in rows {
        for (column, cell) in by_column.iter_mut().zip(row.cells()) {
            column.push(cell);
        }
    }

    let arrays: Vec<ArrayRef> = by_column
        .into_iter()
        .map(|cells| Arc::new(StringArray::from(cells)) as ArrayRef)
        .collect();

    let batch = RecordBatch::try_new(schema, arrays)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}
