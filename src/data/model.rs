// ---------------------------------------------------------------------------
// Row – one record of the CSV file
// ---------------------------------------------------------------------------

/// A single data record. Cells are stored positionally; the owning
/// [`Dataset`] holds the header, so every row is keyed by the same columns
/// in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub(crate) fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Raw text of the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// All cells in header order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The full parsed CSV file: header columns plus every data row.
///
/// Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Column names in header order.
    columns: Vec<String>,
    /// Data rows, each with exactly `columns.len()` cells.
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, normalising every row to the header width.
    ///
    /// Short rows are padded with empty cells and long rows truncated.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut cells| {
                cells.resize(width, String::new());
                Row::new(cells)
            })
            .collect();
        Dataset { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header. With duplicate names the last
    /// column wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|c| c == name)
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row.get(index).unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rows_are_normalised_to_header_width() {
        let ds = Dataset::new(
            strings(&["a", "b", "c"]),
            vec![strings(&["1"]), strings(&["1", "2", "3", "4"])],
        );
        assert_eq!(ds.rows()[0].cells(), strings(&["1", "", ""]).as_slice());
        assert_eq!(ds.rows()[1].cells(), strings(&["1", "2", "3"]).as_slice());
    }

    #[test]
    fn column_lookup() {
        let ds = Dataset::new(strings(&["name", "price"]), vec![strings(&["x", "1"])]);
        assert_eq!(ds.column_index("price"), Some(1));
        assert_eq!(ds.column_index("color"), None);
        assert_eq!(ds.column_values(1).collect::<Vec<_>>(), vec!["1"]);
    }

    #[test]
    fn duplicate_header_resolves_to_last_column() {
        let ds = Dataset::new(strings(&["a", "b", "a"]), vec![strings(&["1", "2", "3"])]);
        assert_eq!(ds.column_index("a"), Some(2));
        assert_eq!(ds.column_values(2).collect::<Vec<_>>(), vec!["3"]);
    }
}
