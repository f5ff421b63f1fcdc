use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Dataset;

/// Failure to turn a file into a [`Dataset`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file with a header row into memory.
///
/// The file handle lives only inside this function, so it is closed before
/// any filtering or aggregation starts. Blank lines are skipped. Records
/// whose width differs from the header are padded or truncated and logged.
pub fn load_csv(path: &Path, delimiter: u8) -> Result<Dataset, LoadError> {
    let open_err = |source: csv::Error| LoadError::Open {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(open_err)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(open_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (record_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            record: record_no + 1,
            source,
        })?;

        if record.len() != columns.len() {
            log::warn!(
                "record {} has {} fields, header has {}; normalising",
                record_no + 1,
                record.len(),
                columns.len()
            );
        }
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    let dataset = Dataset::new(columns, rows);
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.columns(),
        path.display()
    );
    Ok(dataset)
}
