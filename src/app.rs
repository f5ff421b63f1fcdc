use std::fmt;

use crate::cli::Args;
use crate::data::aggregate::{aggregate, AggSpec, AggregateResult};
use crate::data::filter::{filtered_indices, FilterSpec};
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::error::AppError;
use crate::render;

// ---------------------------------------------------------------------------
// Report – what a successful run prints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A rendered grid table (full listing or filtered rows).
    Table(String),
    /// A single `func(column) = value` line.
    Aggregate(AggregateResult),
    /// The file had a header but no data rows.
    EmptyFile,
    /// The filter was valid but selected nothing.
    NoMatch,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Table(table) => f.write_str(table),
            Report::Aggregate(result) => write!(f, "{result}"),
            Report::EmptyFile => f.write_str("file is empty"),
            Report::NoMatch => f.write_str("no rows match filter"),
        }
    }
}

// ---------------------------------------------------------------------------
// Command processor
// ---------------------------------------------------------------------------

/// The action requested on the command line. Filter wins over aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Display,
    Filter(Vec<String>),
    Aggregate(String),
}

impl Command {
    pub fn from_args(args: &Args) -> Self {
        match (&args.filter, &args.agg) {
            (Some(tokens), agg) => {
                if agg.is_some() {
                    log::debug!("--filter given, ignoring --agg");
                }
                Command::Filter(tokens.clone())
            }
            (None, Some(expr)) => Command::Aggregate(expr.clone()),
            (None, None) => Command::Display,
        }
    }

    /// Run this command against an already loaded, non-empty dataset.
    pub fn execute(&self, dataset: &Dataset) -> Result<Report, AppError> {
        match self {
            Command::Display => Ok(Report::Table(render::render_all(dataset)?)),
            Command::Filter(tokens) => {
                let spec = FilterSpec::from_tokens(tokens)?;
                let indices = filtered_indices(dataset, &spec)?;
                if indices.is_empty() {
                    return Ok(Report::NoMatch);
                }
                Ok(Report::Table(render::render_selected(dataset, &indices)?))
            }
            Command::Aggregate(expr) => {
                let spec: AggSpec = expr.parse()?;
                Ok(Report::Aggregate(aggregate(dataset, &spec)?))
            }
        }
    }
}

/// Load the file named in `args` and run the requested command.
pub fn run(args: &Args) -> Result<Report, AppError> {
    let dataset = load_csv(&args.file, args.delimiter)?;
    if dataset.is_empty() {
        log::info!("{} has no data rows", args.file.display());
        return Ok(Report::EmptyFile);
    }

    let command = Command::from_args(args);
    log::debug!("dispatching {command:?}");
    command.execute(&dataset)
}
