use std::fmt;
use std::str::FromStr;

use super::model::Dataset;
use crate::error::QueryError;

/// Aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggFunction {
    /// Arithmetic mean, printed with two decimals
    Avg,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
}

impl AggFunction {
    pub fn name(self) -> &'static str {
        match self {
            AggFunction::Avg => "avg",
            AggFunction::Min => "min",
            AggFunction::Max => "max",
        }
    }

    /// Reduce `values`; `None` when there is nothing to reduce.
    pub fn compute(self, values: &[f64]) -> Option<f64> {
        let (&first, rest) = values.split_first()?;
        let result = match self {
            AggFunction::Avg => values.iter().sum::<f64>() / values.len() as f64,
            AggFunction::Min => rest.iter().fold(first, |acc, &v| if v < acc { v } else { acc }),
            AggFunction::Max => rest.iter().fold(first, |acc, &v| if v > acc { v } else { acc }),
        };
        Some(result)
    }
}

impl FromStr for AggFunction {
    type Err = QueryError;

    /// Expects an already lower-cased name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "avg" => Ok(AggFunction::Avg),
            "min" => Ok(AggFunction::Min),
            "max" => Ok(AggFunction::Max),
            other => Err(QueryError::UnsupportedFunction(other.to_string())),
        }
    }
}

impl fmt::Display for AggFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// AggSpec – parsed `function(column)`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggSpec {
    pub function: AggFunction,
    pub column: String,
}

impl FromStr for AggSpec {
    type Err = QueryError;

    /// The function is the text before the first `(`, trimmed and
    /// lower-cased; the column is the rest with trailing `)` removed.
    fn from_str(expr: &str) -> Result<Self, Self::Err> {
        let expr = expr.trim();
        if !expr.contains(')') {
            return Err(QueryError::InvalidAggFormat);
        }
        let (func, col) = expr.split_once('(').ok_or(QueryError::InvalidAggFormat)?;

        let function: AggFunction = func.trim().to_lowercase().parse()?;
        let column = col.trim_end_matches(')').trim().to_string();
        Ok(AggSpec { function, column })
    }
}

// ---------------------------------------------------------------------------
// AggregateResult
// ---------------------------------------------------------------------------

/// One computed summary, printed as `func(column) = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub function: AggFunction,
    pub column: String,
    pub value: f64,
}

impl fmt::Display for AggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            AggFunction::Avg => write!(f, "{}({}) = {:.2}", self.function, self.column, self.value),
            AggFunction::Min | AggFunction::Max => {
                write!(f, "{}({}) = {}", self.function, self.column, self.value)
            }
        }
    }
}

/// Compute `spec` over every row of `dataset`.
///
/// A single non-numeric cell aborts the whole computation.
pub fn aggregate(dataset: &Dataset, spec: &AggSpec) -> Result<AggregateResult, QueryError> {
    let col = dataset
        .column_index(&spec.column)
        .ok_or_else(|| QueryError::ColumnNotFound(spec.column.clone()))?;

    let values = dataset
        .column_values(col)
        .map(|cell| {
            cell.trim()
                .parse::<f64>()
                .map_err(|_| QueryError::NotANumber(cell.to_string()))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let value = spec.function.compute(&values).ok_or(QueryError::NoData)?;
    log::debug!("{}({}) over {} values", spec.function, spec.column, values.len());

    Ok(AggregateResult {
        function: spec.function,
        column: spec.column.clone(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones() -> Dataset {
        let rows = [
            ["iphone 15 pro", "999", "4.9"],
            ["galaxy s23 ultra", "1199", "4.8"],
            ["redmi note 12", "199", "4.6"],
            ["poco x5 pro", "299", "4.4"],
        ];
        Dataset::new(
            ["name", "price", "rating"].map(String::from).to_vec(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn run(expr: &str) -> Result<String, QueryError> {
        let spec: AggSpec = expr.parse()?;
        aggregate(&phones(), &spec).map(|r| r.to_string())
    }

    #[test]
    fn avg_has_two_decimals() {
        assert_eq!(run("avg(price)").unwrap(), "avg(price) = 674.00");
    }

    #[test]
    fn min_max_use_natural_formatting() {
        assert_eq!(run("min(price)").unwrap(), "min(price) = 199");
        assert_eq!(run("max(price)").unwrap(), "max(price) = 1199");
        assert_eq!(run("max(rating)").unwrap(), "max(rating) = 4.9");
        assert_eq!(run("min(rating)").unwrap(), "min(rating) = 4.4");
    }

    #[test]
    fn names_are_trimmed_and_function_lowercased() {
        assert_eq!(run(" avg( price ) ").unwrap(), "avg(price) = 674.00");
        assert_eq!(run("MAX (rating)").unwrap(), "max(rating) = 4.9");
    }

    #[test]
    fn format_errors() {
        assert_eq!(run("avg price"), Err(QueryError::InvalidAggFormat));
        assert_eq!(run("avg(price"), Err(QueryError::InvalidAggFormat));
        assert_eq!(run("avg price)"), Err(QueryError::InvalidAggFormat));
        assert_eq!(
            run("sum(price)"),
            Err(QueryError::UnsupportedFunction("sum".into()))
        );
        assert_eq!(
            run("avg(size)"),
            Err(QueryError::ColumnNotFound("size".into()))
        );
    }

    #[test]
    fn one_bad_cell_aborts() {
        assert_eq!(
            run("avg(name)"),
            Err(QueryError::NotANumber("iphone 15 pro".into()))
        );
    }

    #[test]
    fn empty_input_has_no_result() {
        assert_eq!(AggFunction::Avg.compute(&[]), None);
        let ds = Dataset::new(vec!["x".into()], Vec::new());
        let spec: AggSpec = "max(x)".parse().unwrap();
        assert_eq!(aggregate(&ds, &spec), Err(QueryError::NoData));
    }
}
