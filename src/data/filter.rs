use std::fmt;
use std::str::FromStr;

use super::model::Dataset;
use crate::error::QueryError;

// ---------------------------------------------------------------------------
// Operator – the closed set of comparison symbols
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
}

impl Operator {
    /// Order in which an expression is scanned for operators. Two-character
    /// operators come first so that `>=` is never read as `>`.
    pub const SCAN_ORDER: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Ge,
        Operator::Le,
        Operator::Gt,
        Operator::Lt,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }

    fn apply<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Operator::Eq => lhs == rhs,
            Operator::Ne => lhs != rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Le => lhs <= rhs,
            Operator::Gt => lhs > rhs,
            Operator::Lt => lhs < rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Comparison – numeric or text mode, fixed once per filter
// ---------------------------------------------------------------------------

/// The right-hand side of a filter together with the comparison mode.
///
/// The mode is decided from the comparison value alone, so every row of a
/// run is compared the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// The value parsed as a float; cells are parsed too.
    Numeric(f64),
    /// Plain string equality and lexicographic ordering on the raw cell.
    Text(String),
}

impl Comparison {
    pub fn from_value(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(number) => Comparison::Numeric(number),
            Err(_) => Comparison::Text(raw.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Comparison::Numeric(_))
    }

    /// Whether `cell` satisfies `cell <op> value`.
    ///
    /// In numeric mode a cell that does not parse as a float never matches,
    /// whatever the operator (`!=` included). Such rows are excluded rather
    /// than reported.
    pub fn matches(&self, op: Operator, cell: &str) -> bool {
        match self {
            Comparison::Numeric(value) => match cell.trim().parse::<f64>() {
                Ok(number) => op.apply(&number, value),
                Err(_) => false,
            },
            Comparison::Text(value) => op.apply(cell, value.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSpec – parsed `column operator value`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub column: String,
    pub operator: Operator,
    pub comparison: Comparison,
}

impl FilterSpec {
    /// Join free-form CLI tokens with single spaces and parse the result.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, QueryError> {
        let expr = tokens
            .iter()
            .map(|token| token.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        expr.parse()
    }
}

impl FromStr for FilterSpec {
    type Err = QueryError;

    /// Split on the first operator found in [`Operator::SCAN_ORDER`].
    ///
    /// The operator chosen is the first in scan order that occurs anywhere
    /// in the expression, not the one at the lowest position.
    fn from_str(expr: &str) -> Result<Self, Self::Err> {
        let (operator, (column, value)) = Operator::SCAN_ORDER
            .iter()
            .find_map(|op| expr.split_once(op.symbol()).map(|parts| (*op, parts)))
            .ok_or(QueryError::OperatorNotFound)?;

        let column = column.trim();
        let value = value.trim();
        if column.is_empty() || value.is_empty() {
            return Err(QueryError::InvalidFilterFormat);
        }

        Ok(FilterSpec {
            column: column.to_string(),
            operator,
            comparison: Comparison::from_value(value),
        })
    }
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// Return indices of rows that satisfy `spec`, in file order.
pub fn filtered_indices(dataset: &Dataset, spec: &FilterSpec) -> Result<Vec<usize>, QueryError> {
    let col = dataset
        .column_index(&spec.column)
        .ok_or_else(|| QueryError::ColumnNotFound(spec.column.clone()))?;

    log::debug!(
        "filtering on {} {} {:?} ({} mode)",
        spec.column,
        spec.operator,
        spec.comparison,
        if spec.comparison.is_numeric() { "numeric" } else { "text" }
    );

    let indices: Vec<usize> = dataset
        .column_values(col)
        .enumerate()
        .filter(|(_, cell)| spec.comparison.matches(spec.operator, cell))
        .map(|(i, _)| i)
        .collect();

    log::info!("{} of {} rows match", indices.len(), dataset.len());
    Ok(indices)
}
