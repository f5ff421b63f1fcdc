/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///     .csv
///       │
///       ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset
///   └──────────┘
///       │
///       ▼
///   ┌──────────┐
///   │ Dataset  │  header columns, Vec<Row>
///   └──────────┘
///       │
///       ├──────────────────┐
///       ▼                  ▼
///   ┌──────────┐     ┌───────────┐
///   │  filter  │     │ aggregate │
///   └──────────┘     └───────────┘
///   row indices       func(column) = value
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
