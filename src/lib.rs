//! # csv-sieve
//!
//! Load a CSV file into memory, then either print it as a grid table,
//! keep only the rows matching one `column operator value` filter, or
//! compute one `avg`/`min`/`max` aggregate over a numeric column.
//!
//! ```no_run
//! use clap::Parser;
//! use csv_sieve::{app, cli::Args};
//!
//! let args = Args::parse_from(["csv-sieve", "phones.csv", "--agg", "avg(price)"]);
//! match app::run(&args) {
//!     Ok(report) => println!("{report}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

pub mod app;
pub mod cli;
pub mod data;
pub mod error;
pub mod render;
