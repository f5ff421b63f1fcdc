//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Filter, aggregate and pretty-print a CSV file
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    csv-sieve phones.csv\n  \
    csv-sieve phones.csv --filter price > 500\n  \
    csv-sieve phones.csv --filter \"brand == apple\"\n  \
    csv-sieve phones.csv --agg \"avg(price)\"")]
pub struct Args {
    /// Path to the CSV file
    pub file: PathBuf,

    /// Filter: column operator value (operators: == != >= <= > <)
    #[arg(long, num_args = 1.., value_name = "EXPR", allow_negative_numbers = true)]
    pub filter: Option<Vec<String>>,

    /// Aggregation: function(column) with function one of avg, min, max
    #[arg(long, value_name = "EXPR")]
    pub agg: Option<String>,

    /// Field delimiter (a single ASCII character, or "tab")
    #[arg(
        short,
        long,
        env = "CSV_SIEVE_DELIMITER",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("expected a single ASCII character, got '{raw}'")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_collects_every_token() {
        let args =
            Args::try_parse_from(["csv-sieve", "data.csv", "--filter", "price", ">", "-5"]).unwrap();
        assert_eq!(args.file, PathBuf::from("data.csv"));
        assert_eq!(args.filter.unwrap(), ["price", ">", "-5"]);
        assert!(args.agg.is_none());
    }

    #[test]
    fn agg_and_delimiter() {
        let args =
            Args::try_parse_from(["csv-sieve", "data.csv", "--agg", "avg(price)", "-d", ";"]).unwrap();
        assert_eq!(args.agg.as_deref(), Some("avg(price)"));
        assert_eq!(args.delimiter, b';');
    }

    #[test]
    fn delimiter_falls_back_to_env() {
        std::env::set_var("CSV_SIEVE_DELIMITER", "|");
        let from_env = Args::try_parse_from(["csv-sieve", "data.csv"]).unwrap();
        let from_flag = Args::try_parse_from(["csv-sieve", "data.csv", "-d", ";"]).unwrap();
        std::env::remove_var("CSV_SIEVE_DELIMITER");

        assert_eq!(from_env.delimiter, b'|');
        assert_eq!(from_flag.delimiter, b';');
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = Args::try_parse_from(["csv-sieve"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn delimiter_parsing() {
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("|"), Ok(b'|'));
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("é").is_err());
    }
}
