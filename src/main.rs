use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use csv_sieve::{app, cli::Args};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Results and diagnostics both go to stdout; only logs use stderr.
    let (text, code) = match app::run(&args) {
        Ok(report) => (report.to_string(), 0),
        Err(e) => {
            log::debug!("run failed: {e:?}");
            (e.to_string(), e.exit_code())
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context("writing to stdout")?;
    stdout.flush().context("flushing stdout")?;
    Ok(ExitCode::from(code))
}
