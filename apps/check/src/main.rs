#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use codr_check::{Checker, DEFAULT_BASE_URL};
use codr_logger::{LevelFilter, Logger};
use std::process::ExitCode;

/// Checks a running codr.io site: status, assets, background, links and text.
#[derive(Debug, Parser)]
#[command(name = "codr-check")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Root URL of the site under test
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Text the home page must contain (repeatable, defaults to the greeting)
    #[arg(long = "expect-text", value_name = "TEXT")]
    expect_text: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log each check as it runs
    #[arg(short, long)]
    verbose: bool,
}

#[codr_runtime::main(memory_efficient)]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::INFO } else { LevelFilter::WARN };
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).init()?;

    let checker = cli
        .expect_text
        .into_iter()
        .fold(Checker::new(&cli.base_url)?, |checker, text| checker.expect_text(text));

    let report = checker.run().await;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }

    Ok(if report.passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
