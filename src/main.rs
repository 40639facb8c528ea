//! Command-line front-end.
//!
//! Four modes: a full console report (no arguments), a full report to a file
//! (`--output`), interactive selection of a single meeting (`--menu`), and
//! the generated `--help`. Any fetch or extraction error aborts the run with
//! a non-zero exit status.

use clap::Parser;
use hampug_meetings::{menu, Dataset, HttpFetcher, ReportBuilder, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::info;

/// Filename used when `--output` is given without a value.
const DEFAULT_OUTPUT_FILE: &str = "hampug_meetings_as_text.txt";

const HEADING: &str = "\nHamPUG - Meetings README.md and Meetup data extractor.";

#[derive(Parser)]
#[command(
    name = "hampug-meetings",
    version,
    about = "Displays the github.com/HamPUG/meetings README.md files as text,\nalong with the matching meetup.com event details."
)]
struct Cli {
    /// Write the full report to a file instead of the console
    #[arg(
        short,
        long,
        value_name = "FILENAME",
        num_args = 0..=1,
        default_missing_value = DEFAULT_OUTPUT_FILE,
        conflicts_with = "menu"
    )]
    output: Option<String>,

    /// Select a single meeting from a menu
    #[arg(short, long)]
    menu: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    println!("{HEADING}");

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let dataset = Dataset::builtin()?;
    let fetcher = HttpFetcher::new()?;
    let report = ReportBuilder::new(&fetcher, &dataset)?;

    if cli.menu {
        return run_menu(&report);
    }

    print_banner(&dataset);

    match cli.output.as_deref() {
        Some(filename) => {
            println!("Writing text of all meetings to the file: {filename}");
            let mut out = BufWriter::new(File::create(filename)?);
            report.write_report(&mut out)?;
            println!("Review text of all meetings in the file: {filename}");
        }
        None => {
            report.write_report(&mut io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Interactive mode: pick one meeting, print its section, no rule line.
fn run_menu(report: &ReportBuilder) -> Result<()> {
    println!("Selection of a meeting via a menu");

    let dates: Vec<&str> = report
        .dataset()
        .meetings
        .iter()
        .map(|m| m.date.as_str())
        .collect();

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let index = menu::prompt_selection(
        &dates,
        &mut stdin,
        &mut stdout,
        "Select date of meeting",
        1,
    )?;
    drop(stdin);

    info!(date = dates[index], "meeting selected");
    let section = report.section(index)?;
    writeln!(stdout, "{section}")?;
    Ok(())
}

fn print_banner(dataset: &Dataset) {
    if let (Some(first), Some(last)) = (dataset.first_date(), dataset.last_date()) {
        println!(
            "Meeting list is from {first} to {last}, a total of {} meetings.",
            dataset.len()
        );
    }
}
