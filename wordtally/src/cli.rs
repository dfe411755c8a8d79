// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use crate::core::config::{ReportConfig, load_config};
use crate::core::counter::count_file;
use crate::core::report::render_report;
use crate::core::sorter::rank;
use crate::utils::prompt;

const INPUT_PROMPT: &str = "Enter name of input file here (full extension): ";
const OUTPUT_PROMPT: &str = "Enter name of output file here (full extension): ";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to count (asked for interactively when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// HTML report to write (asked for interactively when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of rows to show in each table
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// TOML file with report settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name shown in the report heading (defaults to the input file name)
    #[arg(long)]
    pub title: Option<String>,
}

/// Runs the report with the process's standard input and output.
///
/// Both streams stay locked until the run finishes.
///
/// # Errors
///
/// Returns an error if any step of [`run_with`] fails.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_with(args, &mut input, &mut output)
}

/// Reads the input file, counts its words and writes the HTML report.
///
/// File names missing from `args` are asked for on `output` and read from
/// `input`. A confirmation line is written to `output` once the report is
/// complete.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be loaded
/// * A prompt cannot be answered
/// * The input file cannot be opened or read
/// * The output file cannot be created or written
pub fn run_with<R: BufRead, W: Write>(args: Args, input: &mut R, output: &mut W) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ReportConfig::default(),
    };
    if args.top.is_some() {
        config.top = args.top;
    }

    let (input_path, input_name) = match args.input {
        Some(path) => {
            let name = path.display().to_string();
            (path, name)
        }
        None => {
            let name = prompt(input, output, INPUT_PROMPT)?;
            (PathBuf::from(&name), name)
        }
    };

    let output_path = match args.output {
        Some(path) => path,
        None => PathBuf::from(prompt(input, output, OUTPUT_PROMPT)?),
    };

    let table = count_file(&input_path, &config.separators())?;
    let tables = rank(table);

    let title = args.title.unwrap_or(input_name);
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    render_report(&mut writer, &title, tables, &config)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    writeln!(output, "Confirm: Output file finished")?;
    Ok(())
}
