use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use indicatif::ProgressBar;
use jiff::SignedDuration;
use phaeton_engine::solver::{AssignStrategy, SolverParams, Threads};
use serde::Serialize;
use tracing::{info, warn};

use crate::{file_utils::read_instance_folder, parsers, solve::solve_file};

#[derive(Args)]
pub struct SolveDatasetArgs {
    /// Directory of `.in` instance files
    #[arg(short, long)]
    dataset: PathBuf,

    /// Output directory for the `.out` plans and the score report
    #[arg(short, long)]
    output: PathBuf,

    #[arg(short, long, value_parser = parsers::parse_strategy, default_value = "greedy-value")]
    strategy: AssignStrategy,

    /// Wall-clock budget per instance (e.g. "30s", "5m")
    #[arg(short, long, value_parser = parsers::parse_duration)]
    timeout: Option<SignedDuration>,

    #[arg(long, default_value_t = 1)]
    threads: u8,

    /// Also write the report as `report.json`
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ReportRow {
    instance: String,
    score: u64,
    duration_ms: i64,
}

#[derive(Serialize)]
struct Report {
    strategy: AssignStrategy,
    rows: Vec<ReportRow>,
    total_score: u64,
}

pub fn run(args: SolveDatasetArgs) -> Result<(), anyhow::Error> {
    info!("Solving dataset {:?} with {}", args.dataset, args.strategy);

    let files = read_instance_folder(&args.dataset)?;
    std::fs::create_dir_all(&args.output)?;

    let params = SolverParams {
        strategy: args.strategy,
        evaluation_threads: Threads::Multi(args.threads as usize),
        deadline: args.timeout,
    };

    let bar = ProgressBar::new(files.len() as u64);
    let mut rows = Vec::with_capacity(files.len());

    for file in &files {
        match solve_file(file, Some(&args.output), params.clone()) {
            Ok((score, elapsed)) => rows.push(ReportRow {
                instance: file
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
                score,
                duration_ms: elapsed.as_millis() as i64,
            }),
            // A malformed instance does not sink the batch.
            Err(error) => warn!("skipping {}: {:#}", file.display(), error),
        }
        bar.inc(1);
    }

    bar.finish_and_clear();

    let report = Report {
        strategy: args.strategy,
        total_score: rows.iter().map(|row| row.score).sum(),
        rows,
    };

    std::fs::write(args.output.join("README"), render_readme(&report))?;

    if args.json {
        std::fs::write(
            args.output.join("report.json"),
            serde_json::to_string_pretty(&report)?,
        )?;
    }

    println!("{}", render_table(&report));
    info!("total score: {}", report.total_score);

    Ok(())
}

fn render_readme(report: &Report) -> String {
    let mut text = String::new();
    for row in &report.rows {
        text += &format!("{:<20} {}\n", format!("{}:", row.instance), row.score);
    }
    text += &format!("{:<20} {}", "total:", report.total_score);
    text
}

fn render_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Instance", "Score", "Duration (ms)"]);
    for row in &report.rows {
        table.add_row(vec![
            row.instance.clone(),
            row.score.to_string(),
            row.duration_ms.to_string(),
        ]);
    }
    table.add_row(vec![
        String::from("total"),
        report.total_score.to_string(),
        String::new(),
    ]);
    table
}
