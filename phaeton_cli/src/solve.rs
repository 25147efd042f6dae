use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use jiff::{SignedDuration, Timestamp};
use phaeton_engine::{
    parsers::{HashCodeParser, InstanceParser},
    solver::{AssignStrategy, Solver, SolverParams, Threads},
};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct SolveArgs {
    /// The instance file to solve
    #[arg(short, long)]
    input: PathBuf,

    /// Directory for the `.out` plan (default: alongside the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_parser = parsers::parse_strategy, default_value = "greedy-value")]
    strategy: AssignStrategy,

    /// Wall-clock budget for the solve (e.g. "30s", "5m")
    #[arg(short, long, value_parser = parsers::parse_duration)]
    timeout: Option<SignedDuration>,

    /// Worker threads for candidate evaluation
    #[arg(long, default_value_t = 1)]
    threads: u8,
}

pub fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    if let Some(output) = &args.output {
        std::fs::create_dir_all(output)?;
    }

    let params = SolverParams {
        strategy: args.strategy,
        evaluation_threads: Threads::Multi(args.threads as usize),
        deadline: args.timeout,
    };

    solve_file(&args.input, args.output.as_deref(), params)?;

    Ok(())
}

/// Parses, solves and writes one instance. Returns the plan score and the
/// solve duration.
pub fn solve_file(
    input: &Path,
    output_dir: Option<&Path>,
    params: SolverParams,
) -> Result<(u64, SignedDuration), anyhow::Error> {
    let (city, rides) = HashCodeParser
        .from_file(input)
        .with_context(|| format!("parsing {}", input.display()))?;

    let started = Timestamp::now();
    let plan = Solver::new(city, rides, params).solve();
    let elapsed = Timestamp::now().duration_since(started);

    let out_path = output_path(input, output_dir);
    std::fs::write(&out_path, plan.format())
        .with_context(|| format!("writing {}", out_path.display()))?;

    let score = plan.total_score();
    info!("{}: score {} in {:?}", input.display(), score, elapsed);

    Ok((score, elapsed))
}

fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => {
            let mut name = input.file_stem().unwrap_or_default().to_os_string();
            name.push(".out");
            dir.join(name)
        }
        None => input.with_extension("out"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let input = Path::new("data/a_example.in");
        assert_eq!(output_path(input, None), Path::new("data/a_example.out"));
        assert_eq!(
            output_path(input, Some(Path::new("out"))),
            Path::new("out/a_example.out")
        );
    }
}
