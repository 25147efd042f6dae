use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Subcommand;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::info;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Write a random instance file for benchmarking
    Instance {
        /// Output `.in` file
        #[arg(long, short = 'o')]
        out: PathBuf,

        #[arg(long, default_value_t = 800)]
        rows: u64,

        #[arg(long, default_value_t = 1000)]
        cols: u64,

        #[arg(long, default_value_t = 50)]
        cars: u64,

        #[arg(long, default_value_t = 1000)]
        rides: u64,

        #[arg(long, default_value_t = 25)]
        bonus: u64,

        #[arg(long, default_value_t = 25_000)]
        steps: u64,

        #[arg(long, default_value_t = 2427121)]
        seed: u64,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::Instance {
            out,
            rows,
            cols,
            cars,
            rides,
            bonus,
            steps,
            seed,
        } => {
            let text = random_instance(rows, cols, cars, rides, bonus, steps, seed);

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, text)?;
            info!("wrote {} rides to {}", rides, out.display());
        }
    }

    Ok(())
}

fn random_instance(
    rows: u64,
    cols: u64,
    cars: u64,
    rides: u64,
    bonus: u64,
    steps: u64,
    seed: u64,
) -> String {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut text = format!("{rows} {cols} {cars} {rides} {bonus} {steps}\n");

    for _ in 0..rides {
        let (a, b) = (rng.random_range(0..rows), rng.random_range(0..cols));
        let (x, y) = (rng.random_range(0..rows), rng.random_range(0..cols));
        let length = a.abs_diff(x) + b.abs_diff(y);

        let start = rng.random_range(0..steps);
        let earliest_end = start + length;
        let end = if earliest_end >= steps {
            earliest_end
        } else {
            rng.random_range(earliest_end..=steps)
        };

        let _ = writeln!(text, "{a} {b} {x} {y} {start} {end}");
    }

    text
}
