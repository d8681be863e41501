//! # tsp-bench CLI
//!
//! Loads an instance (bundled, random, or JSON file), runs both solvers,
//! and prints the comparison as text or JSON.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tsp_bench::compare::compare;
use tsp_bench::distance::DistanceMatrix;
use tsp_bench::instances::{random_points, read_points, southern_chile};
use tsp_bench::models::Point;
use tsp_bench::report::{render_comparison, render_steps};
use tsp_bench::solvers::nearest_neighbor_steps;
use tsp_bench::Result;

/// Above this size a single exhaustive run takes minutes to hours.
const EXHAUSTIVE_PRACTICAL_LIMIT: usize = 12;

#[derive(Parser)]
#[command(name = "tsp-bench")]
#[command(about = "Compare exhaustive TSP search against the nearest-neighbor heuristic")]
#[command(version)]
struct Cli {
    /// JSON instance file (array of {name, x, y} points)
    #[arg(long, conflicts_with = "random")]
    instance: Option<PathBuf>,

    /// Generate a random instance with this many points
    #[arg(long)]
    random: Option<usize>,

    /// Seed for random instance generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Side length of the square random points are drawn from
    #[arg(long, default_value_t = 100.0)]
    extent: f64,

    /// Also print the greedy walk, one leg per line
    #[arg(long)]
    steps: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn load_points(cli: &Cli) -> Result<Vec<Point>> {
    if let Some(path) = &cli.instance {
        read_points(path)
    } else if let Some(n) = cli.random {
        let mut rng = StdRng::seed_from_u64(cli.seed);
        random_points(n, cli.extent, &mut rng)
    } else {
        Ok(southern_chile())
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let points = load_points(&cli)?;

    if points.len() > EXHAUSTIVE_PRACTICAL_LIMIT {
        warn!(
            "{} points exceeds the practical exhaustive limit of {}; this run may take a very long time",
            points.len(),
            EXHAUSTIVE_PRACTICAL_LIMIT
        );
    }

    let report = compare(&points)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_comparison(&report, &points));
    }

    if cli.steps {
        let dm = DistanceMatrix::from_points(&points)?;
        let (_, steps) = nearest_neighbor_steps(&dm)?;
        println!("\nGREEDY WALK");
        println!("{}", render_steps(&steps, &points));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tsp-bench"]).expect("valid");
        assert!(cli.instance.is_none());
        assert!(cli.random.is_none());
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.extent, 100.0);
        assert!(!cli.steps);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_random_flags() {
        let cli =
            Cli::try_parse_from(["tsp-bench", "--random", "6", "--seed", "7"]).expect("valid");
        assert_eq!(cli.random, Some(6));
        assert_eq!(cli.seed, 7);
    }

    #[test]
    fn test_cli_instance_conflicts_with_random() {
        let parsed = Cli::try_parse_from(["tsp-bench", "--instance", "x.json", "--random", "5"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_load_points_rejects_bad_extent() {
        let cli = Cli::try_parse_from(["tsp-bench", "--random", "4", "--extent=-1"])
            .expect("parses");
        assert!(matches!(
            load_points(&cli),
            Err(tsp_bench::Error::InvalidInput(_))
        ));
    }
}
