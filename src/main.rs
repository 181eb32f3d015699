use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_rational::Ratio;
use optbst::analysis::{expected_runtime, sets_to_inspect, table_footprint};
use optbst::record::{parse_map_pair, parse_measurement_map, parse_number_list, weights_from_map};
use optbst::weights::random_distribution;
use optbst::{MemoEntry, OptimalTreeSolver, Solution, SolverConfig, Weight};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "optbst", about = "Minimum expected-cost binary search trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve for weights given on the command line.
    Solve {
        /// Key weights in search order.
        #[arg(required = true, allow_hyphen_values = true)]
        weights: Vec<String>,
        /// Use exact rational arithmetic; weights are `p` or `p/q`.
        #[arg(long)]
        exact: bool,
        /// Report the cost only.
        #[arg(long)]
        no_tree: bool,
        /// Print every memo table entry.
        #[arg(long)]
        table: bool,
    },
    /// Solve for the weights of a record file.
    Record {
        /// File holding a `[w, ...]` list, a `{key=[values]}` map or a
        /// `<map, map>` pair record.
        path: PathBuf,
        /// Take the second map of a pair record instead of the first.
        #[arg(long)]
        second: bool,
    },
    /// Solve a random access distribution.
    Random {
        /// Number of keys.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Integer draws per key are taken from 1..=resolution.
        #[arg(long, default_value_t = 100)]
        resolution: u32,
        /// Seed for reproducible draws.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print table size, root-candidate count and table memory for n keys.
    Complexity {
        /// Number of keys.
        n: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            weights,
            exact,
            no_tree,
            table,
        } => {
            let config = SolverConfig::new().with_tree(!no_tree).with_table(table);
            if exact {
                let parsed = parse_all::<Ratio<i64>>(&weights)?;
                run_solve(&config, &parsed)?;
            } else {
                let parsed = parse_all::<f64>(&weights)?;
                run_solve(&config, &parsed)?;
            }
        }
        Commands::Record { path, second } => run_record(path, second)?,
        Commands::Random {
            count,
            resolution,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let weights = random_distribution(count, resolution, &mut rng);
            println!("weights\t{}", join(&weights));
            run_solve(&SolverConfig::new(), &weights)?;
        }
        Commands::Complexity { n } => {
            println!("intervals\t{}", sets_to_inspect(n));
            println!("root_candidates\t{}", expected_runtime(n));
            println!(
                "table_bytes\t{}",
                table_footprint(n, std::mem::size_of::<MemoEntry<f64>>())
            );
        }
    }

    Ok(())
}

fn parse_all<W>(raw: &[String]) -> Result<Vec<W>>
where
    W: std::str::FromStr,
    W::Err: std::error::Error + Send + Sync + 'static,
{
    raw.iter()
        .enumerate()
        .map(|(idx, text)| {
            text.parse::<W>()
                .with_context(|| format!("invalid weight '{}' at position {}", text, idx))
        })
        .collect()
}

fn run_record(path: PathBuf, second: bool) -> Result<()> {
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read record from {}", path.display()))?;
    let contents = contents.trim();

    if contents.starts_with('[') {
        let weights = parse_number_list(contents)
            .with_context(|| format!("malformed list record in {}", path.display()))?;
        info!(keys = weights.len(), "decoded record");
        return run_solve(&SolverConfig::new(), &weights);
    }

    let map = if contents.starts_with('<') {
        let (first, other) = parse_map_pair(contents)
            .with_context(|| format!("malformed pair record in {}", path.display()))?;
        if second {
            other
        } else {
            first
        }
    } else {
        parse_measurement_map(contents)
            .with_context(|| format!("malformed map record in {}", path.display()))?
    };

    info!(keys = map.len(), "decoded record");
    let keys: Vec<i64> = map.iter().map(|(key, _)| *key).collect();
    println!("keys\t{}", join(&keys));
    run_solve(&SolverConfig::new(), &weights_from_map(&map))
}

fn run_solve<W: Weight + Display>(config: &SolverConfig, weights: &[W]) -> Result<()> {
    let solver = OptimalTreeSolver::new(config.clone());
    let solution = solver.solve(weights).context("solve failed")?;
    print_solution(&solution);
    Ok(())
}

fn print_solution<W: Weight + Display>(solution: &Solution<W>) {
    println!("cost\t{}", solution.cost);
    if let Some(tree) = &solution.tree {
        println!("tree\t{}", tree);
        println!("height\t{}", tree.height());
    }
    println!(
        "work\tintervals={}\troot_candidates={}",
        solution.stats.intervals, solution.stats.root_candidates
    );

    if let Some(table) = &solution.table {
        for (interval, entry) in table.iter() {
            println!("{}\tcost={}\troot={}", interval, entry.cost, entry.root);
        }
    }
}

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
