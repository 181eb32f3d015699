//! Optimal trees for a few weight distributions.

use optbst::weights::random_distribution;
use optbst::{solve, OptimalTreeSolver, SolverConfig, TreeShape};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    // Skewed towards the middle key
    let (cost, tree) = solve(&[0.1, 0.5, 0.4], true)?;
    println!("skewed: cost={cost} tree={}", tree.unwrap_or(TreeShape::Empty));

    // Keys nobody searches for still get a definite tree
    let (cost, tree) = solve(&[0.0, 0.0, 0.0], true)?;
    println!("unused: cost={cost} tree={}", tree.unwrap_or(TreeShape::Empty));

    let weights = random_distribution(12, 100, &mut StdRng::seed_from_u64(42));
    let solver = OptimalTreeSolver::new(SolverConfig::new());
    let solution = solver.solve(&weights)?;
    println!(
        "random(12): cost={:.4} height={} intervals={} candidates={}",
        solution.cost,
        solution.tree.as_ref().map_or(0, |t| t.height()),
        solution.stats.intervals,
        solution.stats.root_candidates
    );

    Ok(())
}
