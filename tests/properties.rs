use num_rational::Ratio;
use optbst::{solve, OptimalTreeSolver, SolverConfig, TreeShape, Weight, WeightSequence};
use proptest::prelude::*;

/// Every search tree over keys `a..=b`.
fn all_shapes(a: usize, b: usize) -> Vec<TreeShape> {
    if a > b {
        return vec![TreeShape::Empty];
    }
    let mut shapes = Vec::new();
    for root in a..=b {
        let lefts = if root > a {
            all_shapes(a, root - 1)
        } else {
            vec![TreeShape::Empty]
        };
        let rights = all_shapes(root + 1, b);
        for left in &lefts {
            for right in &rights {
                shapes.push(TreeShape::from_parts(root, left.clone(), right.clone()));
            }
        }
    }
    shapes
}

fn brute_force_minimum<W: Weight>(weights: &WeightSequence<W>) -> W {
    let n = weights.len();
    if n == 0 {
        return W::zero();
    }
    all_shapes(0, n - 1)
        .iter()
        .filter_map(|shape| shape.expected_cost(weights))
        .min_by(|x, y| x.total_order(y))
        .unwrap_or_else(W::zero)
}

fn weight() -> impl Strategy<Value = f64> {
    prop_oneof![1 => Just(0.0), 4 => 0.001f64..100.0]
}

proptest! {
    #[test]
    fn cost_is_finite_and_zero_only_for_trivial_inputs(
        weights in proptest::collection::vec(weight(), 0..24),
    ) {
        let (cost, _) = solve(&weights, false).expect("weights are non-negative");
        prop_assert!(cost.is_finite());
        prop_assert!(cost >= 0.0);
        prop_assert_eq!(cost == 0.0, weights.len() <= 1);
    }

    #[test]
    fn tree_is_a_search_tree_over_all_keys(
        weights in proptest::collection::vec(weight(), 0..24),
    ) {
        let (_, tree) = solve(&weights, true).expect("weights are non-negative");
        let tree = tree.expect("tree requested");
        prop_assert!(tree.in_order().eq(0..weights.len()));
        prop_assert_eq!(tree.len(), weights.len());
    }

    #[test]
    fn reconstructed_tree_achieves_reported_cost(
        weights in proptest::collection::vec(weight(), 0..24),
    ) {
        let sequence = WeightSequence::new(weights).expect("weights are non-negative");
        let solution = OptimalTreeSolver::default().solve_sequence(&sequence);
        let tree = solution.tree.expect("tree requested");
        prop_assert_eq!(tree.expected_cost(&sequence), Some(solution.cost));
    }

    #[test]
    fn no_tree_beats_the_solver(
        weights in proptest::collection::vec(weight(), 0..7),
    ) {
        // All-zero inputs follow the fixed leftmost policy rather than the minimum
        prop_assume!(weights.len() <= 1 || weights.iter().any(|&w| w > 0.0));
        let sequence = WeightSequence::new(weights).expect("weights are non-negative");
        let solution = OptimalTreeSolver::default().solve_sequence(&sequence);
        let best = brute_force_minimum(&sequence);
        prop_assert!(
            (solution.cost - best).abs() <= 1e-9 * (1.0 + best),
            "solver {} vs exhaustive {}", solution.cost, best
        );
    }

    #[test]
    fn exact_solver_is_exactly_optimal(
        raw in proptest::collection::vec(0i128..10, 0..6),
    ) {
        prop_assume!(raw.len() <= 1 || raw.iter().any(|&w| w > 0));
        let weights: Vec<Ratio<i128>> = raw.into_iter().map(Ratio::from_integer).collect();
        let sequence = WeightSequence::new(weights).expect("weights are non-negative");
        let solution = OptimalTreeSolver::default().solve_sequence(&sequence);
        prop_assert_eq!(solution.cost, brute_force_minimum(&sequence));
    }

    #[test]
    fn appending_a_key_keeps_the_prefix_interval(
        weights in proptest::collection::vec(weight(), 1..20),
        extra in weight(),
    ) {
        let (cost, _) = solve(&weights, false).expect("weights are non-negative");

        let mut extended = weights.clone();
        extended.push(extra);
        let solver = OptimalTreeSolver::new(SolverConfig::cost_only().with_table(true));
        let solution = solver.solve(&extended).expect("weights are non-negative");
        let table = solution.table.expect("table retained");

        prop_assert_eq!(table.cost(0, weights.len() - 1), Some(cost));
        prop_assert!(solution.cost >= 1.0);
    }

    #[test]
    fn exact_scaling_keeps_every_root(
        raw in proptest::collection::vec(0i128..10, 0..8),
        numer in 1i128..50,
        denom in 1i128..50,
    ) {
        let factor = Ratio::new(numer, denom);
        let weights: Vec<Ratio<i128>> = raw.into_iter().map(Ratio::from_integer).collect();
        let scaled: Vec<Ratio<i128>> = weights.iter().map(|w| w * factor).collect();

        let solver = OptimalTreeSolver::new(SolverConfig::new().with_table(true));
        let plain = solver.solve(&weights).expect("weights are non-negative");
        let stretched = solver.solve(&scaled).expect("weights are non-negative");

        let roots = |s: &optbst::Solution<Ratio<i128>>| {
            s.table
                .as_ref()
                .map(|t| t.iter().map(|(i, e)| (i, e.root)).collect::<Vec<_>>())
        };
        prop_assert_eq!(roots(&plain), roots(&stretched));
        prop_assert_eq!(plain.tree, stretched.tree);
        prop_assert_eq!(plain.cost, stretched.cost);
    }

    // Float scaling is only exact for powers of two
    #[test]
    fn power_of_two_scaling_keeps_the_shape(
        weights in proptest::collection::vec(weight(), 0..20),
        exponent in -8i32..12,
    ) {
        let factor = 2f64.powi(exponent);
        let scaled: Vec<f64> = weights.iter().map(|w| w * factor).collect();

        let (cost, tree) = solve(&weights, true).expect("weights are non-negative");
        let (scaled_cost, scaled_tree) = solve(&scaled, true).expect("weights are non-negative");
        prop_assert_eq!(tree, scaled_tree);
        prop_assert_eq!(cost, scaled_cost);
    }

    #[test]
    fn repeated_solves_choose_identical_roots(
        weights in proptest::collection::vec(weight(), 0..16),
    ) {
        let solver = OptimalTreeSolver::new(SolverConfig::new().with_table(true));
        let first = solver.solve(&weights).expect("weights are non-negative");
        let second = solver.solve(&weights).expect("weights are non-negative");

        let roots = |s: &optbst::Solution<f64>| {
            s.table
                .as_ref()
                .map(|t| t.iter().map(|(_, e)| e.root).collect::<Vec<_>>())
        };
        prop_assert_eq!(roots(&first), roots(&second));
        prop_assert_eq!(first.cost.to_bits(), second.cost.to_bits());
        prop_assert_eq!(first.tree, second.tree);
    }
}
