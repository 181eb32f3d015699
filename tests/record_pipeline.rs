//! Records decoded from profiling output feed straight into the solver

use optbst::record::{
    parse_map_pair, parse_measurement_map, parse_number_list, weights_from_map, RecordError,
};
use optbst::solve;

const QUERY_COUNTS: &str = "{257=[4155284], 727=[4386628], 771=[4245302], 780=[4154669], 915=[4377104]}";

const PAIR: &str = "<{257=[4155284], 727=[4386628], 771=[4245302]}, {257=[594489], 727=[574827], 771=[548712]}>";

#[test]
fn map_record_solves_over_its_keys() {
    let map = parse_measurement_map(QUERY_COUNTS).expect("well-formed record");
    let weights = weights_from_map(&map);
    assert_eq!(weights.len(), 5);

    let (cost, tree) = solve(&weights, true).expect("counts are non-negative");
    let tree = tree.expect("tree requested");
    assert!(tree.is_search_tree_over(5));
    assert!(cost >= 1.0 && cost < 5.0);
}

#[test]
fn pair_record_yields_two_weight_sets() {
    let (first, second) = parse_map_pair(PAIR).expect("well-formed pair");
    let first = weights_from_map(&first);
    let second = weights_from_map(&second);
    assert_eq!(first, vec![4155284.0, 4386628.0, 4245302.0]);
    assert_eq!(second.len(), 3);

    // Three roughly equal weights: the middle key is the root either way
    for weights in [first, second] {
        let (_, tree) = solve(&weights, true).unwrap();
        assert_eq!(tree.and_then(|t| t.root()), Some(1));
    }
}

#[test]
fn empty_record_is_distinct_from_a_broken_one() {
    let empty = parse_measurement_map("{}").expect("empty map is valid");
    let (cost, tree) = solve(&weights_from_map(&empty), true).unwrap();
    assert_eq!(cost, 0.0);
    assert!(tree.unwrap().is_empty());

    let broken = parse_measurement_map("{257=[4155284], 727=");
    assert_eq!(broken, Err(RecordError::Expected { expected: "[", offset: 20 }));
}

#[test]
fn list_record_is_solved_directly() {
    let weights = parse_number_list("[0.1, 0.5, 0.4]").expect("well-formed list");
    let (cost, tree) = solve(&weights, true).unwrap();
    assert_eq!(cost, 1.0);
    assert_eq!(tree.unwrap().to_string(), "(1, (0,), (2,))");

    // A negative entry decodes fine but is refused by the solver
    let weights = parse_number_list("[0.5, -0.5]").unwrap();
    assert!(solve(&weights, false).is_err());
}
