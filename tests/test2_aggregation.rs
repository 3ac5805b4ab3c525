mod common;

use common::{round_with_differential, standard_round};
use golf_handicap::handicap::{aggregate, differential, round_to_tenth};
use golf_handicap::{HandicapConfig, calculate_handicap};

#[test]
fn differential_formula_is_exact_at_standard_slope() {
    assert_eq!(differential(90.0, 72.0, 113.0), 18.0);
}

#[test]
fn under_three_differentials_yields_no_index() {
    for diffs in [vec![], vec![5.0], vec![-3.0, 40.0]] {
        let agg = aggregate(&diffs);
        assert_eq!(agg.handicap_index, None);
        assert_eq!(agg.scores_used, 0);
        assert!(agg.used_positions.is_empty());
    }
}

#[test]
fn index_is_invariant_under_permutation() {
    let diffs = [10.1, 12.4, 9.8, 15.0, 11.2, 13.7, 8.9];
    let baseline = aggregate(&diffs).handicap_index;
    assert!(baseline.is_some());

    let mut rotated = diffs.to_vec();
    for _ in 0..diffs.len() {
        rotated.rotate_left(1);
        assert_eq!(aggregate(&rotated).handicap_index, baseline);
    }

    let mut reversed = diffs.to_vec();
    reversed.reverse();
    assert_eq!(aggregate(&reversed).handicap_index, baseline);
}

#[test]
fn identical_differentials_average_to_themselves() {
    // 5 scores: k = 1, no adjustment.
    let diffs = [10.0; 5];
    assert_eq!(aggregate(&diffs).handicap_index, Some(10.0));
}

#[test]
fn seven_scores_use_best_two() {
    let targets = [10.1, 12.4, 9.8, 15.0, 11.2, 13.7, 8.9];
    let rounds: Vec<_> = targets
        .iter()
        .enumerate()
        .map(|(i, &d)| round_with_differential(i as i64 + 1, d, "2024-05-01"))
        .collect();

    let result = calculate_handicap(&rounds, &HandicapConfig::default()).unwrap();

    // Lowest two are 8.9 and 9.8; mean 9.35 rounds to 9.4.
    assert_eq!(result.handicap_index, Some(9.4));
    assert_eq!(result.scores_used, 2);
    assert_eq!(result.total_scores, 7);
    assert_eq!(result.status, "Handicap established");

    let used_ids: Vec<i64> = result
        .scores
        .iter()
        .filter(|s| s.used_in_calculation)
        .map(|s| s.id)
        .collect();
    assert_eq!(used_ids, vec![3, 7]); // differentials 9.8 and 8.9
}

#[test]
fn four_scores_use_best_one_with_adjustment() {
    let rounds = vec![
        standard_round(1, 92, "2024-04-01"), // differential 20.0
        standard_round(2, 90, "2024-04-08"), // differential 18.0
        standard_round(3, 94, "2024-04-15"), // differential 22.0
        standard_round(4, 91, "2024-04-22"), // differential 19.0
    ];

    let result = calculate_handicap(&rounds, &HandicapConfig::default()).unwrap();

    // Lowest is 18.0, adjustment -1.0.
    assert_eq!(result.handicap_index, Some(17.0));
    assert_eq!(result.scores_used, 1);
    let used: Vec<i64> = result
        .scores
        .iter()
        .filter(|s| s.used_in_calculation)
        .map(|s| s.id)
        .collect();
    assert_eq!(used, vec![2]);
}

#[test]
fn ties_at_the_cutoff_mark_earliest_listed_rounds() {
    // 7 scores, k = 2, and four rounds share the lowest differential. The
    // stable sort must pick the first two in input order, never more than k.
    let rounds = vec![
        standard_round(1, 77, "2024-06-01"),
        standard_round(2, 77, "2024-06-02"),
        standard_round(3, 77, "2024-06-03"),
        standard_round(4, 77, "2024-06-04"),
        standard_round(5, 85, "2024-06-05"),
        standard_round(6, 88, "2024-06-06"),
        standard_round(7, 91, "2024-06-07"),
    ];

    let result = calculate_handicap(&rounds, &HandicapConfig::default()).unwrap();

    assert_eq!(result.handicap_index, Some(5.0));
    let used: Vec<i64> = result
        .scores
        .iter()
        .filter(|s| s.used_in_calculation)
        .map(|s| s.id)
        .collect();
    assert_eq!(used, vec![1, 2]);
}

#[test]
fn rounding_halves_go_away_from_zero() {
    // 0.25 and -0.25 are exact in binary, unlike decimal .x5 averages.
    assert_eq!(round_to_tenth(0.25), 0.3);
    assert_eq!(round_to_tenth(-0.25), -0.3);
    assert_eq!(round_to_tenth(0.24), 0.2);
    assert_eq!(round_to_tenth(17.0), 17.0);
}

#[test]
fn more_than_twenty_scores_average_best_eight() {
    // 21 scores 0..=20; best eight are 0..=7, mean 3.5.
    let diffs: Vec<f64> = (0..=20).map(f64::from).collect();
    let agg = aggregate(&diffs);
    assert_eq!(agg.handicap_index, Some(3.5));
    assert_eq!(agg.scores_used, 8);
}
