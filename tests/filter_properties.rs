//! Filter Property Tests
//!
//! Tests for engine invariants over random inputs:
//! - Complementary comparisons partition the index set
//! - Every returned value satisfies its comparison
//! - Index and value outputs line up
//! - Output is ascending by value

use fastfilter::{
    filter, filter_gt, filter_gt_index, filter_gte, filter_gte_index, filter_lt, filter_lt_index,
    filter_lte, filter_lte_index, select_indices, select_values, Comparison, FilterOutput,
    Projection,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

// =============================================================================
// Helper Functions
// =============================================================================

fn random_input(rng: &mut StdRng) -> Vec<i64> {
    let len = rng.gen_range(0..64);
    // Narrow range forces plenty of ties
    (0..len).map(|_| rng.gen_range(-20..20)).collect()
}

fn cases() -> Vec<(Vec<i64>, i64)> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..300)
        .map(|_| {
            let input = random_input(&mut rng);
            let pivot = rng.gen_range(-25..25);
            (input, pivot)
        })
        .collect()
}

fn index_set(indices: &[usize]) -> HashSet<usize> {
    indices.iter().copied().collect()
}

// =============================================================================
// Partition Tests
// =============================================================================

/// lt and gte split the input exactly, as do lte and gt.
#[test]
fn test_complements_partition_indices() {
    for (input, pivot) in cases() {
        for comparison in [Comparison::Lt, Comparison::Lte] {
            let left = select_indices(&input, pivot, comparison);
            let right = select_indices(&input, pivot, comparison.complement());

            assert_eq!(left.len() + right.len(), input.len());

            let left_set = index_set(&left);
            let right_set = index_set(&right);
            assert!(left_set.is_disjoint(&right_set));

            let all: HashSet<usize> = left_set.union(&right_set).copied().collect();
            assert_eq!(all, (0..input.len()).collect::<HashSet<_>>());
        }
    }
}

/// Output lengths of complements add up to the input length.
#[test]
fn test_complement_lengths() {
    for (input, pivot) in cases() {
        assert_eq!(
            filter_lt(&input, pivot).len() + filter_gte(&input, pivot).len(),
            input.len()
        );
        assert_eq!(
            filter_lte(&input, pivot).len() + filter_gt(&input, pivot).len(),
            input.len()
        );
    }
}

// =============================================================================
// Classification Tests
// =============================================================================

/// Every returned value satisfies its comparison, and nothing that
/// satisfies it is left out.
#[test]
fn test_values_satisfy_comparison() {
    for (input, pivot) in cases() {
        for comparison in Comparison::ALL {
            let values = select_values(&input, pivot, comparison);
            assert!(values.iter().all(|v| comparison.admits(v, &pivot)));

            let expected = input.iter().filter(|v| comparison.admits(*v, &pivot)).count();
            assert_eq!(values.len(), expected, "{} {}", comparison, pivot);
        }
    }
}

/// Value output is ascending.
#[test]
fn test_values_ascending() {
    for (input, pivot) in cases() {
        for comparison in Comparison::ALL {
            let values = select_values(&input, pivot, comparison);
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

/// value_output[k] == input[index_output[k]].
#[test]
fn test_index_and_value_outputs_correspond() {
    for (input, pivot) in cases() {
        let pairs = [
            (filter_lt(&input, pivot), filter_lt_index(&input, pivot)),
            (filter_lte(&input, pivot), filter_lte_index(&input, pivot)),
            (filter_gt(&input, pivot), filter_gt_index(&input, pivot)),
            (filter_gte(&input, pivot), filter_gte_index(&input, pivot)),
        ];

        for (values, indices) in pairs {
            assert_eq!(values.len(), indices.len());
            for (k, &i) in indices.iter().enumerate() {
                assert_eq!(values[k], input[i]);
            }
        }
    }
}

/// The generic entry point agrees with the named ones.
#[test]
fn test_filter_matches_named_entry_points() {
    for (input, pivot) in cases().into_iter().take(50) {
        assert_eq!(
            filter(&input, pivot, Comparison::Gt, Projection::Value),
            FilterOutput::Values(filter_gt(&input, pivot))
        );
        assert_eq!(
            filter(&input, pivot, Comparison::Lte, Projection::Index).len(),
            filter_lte_index(&input, pivot).len()
        );
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// x = [5, 3, 8, 3, 1], pivot = 3.
#[test]
fn test_mixed_scenario() {
    let x = [5_i64, 3, 8, 3, 1];

    assert_eq!(filter_lt(&x, 3), vec![1]);
    assert_eq!(filter_lte(&x, 3), vec![1, 3, 3]);
    assert_eq!(filter_gt(&x, 3), vec![5, 8]);
    assert_eq!(filter_gte(&x, 3), vec![3, 3, 5, 8]);
    assert_eq!(filter_lt_index(&x, 3), vec![4]);

    let gte = filter_gte_index(&x, 3);
    assert_eq!(index_set(&gte), index_set(&[1, 3, 0, 2]));
    let read: Vec<i64> = gte.iter().map(|&i| x[i]).collect();
    assert_eq!(read, vec![3, 3, 5, 8]);
}

/// Same input as the original extension's suite.
#[test]
fn test_reference_suite() {
    let arr = [10_i64, 2, 100, 3, 1, 3];

    assert_eq!(filter_lt(&arr, 4), vec![1, 2, 3, 3]);
    assert_eq!(filter_lt(&arr, 3), vec![1, 2]);
    assert_eq!(filter_lte(&arr, 3), vec![1, 2, 3, 3]);
    assert_eq!(filter_gt(&arr, 2), vec![3, 3, 10, 100]);
    assert_eq!(filter_gte(&arr, 2), vec![2, 3, 3, 10, 100]);

    assert_eq!(index_set(&filter_lt_index(&arr, 4)), index_set(&[1, 3, 4, 5]));
    assert_eq!(index_set(&filter_lte_index(&arr, 3)), index_set(&[1, 3, 4, 5]));
    assert_eq!(index_set(&filter_gt_index(&arr, 3)), index_set(&[0, 2]));
    assert_eq!(index_set(&filter_gte_index(&arr, 2)), index_set(&[0, 1, 2, 3, 5]));
}

/// Single element equal to the pivot.
#[test]
fn test_single_element() {
    let x = [7_i64];
    assert_eq!(filter_lt(&x, 7), Vec::<i64>::new());
    assert_eq!(filter_lte(&x, 7), vec![7]);
    assert_eq!(filter_gt(&x, 7), Vec::<i64>::new());
    assert_eq!(filter_gte(&x, 7), vec![7]);
}

/// All elements equal to the pivot.
#[test]
fn test_all_equal() {
    let x = [4_i64, 4, 4];
    assert!(filter_lt(&x, 4).is_empty());
    assert!(filter_gt(&x, 4).is_empty());
    assert_eq!(filter_lte(&x, 4), vec![4, 4, 4]);
    assert_eq!(filter_gte(&x, 4), vec![4, 4, 4]);
    assert_eq!(index_set(&filter_gte_index(&x, 4)), index_set(&[0, 1, 2]));
}

/// Empty input yields empty output for every entry point.
#[test]
fn test_empty_input() {
    let x: Vec<i64> = Vec::new();
    for pivot in [i64::MIN, 0, i64::MAX] {
        assert!(filter_lt(&x, pivot).is_empty());
        assert!(filter_lte(&x, pivot).is_empty());
        assert!(filter_gt(&x, pivot).is_empty());
        assert!(filter_gte(&x, pivot).is_empty());
        assert!(filter_lt_index(&x, pivot).is_empty());
        assert!(filter_lte_index(&x, pivot).is_empty());
        assert!(filter_gt_index(&x, pivot).is_empty());
        assert!(filter_gte_index(&x, pivot).is_empty());
    }
}

/// Pivot outside the value range gives all-or-nothing.
#[test]
fn test_pivot_outside_range() {
    let x = [2_i64, 9, -4];

    assert!(filter_lt(&x, -100).is_empty());
    assert!(filter_lte(&x, -100).is_empty());
    assert_eq!(filter_gt(&x, -100), vec![-4, 2, 9]);
    assert_eq!(filter_gte(&x, -100), vec![-4, 2, 9]);

    assert_eq!(filter_lt(&x, 100), vec![-4, 2, 9]);
    assert_eq!(filter_lte(&x, 100), vec![-4, 2, 9]);
    assert!(filter_gt(&x, 100).is_empty());
    assert!(filter_gte(&x, 100).is_empty());
}

/// Values that collide in their low 32 bits still order correctly.
#[test]
fn test_large_magnitudes() {
    let high = (1_i64 << 32) + 1;
    let x = [high, 1, -high, i64::MAX, i64::MIN];

    assert_eq!(filter_gt(&x, 1), vec![high, i64::MAX]);
    assert_eq!(filter_lt(&x, 1), vec![i64::MIN, -high]);
    assert_eq!(filter_lte_index(&x, i64::MIN), vec![4]);
}

/// Engine is generic over any ordered copy type.
#[test]
fn test_other_integer_widths() {
    let x: [u8; 4] = [200, 3, 255, 0];
    assert_eq!(filter_gte(&x, 200), vec![200, 255]);
    assert_eq!(filter_lt_index(&x, 3), vec![3]);
}

/// Calls share nothing, so they can run on many threads at once.
#[test]
fn test_concurrent_calls() {
    let input: Vec<i64> = (0..1000).rev().collect();

    std::thread::scope(|s| {
        for pivot in [0_i64, 250, 500, 999] {
            let input = &input;
            s.spawn(move || {
                let out = filter_lt(input, pivot);
                assert_eq!(out.len(), pivot as usize);
            });
        }
    });
}
