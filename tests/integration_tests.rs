use polysort::prelude::*;
use rand::Rng;
use std::cmp::Ordering;

/// Every algorithm under test, with a mid-range threshold for the hybrid.
fn algorithms() -> Vec<Algorithm> {
    vec![
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::BinaryInsertion,
        Algorithm::MergeBinaryInsertion { threshold: 8 },
    ]
}

/// Sorts `input` with `algorithm` and checks the result is an ordered
/// permutation of the input.
fn check_sort<T: Ord + Clone + std::fmt::Debug>(algorithm: Algorithm, input: &[T]) {
    let mut data = input.to_vec();
    algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();

    for pair in data.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "{algorithm} left adjacent pair out of order: {pair:?}"
        );
    }

    // Same multiset: the sorted input is the unique ordered permutation.
    let mut expected = input.to_vec();
    expected.sort();
    assert_eq!(data, expected, "{algorithm} lost or corrupted elements");
}

#[test]
fn test_integers_small() {
    for algorithm in algorithms() {
        check_sort(algorithm, &[5, 3, 5, 1]);
        check_sort(algorithm, &[2, 1]);
        check_sort(algorithm, &[1, 2, 3]);
        check_sort(algorithm, &[3, 3, 3, 3]);
        check_sort(algorithm, &[i32::MAX, i32::MIN, 0, -1, 1]);
    }
}

#[test]
fn test_duplicate_count_preserved() {
    for algorithm in algorithms() {
        let mut data = vec![5, 3, 5, 1];
        algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();
        assert_eq!(data, vec![1, 3, 5, 5]);
    }
}

#[test]
fn test_single_element() {
    for algorithm in algorithms() {
        let mut data = vec![42];
        algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();
        assert_eq!(data, vec![42]);
    }
}

#[test]
fn test_empty_input_rejected() {
    for algorithm in algorithms() {
        let mut data: Vec<i32> = vec![];
        assert_eq!(
            algorithm.sort(&mut data, |a, b| a.cmp(b)),
            Err(SortError::Empty)
        );
    }
}

#[test]
fn test_zero_sized_elements_rejected() {
    for algorithm in algorithms() {
        let mut data = vec![(), (), ()];
        assert_eq!(
            algorithm.sort(&mut data, |_, _| Ordering::Equal),
            Err(SortError::ZeroSizedElement)
        );
    }
}

#[test]
fn test_hybrid_threshold_validation() {
    let mut data = vec![2, 1];
    assert_eq!(
        merge_binary_insertion_sort(&mut data, 0, |a, b| a.cmp(b)),
        Err(SortError::Threshold(0))
    );
    assert_eq!(
        merge_binary_insertion_sort(&mut data, 1, |a, b| a.cmp(b)),
        Err(SortError::Threshold(1))
    );
    assert_eq!(data, vec![2, 1], "rejected call must not touch the buffer");

    merge_binary_insertion_sort(&mut data, 2, |a, b| a.cmp(b)).unwrap();
    assert_eq!(data, vec![1, 2]);
}

#[test]
fn test_idempotence() {
    for algorithm in algorithms() {
        let mut data = vec![9, 4, 7, 1, 4, 8, 2];
        algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();
        let once = data.clone();
        algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();
        assert_eq!(data, once, "{algorithm} mutated already-sorted input");
    }
}

#[test]
fn test_quicksort_sorted_and_reversed() {
    // Worst-case partitioning for the fixed first-element pivot; must still
    // terminate and produce correct output.
    let sorted: Vec<i32> = (0..2048).collect();
    let reversed: Vec<i32> = (0..2048).rev().collect();
    check_sort(Algorithm::Quick, &sorted);
    check_sort(Algorithm::Quick, &reversed);
}

#[test]
fn test_sorted_and_reversed_all_algorithms() {
    let sorted: Vec<i32> = (0..512).collect();
    let reversed: Vec<i32> = (0..512).rev().collect();
    for algorithm in algorithms() {
        check_sort(algorithm, &sorted);
        check_sort(algorithm, &reversed);
    }
}

#[test]
fn test_floats() {
    for algorithm in algorithms() {
        let input = vec![2.5f32, -1.0, 0.0, 1.5, -3.25, 1.5];
        let mut data = input.clone();
        algorithm
            .sort(&mut data, polysort::core::compare_floats)
            .unwrap();

        let mut expected = input.clone();
        expected.sort_by(f32::total_cmp);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_fixed_strings() {
    let words = ["delta", "alpha", "charlie", "bravo", "alpha"];
    let input: Vec<FixedStr<32>> = words.iter().map(|w| w.parse().unwrap()).collect();

    for algorithm in algorithms() {
        let mut data = input.clone();
        algorithm
            .sort(&mut data, polysort::core::compare_fixed_strings)
            .unwrap();
        let sorted: Vec<&str> = data.iter().map(|s| s.as_str()).collect();
        assert_eq!(sorted, vec!["alpha", "alpha", "bravo", "charlie", "delta"]);
    }
}

#[test]
fn test_dyn_strings() {
    // The elements are heap string handles; the sort moves handles only.
    let input: Vec<String> = ["banana", "apple", "cherry", "apple", "date"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    for algorithm in algorithms() {
        let mut data = input.clone();
        algorithm
            .sort(&mut data, polysort::core::compare_dyn_strings)
            .unwrap();
        assert_eq!(data, vec!["apple", "apple", "banana", "cherry", "date"]);
    }
}

#[test]
fn test_hybrid_threshold_equivalence() {
    // Thresholds at both degenerate extremes and in between must all agree
    // with the pure algorithms, even though the recursion shape differs.
    let mut rng = rand::rng();
    let input: Vec<i32> = (0..1000).map(|_| rng.random_range(-500..500)).collect();
    let n = input.len();

    let mut expected = input.clone();
    merge_sort(&mut expected, |a, b| a.cmp(b)).unwrap();

    let mut pure_insertion = input.clone();
    binary_insertion_sort(&mut pure_insertion, |a, b| a.cmp(b)).unwrap();
    assert_eq!(pure_insertion, expected);

    for threshold in [2, n / 2, n, n * 2] {
        let mut data = input.clone();
        merge_binary_insertion_sort(&mut data, threshold, |a, b| a.cmp(b)).unwrap();
        assert_eq!(data, expected, "threshold {threshold} diverged");
    }
}

#[test]
fn test_merge_sort_stability() {
    // Sort (key, arrival) pairs by key only; equal keys must keep arrival
    // order.
    let mut rng = rand::rng();
    let input: Vec<(u8, usize)> = (0..2000).map(|i| (rng.random_range(0..10), i)).collect();

    let mut data = input.clone();
    merge_sort(&mut data, |a, b| a.0.cmp(&b.0)).unwrap();

    for pair in data.windows(2) {
        assert!(pair[0].0 <= pair[1].0);
        if pair[0].0 == pair[1].0 {
            assert!(
                pair[0].1 < pair[1].1,
                "equal keys reordered: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_binary_insertion_inserts_after_equal() {
    // A new element equal to an existing one lands immediately after it.
    let mut data = vec![(5u8, 'a'), (5u8, 'b')];
    binary_insertion_sort(&mut data, |a, b| a.0.cmp(&b.0)).unwrap();
    assert_eq!(data, vec![(5, 'a'), (5, 'b')]);
}

#[test]
fn test_fuzz_against_std() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(1..200);
        let input: Vec<i64> = (0..len).map(|_| rng.random_range(-50..50)).collect();

        let mut expected = input.clone();
        expected.sort();

        for algorithm in algorithms() {
            let mut data = input.clone();
            algorithm.sort(&mut data, |a, b| a.cmp(b)).unwrap();
            assert_eq!(data, expected, "{algorithm} diverged from std sort");
        }
    }
}

#[test]
fn test_comparator_reversal() {
    for algorithm in algorithms() {
        let mut data = vec![1, 4, 2, 8, 5, 7];
        algorithm.sort(&mut data, |a, b| b.cmp(a)).unwrap();
        assert_eq!(data, vec![8, 7, 5, 4, 2, 1]);
    }
}
