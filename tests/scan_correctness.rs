//! Correctness of the chunked scan against the sequential reference

use chunkscan::bench::generate_data;
use chunkscan::{
    exclusive_scan, sequential_exclusive_scan, try_exclusive_scan, verify_exclusive_scan,
    ChunkedScan, OverflowPolicy, ScanConfig, ScanError, WorkerCountPolicy,
};
use proptest::prelude::*;

#[test]
fn test_concrete_scenarios() {
    assert_eq!(exclusive_scan(&[3i64, 1, 4, 1, 5], 2), vec![0, 3, 4, 8, 9]);
    assert_eq!(
        exclusive_scan(&[1i64, 2, 3, 4, 5, 6, 7], 3),
        vec![0, 1, 3, 6, 10, 15, 21]
    );
}

#[test]
fn test_every_k_matches_sequential() {
    let input = generate_data(97, 42);
    let expected = sequential_exclusive_scan(&input);
    for k in 1..=input.len() as isize {
        assert_eq!(exclusive_scan(&input, k), expected, "mismatch for k={k}");
    }
}

#[test]
fn test_k_one_is_sequential() {
    let input = generate_data(10_000, 3);
    assert_eq!(exclusive_scan(&input, 1), sequential_exclusive_scan(&input));
}

#[test]
fn test_oversized_and_non_positive_k_are_clamped() {
    let input = [5i64, -2, 7, 0, 3];
    let expected = sequential_exclusive_scan(&input);
    for k in [-3, 0, 6, 1_000] {
        assert_eq!(exclusive_scan(&input, k), expected, "mismatch for k={k}");
    }
    let trace = ChunkedScan::default().scan_traced(&input, 1_000).unwrap();
    assert_eq!(trace.partitions.len(), input.len());
    assert_eq!(trace.chunk_sums, input.to_vec());
}

#[test]
fn test_empty_input() {
    for k in [-1, 0, 1, 16] {
        assert!(exclusive_scan::<i64>(&[], k).is_empty());
        assert!(try_exclusive_scan::<i64>(&[], k, &ScanConfig::strict())
            .unwrap()
            .is_empty());
    }
}

#[test]
fn test_reject_policy() {
    let config = ScanConfig::default().with_worker_policy(WorkerCountPolicy::Reject);
    let err = try_exclusive_scan(&[1i64, 2, 3], -2, &config).unwrap_err();
    assert!(matches!(err, ScanError::InvalidWorkerCount { requested: -2 }));

    // oversized K is still clamped under the strict policy
    let out = try_exclusive_scan(&[1i64, 2, 3], 10, &config).unwrap();
    assert_eq!(out, vec![0, 1, 3]);
}

#[test]
fn test_checked_overflow() {
    let config = ScanConfig::default().with_overflow_policy(OverflowPolicy::Checked);

    let err = try_exclusive_scan(&[i64::MAX, 1], 1, &config).unwrap_err();
    assert!(matches!(err, ScanError::Overflow { chunk: 0 }));

    let err = try_exclusive_scan(&[i64::MAX, 1, 1, 1], 2, &config).unwrap_err();
    assert!(matches!(err, ScanError::Overflow { .. }));

    let out = try_exclusive_scan(&[i64::MAX - 3, 1, 1, 1], 2, &config).unwrap();
    assert_eq!(out, vec![0, i64::MAX - 3, i64::MAX - 2, i64::MAX - 1]);
}

#[test]
fn test_scan_into_length_mismatch() {
    let mut output = vec![0i64; 2];
    let err = ChunkedScan::default()
        .scan_into(&[1i64, 2, 3], &mut output, 2)
        .unwrap_err();
    assert!(matches!(err, ScanError::LengthMismatch { input: 3, output: 2 }));
}

#[test]
fn test_scan_into_overwrites_output() {
    let input = generate_data(1_000, 9);
    let mut output = vec![-1i64; input.len()];
    ChunkedScan::default().scan_into(&input, &mut output, 7).unwrap();
    assert!(verify_exclusive_scan(&input, &output));
}

#[test]
fn test_input_is_not_mutated() {
    let input = generate_data(500, 11);
    let copy = input.clone();
    let _ = exclusive_scan(&input, 6);
    assert_eq!(input, copy);
}

#[test]
fn test_scan_in_dedicated_pool() {
    let input = generate_data(4_096, 5);
    let pool = ChunkedScan::dedicated_pool(3).unwrap();
    let out = ChunkedScan::default().scan_in_pool(&pool, &input, 8).unwrap();
    assert_eq!(out, sequential_exclusive_scan(&input));
}

#[test]
fn test_large_input_many_chunks() {
    let input = generate_data(1_000_003, 42);
    let expected = sequential_exclusive_scan(&input);
    for k in [2, 7, 64, 1_000] {
        assert_eq!(exclusive_scan(&input, k), expected, "mismatch for k={k}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The chunked scan equals the sequential scan for every valid k
    #[test]
    fn chunked_matches_sequential(
        input in prop::collection::vec(-1_000_000i64..1_000_000, 0..300),
        k in 1isize..320,
    ) {
        let expected = sequential_exclusive_scan(&input);
        prop_assert_eq!(exclusive_scan(&input, k), expected);
    }

    /// The first output element is always the identity
    #[test]
    fn first_element_is_zero(
        input in prop::collection::vec(any::<i32>(), 1..200),
        k in -4isize..64,
    ) {
        prop_assert_eq!(exclusive_scan(&input, k)[0], 0);
    }

    /// Strict checked mode agrees with wrapping mode when nothing overflows
    #[test]
    fn checked_agrees_without_overflow(
        input in prop::collection::vec(1i64..=10, 0..500),
        k in 1isize..64,
    ) {
        let checked = try_exclusive_scan(&input, k, &ScanConfig::strict()).unwrap();
        prop_assert_eq!(checked, exclusive_scan(&input, k));
    }
}
