//! Centralized constants for the chunked scan library
//!
//! All hard-coded numbers used by the engine and the benchmark driver live
//! here rather than being scattered throughout the code.

// ============================================================================
// HARDWARE
// ============================================================================

/// Worker count used when hardware concurrency cannot be detected
pub const FALLBACK_THREAD_COUNT: usize = 1;

// ============================================================================
// INPUT DATA
// ============================================================================

/// Seed for the synthetic input generator
pub const DEFAULT_SEED: u64 = 42;

/// Smallest value produced by the input generator (inclusive)
pub const MIN_ELEMENT_VALUE: i64 = 1;

/// Largest value produced by the input generator (inclusive)
pub const MAX_ELEMENT_VALUE: i64 = 10;

/// Dataset sizes swept by the driver when none are given
pub const DEFAULT_DATASET_SIZES: [usize; 3] = [100_000, 10_000_000, 50_000_000];

// ============================================================================
// K SWEEP
// ============================================================================

/// Every K from 1 up to `SWEEP_DENSE_MULTIPLIER * threads` is measured
pub const SWEEP_DENSE_MULTIPLIER: usize = 2;

/// One oversubscribed K of `SWEEP_OVERSUBSCRIBED_MULTIPLIER * threads` is appended
pub const SWEEP_OVERSUBSCRIBED_MULTIPLIER: usize = 4;

/// Timed runs per measurement when no repeat count is given
pub const DEFAULT_REPEATS: usize = 1;

// ============================================================================
// REPORTING
// ============================================================================

/// Decimal places for times, speedups and ratios in the report table
pub const REPORT_PRECISION: usize = 2;
