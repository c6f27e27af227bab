//! Sweep over dataset sizes and candidate worker counts

use std::io::Write;

use thiserror::Error;

use crate::bench::data::{generate_data, DataType};
use crate::bench::report::{BaselineTimings, KMeasurement, SizeReport};
use crate::bench::timing::measure_best_ms;
use crate::config::{ScanConfig, SystemParameters};
use crate::constants::{
    DEFAULT_DATASET_SIZES, DEFAULT_REPEATS, DEFAULT_SEED, SWEEP_DENSE_MULTIPLIER,
    SWEEP_OVERSUBSCRIBED_MULTIPLIER,
};
use crate::error::ScanError;
use crate::reference::{
    iterator_exclusive_scan, rayon_exclusive_scan, sequential_exclusive_scan,
};
use crate::scan::ChunkedScan;

/// Errors raised while running a sweep
#[derive(Debug, Error)]
pub enum SweepError {
    /// The engine rejected the input or failed to run
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The chunked scan disagreed with the sequential scan
    #[error("chunked scan with K={k} diverged from the sequential scan at index {index} (size {size})")]
    Mismatch {
        /// Dataset size
        size: usize,
        /// Worker count that produced the wrong result
        k: usize,
        /// First differing index
        index: usize,
    },

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for a benchmark sweep
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Dataset sizes, run in order
    pub sizes: Vec<usize>,
    /// Seed for the input generator
    pub seed: u64,
    /// Hardware thread count the default K list is derived from
    pub threads: usize,
    /// Explicit K list; `None` uses [`k_candidates`]
    pub k_values: Option<Vec<usize>>,
    /// Timed runs per measurement, the fastest is kept
    pub repeats: usize,
    /// Compare every chunked result with the sequential scan
    pub verify: bool,
    /// Run each K on its own pool of exactly K threads
    pub pool_per_k: bool,
    /// Engine configuration
    pub scan: ScanConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_DATASET_SIZES.to_vec(),
            seed: DEFAULT_SEED,
            threads: SystemParameters::default().n_threads,
            k_values: None,
            repeats: DEFAULT_REPEATS,
            verify: true,
            pool_per_k: false,
            scan: ScanConfig::default(),
        }
    }
}

impl SweepConfig {
    /// The K values this sweep will measure
    pub fn k_values(&self) -> Vec<usize> {
        match &self.k_values {
            Some(ks) => ks.clone(),
            None => k_candidates(self.threads),
        }
    }
}

/// Candidate worker counts: every K in `1..=2*hw`, then `4*hw`
pub fn k_candidates(hw: usize) -> Vec<usize> {
    let hw = hw.max(1);
    let mut ks: Vec<usize> = (1..=hw * SWEEP_DENSE_MULTIPLIER).collect();
    ks.push(hw * SWEEP_OVERSUBSCRIBED_MULTIPLIER);
    ks
}

/// Measures every baseline and every K for one dataset size
pub fn run_size(size: usize, config: &SweepConfig) -> Result<SizeReport, SweepError> {
    log::info!("dataset size {size}: generating input (seed {})", config.seed);
    let input = generate_data(size, config.seed);
    let repeats = config.repeats;

    let (_, no_policy_ms) = measure_best_ms(repeats, || iterator_exclusive_scan(&input));
    let (expected, sequential_ms) = measure_best_ms(repeats, || sequential_exclusive_scan(&input));
    let (_, parallel_ms) = measure_best_ms(repeats, || rayon_exclusive_scan(&input));
    let baselines = BaselineTimings {
        no_policy_ms,
        sequential_ms,
        parallel_ms,
    };
    log::debug!("dataset size {size}: baselines {baselines:?}");

    let scanner = ChunkedScan::new(config.scan);
    let mut output: Vec<DataType> = vec![0; size];
    let mut measurements = Vec::new();
    for k in config.k_values() {
        let requested = isize::try_from(k).unwrap_or(isize::MAX);
        let (result, time_ms) = if config.pool_per_k {
            let pool = ChunkedScan::dedicated_pool(k)?;
            measure_best_ms(repeats, || {
                pool.install(|| scanner.scan_into(&input, &mut output, requested))
            })
        } else {
            measure_best_ms(repeats, || scanner.scan_into(&input, &mut output, requested))
        };
        result?;

        if config.verify {
            if let Some(index) = first_mismatch(&expected, &output) {
                return Err(SweepError::Mismatch { size, k, index });
            }
        }

        let measurement = KMeasurement::new(k, time_ms, sequential_ms);
        log::debug!("dataset size {size}: {measurement:?}");
        measurements.push(measurement);
    }

    Ok(SizeReport {
        size,
        threads: config.threads,
        baselines,
        measurements,
    })
}

/// Runs the whole sweep, writing each size's table to `out` as it completes
pub fn run<W: Write>(config: &SweepConfig, out: &mut W) -> Result<Vec<SizeReport>, SweepError> {
    log::info!(
        "sweeping {} dataset sizes with {} hardware threads",
        config.sizes.len(),
        config.threads
    );
    let mut reports = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let report = run_size(size, config)?;
        report.render(out)?;
        out.flush()?;
        reports.push(report);
    }
    Ok(reports)
}

fn first_mismatch(expected: &[DataType], actual: &[DataType]) -> Option<usize> {
    expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))
}
