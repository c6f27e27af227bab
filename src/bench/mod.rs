//! Benchmark driver
//!
//! Generates seeded input, times the baseline scans and the chunked scan for
//! every candidate K, and prints a `K / Time(ms) / Speedup` table per size.

pub mod data;
pub mod report;
pub mod sweep;
pub mod timing;

pub use data::{generate_data, DataType};
pub use report::{BaselineTimings, KMeasurement, SizeReport};
pub use sweep::{k_candidates, run, run_size, SweepConfig, SweepError};
pub use timing::{measure_best_ms, measure_ms};
