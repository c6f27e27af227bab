//! # chunkscan: chunked parallel exclusive prefix sum
//!
//! A two-phase, fixed fan-out parallel exclusive scan over integer
//! sequences, plus the driver that benchmarks it against sequential and
//! library parallel scans.
//!
//! ## Algorithm
//!
//! 1. **Partition**: split `[0, n)` into K contiguous chunks, the last one
//!    absorbing the remainder.
//! 2. **Reduce**: sum every chunk concurrently.
//! 3. **Offsets**: exclusive scan of the chunk sums, sequentially.
//! 4. **Rescan**: exclusive scan of every chunk concurrently, seeded with
//!    its offset.
//!
//! ## Usage
//!
//! ```
//! use chunkscan::exclusive_scan;
//!
//! let out = exclusive_scan(&[1i64, 2, 3, 4, 5, 6, 7], 3);
//! assert_eq!(out, vec![0, 1, 3, 6, 10, 15, 21]);
//! ```
//!
//! Stricter behaviour is available through [`ScanConfig`]:
//!
//! ```
//! use chunkscan::{try_exclusive_scan, ScanConfig, ScanError};
//!
//! let err = try_exclusive_scan(&[1i64, 2], 0, &ScanConfig::strict()).unwrap_err();
//! assert!(matches!(err, ScanError::InvalidWorkerCount { requested: 0 }));
//! ```

pub mod bench;
pub mod config;
pub mod constants;
pub mod error;
pub mod reference;
pub mod scan;

// Re-export primary components
pub use config::{OverflowPolicy, ScanConfig, SystemParameters, WorkerCountPolicy};
pub use error::{Result, ScanError};
pub use reference::{
    iterator_exclusive_scan, rayon_exclusive_scan, sequential_exclusive_scan,
    verify_exclusive_scan,
};
pub use scan::{
    exclusive_scan, normalize_worker_count, partition, try_exclusive_scan, ChunkedScan,
    Partition, ScanElement, ScanTrace,
};

/// Version information for the chunkscan library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
