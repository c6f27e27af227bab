//! Chunked parallel exclusive scan
//!
//! [`partition`] lays out the chunks and [`engine`] runs the two parallel
//! phases over them.

pub mod engine;
pub mod partition;

pub use engine::{exclusive_scan, try_exclusive_scan, ChunkedScan, ScanElement, ScanTrace};
pub use partition::{
    is_valid_layout, normalize_worker_count, partition, split_disjoint, split_disjoint_mut,
    Partition,
};
