//! Two-phase parallel exclusive scan
//!
//! The input is split into K chunks by [`partition`]. Phase 1 reduces every
//! chunk to its local sum concurrently. A short sequential pass turns those
//! sums into per-chunk offsets. Phase 2 then rescans every chunk concurrently,
//! seeding each chunk's running total with its offset.
//!
//! Each phase is one `rayon::scope`: exactly K tasks are spawned and the scope
//! returns only after all of them finished, which is the barrier between the
//! phases. A panicking task is re-raised by the scope on the calling thread.

use crossbeam_utils::CachePadded;
use num_traits::{PrimInt, WrappingAdd};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{OverflowPolicy, ScanConfig, WorkerCountPolicy};
use crate::error::{Result, ScanError};
use crate::scan::partition::{partition, split_disjoint, split_disjoint_mut, Partition};

/// Integer element types the scan can operate on
pub trait ScanElement: PrimInt + WrappingAdd + Send + Sync {}

impl<T> ScanElement for T where T: PrimInt + WrappingAdd + Send + Sync {}

/// Every intermediate stage of one scan call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTrace<T> {
    /// Chunk layout used for both phases
    pub partitions: Vec<Partition>,
    /// Phase 1 result, one local sum per chunk
    pub chunk_sums: Vec<T>,
    /// Exclusive prefix of `chunk_sums`, one seed per chunk
    pub offsets: Vec<T>,
    /// The exclusive scan of the input
    pub output: Vec<T>,
}

/// Chunked parallel exclusive scan with a fixed fan-out
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkedScan {
    config: ScanConfig,
}

impl ChunkedScan {
    /// Create a scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The configuration this scanner runs with
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Build a pool with exactly `threads` workers for [`Self::scan_in_pool`]
    pub fn dedicated_pool(threads: usize) -> Result<ThreadPool> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("chunkscan-{i}"))
            .build()?;
        Ok(pool)
    }

    /// Computes the exclusive prefix sum of `input` using `k` chunks.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunkscan::ChunkedScan;
    ///
    /// let out = ChunkedScan::default().scan(&[3i64, 1, 4, 1, 5], 2).unwrap();
    /// assert_eq!(out, vec![0, 3, 4, 8, 9]);
    /// ```
    pub fn scan<T: ScanElement>(&self, input: &[T], k: isize) -> Result<Vec<T>> {
        let mut output = vec![T::zero(); input.len()];
        self.scan_into(input, &mut output, k)?;
        Ok(output)
    }

    /// Writes the exclusive prefix sum of `input` into `output`.
    ///
    /// `output` must have the same length as `input`.
    pub fn scan_into<T: ScanElement>(&self, input: &[T], output: &mut [T], k: isize) -> Result<()> {
        if input.len() != output.len() {
            return Err(ScanError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        self.run(input, output, k).map(|_| ())
    }

    /// Like [`Self::scan`], but also returns the partitions, chunk sums and offsets
    pub fn scan_traced<T: ScanElement>(&self, input: &[T], k: isize) -> Result<ScanTrace<T>> {
        let mut output = vec![T::zero(); input.len()];
        let (partitions, chunk_sums, offsets) = self.run(input, &mut output, k)?;
        Ok(ScanTrace {
            partitions,
            chunk_sums,
            offsets,
            output,
        })
    }

    /// Runs [`Self::scan`] on the workers of `pool` instead of the global pool
    pub fn scan_in_pool<T: ScanElement>(
        &self,
        pool: &ThreadPool,
        input: &[T],
        k: isize,
    ) -> Result<Vec<T>> {
        pool.install(|| self.scan(input, k))
    }

    fn plan(&self, n: usize, k: isize) -> Result<Vec<Partition>> {
        if n > 0 && k <= 0 && self.config.worker_policy == WorkerCountPolicy::Reject {
            return Err(ScanError::InvalidWorkerCount { requested: k });
        }
        Ok(partition(n, k))
    }

    #[allow(clippy::type_complexity)]
    fn run<T: ScanElement>(
        &self,
        input: &[T],
        output: &mut [T],
        k: isize,
    ) -> Result<(Vec<Partition>, Vec<T>, Vec<T>)> {
        let parts = self.plan(input.len(), k)?;
        if parts.is_empty() {
            return Ok((parts, Vec::new(), Vec::new()));
        }
        let policy = self.config.overflow_policy;
        log::trace!(
            "scan: n={} requested_k={} chunks={} last_chunk_len={}",
            input.len(),
            k,
            parts.len(),
            parts[parts.len() - 1].len()
        );

        let chunk_sums = reduce_chunks(input, &parts, policy)?;
        let offsets = chunk_offsets(&chunk_sums, policy)?;
        scan_chunks(input, output, &parts, &offsets, policy)?;

        Ok((parts, chunk_sums, offsets))
    }
}

/// Exclusive scan of `input` with `k` chunks and the default configuration
pub fn exclusive_scan<T: ScanElement>(input: &[T], k: isize) -> Vec<T> {
    match ChunkedScan::default().scan(input, k) {
        Ok(output) => output,
        Err(e) => unreachable!("default scan configuration cannot fail: {e}"),
    }
}

/// Exclusive scan of `input` with `k` chunks and an explicit configuration
pub fn try_exclusive_scan<T: ScanElement>(
    input: &[T],
    k: isize,
    config: &ScanConfig,
) -> Result<Vec<T>> {
    ChunkedScan::new(*config).scan(input, k)
}

#[inline]
fn accumulate<T: ScanElement>(acc: T, value: T, policy: OverflowPolicy) -> Option<T> {
    match policy {
        OverflowPolicy::Wrapping => Some(acc.wrapping_add(&value)),
        OverflowPolicy::Checked => acc.checked_add(&value),
    }
}

/// Runs one task per item inside a single scope and returns their results in order.
///
/// Every result lands in its own cache-line padded slot, so neighbouring
/// workers never write to the same line.
fn fan_out<I, R, F>(items: Vec<I>, task: F) -> Vec<R>
where
    I: Send,
    R: Default + Send,
    F: Fn(I) -> R + Sync,
{
    let mut slots: Vec<CachePadded<R>> = items.iter().map(|_| CachePadded::new(R::default())).collect();
    let task = &task;
    rayon::scope(|s| {
        for (item, slot) in items.into_iter().zip(slots.iter_mut()) {
            s.spawn(move |_| **slot = task(item));
        }
    });
    slots.into_iter().map(CachePadded::into_inner).collect()
}

/// Phase 1: one local sum per chunk
fn reduce_chunks<T: ScanElement>(
    input: &[T],
    parts: &[Partition],
    policy: OverflowPolicy,
) -> Result<Vec<T>> {
    let sums = fan_out(split_disjoint(input, parts), |chunk| reduce_chunk(chunk, policy));
    log::trace!("scan: phase 1 reduced {} chunks", sums.len());

    sums.into_iter()
        .enumerate()
        .map(|(chunk, sum)| sum.ok_or(ScanError::Overflow { chunk }))
        .collect()
}

fn reduce_chunk<T: ScanElement>(chunk: &[T], policy: OverflowPolicy) -> Option<T> {
    chunk
        .iter()
        .try_fold(T::zero(), |acc, &value| accumulate(acc, value, policy))
}

/// Sequential exclusive scan over the chunk sums
fn chunk_offsets<T: ScanElement>(chunk_sums: &[T], policy: OverflowPolicy) -> Result<Vec<T>> {
    let mut offsets = Vec::with_capacity(chunk_sums.len());
    let mut running = T::zero();
    offsets.push(running);
    for (i, &sum) in chunk_sums.iter().enumerate().take(chunk_sums.len().saturating_sub(1)) {
        running = accumulate(running, sum, policy).ok_or(ScanError::Overflow { chunk: i + 1 })?;
        offsets.push(running);
    }
    Ok(offsets)
}

/// Phase 2: local exclusive scan of every chunk, seeded with its offset
fn scan_chunks<T: ScanElement>(
    input: &[T],
    output: &mut [T],
    parts: &[Partition],
    offsets: &[T],
    policy: OverflowPolicy,
) -> Result<()> {
    let tasks: Vec<(&[T], &mut [T], T)> = split_disjoint(input, parts)
        .into_iter()
        .zip(split_disjoint_mut(output, parts))
        .zip(offsets.iter().copied())
        .map(|((src, dst), offset)| (src, dst, offset))
        .collect();

    let statuses = fan_out(tasks, |(src, dst, offset)| scan_chunk(src, dst, offset, policy));
    log::trace!("scan: phase 2 scanned {} chunks", statuses.len());

    match statuses.iter().position(Option::is_none) {
        Some(chunk) => Err(ScanError::Overflow { chunk }),
        None => Ok(()),
    }
}

fn scan_chunk<T: ScanElement>(src: &[T], dst: &mut [T], seed: T, policy: OverflowPolicy) -> Option<()> {
    let mut running = seed;
    for (out, &value) in dst.iter_mut().zip(src) {
        *out = running;
        running = accumulate(running, value, policy)?;
    }
    Some(())
}
