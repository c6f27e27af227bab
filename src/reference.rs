//! Reference and library exclusive scans
//!
//! These provide a correctness oracle for the chunked engine and the
//! baselines the benchmark driver compares it against. They use wrapping
//! addition, matching the engine's default overflow policy.

use rayon::prelude::*;

use crate::scan::ScanElement;

/// Sequential exclusive scan written as an explicit loop
pub fn sequential_exclusive_scan<T: ScanElement>(input: &[T]) -> Vec<T> {
    let mut output = Vec::with_capacity(input.len());
    let mut running = T::zero();
    for &value in input {
        output.push(running);
        running = running.wrapping_add(&value);
    }
    output
}

/// Sequential exclusive scan using iterator adaptors only
pub fn iterator_exclusive_scan<T: ScanElement>(input: &[T]) -> Vec<T> {
    input
        .iter()
        .scan(T::zero(), |running, &value| {
            let current = *running;
            *running = running.wrapping_add(&value);
            Some(current)
        })
        .collect()
}

/// Parallel exclusive scan built from rayon's parallel iterators.
///
/// The chunk count follows the current pool's thread count. Local scans
/// run first, then every chunk after the first is shifted by its offset.
pub fn rayon_exclusive_scan<T: ScanElement>(input: &[T]) -> Vec<T> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }
    let chunk_size = n.div_ceil(rayon::current_num_threads().max(1));

    let mut output = vec![T::zero(); n];
    let totals: Vec<T> = output
        .par_chunks_mut(chunk_size)
        .zip(input.par_chunks(chunk_size))
        .map(|(dst, src)| {
            let mut running = T::zero();
            for (out, &value) in dst.iter_mut().zip(src) {
                *out = running;
                running = running.wrapping_add(&value);
            }
            running
        })
        .collect();

    let offsets = sequential_exclusive_scan(&totals);
    output
        .par_chunks_mut(chunk_size)
        .zip(offsets.par_iter())
        .skip(1)
        .for_each(|(dst, &offset)| {
            for out in dst.iter_mut() {
                *out = out.wrapping_add(&offset);
            }
        });
    output
}

/// Checks that `prefix` is the exclusive scan of `input`
pub fn verify_exclusive_scan<T: ScanElement>(input: &[T], prefix: &[T]) -> bool {
    if input.len() != prefix.len() {
        return false;
    }
    let mut expected = T::zero();
    for (&value, &actual) in input.iter().zip(prefix) {
        if actual != expected {
            return false;
        }
        expected = expected.wrapping_add(&value);
    }
    true
}
