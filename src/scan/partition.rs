//! Chunk partitioning for the two-phase scan
//!
//! Splits `[0, n)` into K contiguous, ordered, non-empty ranges. The first
//! `K - 1` ranges have `n / K` elements each and the last range absorbs the
//! remainder `n % K`.
//!
//! ```text
//! n = 7, K = 3, base = 2
//! [0 1][2 3][4 5 6]
//!  c0   c1   c2 (base + remainder)
//! ```

use std::ops::Range;

/// Half-open index range `[start, end)` owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    /// First index covered
    pub start: usize,
    /// One past the last index covered
    pub end: usize,
}

impl Partition {
    /// Create a partition over `[start, end)`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "partition start must not exceed end");
        Self { start, end }
    }

    /// Number of elements in the partition
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the partition covers no elements
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The partition as a `Range` usable for slicing
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Normalizes a requested worker count against a sequence length.
///
/// Non-positive counts become 1 and counts above `n` become `n`. Returns 0
/// only for an empty sequence, where no work should be scheduled.
pub fn normalize_worker_count(n: usize, k: isize) -> usize {
    if n == 0 {
        return 0;
    }
    let k = if k <= 0 { 1 } else { k as usize };
    k.min(n)
}

/// Computes the chunk layout for a sequence of length `n` and `k` workers.
///
/// # Examples
///
/// ```
/// use chunkscan::{partition, Partition};
///
/// let parts = partition(5, 2);
/// assert_eq!(parts, vec![Partition::new(0, 2), Partition::new(2, 5)]);
/// assert!(partition(0, 4).is_empty());
/// ```
pub fn partition(n: usize, k: isize) -> Vec<Partition> {
    let k = normalize_worker_count(n, k);
    if k == 0 {
        return Vec::new();
    }

    let base_size = n / k;
    let mut parts = Vec::with_capacity(k);
    for i in 0..k - 1 {
        parts.push(Partition::new(i * base_size, (i + 1) * base_size));
    }
    parts.push(Partition::new((k - 1) * base_size, n));
    parts
}

/// Checks that `parts` are contiguous, ordered, non-empty and cover `[0, n)`
pub fn is_valid_layout(parts: &[Partition], n: usize) -> bool {
    let mut cursor = 0;
    for part in parts {
        if part.start != cursor || part.is_empty() {
            return false;
        }
        cursor = part.end;
    }
    cursor == n
}

/// Borrows one read-only sub-slice per partition.
///
/// # Panics
///
/// Panics if `parts` is not a valid layout over `data`.
pub fn split_disjoint<'a, T>(data: &'a [T], parts: &[Partition]) -> Vec<&'a [T]> {
    assert!(
        is_valid_layout(parts, data.len()),
        "partitions must tile the whole slice"
    );

    let mut rest = data;
    let mut views = Vec::with_capacity(parts.len());
    for part in parts {
        let (head, tail) = rest.split_at(part.len());
        views.push(head);
        rest = tail;
    }
    views
}

/// Borrows one mutable sub-slice per partition.
///
/// The views never alias: each one is carved off the remainder with
/// `split_at_mut`, so every worker can write its range without locking.
///
/// # Panics
///
/// Panics if `parts` is not a valid layout over `data`.
pub fn split_disjoint_mut<'a, T>(data: &'a mut [T], parts: &[Partition]) -> Vec<&'a mut [T]> {
    assert!(
        is_valid_layout(parts, data.len()),
        "partitions must tile the whole slice"
    );

    let mut rest = data;
    let mut views = Vec::with_capacity(parts.len());
    for part in parts {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(part.len());
        views.push(head);
        rest = tail;
    }
    views
}
