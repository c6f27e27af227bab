//! Configuration and system parameters for the chunked scan

use crate::constants::FALLBACK_THREAD_COUNT;

/// System parameters for performance tuning
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of hardware threads available
    pub n_threads: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: detect_threads(),
        }
    }
}

/// Detects hardware concurrency, never returning zero
pub fn detect_threads() -> usize {
    match num_cpus::get() {
        0 => FALLBACK_THREAD_COUNT,
        n => n,
    }
}

/// How a requested worker count outside `1..=n` is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerCountPolicy {
    /// Non-positive K becomes 1, K larger than the input becomes `n`
    #[default]
    Clamp,
    /// Non-positive K is an error; K larger than the input is still clamped
    Reject,
}

/// Arithmetic used when accumulating chunk sums, offsets and local scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Two's-complement wrapping addition
    #[default]
    Wrapping,
    /// Any overflow aborts the scan with [`crate::ScanError::Overflow`].
    ///
    /// Every sum the scan forms is checked, including each chunk's total, so
    /// a scan fails when the total of the input does not fit even if every
    /// output value would.
    Checked,
}

/// Configuration for a chunked scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanConfig {
    /// Treatment of out-of-range worker counts
    pub worker_policy: WorkerCountPolicy,
    /// Treatment of integer overflow
    pub overflow_policy: OverflowPolicy,
}

impl ScanConfig {
    /// Strict configuration: reject bad worker counts and fail on overflow
    pub fn strict() -> Self {
        Self {
            worker_policy: WorkerCountPolicy::Reject,
            overflow_policy: OverflowPolicy::Checked,
        }
    }

    /// Builder-style setter for the worker count policy
    pub fn with_worker_policy(mut self, policy: WorkerCountPolicy) -> Self {
        self.worker_policy = policy;
        self
    }

    /// Builder-style setter for the overflow policy
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_behaviour() {
        let config = ScanConfig::default();
        assert_eq!(config.worker_policy, WorkerCountPolicy::Clamp);
        assert_eq!(config.overflow_policy, OverflowPolicy::Wrapping);
    }

    #[test]
    fn test_strict_and_builders() {
        let strict = ScanConfig::strict();
        assert_eq!(strict.worker_policy, WorkerCountPolicy::Reject);
        assert_eq!(strict.overflow_policy, OverflowPolicy::Checked);

        let mixed = ScanConfig::default().with_overflow_policy(OverflowPolicy::Checked);
        assert_eq!(mixed.worker_policy, WorkerCountPolicy::Clamp);
        assert_eq!(mixed.overflow_policy, OverflowPolicy::Checked);
    }

    #[test]
    fn test_system_parameters_detect_threads() {
        let params = SystemParameters::default();
        assert!(params.n_threads >= 1);
        assert_eq!(params.n_threads, detect_threads());
    }
}
