//! Console report of one dataset size

use std::io::{self, Write};

use crate::constants::REPORT_PRECISION;

/// Times of the baseline scans, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineTimings {
    /// Iterator-adaptor scan
    pub no_policy_ms: f64,
    /// Explicit sequential loop; the speedup denominator
    pub sequential_ms: f64,
    /// Rayon library scan
    pub parallel_ms: f64,
}

/// Timing of the chunked scan for one K
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeasurement {
    /// Worker count requested
    pub k: usize,
    /// Elapsed time in milliseconds
    pub time_ms: f64,
    /// Sequential time divided by this time
    pub speedup: f64,
}

impl KMeasurement {
    /// Record a measurement, deriving the speedup from the sequential baseline
    pub fn new(k: usize, time_ms: f64, sequential_ms: f64) -> Self {
        let speedup = if time_ms > 0.0 {
            sequential_ms / time_ms
        } else {
            f64::INFINITY
        };
        Self { k, time_ms, speedup }
    }
}

/// Everything measured for one dataset size
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    /// Number of elements scanned
    pub size: usize,
    /// Hardware threads the K sweep was derived from
    pub threads: usize,
    /// Baseline scan timings
    pub baselines: BaselineTimings,
    /// One entry per K, in sweep order
    pub measurements: Vec<KMeasurement>,
}

impl SizeReport {
    /// The fastest K; the earliest one wins a tie
    pub fn best(&self) -> Option<&KMeasurement> {
        self.measurements.iter().fold(None, |best, m| match best {
            Some(b) if b.time_ms <= m.time_ms => Some(b),
            _ => Some(m),
        })
    }

    /// Best K divided by the hardware thread count
    pub fn best_ratio(&self) -> Option<f64> {
        self.best().map(|b| b.k as f64 / self.threads.max(1) as f64)
    }

    /// Writes the human readable table
    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let p = REPORT_PRECISION;
        writeln!(w)?;
        writeln!(w, "Dataset Size: {}", self.size)?;
        writeln!(w, "No policy:           {:.p$} ms", self.baselines.no_policy_ms)?;
        writeln!(w, "Sequential:          {:.p$} ms", self.baselines.sequential_ms)?;
        writeln!(w, "Parallel (rayon):    {:.p$} ms", self.baselines.parallel_ms)?;
        writeln!(w, "Custom Algorithm:")?;
        writeln!(w, "K\tTime(ms)\tSpeedup")?;
        for m in &self.measurements {
            writeln!(w, "{}\t{:.p$}\t\t{:.p$}", m.k, m.time_ms, m.speedup)?;
        }
        if let (Some(best), Some(ratio)) = (self.best(), self.best_ratio()) {
            writeln!(w, "Best K: {}", best.k)?;
            writeln!(w, "Ratio (Best K / Threads): {:.p$}", ratio)?;
        }
        Ok(())
    }
}
