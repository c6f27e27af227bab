use anyhow::Context;
use clap::Parser;

use chunkscan::bench::{self, SweepConfig};
use chunkscan::config::detect_threads;
use chunkscan::constants::{DEFAULT_REPEATS, DEFAULT_SEED};

/// Benchmark the chunked exclusive scan against sequential and rayon scans
#[derive(Parser)]
#[command(name = "chunkscan", version, about)]
struct Cli {
    /// Dataset size to sweep (repeatable; defaults to 100k, 10M and 50M)
    #[arg(short, long = "size")]
    sizes: Vec<usize>,

    /// Seed for the input generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Hardware thread count the K sweep is derived from
    #[arg(short, long, env = "CHUNKSCAN_THREADS")]
    threads: Option<usize>,

    /// Explicit worker count to measure (repeatable; overrides the sweep)
    #[arg(short, long = "k")]
    k: Vec<usize>,

    /// Timed runs per measurement, the fastest is reported
    #[arg(short, long, default_value_t = DEFAULT_REPEATS)]
    repeats: usize,

    /// Skip comparing chunked results with the sequential scan
    #[arg(long)]
    no_verify: bool,

    /// Run every K on a dedicated pool of exactly K threads
    #[arg(long)]
    pool_per_k: bool,
}

impl Cli {
    fn into_config(self) -> SweepConfig {
        let defaults = SweepConfig::default();
        SweepConfig {
            sizes: if self.sizes.is_empty() { defaults.sizes } else { self.sizes },
            seed: self.seed,
            threads: self.threads.unwrap_or_else(detect_threads).max(1),
            k_values: (!self.k.is_empty()).then_some(self.k),
            repeats: self.repeats.max(1),
            verify: !self.no_verify,
            pool_per_k: self.pool_per_k,
            scan: defaults.scan,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();
    log::debug!("sweep configuration: {config:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    bench::run(&config, &mut out).context("benchmark sweep failed")?;
    Ok(())
}
