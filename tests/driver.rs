//! Tests for the benchmark driver

use chunkscan::bench::{self, k_candidates, SweepConfig};

fn small_config() -> SweepConfig {
    SweepConfig {
        sizes: vec![0, 1, 1_000],
        threads: 2,
        ..SweepConfig::default()
    }
}

#[test]
fn test_sweep_reports_every_size() {
    let mut out = Vec::new();
    let reports = bench::run(&small_config(), &mut out).unwrap();
    assert_eq!(reports.iter().map(|r| r.size).collect::<Vec<_>>(), vec![0, 1, 1_000]);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Dataset Size:").count(), 3);
    assert_eq!(text.matches("Best K:").count(), 3);
    assert!(text.contains("Custom Algorithm:"));
}

#[test]
fn test_explicit_k_list_and_dedicated_pools() {
    let config = SweepConfig {
        sizes: vec![5_000],
        k_values: Some(vec![1, 3, 16]),
        repeats: 2,
        pool_per_k: true,
        ..small_config()
    };
    let mut out = Vec::new();
    let reports = bench::run(&config, &mut out).unwrap();
    let ks: Vec<usize> = reports[0].measurements.iter().map(|m| m.k).collect();
    assert_eq!(ks, vec![1, 3, 16]);
    assert!(reports[0].measurements.iter().all(|m| m.time_ms >= 0.0));
}

#[test]
fn test_best_ratio_uses_thread_count() {
    let reports = bench::run(&small_config(), &mut std::io::sink()).unwrap();
    for report in reports {
        let best = report.best().unwrap();
        assert_eq!(report.best_ratio(), Some(best.k as f64 / 2.0));
        assert!(k_candidates(2).contains(&best.k));
    }
}
