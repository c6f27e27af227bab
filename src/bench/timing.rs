//! Wall-clock timing harness

use std::time::Instant;

/// Runs `f` once and returns its value with the elapsed milliseconds
pub fn measure_ms<R, F: FnOnce() -> R>(f: F) -> (R, f64) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    (value, elapsed)
}

/// Runs `f` `repeats` times (at least once) and keeps the fastest time.
///
/// The value returned is the one produced by the last run.
pub fn measure_best_ms<R, F: FnMut() -> R>(repeats: usize, mut f: F) -> (R, f64) {
    let (mut value, mut best) = measure_ms(&mut f);
    for _ in 1..repeats {
        let (next, ms) = measure_ms(&mut f);
        value = next;
        best = best.min(ms);
    }
    (value, best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_ms_returns_value() {
        let (value, ms) = measure_ms(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(ms >= 0.0);
    }

    #[test]
    fn test_measure_best_runs_every_repeat() {
        let mut calls = 0;
        let (last, ms) = measure_best_ms(5, || {
            calls += 1;
            calls
        });
        assert_eq!(calls, 5);
        assert_eq!(last, 5);
        assert!(ms >= 0.0);

        let mut calls = 0;
        measure_best_ms(0, || calls += 1);
        assert_eq!(calls, 1);
    }
}
