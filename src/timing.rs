//! Wall-clock measurement of synchronous calls.

use instant::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value paired with the time it took to produce.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timed<R> {
    /// The operation's result, untouched.
    pub result: R,

    /// Elapsed wall-clock time in milliseconds.
    pub elapsed_ms: f64,
}

impl<R> Timed<R> {
    /// Drops the timing and returns the result.
    pub fn into_result(self) -> R {
        self.result
    }
}

/// Runs `op` and measures how long it takes on a monotonic clock.
///
/// On `wasm32` with the `wasm` feature the clock is `performance.now()`.
///
/// # Examples
///
/// ```
/// use u_tsp::timing::measure;
///
/// let timed = measure(|| (1..=10).sum::<u32>());
/// assert_eq!(timed.result, 55);
/// assert!(timed.elapsed_ms >= 0.0);
/// ```
pub fn measure<R, F>(op: F) -> Timed<R>
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = op();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Timed { result, elapsed_ms }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_result_unmodified() {
        let timed = measure(|| vec![3, 1, 2]);
        assert_eq!(timed.result, vec![3, 1, 2]);
        assert_eq!(timed.into_result(), vec![3, 1, 2]);
    }

    #[test]
    fn test_elapsed_covers_call() {
        let timed = measure(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(timed.elapsed_ms >= 5.0, "elapsed {}", timed.elapsed_ms);
    }

    #[test]
    fn test_outer_covers_inner() {
        let outer = measure(|| measure(|| std::thread::sleep(Duration::from_millis(2))));
        assert!(outer.elapsed_ms >= outer.result.elapsed_ms);
        assert!(outer.result.elapsed_ms >= 2.0);
    }

    #[test]
    fn test_runs_once() {
        let mut calls = 0;
        measure(|| calls += 1);
        assert_eq!(calls, 1);
    }
}
