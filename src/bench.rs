//! Cycle-counting micro-benchmark harness used by the `test_speed` CLI
//! driver.
//!
//! This is deliberately narrow: it times one closure `ntests` times and
//! reduces the deltas between consecutive readings to a five-number summary.
//! The `inv_benchmark` criterion harness (under `benches/`) is the ambient,
//! statistically-rigorous benchmark suite; this module exists to reproduce
//! the reference tool's own cycle-count table.

/// Five-number summary (plus mean) of a run's per-iteration cycle counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub min: u64,
    pub q1: u64,
    pub median: u64,
    pub q3: u64,
    pub max: u64,
    pub average: u64,
}

/// Reads the CPU cycle counter. Falls back to a monotonic-clock-derived
/// estimate on targets without a direct cycle-counter instruction.
#[must_use]
pub fn cpucycles() -> u64 {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "x86_64")] {
            // SAFETY: RDTSC is available on every x86_64 target we build for.
            unsafe { core::arch::x86_64::_rdtsc() }
        } else if #[cfg(target_arch = "aarch64")] {
            let cycles: u64;
            // SAFETY: reading PMCCNTR_EL0 is a plain register read; it may
            // read as zero if userspace counter access hasn't been enabled,
            // which still yields a (degenerate but harmless) measurement.
            unsafe {
                core::arch::asm!("mrs {0}, pmccntr_el0", out(reg) cycles, options(nomem, nostack));
            }
            cycles
        } else {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        }
    }
}

/// Runs `f` `ntests` times, recording one extra boundary reading, and reduces
/// the `ntests` consecutive-reading deltas to a [`Stats`] summary.
pub fn bench<F: FnMut()>(ntests: usize, mut f: F) -> Stats {
    let mut readings = Vec::with_capacity(ntests + 1);
    readings.push(cpucycles());
    for _ in 0..ntests {
        f();
        readings.push(cpucycles());
    }

    let mut deltas: Vec<u64> = readings.windows(2).map(|w| w[1].saturating_sub(w[0])).collect();
    deltas.sort_unstable();
    stats_of_sorted(&deltas)
}

fn stats_of_sorted(sorted: &[u64]) -> Stats {
    let n = sorted.len();
    assert!(n > 0, "bench: no samples to summarize");
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2
    };
    let average = sorted.iter().sum::<u64>() / n as u64;
    Stats {
        min: sorted[0],
        q1: sorted[n / 4],
        median,
        q3: sorted[3 * n / 4],
        max: sorted[n - 1],
        average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_sorted_matches_hand_computation() {
        let sorted = [1u64, 2, 3, 4, 5, 6, 7, 8];
        let s = stats_of_sorted(&sorted);
        assert_eq!(s.min, 1);
        assert_eq!(s.max, 8);
        assert_eq!(s.median, (4 + 5) / 2);
        assert_eq!(s.q1, sorted[8 / 4]);
        assert_eq!(s.q3, sorted[3 * 8 / 4]);
    }

    #[test]
    fn bench_runs_closure_ntests_times() {
        let mut calls = 0u32;
        let stats = bench(20, || calls += 1);
        assert_eq!(calls, 20);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }
}
