// Small helpers for the human-readable side of a draw: cell counts with
// units and wall-clock timing.

use std::time::{Duration, Instant};

const UNITS: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Format a cell count with 1024-based units: `512M`, `1.5K`, `999`.
pub fn format_char_count(count: u64) -> String {
    if count == 0 {
        return "0".to_string();
    }

    // floor(log2(count)) / 10, capped at the last unit
    let unit = ((63 - count.leading_zeros()) / 10).min(8) as usize;
    if unit == 0 {
        return count.to_string();
    }

    let scaled = count as f64 / 1024f64.powi(unit as i32);
    format!("{scaled}{}", UNITS[unit])
}

/// Measures one timed section.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A plain allocate+memset of the same size as a draw.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    /// Bytes actually filled.
    pub bytes: usize,
    pub elapsed: Duration,
}

/// Allocate and fill a plain buffer of `bytes` bytes; the time it takes is the
/// single-threaded bandwidth a draw can be compared against.
pub fn memset_baseline(bytes: usize) -> Baseline {
    let stopwatch = Stopwatch::start();
    let buffer = std::hint::black_box(vec![b'0'; bytes]);
    let elapsed = stopwatch.elapsed();
    Baseline { bytes: buffer.iter().filter(|&&b| b == b'0').count(), elapsed }
}
