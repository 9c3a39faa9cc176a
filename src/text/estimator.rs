//! Rough timing and memory figures reported alongside a conversion.
//!
//! These numbers are illustrative. The memory figure is a heuristic built from
//! the UTF-8 length of the output plus a fixed per-object overhead; it does not
//! inspect the allocator. The timing figure is wall-clock time around a single
//! call and includes whatever else the thread happened to be doing.

use std::time::Instant;

/// Fixed per-object overhead, in bytes, added to every memory estimate.
pub const OBJECT_OVERHEAD_BYTES: usize = 56;

/// Estimated footprint of `text` in kilobytes.
pub fn estimate_memory_kb(text: &str) -> f64 {
    (text.len() + OBJECT_OVERHEAD_BYTES) as f64 / 1024.0
}

/// Run `f` and return its output with the elapsed wall-clock milliseconds.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed().as_secs_f64() * 1000.0)
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
