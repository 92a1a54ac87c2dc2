use std::{
    hint::black_box,
    io::Write,
    time::{Duration, Instant},
};

use tracing::info;

use crate::{brute_force, config::Config, error::HarnessError, hash_map, sorted, Pair};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub hash_map: Duration,
    pub brute_force: Duration,
    pub sorted: Duration,
}

impl Timing {
    /// How many times faster the hash map was than brute force.
    ///
    /// `None` if the hash map took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        if self.hash_map.is_zero() {
            return None;
        }

        Some(self.brute_force.as_secs_f64() / self.hash_map.as_secs_f64())
    }
}

/// `0..size` as i32.
pub fn synthetic_input(size: usize) -> Result<Vec<i32>, HarnessError> {
    if size < 2 {
        return Err(HarnessError::InputTooSmall(size));
    }

    let end = i32::try_from(size).map_err(|_| HarnessError::SizeOutOfRange(size))?;
    Ok((0..end).collect())
}

fn time(solver: fn(&[i32], i32) -> Option<Pair>, nums: &[i32], target: i32) -> Duration {
    let start = Instant::now();
    black_box(solver(black_box(nums), black_box(target)));
    let stop = Instant::now();

    stop.duration_since(start)
}

pub fn measure(config: &Config) -> Result<Timing, HarnessError> {
    let nums = synthetic_input(config.bench_size)?;
    let target = config.bench_target;

    let timing = Timing {
        hash_map: time(hash_map::two_sum, &nums, target),
        brute_force: time(brute_force::two_sum, &nums, target),
        sorted: time(sorted::two_sum, &nums, target),
    };

    info!(
        size = nums.len(),
        hash_map_ms = timing.hash_map.as_secs_f64() * 1000.0,
        brute_force_ms = timing.brute_force.as_secs_f64() * 1000.0,
        sorted_ms = timing.sorted.as_secs_f64() * 1000.0,
        "benchmark finished"
    );

    Ok(timing)
}

pub fn write_report<W: Write>(out: &mut W, timing: &Timing) -> Result<(), HarnessError> {
    let rule = "=".repeat(50);

    writeln!(out, "{rule}")?;
    writeln!(out, "Performance Comparison:")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Hash Map Approach: {:.6} seconds", timing.hash_map.as_secs_f64())?;
    writeln!(out, "Brute Force Approach: {:.6} seconds", timing.brute_force.as_secs_f64())?;
    writeln!(out, "Sorted Two Pointers Approach: {:.6} seconds", timing.sorted.as_secs_f64())?;

    match timing.speedup() {
        Some(speedup) => writeln!(out, "Speedup: {speedup:.2}x faster")?,
        None => writeln!(out, "Speedup: n/a")?,
    };

    Ok(())
}
