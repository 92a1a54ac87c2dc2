use std::io::{self, Write};

pub mod brute_force;
pub mod cases;
pub mod config;
pub mod error;
pub mod hash_map;
pub mod sorted;
pub mod telemetry;
pub mod timing;

pub use config::Config;
pub use error::HarnessError;

/// Indices `(i, j)` with `i < j` whose values sum to the target.
pub type Pair = (usize, usize);

pub struct Solution;

impl Solution {
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
        match hash_map::two_sum(&nums, target) {
            Some((i, j)) => vec![i as i32, j as i32],
            None => Vec::new(),
        }
    }
}

/// Writes the test case report followed by the timing comparison.
///
/// A closed reader (e.g. `two-sum | head`) ends the report early without an error.
pub fn run<W: Write>(out: &mut W, config: &Config) -> Result<(), HarnessError> {
    match write_sections(out, config) {
        Err(HarnessError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn write_sections<W: Write>(out: &mut W, config: &Config) -> Result<(), HarnessError> {
    let outcomes = cases::run(cases::CASES);
    cases::write_report(out, &outcomes)?;

    writeln!(out)?;

    let measured = timing::measure(config)?;
    timing::write_report(out, &measured)?;

    out.flush()?;
    Ok(())
}
