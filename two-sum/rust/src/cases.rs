use std::io::Write;

use tracing::{debug, info};

use crate::{error::HarnessError, hash_map, Pair};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub nums: &'static [i32],
    pub target: i32,
    pub expected: Option<Pair>,
}

pub const CASES: &[Case] = &[
    Case {
        nums: &[2, 7, 11, 15],
        target: 9,
        expected: Some((0, 1)),
    },
    Case {
        nums: &[3, 2, 4],
        target: 6,
        expected: Some((1, 2)),
    },
    Case {
        nums: &[3, 3],
        target: 6,
        expected: Some((0, 1)),
    },
    Case {
        nums: &[-1, -2, -3, -4, -5],
        target: -8,
        expected: Some((2, 4)),
    },
    Case {
        nums: &[0, 4, 3, 0],
        target: 0,
        expected: Some((0, 3)),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub case: Case,
    pub actual: Option<Pair>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

pub fn run(cases: &[Case]) -> Vec<Outcome> {
    cases
        .iter()
        .enumerate()
        .map(|(i, &case)| {
            let actual = hash_map::two_sum(case.nums, case.target);
            debug!(case = i + 1, ?actual, expected = ?case.expected, "ran case");

            Outcome { case, actual }
        })
        .collect()
}

pub fn write_report<W: Write>(out: &mut W, outcomes: &[Outcome]) -> Result<(), HarnessError> {
    writeln!(out, "Testing Two Sum Solutions:")?;
    writeln!(out)?;

    for (i, outcome) in outcomes.iter().enumerate() {
        let status = if outcome.passed() { "✓" } else { "✗" };

        writeln!(out, "Test Case {}: {status}", i + 1)?;
        writeln!(out, "  Input: nums = {:?}, target = {}", outcome.case.nums, outcome.case.target)?;
        writeln!(out, "  Output: {}", format_pair(outcome.actual))?;
        writeln!(out, "  Expected: {}", format_pair(outcome.case.expected))?;
        writeln!(out)?;
    }

    let passed = outcomes.iter().filter(|o| o.passed()).count();
    info!(passed, total = outcomes.len(), "test cases finished");

    Ok(())
}

pub fn format_pair(pair: Option<Pair>) -> String {
    match pair {
        Some((i, j)) => format!("[{i}, {j}]"),
        None => "[]".to_owned(),
    }
}
