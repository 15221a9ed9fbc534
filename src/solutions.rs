//! Solutions implemented for Advent of Code 2025.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2025<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add a match case to run [`AdventOfCode2025<DAY>`] for a day, below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! // matching for day 1
//! 1 => AdventOfCode2025::<1>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use advent_framework::DynamicResult;
use advent_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day.
///
/// Use [`#[solution_runner]`][advent_framework::runner::solution_runner] for convenience:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// use advent_framework::runner::solution_runner;
/// use advent_framework::{PartOne, Solution};
///
/// struct Day01;
/// impl Solution<PartOne> for Day01 {
///     /* ... */
/// }
///
/// #[solution_runner(name = "Day 1", part_one = Day01)]
/// impl super::AdventOfCode2025<1> {}
/// ```
struct AdventOfCode2025<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2025::<1>::run(input, handler, timed),
        2 => AdventOfCode2025::<2>::run(input, handler, timed),
        3 => AdventOfCode2025::<3>::run(input, handler, timed),
        4 => AdventOfCode2025::<4>::run(input, handler, timed),
        5 => AdventOfCode2025::<5>::run(input, handler, timed),
        6 => AdventOfCode2025::<6>::run(input, handler, timed),
        7 => AdventOfCode2025::<7>::run(input, handler, timed),
        8 => AdventOfCode2025::<8>::run(input, handler, timed),
        9 => AdventOfCode2025::<9>::run(input, handler, timed),
        10 => AdventOfCode2025::<10>::run(input, handler, timed),
        11 => AdventOfCode2025::<11>::run(input, handler, timed),
        12 => AdventOfCode2025::<12>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
