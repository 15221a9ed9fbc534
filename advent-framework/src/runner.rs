//! Functions and traits for running solutions.
//!
//! # Quick Start
//!
//! A structure or impl-block can be annotated with the [`#[solution_runner]`][solution_runner]
//! attribute macro with appropriate properties:
//!
//! ```
//! # use advent_framework::runner::solution_runner;
//! # use advent_framework::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! # struct Readings(Vec<u32>);
//! # impl ParseData for Readings {
//! #     fn parse(_input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(vec![]))
//! #     }
//! # }
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = Readings;
//!     /* ... */
//! #    type Output = u32;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<u32> {
//! #        Ok(0)
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! struct Day01Runner;
//!
//! // or
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! impl Day01 {}
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use advent_framework_macros::solution_runner;

/// A trait for an output events handler.
///
/// When a solution runs, the steps of running it lead to events that are output through a
/// handler as feedback and logging.
pub trait OutputHandler {
    /// Called with the name of the solution, at the start of running the solution.
    fn solution_name(&mut self, name: &str);

    /// Called when parsing input is finished.
    ///
    /// The duration taken to parse is optionally passed.
    fn input_parsed(&mut self, duration_opt: Option<Duration>);

    /// Called when a solution part starts, with a [`PartKind`] to identify the part.
    fn part_start(&mut self, part: PartKind);

    /// Called when a part finishes to output the result, with a [`PartKind`] to identify the part.
    ///
    /// The duration taken to run the part is optionally passed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Measure the duration of an expression.
///
/// The macro evaluates the given expression once and returns a tuple of the expression's result
/// and the elapsed [`Duration`][std::time::Duration].
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// Optionally measure the duration of an expression.
///
/// Evaluates the given expression and returns a tuple of the expression's result and an optional
/// [`Duration`][std::time::Duration]: measured when `$timed` is `true`, `None` otherwise.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.input_parsed(duration_opt);
    Ok(parsed)
}

/// Run a solution that only implements part one.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `input` - The input string to parse and solve.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to parse & solve then output the elapsed times to the
///   handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution is propagated.
pub fn solve_part_one_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne>,
{
    handler.solution_name(name);
    let parsed = run_parse::<S1::Input>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Run a solution that implements both parts, parsing the input once and solving each part with
/// it.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `input` - The input string to parse and solve.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to parse & solve parts then output the elapsed times to
///   the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne>,
    S2: Solution<PartTwo, Input = S1::Input>,
{
    handler.solution_name(name);
    let parsed = run_parse::<S1::Input>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A trait for solutions that can be run.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Arguments
    ///
    /// - `input` - The input string to parse and solve.
    /// - `handler` - The output handler to output events to.
    /// - `timed` - A flag to measure the time to process steps then output the elapsed times to
    ///   the handler.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}
