use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use thiserror::Error;

#[solution_runner(name = "Day 1: Dial Rotations", part_one = Day01, part_two = Day01)]
impl super::AdventOfCode2025<1> {}

#[derive(Error, Debug)]
enum Day01Error {
    #[error("line has no rotation amount")]
    MissingAmount,
    #[error("unknown rotation direction: {0:?}")]
    UnknownDirection(char),
}

/*
Input is a list of dial rotations, one per line. The dial has positions 0 through 99 and starts
pointing at 50. A rotation like `L50` turns the dial left (down) by 50, `R100` turns it right (up)
by 100, wrapping around the dial as needed.

For part 1, count the rotations that leave the dial pointing at 0.

For part 2, count every click of the dial onto 0: each time a rotation passes over 0 while
wrapping, plus each time it lands on 0.
*/

/// Signed rotation amounts, negative for left turns.
struct Rotations(Vec<i32>);

impl ParseData for Rotations {
    fn parse(input: &str) -> DynamicResult<Self> {
        let rotations = parse_input_lines(input, |_, line| {
            let mut chars = line.chars();
            let direction = chars.next().ok_or(Day01Error::MissingAmount)?;
            let amount: i32 = parse_with_context(chars.as_str())?;
            match direction {
                'L' => Ok(-amount),
                'R' => Ok(amount),
                other => Err(Day01Error::UnknownDirection(other).into()),
            }
        })
        .collect::<Result<_, _>>()?;

        Ok(Self(rotations))
    }
}

/// Apply every rotation to the dial, tracking landings on zero and passes over zero.
///
/// Returns `(landings, clicks)`: the number of rotations ending on zero, and the number of times
/// the dial passed or landed on zero.
fn spin_dial(rotations: &[i32]) -> (u32, u32) {
    let mut dial = 50;
    let mut landings = 0;
    let mut clicks = 0;

    for &rotation in rotations {
        let mut start = dial;
        dial += rotation;

        while dial < 0 {
            dial += 100;
            // starting exactly on zero means the first wrap doesn't pass it again
            if start != 0 {
                clicks += 1;
            }
            start = dial;
        }
        while dial >= 100 {
            dial -= 100;
            // landing on zero is counted below, not as a pass
            if dial != 0 {
                clicks += 1;
            }
        }

        if dial == 0 {
            landings += 1;
            clicks += 1;
        }
    }

    (landings, clicks)
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = Rotations;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let (landings, _) = spin_dial(&input.0);
        Ok(landings)
    }
}

impl Solution<PartTwo> for Day01 {
    type Input = Rotations;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let (_, clicks) = spin_dial(&input.0);
        Ok(clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"L50
R100
L60
R70
L11
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Rotations::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }
}
