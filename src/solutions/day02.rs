use advent_framework::parsing::parse_with_context;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(name = "Day 2: Repeating IDs", part_one = Day02, part_two = Day02)]
impl super::AdventOfCode2025<2> {}

#[derive(Error, Debug)]
enum Day02Error {
    #[error("ID range is not formatted as `low-high`: {0:?}")]
    MalformedRange(String),
}

/*
Input is a single comma-separated list of ID ranges like `11-22,95-115`, each range inclusive on
both ends.

Part 1 sums the IDs whose decimal digits are some pattern written exactly twice, like `99` or
`123123`.

Part 2 sums the IDs whose digits are any pattern repeated two or more times, like `111` or
`565656`. This includes every ID part 1 counts.
*/

/// Inclusive ID ranges to scan.
struct IdRanges(Vec<(u64, u64)>);

impl IdRanges {
    /// Iterate over every ID in every range.
    fn ids(&self) -> impl Iterator<Item = u64> {
        self.0.iter().flat_map(|&(low, high)| low..=high)
    }
}

impl ParseData for IdRanges {
    fn parse(input: &str) -> DynamicResult<Self> {
        let ranges = input
            .trim()
            .split(',')
            .map(|id_range| {
                let (low, high) = id_range
                    .split_once('-')
                    .ok_or_else(|| Day02Error::MalformedRange(id_range.to_string()))?;
                Ok((parse_with_context(low)?, parse_with_context(high)?))
            })
            .collect::<DynamicResult<_>>()?;

        Ok(Self(ranges))
    }
}

/// Whether the ID's digits are a pattern written exactly twice.
fn is_pattern_twice(id: u64) -> bool {
    let digits = id.checked_ilog10().unwrap_or(0) + 1;
    if digits % 2 != 0 {
        // odd number of digits can't split in half
        return false;
    }

    let tens = 10_u64.pow(digits / 2);
    id / tens == id % tens
}

/// Whether the ID's digits are some pattern repeated two or more times.
fn has_repeating_pattern(id: u64) -> bool {
    let digits = id.to_string();
    let digits = digits.as_bytes();
    let len = digits.len();

    // try every chunk size that splits the digits evenly into at least two chunks
    (1..=len / 2)
        .filter(|size| len % size == 0)
        .any(|size| digits.chunks(size).all(|chunk| chunk == &digits[..size]))
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .ids()
            .filter(|&id| is_pattern_twice(id))
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

impl Solution<PartTwo> for Day02 {
    type Input = IdRanges;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .ids()
            .filter(|&id| has_repeating_pattern(id))
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "11-22,95-115";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 132);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = IdRanges::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 243);
        Ok(())
    }

    #[test]
    fn detects_pattern_twice() {
        assert!(is_pattern_twice(11));
        assert!(is_pattern_twice(123_123));
        assert!(!is_pattern_twice(123_124));
        assert!(!is_pattern_twice(111));
    }

    #[test]
    fn detects_repeating_patterns() {
        assert!(has_repeating_pattern(11));
        assert!(has_repeating_pattern(111));
        assert!(!has_repeating_pattern(1112));
        assert!(has_repeating_pattern(123_123));
        assert!(has_repeating_pattern(123_123_123));
        assert!(has_repeating_pattern(565_656));
    }
}
