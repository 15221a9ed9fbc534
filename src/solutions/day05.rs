use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use thiserror::Error;

#[solution_runner(name = "Day 5: Ingredient Ranges", part_one = Day05, part_two = Day05)]
impl super::AdventOfCode2025<5> {}

#[derive(Error, Debug)]
enum Day05Error {
    #[error("ingredient range is not formatted as `low-high`: {0:?}")]
    MalformedRange(String),
}

/*
Input is a database in two blocks separated by a blank line: fresh ingredient ID ranges like
`92714816788170-94137721164754` (inclusive), then single ingredient IDs to check.

Part 1 counts the IDs that fall in at least one fresh range.

Part 2 ignores the IDs and counts how many distinct IDs the ranges cover in total. Ranges overlap,
so they are merged first; ranges that touch end to end (like `10-14` and `15-16`) merge too.
*/

/// An inclusive range of ingredient IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IdRange {
    low: i64,
    high: i64,
}

impl IdRange {
    /// The number of IDs covered, inclusive of both ends.
    fn len(self) -> i64 {
        self.high - self.low + 1
    }

    fn contains(self, id: i64) -> bool {
        id >= self.low && id <= self.high
    }

    /// Merge with another range when they overlap or touch end to end, or `None` when apart.
    fn merge_overlap(self, other: Self) -> Option<Self> {
        if self.low >= other.low && self.high <= other.high {
            // self falls within other
            return Some(other);
        }
        if other.low >= self.low && other.high <= self.high {
            // other falls within self
            return Some(self);
        }
        if self.high + 1 < other.low || self.low - 1 > other.high {
            return None;
        }

        let mut merged = other;
        if self.low > other.low {
            merged.high = self.high;
        }
        if self.high < other.high {
            merged.low = self.low;
        }
        Some(merged)
    }
}

/// The fresh ingredient ranges and the IDs to check against them.
struct IngredientDatabase {
    ranges: Vec<IdRange>,
    ids: Vec<i64>,
}

impl ParseData for IngredientDatabase {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut ranges = Vec::new();
        let mut ids = Vec::new();
        let mut id_mode = false;

        parse_input_lines(input, |_, line| {
            // a blank line switches from ranges to IDs
            if line.trim().is_empty() {
                id_mode = true;
                return Ok(());
            }

            if id_mode {
                ids.push(parse_with_context(line)?);
            } else {
                let (low, high) = line
                    .split_once('-')
                    .ok_or_else(|| Day05Error::MalformedRange(line.to_string()))?;
                ranges.push(IdRange {
                    low: parse_with_context(low)?,
                    high: parse_with_context(high)?,
                });
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        Ok(Self { ranges, ids })
    }
}

/// Merge overlapping or touching ranges until no more merges happen.
fn merge_ranges(ranges: &[IdRange]) -> Vec<IdRange> {
    let mut pending = ranges.to_vec();
    pending.sort_by_key(|r| r.low);

    loop {
        let mut merged_any = false;
        let mut kept: Vec<IdRange> = Vec::with_capacity(pending.len());

        'next_range: for id_range in pending {
            for existing in &mut kept {
                if let Some(merged) = id_range.merge_overlap(*existing) {
                    *existing = merged;
                    merged_any = true;
                    continue 'next_range;
                }
            }
            kept.push(id_range);
        }

        pending = kept;
        if !merged_any {
            return pending;
        }
    }
}

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = IngredientDatabase;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let fresh = input
            .ids
            .iter()
            .filter(|&&id| input.ranges.iter().any(|id_range| id_range.contains(id)))
            .count();
        Ok(fresh)
    }
}

impl Solution<PartTwo> for Day05 {
    type Input = IngredientDatabase;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let covered = merge_ranges(&input.ranges)
            .into_iter()
            .map(IdRange::len)
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(covered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"3-5
10-14
12-18
19-20

4
7
13
100
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = IngredientDatabase::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = IngredientDatabase::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    fn range(low: i64, high: i64) -> IdRange {
        IdRange { low, high }
    }

    #[test]
    fn merge_overlap_handles_overlaps_and_gaps() {
        assert_eq!(range(3, 5).merge_overlap(range(10, 14)), None);
        assert_eq!(range(10, 14).merge_overlap(range(3, 5)), None);
        assert_eq!(
            range(3, 12).merge_overlap(range(10, 14)),
            Some(range(3, 14))
        );
        assert_eq!(
            range(12, 15).merge_overlap(range(10, 14)),
            Some(range(10, 15))
        );
        assert_eq!(
            range(12, 13).merge_overlap(range(10, 14)),
            Some(range(10, 14))
        );
        assert_eq!(
            range(10, 14).merge_overlap(range(12, 13)),
            Some(range(10, 14))
        );
        // touching end to end still merges
        assert_eq!(
            range(10, 14).merge_overlap(range(15, 16)),
            Some(range(10, 16))
        );
        assert_eq!(
            range(10, 14).merge_overlap(range(5, 9)),
            Some(range(5, 14))
        );
    }
}
