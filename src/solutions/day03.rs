use advent_framework::parsing::parse_input_lines;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use rayon::prelude::*;
use thiserror::Error;

#[solution_runner(name = "Day 3: Highest Joltage", part_one = Day03, part_two = Day03)]
impl super::AdventOfCode2025<3> {}

#[derive(Error, Debug)]
enum Day03Error {
    #[error("battery bank contains a non-digit: {0:?}")]
    NotADigit(char),
    #[error("battery bank has fewer than {expected} batteries: {found}")]
    BankTooShort { expected: usize, found: usize },
}

/*
Input is a list of battery banks, one per line, each a long string of digits. Turning on a subset
of batteries produces a joltage: the selected digits read in order as one number.

Part 1 turns on exactly two batteries per bank for the highest two-digit joltage, and sums the
joltages of all banks.

Part 2 turns on twelve batteries per bank for the highest twelve-digit joltage, and sums those.

Banks are independent, so they are evaluated in parallel.
*/

/// The number of batteries to turn on in part two.
const PART_TWO_BATTERIES: usize = 12;

/// Battery banks as rows of digit values.
struct BatteryBanks(Vec<Vec<u8>>);

impl ParseData for BatteryBanks {
    fn parse(input: &str) -> DynamicResult<Self> {
        let banks = parse_input_lines(input, |_, line| {
            line.chars()
                .map(|c| {
                    let digit = c.to_digit(10).ok_or(Day03Error::NotADigit(c))?;
                    Ok(u8::try_from(digit)?)
                })
                .collect::<DynamicResult<Vec<u8>>>()
        })
        .filter(|result| !matches!(result, Ok(bank) if bank.is_empty()))
        .collect::<Result<_, _>>()?;

        Ok(Self(banks))
    }
}

/// The highest two-digit joltage from a bank, keeping digit order.
fn highest_two_digits(bank: &[u8]) -> u64 {
    let mut high1 = 0;
    let mut high2 = 0;

    for (i, &digit) in bank.iter().enumerate() {
        let digit = u64::from(digit);
        // the first digit can't come from the last battery
        if digit > high1 && i < bank.len() - 1 {
            high1 = digit;
            high2 = 0;
        } else if digit > high2 {
            high2 = digit;
        }
    }

    high1 * 10 + high2
}

/// The highest `n`-digit joltage from a bank, keeping digit order.
///
/// Greedy per output digit: pick the leftmost maximum digit whose position still leaves enough
/// batteries to fill the remaining places.
fn highest_n_digits(bank: &[u8], n: usize) -> u64 {
    let mut value = 0;
    let mut j = 0;

    for h in 0..n {
        let window_end = bank.len() - n + h;
        let mut best = bank[window_end];
        let mut best_index = window_end;
        for i in (j..=window_end).rev() {
            if bank[i] >= best {
                best = bank[i];
                best_index = i;
            }
        }
        j = best_index + 1;
        value = value * 10 + u64::from(best);
    }

    value
}

/// Error if any bank has fewer than `expected` batteries.
fn check_bank_sizes(banks: &[Vec<u8>], expected: usize) -> Result<(), Day03Error> {
    match banks.iter().find(|bank| bank.len() < expected) {
        Some(bank) => Err(Day03Error::BankTooShort {
            expected,
            found: bank.len(),
        }),
        None => Ok(()),
    }
}

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = BatteryBanks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        check_bank_sizes(&input.0, 2)?;
        let sum = input.0.par_iter().map(|bank| highest_two_digits(bank)).sum();
        Ok(sum)
    }
}

impl Solution<PartTwo> for Day03 {
    type Input = BatteryBanks;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        check_bank_sizes(&input.0, PART_TWO_BATTERIES)?;
        let sum = input
            .0
            .par_iter()
            .map(|bank| highest_n_digits(bank, PART_TWO_BATTERIES))
            .sum();
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"987654321111111
811111111111119
234234234234278
818181911112111
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = BatteryBanks::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 357);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = BatteryBanks::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 3_121_910_778_619);
        Ok(())
    }

    fn bank(digits: &str) -> Vec<u8> {
        digits.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn highest_two_keeps_digit_order() {
        assert_eq!(highest_two_digits(&bank("987654321111111")), 98);
        assert_eq!(highest_two_digits(&bank("811111111111119")), 89);
        assert_eq!(highest_two_digits(&bank("234234234234278")), 78);
        assert_eq!(highest_two_digits(&bank("818181911112111")), 92);
    }

    #[test]
    fn highest_n_picks_greedy_maximums() {
        assert_eq!(highest_n_digits(&bank("987654321111111"), 3), 987);
        assert_eq!(highest_n_digits(&bank("811111111111119"), 3), 819);
        assert_eq!(highest_n_digits(&bank("234234234234278"), 4), 4478);
        assert_eq!(highest_n_digits(&bank("818181911112111"), 3), 921);
        assert_eq!(
            highest_n_digits(&bank("234234234234278"), 12),
            434_234_234_278
        );
    }
}
