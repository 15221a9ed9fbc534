use std::collections::HashMap;

use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;
use thiserror::Error;

#[solution_runner(name = "Day 10: Lights and Joltage", part_one = Day10, part_two = Day10)]
impl super::AdventOfCode2025<10> {}

#[derive(Error, Debug)]
enum Day10Error {
    #[error("line doesn't match the machine format: {0:?}")]
    MalformedLine(String),
    #[error("button light index {index} out of range for {lights} lights")]
    ButtonIndexOutOfRange { index: usize, lights: usize },
    #[error("no button combination toggles the lights")]
    NoButtonCombination,
    #[error("no button presses reach the joltage requirements")]
    NoJoltageReduction,
}

/*
Input is a list of machines, one per line, like:

  [.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}

The `[...]` block is the indicator light pattern to reach, starting all off. Each `(...)` group is
a button listing the lights it toggles. The `{...}` block is the joltage requirement per light
counter, starting all zero.

For part 1, find the minimum button presses to toggle each machine's lights into the indicator
pattern, and sum over machines.

For part 2, each button press instead adds one to the counter of each light it lists; find the
minimum presses so every counter matches the joltage requirements, and sum over machines. Solved
by working backwards in halves: a press pattern with matching parities is subtracted, the rest is
halved and solved recursively for double the cost, memoized per goal vector.
*/

/// One machine: the target light mask, the buttons' toggle masks, and the buttons' counter
/// increments alongside the joltage requirements.
struct LightMachine {
    light: u64,
    buttons: Vec<u64>,
    button_coeffs: Vec<Vec<u32>>,
    joltage: Vec<u32>,
}

struct LightMachines(Vec<LightMachine>);

impl ParseData for LightMachines {
    fn parse(input: &str) -> DynamicResult<Self> {
        const PATTERN: &str = r"^\s*\[([.#]+)\]\s*((?:\([0-9,]+\)\s*)+)\{([0-9,]+)\}\s*$";
        let re = Regex::new(PATTERN).expect("pattern should be valid");

        let machines = parse_input_lines(input, |_, line| {
            if line.trim().is_empty() {
                return Ok(None);
            }
            let captures = re
                .captures(line)
                .ok_or_else(|| Day10Error::MalformedLine(line.to_string()))?;

            let mut light = 0_u64;
            for (i, state) in captures[1].chars().enumerate() {
                if state == '#' {
                    light |= 1 << i;
                }
            }

            let joltage = captures[3]
                .split(',')
                .map(parse_with_context)
                .collect::<Result<Vec<u32>, _>>()?;

            let mut buttons = Vec::new();
            let mut button_coeffs = Vec::new();
            for button_str in captures[2].trim().split_whitespace() {
                let mut mask = 0_u64;
                let mut coeffs = vec![0_u32; joltage.len()];
                let indices = button_str.trim_matches(['(', ')']);
                for index_str in indices.split(',') {
                    let index: usize = parse_with_context(index_str)?;
                    if index >= joltage.len() {
                        return Err(Day10Error::ButtonIndexOutOfRange {
                            index,
                            lights: joltage.len(),
                        }
                        .into());
                    }
                    mask |= 1 << index;
                    coeffs[index] = 1;
                }
                buttons.push(mask);
                button_coeffs.push(coeffs);
            }

            Ok(Some(LightMachine {
                light,
                buttons,
                button_coeffs,
                joltage,
            }))
        })
        .filter_map(|result| match result {
            Ok(Some(machine)) => Some(Ok(machine)),
            Ok(None) => None,
            Err(error) => Some(Err(error)),
        })
        .collect::<Result<_, _>>()?;

        Ok(Self(machines))
    }
}

/// The minimum presses to toggle the lights from all off into the desired mask, trying every
/// button combination. `None` if no combination works.
fn min_presses_to_toggle(desired: u64, buttons: &[u64]) -> Option<u32> {
    let mut best: Option<u32> = None;

    for perm in 1_u32..(1 << buttons.len()) {
        let mut state = 0;
        for (j, &button) in buttons.iter().enumerate() {
            if perm & (1 << j) != 0 {
                state ^= button;
            }
        }

        if state == desired {
            let count = perm.count_ones();
            if best.is_none_or(|b| count < b) {
                best = Some(count);
            }
        }
    }

    best
}

/// Every distinct counter increment achievable in one round of presses, with the fewest presses
/// producing it. Includes the all-zero pattern from pressing nothing.
fn press_patterns(coeffs: &[Vec<u32>], counters: usize) -> Vec<(Vec<u32>, u32)> {
    let mut min_cost: HashMap<Vec<u32>, u32> = HashMap::new();

    for mask in 0_u32..(1 << coeffs.len()) {
        let mut pattern = vec![0_u32; counters];
        for (i, coeff) in coeffs.iter().enumerate() {
            if mask & (1 << i) != 0 {
                for (value, &increment) in pattern.iter_mut().zip(coeff) {
                    *value += increment;
                }
            }
        }

        let cost = mask.count_ones();
        min_cost
            .entry(pattern)
            .and_modify(|prev| *prev = (*prev).min(cost))
            .or_insert(cost);
    }

    min_cost.into_iter().collect()
}

/// The minimum presses to reach the goal counters, or `None` when unreachable.
///
/// Presses split into a final round and everything before it doubled: subtract a press pattern
/// whose parities match the goal, halve the remainder, and recurse at double cost.
fn min_presses_for_joltage(
    patterns: &[(Vec<u32>, u32)],
    goal: &[u32],
    memo: &mut HashMap<Vec<u32>, Option<u64>>,
) -> Option<u64> {
    if goal.iter().all(|&g| g == 0) {
        return Some(0);
    }
    if let Some(&cached) = memo.get(goal) {
        return cached;
    }

    let mut best: Option<u64> = None;
    for (pattern, cost) in patterns {
        let fits = goal
            .iter()
            .zip(pattern)
            .all(|(&g, &p)| p <= g && (p & 1) == (g & 1));
        if !fits {
            continue;
        }

        let halved: Vec<u32> = goal.iter().zip(pattern).map(|(&g, &p)| (g - p) / 2).collect();
        if let Some(presses) = min_presses_for_joltage(patterns, &halved, memo) {
            let candidate = u64::from(*cost) + 2 * presses;
            if best.is_none_or(|b| candidate < b) {
                best = Some(candidate);
            }
        }
    }

    memo.insert(goal.to_vec(), best);
    best
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = LightMachines;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut total = 0;
        for machine in &input.0 {
            let presses = min_presses_to_toggle(machine.light, &machine.buttons)
                .ok_or(Day10Error::NoButtonCombination)?;
            total += presses;
        }
        Ok(total)
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = LightMachines;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut total = 0;
        for machine in &input.0 {
            let patterns = press_patterns(&machine.button_coeffs, machine.joltage.len());
            let mut memo = HashMap::new();
            let presses = min_presses_for_joltage(&patterns, &machine.joltage, &mut memo)
                .ok_or(Day10Error::NoJoltageReduction)?;
            total += presses;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"[.#] (0) (0,1) {3,2}
[##] (0,1) {2,2}
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = LightMachines::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = LightMachines::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 5);
        Ok(())
    }

    #[test]
    fn unreachable_lights_are_an_error() -> DynamicResult<()> {
        // the only button toggles both lights, but only one should be on
        let parsed = LightMachines::parse("[#.] (0,1) {1,1}\n")?;
        assert!(<Day10 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(LightMachines::parse("[#.] no buttons {1,1}\n").is_err());
    }
}
