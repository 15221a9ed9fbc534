use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;

use crate::grid::{ADJACENT_DIRECTIONS, Grid};

#[solution_runner(name = "Day 4: Paper Towels", part_one = Day04, part_two = Day04)]
impl super::AdventOfCode2025<4> {}

/*
Input is a board of `@` paper towel rolls and `.` empty squares. A roll can be grabbed by the
forklift when fewer than 4 of its 8 adjacent squares hold a roll.

Part 1 counts the rolls that can be grabbed from the starting board.

Part 2 repeatedly grabs every grabbable roll at once, opening up rolls behind them, until no roll
can be grabbed. It counts the total rolls grabbed.
*/

/// The board of paper towel rolls.
struct Warehouse(Grid<char>);

impl ParseData for Warehouse {
    fn parse(input: &str) -> DynamicResult<Self> {
        Ok(Self(Grid::from_lines(input)))
    }
}

/// Count the cells adjacent to the coordinates holding the needle.
fn count_adjacent(board: &Grid<char>, coords: Point2<i32>, needle: char) -> usize {
    ADJACENT_DIRECTIONS
        .iter()
        .filter(|direction| board.value_at(coords + direction.offset()) == needle)
        .count()
}

/// Collect the coordinates of every roll that can currently be grabbed.
fn grabbable_rolls(board: &Grid<char>) -> Vec<Point2<i32>> {
    board
        .cells()
        .filter(|&(coords, &cell)| cell == '@' && count_adjacent(board, coords, '@') < 4)
        .map(|(coords, _)| coords)
        .collect()
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = Warehouse;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(grabbable_rolls(&input.0).len())
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = Warehouse;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut board = input.0.clone();
        let mut grabbed = 0;

        loop {
            let rolls = grabbable_rolls(&board);
            if rolls.is_empty() {
                break;
            }
            grabbed += rolls.len();
            for coords in rolls {
                board.set(coords, '.');
            }
        }

        Ok(grabbed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r".@@.
@@@@
.@@.
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Warehouse::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Warehouse::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }
}
