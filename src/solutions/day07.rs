use std::collections::{HashMap, HashSet};

use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};
use thiserror::Error;

use crate::grid::Grid;

#[solution_runner(name = "Day 7: Beam Splitters", part_one = Day07, part_two = Day07)]
impl super::AdventOfCode2025<7> {}

#[derive(Error, Debug)]
enum Day07Error {
    #[error("manifold has no start position 'S'")]
    MissingStart,
}

/*
Input is a tachyon manifold: a board with a start position `S` on the top row and `^` splitters
below. A beam fired from the start travels straight down. When it hits a splitter, it splits into
two beams that step one square left and right and continue down. Beams leave through the bottom
of the board.

Part 1 counts the splitters that are hit by at least one beam.

Part 2 counts the distinct paths a beam can take through the manifold. Paths recombine below a
splitter, so the count from each splitter is memoized.
*/

/// The manifold board and the start position of the beam.
struct Manifold {
    board: Grid<char>,
    start: Point2<i32>,
}

impl ParseData for Manifold {
    fn parse(input: &str) -> DynamicResult<Self> {
        let board = Grid::from_lines(input);
        let start = board.find(&'S').ok_or(Day07Error::MissingStart)?;
        Ok(Self { board, start })
    }
}

/// Tracks beams through a manifold, memoizing the path counts below each splitter.
struct BeamTrace<'a> {
    board: &'a Grid<char>,
    height: i32,
    splits: HashSet<Point2<i32>>,
    paths_from_split: HashMap<Point2<i32>, u64>,
}

impl<'a> BeamTrace<'a> {
    fn new(board: &'a Grid<char>) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            reason = "puzzle boards stay far below i32 dimensions"
        )]
        let height = board.height() as i32;
        Self {
            board,
            height,
            splits: HashSet::new(),
            paths_from_split: HashMap::new(),
        }
    }

    /// Fire a beam downward from the square below the start, returning the path count.
    fn fire_from(&mut self, start: Point2<i32>) -> u64 {
        self.fire_beam(start + Vector2::new(0, 1))
    }

    fn fire_beam(&mut self, coords: Point2<i32>) -> u64 {
        if let Some(&paths) = self.paths_from_split.get(&coords) {
            // already traced below this splitter
            return paths;
        }

        if coords.y >= self.height {
            // beam left through the bottom
            return 1;
        }

        if self.board.value_at(coords) == '^' {
            self.splits.insert(coords);
            // seed the memo so a sideways step can't re-enter this splitter
            self.paths_from_split.insert(coords, 0);
            let left = self.fire_beam(coords + Vector2::new(-1, 0));
            self.paths_from_split.insert(coords, left);
            let right = self.fire_beam(coords + Vector2::new(1, 0));
            self.paths_from_split.insert(coords, left + right);
            left + right
        } else {
            self.fire_beam(coords + Vector2::new(0, 1))
        }
    }
}

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Manifold;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut trace = BeamTrace::new(&input.board);
        trace.fire_from(input.start);
        Ok(trace.splits.len())
    }
}

impl Solution<PartTwo> for Day07 {
    type Input = Manifold;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut trace = BeamTrace::new(&input.board);
        Ok(trace.fire_from(input.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"..S..
..^..
.^.^.
.....
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Manifold::parse(EXAMPLE_INPUT)?;
        let result = <Day07 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn beam_without_splitters_has_one_path() -> DynamicResult<()> {
        let parsed = Manifold::parse("S\n.\n.\n")?;
        assert_eq!(<Day07 as Solution<PartTwo>>::solve(&parsed)?, 1);
        assert_eq!(<Day07 as Solution<PartOne>>::solve(&parsed)?, 0);
        Ok(())
    }
}
