use advent_framework::parsing::parse_with_context;
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, Solution};
use thiserror::Error;

#[solution_runner(name = "Day 12: Tetromino Fit", part_one = Day12)]
impl super::AdventOfCode2025<12> {}

#[derive(Error, Debug)]
enum Day12Error {
    #[error("piece {0} is missing its 3 shape rows")]
    TruncatedPiece(usize),
    #[error("board is not formatted as `WxH: n n ...`: {0:?}")]
    MalformedBoard(String),
    #[error("board requires piece {0} but no such piece is defined")]
    RequirementWithoutPiece(usize),
}

/*
Input defines six present pieces and a list of regions. A piece is a numbered header like `4:`
followed by 3 rows of 3 `#`/`.` cells. A region is a line like `12x5: 1 0 1 0 2 2`: its width and
height, then how many of each piece it must hold.

A region counts as possibly fitting its presents when the total cells of the required pieces
don't exceed the region's area. The solution is the number of such regions.

There is no part two on day 12; the calendar ends here.
*/

/// A region's dimensions and required piece counts.
struct Region {
    width: u64,
    height: u64,
    requirements: Vec<u64>,
}

/// The filled cell count of each piece, and the regions to check.
struct PresentPuzzle {
    piece_fills: Vec<u64>,
    regions: Vec<Region>,
}

fn parse_region(line: &str) -> DynamicResult<Region> {
    let malformed = || Day12Error::MalformedBoard(line.to_string());

    let (dimensions, requirements) = line.split_once(": ").ok_or_else(malformed)?;
    let (width, height) = dimensions.split_once('x').ok_or_else(malformed)?;

    Ok(Region {
        width: parse_with_context(width)?,
        height: parse_with_context(height)?,
        requirements: requirements
            .split_whitespace()
            .map(parse_with_context)
            .collect::<Result<_, _>>()?,
    })
}

impl ParseData for PresentPuzzle {
    fn parse(input: &str) -> DynamicResult<Self> {
        let lines: Vec<&str> = input.lines().collect();
        let mut piece_fills = Vec::new();
        let mut regions = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];

            if line.contains('x') {
                regions.push(parse_region(line)?);
                i += 1;
            } else if line.contains(':') {
                // a piece header; the 3 rows after it are the shape
                if i + 3 >= lines.len() {
                    return Err(Day12Error::TruncatedPiece(piece_fills.len()).into());
                }
                let fill = lines[i + 1..=i + 3]
                    .iter()
                    .flat_map(|row| row.chars())
                    .filter(|&cell| cell == '#')
                    .count() as u64;
                piece_fills.push(fill);
                i += 4;
            } else {
                i += 1;
            }
        }

        Ok(Self {
            piece_fills,
            regions,
        })
    }
}

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = PresentPuzzle;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut fitting = 0;

        for region in &input.regions {
            let area = region.width * region.height;

            let mut required_cells = 0;
            for (piece, &count) in region.requirements.iter().enumerate() {
                let fill = input
                    .piece_fills
                    .get(piece)
                    .ok_or(Day12Error::RequirementWithoutPiece(piece))?;
                required_cells += fill * count;
            }

            if required_cells <= area {
                fitting += 1;
            }
        }

        Ok(fitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

2x2: 1 0 0 0 0 0
4x4: 0 0 0 0 2 0
";

    #[test]
    fn parse_counts_piece_fills() -> DynamicResult<()> {
        let parsed = PresentPuzzle::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.piece_fills, vec![7, 7, 7, 7, 7, 7]);
        assert_eq!(parsed.regions.len(), 2);
        assert_eq!(parsed.regions[1].requirements, vec![0, 0, 0, 0, 2, 0]);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = PresentPuzzle::parse(EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }
}
