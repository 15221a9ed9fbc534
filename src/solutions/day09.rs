use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;
use thiserror::Error;

use crate::geometry::{rect_area, row_inside};

#[solution_runner(name = "Day 9: Red Tiles", part_one = Day09, part_two = Day09)]
impl super::AdventOfCode2025<9> {}

#[derive(Error, Debug)]
enum Day09Error {
    #[error("tile is not formatted as `x,y`: {0:?}")]
    MalformedPoint(String),
}

/*
Input is a list of red tile positions like `7,1`, one per line. In order, the tiles are the
vertices of a closed rectilinear polygon of red and green tiles.

Part 1 finds the largest rectangle with two red tiles as opposite corners, counting tiles
inclusively on both edges.

Part 2 finds the largest such rectangle that lies entirely inside the polygon. A rectangle is
checked row by row: each of its rows must fit between a pair of vertical polygon edges.
*/

/// The polygon's vertices in drawing order.
struct TilePolygon(Vec<Point2<i64>>);

impl ParseData for TilePolygon {
    fn parse(input: &str) -> DynamicResult<Self> {
        let vertices = parse_input_lines(input, |_, line| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| Day09Error::MalformedPoint(line.to_string()))?;
            Ok(Point2::new(parse_with_context(x)?, parse_with_context(y)?))
        })
        .collect::<Result<_, _>>()?;

        Ok(Self(vertices))
    }
}

/// Whether the whole rectangle between two corners lies inside the polygon.
fn rectangle_inside(polygon: &[Point2<i64>], p1: Point2<i64>, p2: Point2<i64>) -> bool {
    let x1 = p1.x.min(p2.x);
    let x2 = p1.x.max(p2.x);
    let y1 = p1.y.min(p2.y);
    let y2 = p1.y.max(p2.y);

    (y1..y2).all(|y| row_inside(polygon, y, x1, x2))
}

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = TilePolygon;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut best = 0;
        for (i, &p1) in input.0.iter().enumerate() {
            for &p2 in &input.0[i + 1..] {
                best = best.max(rect_area(p1, p2));
            }
        }
        Ok(best)
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = TilePolygon;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut best = 0;
        for (i, &p1) in input.0.iter().enumerate() {
            for &p2 in &input.0[i + 1..] {
                let area = rect_area(p1, p2);
                // only validate candidates that would improve the answer
                if area > best && rectangle_inside(&input.0, p1, p2) {
                    best = area;
                }
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = TilePolygon::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 50);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = TilePolygon::parse(EXAMPLE_INPUT)?;
        let result = <Day09 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 24);
        Ok(())
    }

    #[test]
    fn rectangle_inside_rejects_notched_rows() -> DynamicResult<()> {
        let parsed = TilePolygon::parse(EXAMPLE_INPUT)?;
        assert!(rectangle_inside(
            &parsed.0,
            Point2::new(2, 3),
            Point2::new(9, 5)
        ));
        assert!(!rectangle_inside(
            &parsed.0,
            Point2::new(2, 3),
            Point2::new(11, 7)
        ));
        Ok(())
    }
}
