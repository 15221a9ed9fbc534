use advent_framework::parsing::{parse_input_lines, parse_with_context};
use advent_framework::runner::solution_runner;
use advent_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;
use thiserror::Error;

use crate::grid::Grid;

#[solution_runner(name = "Day 6: Worksheet Columns", part_one = Day06, part_two = Day06)]
impl super::AdventOfCode2025<6> {}

#[derive(Error, Debug)]
enum Day06Error {
    #[error("worksheet is empty")]
    EmptyInput,
    #[error("unknown operator token: {0:?}")]
    UnknownOperator(String),
    #[error("no operator for problem column {0}")]
    MissingOperator(usize),
    #[error("row {row} is missing a value in problem column {column}")]
    MissingValue { row: usize, column: usize },
}

/*
Input is a math worksheet: rows of whitespace-separated numbers with a final row of `*` and `+`
operators, one operator per problem.

For part 1, each problem is a column of numbers read across the rows, folded together with the
problem's operator. The solution is the sum of all problem results.

For part 2, the worksheet is read the way a cephalopod writes it: each problem is a group of
character columns separated by a blank column, and every character column is one number read top
to bottom with the most significant digit on top. The columns of a problem are folded with the
operator found in its group on the bottom row. The solution is again the sum of all results.
*/

/// An operator applied to a worksheet problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Multiply,
    Add,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Multiply),
            '+' => Some(Self::Add),
            _ => None,
        }
    }

    fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Multiply => left * right,
            Self::Add => left + right,
        }
    }
}

/// The worksheet as number rows plus operators, and as a raw character board.
struct Worksheet {
    rows: Vec<Vec<i64>>,
    operators: Vec<Operator>,
    board: Grid<char>,
}

impl ParseData for Worksheet {
    fn parse(input: &str) -> DynamicResult<Self> {
        let line_count = input.lines().count();
        if line_count < 2 {
            return Err(Day06Error::EmptyInput.into());
        }

        let mut rows = Vec::new();
        let mut operators = Vec::new();

        parse_input_lines(input, |index, line| {
            if index == line_count - 1 {
                // the last row holds the operators
                for token in line.split_whitespace() {
                    let operator = match token {
                        "*" => Operator::Multiply,
                        "+" => Operator::Add,
                        _ => return Err(Day06Error::UnknownOperator(token.to_string()).into()),
                    };
                    operators.push(operator);
                }
            } else {
                let row = line
                    .split_whitespace()
                    .map(parse_with_context)
                    .collect::<Result<Vec<i64>, _>>()?;
                rows.push(row);
            }
            Ok(())
        })
        .collect::<Result<(), _>>()?;

        Ok(Self {
            rows,
            operators,
            board: Grid::from_lines(input),
        })
    }
}

/// Read the number written down a character column, most significant digit on top.
///
/// Spaces and missing cells are skipped, so `" 434"` reads as `434`.
fn column_number(board: &Grid<char>, x: i32, data_height: usize) -> i64 {
    let mut num = 0;
    let mut tens = 1;
    for y in (0..data_height).rev() {
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap, reason = "worksheet rows fit in i32")]
        let cell = board.value_at(Point2::new(x, y as i32));
        if let Some(digit) = cell.to_digit(10) {
            num += tens * i64::from(digit);
            tens *= 10;
        }
    }
    num
}

/// Fold each group of character columns into one result and sum the results.
fn solve_column_problems(board: &Grid<char>) -> i64 {
    let width = board.width();
    let height = board.height();
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap, reason = "worksheet rows fit in i32")]
    let operator_y = (height - 1) as i32;

    let mut total = 0;
    let mut result = 0;
    let mut operator: Option<Operator> = None;

    for x in 0..width {
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap, reason = "worksheet columns fit in i32")]
        let x = x as i32;

        // the problem's operator shows up in its first column
        if operator.is_none() {
            operator = Operator::from_char(board.value_at(Point2::new(x, operator_y)));
        }

        let empty = (0..operator_y).all(|y| {
            matches!(board.value_at(Point2::new(x, y)), ' ' | '\0')
        });
        if empty {
            // a blank column closes the problem
            total += result;
            result = 0;
            operator = None;
            continue;
        }

        let num = column_number(board, x, height - 1);
        result = if result == 0 {
            num
        } else {
            operator.map_or(result, |op| op.apply(result, num))
        };
    }

    total + result
}

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Worksheet;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let first_row = input.rows.first().ok_or(Day06Error::EmptyInput)?;

        let mut total = 0;
        for (column, &top) in first_row.iter().enumerate() {
            let operator = *input
                .operators
                .get(column)
                .ok_or(Day06Error::MissingOperator(column))?;

            let mut result = top;
            for (row, values) in input.rows.iter().enumerate().skip(1) {
                let &value = values
                    .get(column)
                    .ok_or(Day06Error::MissingValue { row, column })?;
                result = operator.apply(result, value);
            }
            total += result;
        }

        Ok(total)
    }
}

impl Solution<PartTwo> for Day06 {
    type Input = Worksheet;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(solve_column_problems(&input.board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "64 123\n23  45\n31   6\n*  +";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Worksheet::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 45_806);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Worksheet::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 268_894);
        Ok(())
    }

    #[test]
    fn column_numbers_skip_leading_spaces() {
        let board = Grid::from_lines("2\n3\n+");
        assert_eq!(column_number(&board, 0, 2), 23);

        let board = Grid::from_lines(" \n4\n3\n4\n+");
        assert_eq!(column_number(&board, 0, 4), 434);
    }

    #[test]
    fn column_problems_split_on_blank_columns() {
        let board = Grid::from_lines("64 \n23 \n314\n+  ");
        assert_eq!(solve_column_problems(&board), 1_058);
    }
}
