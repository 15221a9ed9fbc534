//! Framework of traits and utilities for Advent of Code solutions.
//!
//! Every solution parses its puzzle input into a typed structure before
//! solving, so the framework is built around two traits: [`ParseData`] for
//! the input type and [`Solution`] for each part.
//!
//! # Quick Start
//!
//! 1. Define your input type and implement [`ParseData`]:
//!
//! ```
//! # use advent_framework::{DynamicResult, ParseData};
//! #
//! struct Readings(Vec<u32>);
//!
//! impl ParseData for Readings {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let values = input
//!             .lines()
//!             .map(|line| line.parse())
//!             .collect::<Result<Vec<_>, _>>()?;
//!         Ok(Self(values))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for your parts:
//!
//! ```
//! # use advent_framework::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! # struct Readings(Vec<u32>);
//! # impl ParseData for Readings {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         Ok(Self(vec![]))
//! #     }
//! # }
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = Readings;
//!     type Output = u32;
//!
//!     fn solve(input: &Self::Input) -> DynamicResult<u32> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//! ```
//!
//! 3. Use the [`runner`] module to execute your solution.

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// A sealed trait preventing external implementations of [`Part`][super::Part].
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait used to identify a part for a solution.
///
/// Types implementing this trait are used as generic parameters to [`Solution<P>`] to indicate
/// which part the solution implements.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A trait for data structures that are created by parsing string input.
///
/// Solutions receive parsed data constructed through this trait via their
/// [`Solution::Input`] type.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}

/// A generic trait for a solution that solves for a [`Part`].
///
/// It is expected solutions implement for the marker structs [`PartOne`] or [`PartTwo`].
pub trait Solution<P: Part> {
    /// The parsed input data type passed to the solution.
    type Input: ParseData;

    /// The output data type returned from the solution.
    type Output: Display;

    /// Solve with the given parsed input.
    ///
    /// # Errors
    ///
    /// A solution can encounter varying errors while solving, like invalid input or a logical
    /// error. It is returned as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}
