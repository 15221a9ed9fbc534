//! Procedural macros for the `advent-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// This macro automates the implementation of the `SolutionRunner` trait for Advent of Code
/// solutions, routing to the appropriate solver function based on which solution types are
/// provided. The input type to parse is taken from the solution's `Solution::Input` associated
/// type.
///
/// # Properties
///
/// - `name` (required): An expression that evaluates to `&str`, representing the solution's
///   display name. Can be a string literal or a constant.
///
/// - `part_one` (required): The type implementing `Solution<PartOne>` for solving part one.
///
/// - `part_two` (optional): The type implementing `Solution<PartTwo>` for solving part two.
///   If omitted, only part one will be solved. Its `Solution::Input` must match part one's.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - Required properties (`name`, `part_one`) are missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// ## With `part_one`
///
/// With a struct `Day12` implementing `Solution<PartOne>`:
///
/// ```ignore
/// #[solution_runner(name = "Day 12", part_one = Day12)]
/// struct Day12Runner;
/// ```
///
/// ## With `part_two`
///
/// With a struct `Day01` implementing `Solution<PartOne>` & `Solution<PartTwo>` and a struct
/// `AdventOfCode2025<const DAY: u8>` for solutions to run:
///
/// ```ignore
/// #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01)]
/// impl AdventOfCode2025<1> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    // The expression to use as a solution name; should resolve to string slice
    let mut name_expr_opt: Option<Expr> = None;
    // The type to use for a `Solution<PartOne>` generic parameter
    let mut part_one_ty_opt: Option<Type> = None;
    // The type to use for a `Solution<PartTwo>` generic parameter
    let mut part_two_ty_opt: Option<Type> = None;

    let solution_runner_parser = syn::meta::parser(|meta| {
        // check for expected property keys, track value, error if a duplicate key appears
        if meta.path.is_ident("name") {
            if name_expr_opt.is_some() {
                return Err(meta.error("duplicate 'name' property"));
            }
            name_expr_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_one") {
            if part_one_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_one' property"));
            }
            part_one_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_two") {
            if part_two_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_two' property"));
            }
            part_two_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with solution_runner_parser);

    // enforce required properties
    let name_expr: Expr = match name_expr_opt {
        Some(value) => value,
        None => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "missing required property: 'name'",
            )
            .to_compile_error()
            .into();
        }
    };
    let part_one_ty: Type = match part_one_ty_opt {
        Some(value) => value,
        None => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "missing required property: 'part_one'",
            )
            .to_compile_error()
            .into();
        }
    };

    let solve_function_call = match part_two_ty_opt {
        None => {
            quote! {
                advent_framework::runner::solve_part_one_solution::<#part_one_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
        Some(part_two_ty) => {
            quote! {
                advent_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                    #name_expr,
                    input,
                    handler,
                    timed
                )
            }
        }
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    let runner_self_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let impl_solution_runner_block = quote! {
        impl advent_framework::runner::SolutionRunner for #runner_self_ty {
            fn run(
                input: &str,
                handler: &mut dyn advent_framework::runner::OutputHandler,
                timed: bool
            ) -> advent_framework::DynamicResult<()> {
                #solve_function_call
            }
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts
        #impl_solution_runner_block
    })
}
