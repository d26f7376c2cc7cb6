//! # yardcalc
//!
//! yardcalc evaluates flat arithmetic expressions such as `10 * -5 + 3.5`.
//! Expressions are validated and tokenized, reordered into postfix notation
//! with the shunting-yard algorithm and finally reduced on an operand stack.
//! The set of operators is configurable per [`Calculator`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The user facing calculator.
///
/// This module declares [`Calculator`], which owns an operator registry and a
/// conversion policy and runs the complete evaluation pipeline for a single
/// expression string.
///
/// # Responsibilities
/// - Registers the built-in operators on construction.
/// - Lets callers add or overwrite operators.
/// - Chains tokenizer, converter and evaluator, surfacing the first failure.
pub mod calculator;
/// Provides the error type shared by every pipeline stage.
///
/// All failures, whether raised while validating the input, while registering
/// an operator or while reducing the postfix sequence, are reported through
/// [`error::CalcError`].
pub mod error;
/// The evaluation pipeline.
///
/// This module contains the individual stages a [`Calculator`] chains
/// together: lexing, tokenizing, infix to postfix conversion and postfix
/// evaluation, as well as the operator registry they consult.
///
/// # Responsibilities
/// - Turns raw text into validated tokens.
/// - Reorders tokens by operator precedence.
/// - Reduces postfix sequences to a single number.
pub mod interpreter;
/// Token definitions.
///
/// Declares the [`token::Token`] enum passed between the tokenizer, the
/// converter and the evaluator.
pub mod token;

pub use calculator::Calculator;
pub use error::{CalcError, CalcResult};
pub use interpreter::{
    converter::PopPolicy,
    operator::{Operator, OperatorKind},
};
pub use token::Token;

/// Evaluates an expression with a freshly constructed default calculator.
///
/// Only the built-in operators `+`, `-`, `*` and `/` are available. Build a
/// [`Calculator`] yourself to register additional operators.
///
/// # Errors
/// Returns an error if the expression is malformed or if an operator fails,
/// for example on division by zero.
///
/// # Examples
/// ```
/// use yardcalc::{CalcError, solve};
///
/// assert_eq!(solve("100-50").unwrap(), 50.0);
/// assert_eq!(solve("10 * -5").unwrap(), -50.0);
///
/// // Modulus is not registered on a default calculator.
/// assert!(matches!(solve("11 % 2"), Err(CalcError::InvalidExpression { .. })));
/// ```
pub fn solve(expr: &str) -> CalcResult<f64> {
    Calculator::new().solve(expr)
}
