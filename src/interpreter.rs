/// The converter module reorders infix tokens into postfix order.
///
/// Implements the shunting-yard algorithm on top of the precedences stored in
/// the operator registry. Numbers pass straight through while operators wait
/// on a stack until an operator of lower precedence arrives.
///
/// # Responsibilities
/// - Produces a reverse Polish token sequence.
/// - Applies the configured [`crate::PopPolicy`] when precedences tie or drop.
pub mod converter;
/// The evaluator module reduces postfix sequences to a number.
///
/// A small stack machine pushes numbers and applies each operator to the two
/// values on top of the stack.
///
/// # Responsibilities
/// - Applies registered solve functions in postfix order.
/// - Reports stack underflow and leftovers as malformed expressions.
/// - Propagates operator failures such as division by zero.
pub mod evaluator;
/// The lexer module splits raw text into lexemes.
///
/// The lexer recognizes unsigned decimal numbers and single symbol characters
/// and records where each of them starts and ends. It knows nothing about
/// which symbols are registered operators.
pub mod lexer;
/// Operator definitions and the per-calculator registry.
///
/// Declares the [`operator::Operator`] type, the closed set of built-in
/// behaviors and the table that maps symbols to operators.
pub mod operator;
/// The tokenizer module validates expressions and produces tokens.
///
/// The tokenizer checks the complete lexeme stream against the expression
/// grammar before producing anything, then folds unary minus signs into the
/// numbers that follow them.
///
/// # Responsibilities
/// - Rejects malformed input as a whole.
/// - Distinguishes unary from binary minus.
/// - Emits [`crate::Token`] values ready for conversion.
pub mod tokenizer;
