use logos::Span;
use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        lexer::{Lexeme, WHITESPACE, column, lex},
        operator::OperatorRegistry,
    },
    token::Token,
};

/// Validates `expr` and turns it into tokens.
///
/// Surrounding ASCII whitespace is ignored. The whole expression must match
///
/// ```text
/// expression := operand (operator operand)*
/// operand    := "-"? digits ("." digits)?
/// ```
///
/// where `operator` is any symbol in `registry` and the optional `-` is
/// written directly in front of its digits. Whitespace may appear between
/// operands and operators. Nothing is tokenized unless the whole expression
/// is valid.
///
/// Unary minus signs are folded into the number that follows them, so
/// `10 * -5` yields `10`, `*`, `-5`.
///
/// # Errors
/// Returns [`CalcError::InvalidExpression`] if the expression does not match
/// the grammar.
///
/// # Example
/// ```
/// use yardcalc::{Token, interpreter::{operator::OperatorRegistry, tokenizer::tokenize}};
///
/// let registry = OperatorRegistry::with_builtins();
/// assert_eq!(tokenize(" -2 - -3.5 ", &registry).unwrap(),
///            [Token::Number(-2.0), Token::Operator('-'), Token::Number(-3.5)]);
/// assert!(tokenize("2 - - 3", &registry).is_err());
/// ```
pub fn tokenize(expr: &str, registry: &OperatorRegistry) -> CalcResult<Vec<Token>> {
    let expr = expr.trim_matches(WHITESPACE);
    let lexemes = lex(expr)?;

    validate(expr, &lexemes, registry)?;
    let tokens = fold_unary_minus(&lexemes)?;

    trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Checks the complete lexeme stream against the expression grammar.
fn validate(expr: &str, lexemes: &[(Lexeme, Span)], registry: &OperatorRegistry) -> CalcResult<()> {
    let invalid = |message: &str, span: &Span| {
        CalcError::invalid_expression(format!("{message} at column {}", column(expr, span.start)))
    };

    let mut expect_operand = true;
    let mut iter = lexemes.iter();

    while let Some((lexeme, span)) = iter.next() {
        match (expect_operand, lexeme) {
            (true, Lexeme::Number(_)) => expect_operand = false,
            (true, Lexeme::Symbol('-')) => match iter.next() {
                Some((Lexeme::Number(_), next)) if next.start == span.end => expect_operand = false,
                _ => return Err(invalid("expected digits directly after '-'", span)),
            },
            (true, _) => return Err(invalid("expected a number", span)),
            (false, Lexeme::Symbol(symbol)) if registry.contains(*symbol) => expect_operand = true,
            (false, Lexeme::Symbol(symbol)) => {
                return Err(invalid(&format!("'{symbol}' is not an operator"), span));
            },
            (false, _) => return Err(invalid("expected an operator", span)),
        }
    }

    if expect_operand {
        let details = if lexemes.is_empty() {
            "empty expression".to_string()
        } else {
            "expression ends with an operator".to_string()
        };
        return Err(CalcError::InvalidExpression { details });
    }

    Ok(())
}

/// Builds tokens from validated lexemes, merging each `-` that stands where an
/// operand is expected into the number after it.
///
/// A `-` is in operand position at the very start of the expression and right
/// after another operator. Everywhere else it is a binary subtraction.
fn fold_unary_minus(lexemes: &[(Lexeme, Span)]) -> CalcResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(lexemes.len());
    let mut operand_position = true;
    let mut iter = lexemes.iter().map(|(lexeme, _)| lexeme);

    while let Some(lexeme) = iter.next() {
        match lexeme {
            Lexeme::Symbol('-') if operand_position => match iter.next() {
                Some(Lexeme::Number(value)) => {
                    tokens.push(Token::Number(-value));
                    operand_position = false;
                },
                _ => return Err(CalcError::internal("unary minus without a number")),
            },
            Lexeme::Number(value) => {
                tokens.push(Token::Number(*value));
                operand_position = false;
            },
            Lexeme::Symbol(symbol) => {
                tokens.push(Token::Operator(*symbol));
                operand_position = true;
            },
            Lexeme::Ignored => {},
        }
    }

    Ok(tokens)
}
