use logos::{Logos, Span};

use crate::error::{CalcError, CalcResult};

/// Characters the lexer skips between lexemes. Must match the `Ignored`
/// pattern below.
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0C', '\x0B'];

/// A raw piece of an expression as seen by the lexer.
///
/// The lexer does not know which symbols are registered operators, and it
/// never attaches a sign to a number. Both decisions belong to the tokenizer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Unsigned decimal literals, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// Any single character that is neither part of a number nor whitespace.
    #[regex(r"[^0-9. \t\n\r\f\x0B]", |lex| lex.slice().chars().next())]
    Symbol(char),
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\n\r\f\x0B]+", logos::skip)]
    Ignored,
}

/// Splits `source` into lexemes paired with their byte spans.
///
/// # Errors
/// Returns [`CalcError::InvalidExpression`] at the first character no lexeme
/// starts with, such as a `.` without digits on both sides.
///
/// # Example
/// ```
/// use yardcalc::interpreter::lexer::{Lexeme, lex};
///
/// let lexemes = lex("1.5*-2").unwrap();
/// let kinds: Vec<_> = lexemes.iter().map(|(lexeme, _)| *lexeme).collect();
/// assert_eq!(kinds,
///            [Lexeme::Number(1.5), Lexeme::Symbol('*'), Lexeme::Symbol('-'), Lexeme::Number(2.0)]);
/// assert_eq!(lexemes[3].1, 5..6);
/// ```
pub fn lex(source: &str) -> CalcResult<Vec<(Lexeme, Span)>> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        if let Ok(lexeme) = lexeme {
            lexemes.push((lexeme, lexer.span()));
        } else {
            return Err(CalcError::invalid_expression(format!("unexpected '{}' at column {}",
                                                             lexer.slice(),
                                                             column(source, lexer.span().start))));
        }
    }

    Ok(lexemes)
}

/// Converts a byte offset into a one-based character column.
#[must_use]
pub fn column(source: &str, offset: usize) -> usize {
    source.get(..offset).map_or(offset, |prefix| prefix.chars().count()) + 1
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}
