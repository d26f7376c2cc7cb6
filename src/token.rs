use std::fmt;

/// A single unit of a validated expression.
///
/// Tokens are produced by the tokenizer, reordered by the converter and
/// consumed by the evaluator. Unary minus signs have already been folded into
/// the numbers they precede, so every `Number` may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A decimal number such as `42`, `-3.5` or `0.25`.
    Number(f64),
    /// A registered operator symbol such as `+` or `%`.
    Operator(char),
}

impl Token {
    /// Returns the operator symbol, or `None` for numbers.
    ///
    /// # Example
    /// ```
    /// use yardcalc::Token;
    ///
    /// assert_eq!(Token::Operator('*').as_operator(), Some('*'));
    /// assert_eq!(Token::Number(1.0).as_operator(), None);
    /// ```
    #[must_use]
    pub const fn as_operator(&self) -> Option<char> {
        match self {
            Self::Operator(symbol) => Some(*symbol),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<char> for Token {
    fn from(symbol: char) -> Self {
        Self::Operator(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
        }
    }
}
