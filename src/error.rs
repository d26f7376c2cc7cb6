/// Result type used throughout the crate.
///
/// Every fallible stage returns either a value of type `T` or a [`CalcError`]
/// describing the failure.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while configuring a calculator or
/// evaluating an expression.
pub enum CalcError {
    /// The expression does not match the grammar, or the operand stack did
    /// not end with exactly one value.
    InvalidExpression {
        /// Details about what was wrong.
        details: String,
    },
    /// The evaluator met an operator that is not registered.
    UnknownOperator {
        /// The offending symbol.
        symbol: char,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Tried to register an operator under a symbol that can not be one.
    InvalidOperator {
        /// The rejected symbol.
        symbol:  char,
        /// Why the symbol was rejected.
        details: String,
    },
    /// A pipeline stage received input its predecessor should never produce.
    Internal {
        /// Details about the broken invariant.
        details: String,
    },
}

impl CalcError {
    pub(crate) fn invalid_expression(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into() }
    }

    pub(crate) fn internal(details: impl Into<String>) -> Self {
        Self::Internal { details: details.into() }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { details } => write!(f, "Invalid expression: {details}."),
            Self::UnknownOperator { symbol } => write!(f, "Invalid operator '{symbol}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidOperator { symbol, details } => {
                write!(f, "Cannot register operator '{}': {details}.", symbol.escape_debug())
            },
            Self::Internal { details } => write!(f, "Internal error: {details}."),
        }
    }
}

impl std::error::Error for CalcError {}
