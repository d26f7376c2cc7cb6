use crate::error::{CalcError, CalcResult};

/// Signature of a custom binary operator.
///
/// Receives the left and the right operand and returns the result, or an
/// error that aborts the evaluation.
pub type SolveFn = fn(f64, f64) -> CalcResult<f64>;

/// Precedence of `+` and `-`.
pub const ADDITIVE_PRECEDENCE: i32 = 1;
/// Precedence of `*`, `/` and `%`.
pub const MULTIPLICATIVE_PRECEDENCE: i32 = 3;

/// The behavior of an operator.
///
/// The arithmetic operators are built in. Anything else can be plugged in
/// through [`OperatorKind::Custom`].
#[derive(Debug, Clone, Copy)]
pub enum OperatorKind {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, failing when `b` is exactly zero.
    Divide,
    /// The floating point remainder of `a / b`.
    ///
    /// Follows the semantics of `f64`'s `%`: the sign of the result matches
    /// the left operand and a zero divisor yields `NaN` rather than an error.
    Modulus,
    /// A user supplied function.
    Custom(SolveFn),
}

impl OperatorKind {
    /// Applies the operator to `left` and `right`.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{CalcError, OperatorKind};
    ///
    /// assert_eq!(OperatorKind::Subtract.apply(10.0, 4.0), Ok(6.0));
    /// assert_eq!(OperatorKind::Modulus.apply(11.0, 2.0), Ok(1.0));
    /// assert_eq!(OperatorKind::Divide.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(left / right)
            },
            Self::Modulus => Ok(left % right),
            Self::Custom(solve) => solve(left, right),
        }
    }
}

/// A registered binary operator.
///
/// Operators are immutable values. Registering a different operator under the
/// same symbol replaces the old one instead of modifying it.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// Higher values bind tighter.
    pub precedence: i32,
    /// What the operator computes.
    pub kind:       OperatorKind,
}

impl Operator {
    /// Creates an operator with an explicit precedence.
    ///
    /// Any `i32` is accepted, so a custom operator may bind looser than `+`
    /// by using zero or a negative precedence.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{Operator, OperatorKind};
    ///
    /// let loose = Operator::new(-1, OperatorKind::Multiply);
    /// assert!(loose.precedence < Operator::addition().precedence);
    /// assert_eq!(loose.solve(2.0, 4.0), Ok(8.0));
    /// ```
    #[must_use]
    pub const fn new(precedence: i32, kind: OperatorKind) -> Self {
        Self { precedence, kind }
    }

    /// `+` at [`ADDITIVE_PRECEDENCE`].
    #[must_use]
    pub const fn addition() -> Self {
        Self::new(ADDITIVE_PRECEDENCE, OperatorKind::Add)
    }

    /// `-` at [`ADDITIVE_PRECEDENCE`].
    #[must_use]
    pub const fn subtraction() -> Self {
        Self::new(ADDITIVE_PRECEDENCE, OperatorKind::Subtract)
    }

    /// `*` at [`MULTIPLICATIVE_PRECEDENCE`].
    #[must_use]
    pub const fn multiplication() -> Self {
        Self::new(MULTIPLICATIVE_PRECEDENCE, OperatorKind::Multiply)
    }

    /// `/` at [`MULTIPLICATIVE_PRECEDENCE`], failing on a zero divisor.
    #[must_use]
    pub const fn division() -> Self {
        Self::new(MULTIPLICATIVE_PRECEDENCE, OperatorKind::Divide)
    }

    /// `%` at [`MULTIPLICATIVE_PRECEDENCE`]. Not registered by default.
    #[must_use]
    pub const fn modulus() -> Self {
        Self::new(MULTIPLICATIVE_PRECEDENCE, OperatorKind::Modulus)
    }

    /// Computes `left <op> right`.
    pub fn solve(&self, left: f64, right: f64) -> CalcResult<f64> {
        self.kind.apply(left, right)
    }
}
