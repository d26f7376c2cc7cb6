use tracing::{debug, trace};

use crate::{
    error::CalcResult,
    interpreter::{
        converter::{PopPolicy, render, to_postfix},
        evaluator::evaluate,
        operator::{OperatorKind, OperatorRegistry},
        tokenizer::tokenize,
    },
};

/// Evaluates arithmetic expressions with a configurable set of operators.
///
/// A calculator starts out with `+` and `-` (precedence 1) and `*` and `/`
/// (precedence 3). More operators can be registered with
/// [`Calculator::define_operator`]. Evaluation only reads the calculator, so
/// a fully configured instance can be shared between threads.
///
/// # Example
/// ```
/// use yardcalc::{Calculator, OperatorKind};
///
/// let mut calculator = Calculator::new();
/// assert!(calculator.solve("11 % 2").is_err());
///
/// calculator.define_operator('%', 3, OperatorKind::Modulus).unwrap();
/// assert_eq!(calculator.solve("11 % 2").unwrap(), 1.0);
/// assert_eq!(calculator.solve("10 / 10 + 100").unwrap(), 101.0);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    operators:  OperatorRegistry,
    pop_policy: PopPolicy,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the built-in operators and the default
    /// [`PopPolicy`].
    #[must_use]
    pub fn new() -> Self {
        Self { operators:  OperatorRegistry::with_builtins(),
               pop_policy: PopPolicy::default(), }
    }

    /// Returns the calculator with a different conversion policy.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{Calculator, PopPolicy};
    ///
    /// let once = Calculator::new();
    /// let textbook = Calculator::new().with_pop_policy(PopPolicy::UntilLower);
    ///
    /// assert_eq!(once.solve("1 - 2 * 3 + 4").unwrap(), -9.0);
    /// assert_eq!(textbook.solve("1 - 2 * 3 + 4").unwrap(), -1.0);
    /// ```
    #[must_use]
    pub fn with_pop_policy(mut self, policy: PopPolicy) -> Self {
        self.pop_policy = policy;
        self
    }

    pub const fn set_pop_policy(&mut self, policy: PopPolicy) {
        self.pop_policy = policy;
    }

    #[must_use]
    pub const fn pop_policy(&self) -> PopPolicy {
        self.pop_policy
    }

    /// Registers an operator, replacing any operator bound to `symbol`.
    ///
    /// # Errors
    /// Returns [`crate::CalcError::InvalidOperator`] if `symbol` can not be
    /// used as an operator, see [`OperatorRegistry::register`].
    pub fn define_operator(&mut self,
                           symbol: char,
                           precedence: i32,
                           kind: OperatorKind)
                           -> CalcResult<()> {
        self.operators.register(symbol, precedence, kind)
    }

    /// The operators this calculator understands.
    #[must_use]
    pub const fn operators(&self) -> &OperatorRegistry {
        &self.operators
    }

    /// Evaluates `expr`.
    ///
    /// The expression is tokenized, converted to postfix order and reduced.
    /// The first failure of any stage is returned unchanged.
    ///
    /// # Errors
    /// - [`crate::CalcError::InvalidExpression`] for malformed input.
    /// - [`crate::CalcError::DivisionByZero`] or any other error raised by an
    ///   operator.
    pub fn solve(&self, expr: &str) -> CalcResult<f64> {
        let result = self.run(expr);

        match &result {
            Ok(value) => debug!(expression = expr, value, "solved"),
            Err(error) => debug!(expression = expr, %error, "failed"),
        }

        result
    }

    fn run(&self, expr: &str) -> CalcResult<f64> {
        let tokens = tokenize(expr, &self.operators)?;
        trace!(infix = %render(&tokens), "tokens");

        let postfix = to_postfix(&tokens, &self.operators, self.pop_policy)?;
        evaluate(&postfix, &self.operators)
    }
}
