use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::operator::core::{Operator, OperatorKind},
};

/// Maps operator symbols to their definitions.
///
/// Every [`crate::Calculator`] owns its own registry, so differently configured
/// calculators never observe each other's operators.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<char, Operator>,
}

impl OperatorRegistry {
    /// Creates a registry without any operators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `+`, `-`, `*` and `/`.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::operator::OperatorRegistry;
    ///
    /// let registry = OperatorRegistry::with_builtins();
    /// assert!(registry.contains('/'));
    /// assert!(!registry.contains('%'));
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        let operators = HashMap::from([('-', Operator::subtraction()),
                                       ('+', Operator::addition()),
                                       ('*', Operator::multiplication()),
                                       ('/', Operator::division())]);
        Self { operators }
    }

    /// Registers `kind` under `symbol` with the given precedence.
    ///
    /// An operator already bound to `symbol` is replaced.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidOperator`] when the symbol could be mistaken
    /// for part of a number or for whitespace: digits and other alphanumeric
    /// characters, `.`, whitespace and control characters.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{CalcError, OperatorKind, interpreter::operator::OperatorRegistry};
    ///
    /// let mut registry = OperatorRegistry::with_builtins();
    /// registry.register('%', 3, OperatorKind::Modulus).unwrap();
    /// assert_eq!(registry.lookup('%').unwrap().precedence, 3);
    ///
    /// let err = registry.register('.', 1, OperatorKind::Add).unwrap_err();
    /// assert!(matches!(err, CalcError::InvalidOperator { symbol: '.', .. }));
    /// ```
    pub fn register(&mut self, symbol: char, precedence: i32, kind: OperatorKind) -> CalcResult<()> {
        validate_symbol(symbol)?;

        if self.operators.insert(symbol, Operator::new(precedence, kind)).is_some() {
            trace!(%symbol, precedence, "operator replaced");
        } else {
            trace!(%symbol, precedence, "operator registered");
        }
        Ok(())
    }

    /// Returns the operator bound to `symbol`, if any.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::operator::OperatorRegistry;
    ///
    /// let registry = OperatorRegistry::with_builtins();
    /// assert_eq!(registry.lookup('*').map(|op| op.precedence), Some(3));
    /// assert!(registry.lookup('^').is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, symbol: char) -> Option<&Operator> {
        self.operators.get(&symbol)
    }

    /// Returns `true` if an operator is bound to `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.operators.contains_key(&symbol)
    }

    /// Returns the set of registered symbols.
    #[must_use]
    pub fn symbols(&self) -> HashSet<char> {
        self.operators.keys().copied().collect()
    }

    /// Iterates over all operators, ordered by precedence and then symbol.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Operator)> {
        let mut entries: Vec<_> = self.operators.iter().map(|(s, op)| (*s, op)).collect();
        entries.sort_by_key(|(symbol, op)| (op.precedence, *symbol));
        entries.into_iter()
    }

    /// Looks up the precedence of `symbol`, treating a missing operator as a
    /// broken pipeline invariant.
    pub(crate) fn precedence_of(&self, symbol: char) -> CalcResult<i32> {
        let precedence = self.lookup(symbol).map(|op| op.precedence);
        precedence.ok_or_else(|| CalcError::internal(format!("operator '{symbol}' is not registered")))
    }
}

fn validate_symbol(symbol: char) -> CalcResult<()> {
    let details = if symbol.is_ascii_digit() {
        "digits are part of numbers"
    } else if symbol == '.' {
        "'.' is the decimal separator"
    } else if symbol.is_whitespace() {
        "whitespace separates tokens"
    } else if symbol.is_control() {
        "control characters are not allowed"
    } else if symbol.is_alphanumeric() {
        "operators must be symbols, not letters or numerals"
    } else {
        return Ok(());
    };

    Err(CalcError::InvalidOperator { symbol,
                                     details: details.to_string() })
}
