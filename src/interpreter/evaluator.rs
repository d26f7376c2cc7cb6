use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::operator::OperatorRegistry,
    token::Token,
};

/// Reduces a postfix token sequence to a single number.
///
/// Numbers are pushed onto an operand stack. Each operator pops its right
/// operand, then its left operand, and pushes `left <op> right`. Exactly one
/// value must remain at the end.
///
/// # Errors
/// - [`CalcError::InvalidExpression`] if an operator finds fewer than two
///   operands, or if zero or several values remain.
/// - [`CalcError::UnknownOperator`] if a symbol is not in `registry`.
/// - Any error raised by an operator, such as [`CalcError::DivisionByZero`].
///   Evaluation stops at the first one.
///
/// # Example
/// ```
/// use yardcalc::{CalcError, Token,
///                interpreter::{evaluator::evaluate, operator::OperatorRegistry}};
///
/// let registry = OperatorRegistry::with_builtins();
///
/// let postfix = [Token::Number(10.0), Token::Number(4.0), Token::Operator('-')];
/// assert_eq!(evaluate(&postfix, &registry), Ok(6.0));
///
/// let postfix = [Token::Number(10.0), Token::Operator('-')];
/// assert!(matches!(evaluate(&postfix, &registry), Err(CalcError::InvalidExpression { .. })));
/// ```
pub fn evaluate(postfix: &[Token], registry: &OperatorRegistry) -> CalcResult<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Number(value) => operands.push(value),
            Token::Operator(symbol) => {
                let Some(right) = operands.pop() else {
                    return Err(missing_operand(symbol));
                };
                let Some(left) = operands.pop() else {
                    return Err(missing_operand(symbol));
                };

                let operator = registry.lookup(symbol)
                                       .ok_or(CalcError::UnknownOperator { symbol })?;
                let result = operator.solve(left, right)?;

                trace!(%symbol, left, right, result, "applied");
                operands.push(result);
            },
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(CalcError::invalid_expression("nothing to evaluate")),
        rest => Err(CalcError::invalid_expression(format!("{} values left without an operator",
                                                          rest.len()))),
    }
}

fn missing_operand(symbol: char) -> CalcError {
    CalcError::invalid_expression(format!("operator '{symbol}' is missing an operand"))
}
