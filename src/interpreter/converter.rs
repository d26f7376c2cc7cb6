use tracing::trace;

use crate::{error::CalcResult, interpreter::operator::OperatorRegistry, token::Token};

/// Decides how many waiting operators an incoming operator may pop.
///
/// In both modes a waiting operator is popped only if its precedence is
/// greater than or equal to the incoming one, which makes chains of equal
/// precedence evaluate left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopPolicy {
    /// Pop at most one operator before pushing the incoming one.
    ///
    /// This matches the calculator's historical behavior. Mixed chains such
    /// as `1 - 2 * 3 + 4` group as `1 - (2 * 3 + 4)`.
    #[default]
    Once,
    /// Keep popping while the top of the stack binds at least as tightly.
    ///
    /// This is the textbook shunting-yard rule and groups `1 - 2 * 3 + 4` as
    /// `(1 - 2 * 3) + 4`.
    UntilLower,
}

/// Reorders infix `tokens` into postfix order.
///
/// Numbers are copied to the output. An operator first pops waiting
/// operators of greater or equal precedence (as allowed by `policy`) and is
/// then pushed. Remaining operators are emitted last-in first-out.
///
/// # Errors
/// Returns [`crate::CalcError::Internal`] for operator symbols missing from
/// `registry`; the tokenizer never lets those through.
///
/// # Example
/// ```
/// use yardcalc::{PopPolicy, Token,
///                interpreter::{converter::to_postfix, operator::OperatorRegistry}};
///
/// let registry = OperatorRegistry::with_builtins();
/// let infix = [Token::Number(1.0), Token::Operator('+'), Token::Number(2.0),
///              Token::Operator('*'), Token::Number(3.0)];
///
/// let postfix = to_postfix(&infix, &registry, PopPolicy::Once).unwrap();
/// assert_eq!(postfix,
///            [Token::Number(1.0), Token::Number(2.0), Token::Number(3.0),
///             Token::Operator('*'), Token::Operator('+')]);
/// ```
pub fn to_postfix(tokens: &[Token],
                  registry: &OperatorRegistry,
                  policy: PopPolicy)
                  -> CalcResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operator_stack: Vec<char> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(_) => output.push(*token),
            Token::Operator(symbol) => {
                let incoming = registry.precedence_of(symbol)?;

                while let Some(&top) = operator_stack.last() {
                    if registry.precedence_of(top)? < incoming {
                        break;
                    }
                    operator_stack.pop();
                    output.push(Token::Operator(top));

                    if policy == PopPolicy::Once {
                        break;
                    }
                }

                operator_stack.push(symbol);
            },
        }
    }

    output.extend(operator_stack.into_iter().rev().map(Token::Operator));

    trace!(postfix = %render(&output), "converted");
    Ok(output)
}

/// Renders tokens separated by spaces, e.g. `10 5 * 2 -`.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
