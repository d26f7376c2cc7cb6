use yardcalc::{
    CalcError, OperatorKind, PopPolicy, Token,
    interpreter::{converter::to_postfix, evaluator::evaluate, operator::OperatorRegistry},
};

fn num(value: f64) -> Token {
    Token::Number(value)
}

fn op(symbol: char) -> Token {
    Token::Operator(symbol)
}

#[test]
fn evaluator_rejects_unregistered_operators() {
    let postfix = [num(1.0), num(2.0), op('^')];
    assert_eq!(evaluate(&postfix, &OperatorRegistry::new()),
               Err(CalcError::UnknownOperator { symbol: '^' }));
}

#[test]
fn evaluator_checks_operands_before_looking_up_operators() {
    let postfix = [num(1.0), op('^')];
    assert!(matches!(evaluate(&postfix, &OperatorRegistry::new()),
                     Err(CalcError::InvalidExpression { .. })));
}

#[test]
fn evaluator_requires_exactly_one_result() {
    let registry = OperatorRegistry::with_builtins();

    let leftover = evaluate(&[num(1.0), num(2.0)], &registry);
    assert!(matches!(&leftover, Err(CalcError::InvalidExpression { details }) if details.contains("2 values")),
            "got {leftover:?}");

    let empty = evaluate(&[], &registry);
    assert!(matches!(empty, Err(CalcError::InvalidExpression { .. })), "got {empty:?}");

    let partial = evaluate(&[num(1.0), num(2.0), num(3.0), op('+')], &registry);
    assert!(matches!(partial, Err(CalcError::InvalidExpression { .. })), "got {partial:?}");
}

#[test]
fn evaluator_pops_right_operand_first() {
    let registry = OperatorRegistry::with_builtins();
    assert_eq!(evaluate(&[num(10.0), num(4.0), op('/')], &registry), Ok(2.5));
    assert_eq!(evaluate(&[num(10.0), num(4.0), op('-')], &registry), Ok(6.0));
}

#[test]
fn evaluator_stops_at_the_first_operator_failure() {
    let registry = OperatorRegistry::with_builtins();
    let postfix = [num(1.0), num(0.0), op('/'), num(5.0), op('+')];
    assert_eq!(evaluate(&postfix, &registry), Err(CalcError::DivisionByZero));
}

#[test]
fn converter_treats_unregistered_operators_as_internal_errors() {
    let registry = OperatorRegistry::with_builtins();
    let infix = [num(1.0), op('^'), num(2.0)];

    for policy in [PopPolicy::Once, PopPolicy::UntilLower] {
        let result = to_postfix(&infix, &registry, policy);
        assert!(matches!(result, Err(CalcError::Internal { .. })), "got {result:?}");
    }
}

#[test]
fn converter_drains_waiting_operators_last_in_first_out() {
    let registry = OperatorRegistry::with_builtins();
    let infix = [num(1.0), op('-'), num(2.0), op('*'), num(3.0)];

    assert_eq!(to_postfix(&infix, &registry, PopPolicy::Once),
               Ok(vec![num(1.0), num(2.0), num(3.0), op('*'), op('-')]));
}

#[test]
fn converter_pops_once_or_until_lower() {
    let registry = OperatorRegistry::with_builtins();
    let infix = [num(1.0), op('-'), num(2.0), op('*'), num(3.0), op('+'), num(4.0)];

    assert_eq!(to_postfix(&infix, &registry, PopPolicy::Once),
               Ok(vec![num(1.0), num(2.0), num(3.0), op('*'), num(4.0), op('+'), op('-')]));
    assert_eq!(to_postfix(&infix, &registry, PopPolicy::UntilLower),
               Ok(vec![num(1.0), num(2.0), num(3.0), op('*'), op('-'), num(4.0), op('+')]));
}

#[test]
fn registry_lists_symbols_by_precedence() {
    let mut registry = OperatorRegistry::with_builtins();
    registry.register('%', 3, OperatorKind::Modulus).unwrap();

    let order: Vec<char> = registry.iter().map(|(symbol, _)| symbol).collect();
    assert_eq!(order, ['+', '-', '%', '*', '/']);
    assert_eq!(registry.symbols().len(), 5);
}
