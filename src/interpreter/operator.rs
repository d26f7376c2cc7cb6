/// Operator values and their built-in behaviors.
///
/// Defines [`core::Operator`] and [`core::OperatorKind`], the closed set of
/// arithmetic behaviors plus an escape hatch for custom functions.
pub mod core;
/// The symbol table consulted by every pipeline stage.
///
/// Maps single characters to operators and validates symbols on
/// registration.
pub mod registry;

pub use self::{
    core::{Operator, OperatorKind, SolveFn},
    registry::OperatorRegistry,
};
