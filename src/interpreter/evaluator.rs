/// Core evaluation state.
///
/// Contains the evaluation [`Context`](core::Context), the per-activation
/// frame stack, and the entry-point logic.
pub mod core;

/// Statement execution.
///
/// Implements the statement walker and the [`Flow`](statement::Flow) control
/// signal that propagates `return` through nested statement execution.
pub mod statement;

/// Expression evaluation.
///
/// Implements the pure integer-expression walker: literals, arithmetic,
/// negation, variable reads, and call expressions.
pub mod expr;

/// Condition evaluation.
///
/// Implements the boolean condition walker: comparisons and short-circuit
/// logical operators.
pub mod cond;

/// Function table and call dispatch.
///
/// Builds the read-only function table from a program and implements
/// function activation: arity checking, argument binding, frame push/pop.
pub mod function;
