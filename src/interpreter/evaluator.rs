/// Core evaluation state.
///
/// Contains the evaluator's result type and the symbol table that binds
/// variable names to values.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the arithmetic that can fail or that needs more than a single
/// machine operation: division, remainder and integer powers.
pub mod binary;

/// Built-in function evaluation.
pub mod function;
