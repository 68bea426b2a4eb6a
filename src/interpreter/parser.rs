/// Statement parsing.
///
/// Implements the top-level production: a declaration or a plain expression.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative levels of the grammar, both
/// left-associative.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles literals, names, grouping, prefix signs and the built-in function
/// calls.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several productions.
pub mod utils;
