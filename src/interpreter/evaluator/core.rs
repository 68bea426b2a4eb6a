use tracing::debug;

use crate::error::{Error, RuntimeError};

/// Result type used by the evaluator.
///
/// Parsing and evaluation happen in the same pass, so every grammar
/// function returns either a value of type `T` or the [`Error`] that aborted
/// the statement.
pub type EvalResult<T> = Result<T, Error>;

/// Constants bound before the first statement is read.
#[allow(clippy::approx_constant)]
pub const BUILTIN_CONSTANTS: [(&str, f64); 3] = [("pi", 3.141_592_653_5),
                                                 ("e", 2.718_281_828_4),
                                                 ("k", 1000.0)];

/// A named value in the [`SymbolTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Unique key within the table.
    pub name:  String,
    /// Current value.
    pub value: f64,
}

/// Stores every variable declared during a session.
///
/// Names are unique and, once declared, stay bound until the table is
/// dropped: there is no scoping, shadowing or removal. Entries keep their
/// declaration order and are found by linear scan.
///
/// ## Usage
///
/// The table is owned by the session driving the input and lent to each
/// statement evaluation. Only declarations insert; [`SymbolTable::update`]
/// overwrites an existing binding but no statement form reaches it.
///
/// ```
/// use deskcalc::interpreter::evaluator::core::SymbolTable;
///
/// let mut table = SymbolTable::with_constants();
/// assert_eq!(table.lookup("k", 1).unwrap(), 1000.0);
///
/// table.declare("x", 3.0, 1).unwrap();
/// assert!(table.declare("x", 4.0, 2).is_err());
/// assert_eq!(table.lookup("x", 3).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: Vec<Variable>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Creates a table holding `pi`, `e` and `k`.
    #[must_use]
    pub fn with_constants() -> Self {
        let variables = BUILTIN_CONSTANTS.iter()
                                         .map(|&(name, value)| Variable { name: name.to_string(),
                                                                          value })
                                         .collect();
        Self { variables }
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v.name == name)
    }

    /// Binds `name` to `value` and returns the value.
    ///
    /// # Errors
    /// Returns `DeclaredTwice` if `name` is already bound.
    pub fn declare(&mut self, name: &str, value: f64, line: usize) -> EvalResult<f64> {
        if self.is_declared(name) {
            return Err(RuntimeError::DeclaredTwice { name: name.to_string(),
                                                     line }.into());
        }
        debug!(name, value, "declared");
        self.variables.push(Variable { name: name.to_string(),
                                       value });
        Ok(value)
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if `name` was never declared.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line }.into())
    }

    /// Overwrites the value bound to `name`.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if `name` was never declared.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::evaluator::core::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// assert!(table.update("x", 1.0, 1).is_err());
    ///
    /// table.declare("x", 1.0, 1).unwrap();
    /// table.update("x", 2.0, 2).unwrap();
    /// assert_eq!(table.lookup("x", 3).unwrap(), 2.0);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn update(&mut self, name: &str, value: f64, line: usize) -> EvalResult<()> {
        let variable = self.variables
                           .iter_mut()
                           .find(|v| v.name == name)
                           .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                            line })?;
        variable.value = value;
        Ok(())
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }
}
