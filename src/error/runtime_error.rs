use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while evaluating a statement.
pub enum RuntimeError {
    /// Division or remainder with a zero right operand.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `sqrt` of a negative value.
    #[error("Error on line {line}: Square root of negative number {value}.")]
    NegativeSquareRoot {
        /// The rejected argument.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declaration reused a name that is already bound.
    #[error("Error on line {line}: Variable '{name}' declared twice.")]
    DeclaredTwice {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name was referenced or updated before being declared.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The exponent of `pow` was not a number or variable.
    #[error("Error on line {line}: Second argument of 'pow' is not a number, found '{found}'.")]
    ExponentNotNumber {
        /// The spelling of the token actually read.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The exponent of `pow` had a fractional part.
    #[error("Error on line {line}: Second argument of 'pow' is not an integer: {value}.")]
    ExponentNotInteger {
        /// The rejected exponent.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The exponent of `pow` was a negative integer.
    #[error("Error on line {line}: Negative exponent {exponent} is not supported by 'pow'.")]
    NegativeExponent {
        /// The rejected exponent.
        exponent: i64,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The exponent of `pow` is above `MAX_EXPONENT`.
    #[error("Error on line {line}: Exponent {value} is too large.")]
    ExponentTooLarge {
        /// The rejected exponent.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
}
