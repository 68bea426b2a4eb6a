use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token.
    #[error("Error on line {line}: Bad token '{token}'.")]
    BadToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but another one was found.
    #[error("Error on line {line}: '{expected}' expected, found '{found}'.")]
    Expected {
        /// The spelling of the required token.
        expected: String,
        /// The spelling of the token actually read.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No number, name, group, sign or function call where one was required.
    #[error("Error on line {line}: Primary expected, found '{found}'.")]
    PrimaryExpected {
        /// The spelling of the token actually read.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declaration did not continue with a variable name.
    #[error("Error on line {line}: Name expected in declaration, found '{found}'.")]
    NameExpected {
        /// The spelling of the token actually read.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A declaration lacked the `=` between name and value.
    #[error("Error on line {line}: '=' missing in declaration of '{name}'.")]
    MissingEquals {
        /// The name being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Input ran out in the middle of a statement.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A second token was pushed back while one was already buffered.
    #[error("Error on line {line}: putback() into full buffer.")]
    PutbackIntoFullBuffer {
        /// The source line where the error occurred.
        line: usize,
    },
}
