use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::{
    interpreter::{
        evaluator::core::{EvalResult, SymbolTable},
        lexer::Token,
        parser::statement::parse_statement,
        token_stream::TokenStream,
    },
    util::num::{DEFAULT_PRECISION, format_general},
};

/// Character that prints a result and marks where error recovery resumes.
pub const PRINT: char = '=';

/// Usage text written before the first statement is read.
pub const BANNER: &str = "Welcome to our simple calculator.
Please enter expression using floating-point numbers.
input (exit) to quit and input (=) to print result.
for square root function type 'sqrt(number)'.
for power function type 'pow(number1,number2)'.";

/// An interactive calculator session.
///
/// Owns the token stream over the input, the symbol table, and the sinks for
/// results and error messages. Each result is written as `=` followed by the
/// value in general notation; each recoverable error is written to the error
/// sink, after which the rest of the statement is skipped up to the next `=`.
///
/// ## Example
/// ```
/// use deskcalc::interpreter::session::Session;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let input = "let x = 3.0\nx*x+1\n=\nx\nexit\n";
///
/// Session::new(input.as_bytes(), &mut out, &mut err).run().unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "=3\n=10\n=3\n");
/// assert!(err.is_empty());
/// ```
pub struct Session<R, W, E> {
    tokens:    TokenStream<R>,
    table:     SymbolTable,
    out:       W,
    err:       E,
    precision: usize,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Creates a session with `pi`, `e` and `k` already declared.
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { tokens: TokenStream::new(input),
               table: SymbolTable::with_constants(),
               out,
               err,
               precision: DEFAULT_PRECISION }
    }

    /// Sets the number of significant digits printed for each result.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    /// Writes the usage banner to the output sink.
    ///
    /// # Errors
    /// Returns `Io` if writing fails.
    pub fn write_banner(&mut self) -> EvalResult<()> {
        writeln!(self.out, "{BANNER}")?;
        Ok(())
    }

    /// Evaluates the next statement.
    ///
    /// Leading `=` tokens are skipped. Returns `None` once `exit` is read or
    /// the input is exhausted.
    ///
    /// # Errors
    /// Returns the first error raised while reading or evaluating the
    /// statement. The remainder of the statement is left unread.
    pub fn next_value(&mut self) -> EvalResult<Option<f64>> {
        let mut token = self.tokens.get()?;
        while token == Token::Equals {
            token = self.tokens.get()?;
        }
        if matches!(token, Token::Quit | Token::End) {
            return Ok(None);
        }
        self.tokens.putback(token)?;

        let value = parse_statement(&mut self.tokens, &mut self.table)?;
        debug!(line = self.tokens.line(), value, "statement evaluated");
        Ok(Some(value))
    }

    /// Runs statements until `exit` or the end of input.
    ///
    /// Recoverable errors are reported on the error sink and followed by a
    /// skip to the next `=`; the session then continues.
    ///
    /// # Errors
    /// Returns `Io` if reading or writing fails, and the internal pushback
    /// error should the one-token lookahead ever be exceeded.
    pub fn run(&mut self) -> EvalResult<()> {
        info!("session started");
        loop {
            match self.next_value() {
                Ok(Some(value)) => {
                    writeln!(self.out, "{PRINT}{}", format_general(value, self.precision))?;
                },
                Ok(None) => break,
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "statement abandoned");
                    writeln!(self.err, "{e}")?;
                    self.tokens.ignore(PRINT)?;
                },
                Err(e) => return Err(e),
            }
        }
        self.out.flush()?;
        info!(variables = self.table.len(), "session ended");
        Ok(())
    }
}
