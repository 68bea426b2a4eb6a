use std::io::BufRead;

use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::EvalResult, lexer::Token},
};

/// Turns a line-oriented character source into tokens on demand.
///
/// Input is pulled one line at a time and lexed one token at a time, so a
/// call to [`TokenStream::get`] only blocks when the current line has been
/// used up. A single token of lookahead may be handed back with
/// [`TokenStream::putback`]; the grammar never needs more.
///
/// Lines are decoded lossily, so a byte sequence that is not UTF-8 turns
/// into `U+FFFD` and is reported as a bad token like any other stray
/// character.
///
/// ## Example
/// ```
/// use deskcalc::interpreter::{lexer::Token, token_stream::TokenStream};
///
/// let mut tokens = TokenStream::new("2 * x".as_bytes());
/// assert_eq!(tokens.get().unwrap(), Token::Number(2.0));
///
/// let star = tokens.get().unwrap();
/// tokens.putback(star).unwrap();
/// assert_eq!(tokens.get().unwrap(), Token::Star);
///
/// assert_eq!(tokens.get().unwrap(), Token::Name("x".to_string()));
/// assert_eq!(tokens.get().unwrap(), Token::End);
/// ```
pub struct TokenStream<R> {
    source:    R,
    raw:       Vec<u8>,
    buffer:    String,
    cursor:    usize,
    line:      usize,
    exhausted: bool,
    pushback:  Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream reading from `source`.
    pub const fn new(source: R) -> Self {
        Self { source,
               raw: Vec::new(),
               buffer: String::new(),
               cursor: 0,
               line: 0,
               exhausted: false,
               pushback: None }
    }

    /// The 1-based number of the line currently being read, or `0` before
    /// any input was requested.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` while a pushed back token waits to be read again.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.pushback.is_some()
    }

    /// Reads the next token.
    ///
    /// A pushed back token is returned (and the slot cleared) before any new
    /// input is read. Once the source is exhausted, [`Token::End`] is returned
    /// on every call.
    ///
    /// # Errors
    /// - `BadToken` for a character that starts no token; the character is
    ///   consumed.
    /// - `Io` if reading the source fails.
    pub fn get(&mut self) -> EvalResult<Token> {
        if let Some(token) = self.pushback.take() {
            return Ok(token);
        }

        loop {
            if !self.fill()? {
                return Ok(Token::End);
            }

            let mut lexer = Token::lexer(&self.buffer[self.cursor..]);
            match lexer.next() {
                Some(Ok(token)) => {
                    self.cursor += lexer.span().end;
                    trace!(line = self.line, %token, "lexed");
                    return Ok(token);
                },
                Some(Err(())) => {
                    let token = lexer.slice().to_string();
                    self.cursor += lexer.span().end;
                    return Err(ParseError::BadToken { token,
                                                      line: self.line }.into());
                },
                // Only whitespace was left on this line.
                None => self.cursor = self.buffer.len(),
            }
        }
    }

    /// Hands `token` back so the next [`TokenStream::get`] returns it.
    ///
    /// # Errors
    /// Returns `PutbackIntoFullBuffer` if a token is already waiting.
    pub fn putback(&mut self, token: Token) -> EvalResult<()> {
        if self.pushback.is_some() {
            return Err(ParseError::PutbackIntoFullBuffer { line: self.line }.into());
        }
        self.pushback = Some(token);
        Ok(())
    }

    /// Skips input up to and including the next `delimiter`.
    ///
    /// If the pushed back token is the delimiter itself, only the slot is
    /// cleared. Otherwise the slot is discarded and characters are skipped
    /// until `delimiter` has been consumed or the input ends.
    ///
    /// # Errors
    /// Returns `Io` if reading the source fails.
    ///
    /// ## Example
    /// ```
    /// use deskcalc::interpreter::{lexer::Token, token_stream::TokenStream};
    ///
    /// let mut tokens = TokenStream::new("1 / 0 + $ =\n 7".as_bytes());
    /// tokens.get().unwrap();
    /// tokens.ignore('=').unwrap();
    /// assert_eq!(tokens.get().unwrap(), Token::Number(7.0));
    /// ```
    pub fn ignore(&mut self, delimiter: char) -> EvalResult<()> {
        if let Some(token) = self.pushback.take()
           && token.symbol() == Some(delimiter)
        {
            return Ok(());
        }

        while self.fill()? {
            let rest = &self.buffer[self.cursor..];
            if let Some(position) = rest.find(delimiter) {
                self.cursor += position + delimiter.len_utf8();
                return Ok(());
            }
            self.cursor = self.buffer.len();
        }
        Ok(())
    }

    /// Makes sure unread characters are available, reading further lines as
    /// needed. Returns `false` once the source is exhausted.
    fn fill(&mut self) -> EvalResult<bool> {
        while self.cursor >= self.buffer.len() {
            if self.exhausted {
                return Ok(false);
            }
            self.buffer.clear();
            self.raw.clear();
            self.cursor = 0;
            if self.source.read_until(b'\n', &mut self.raw)? == 0 {
                self.exhausted = true;
                return Ok(false);
            }
            self.buffer.push_str(&String::from_utf8_lossy(&self.raw));
            self.line += 1;
        }
        Ok(true)
    }
}
