use std::io::BufRead;

use crate::interpreter::{
    evaluator::{
        binary::scalar::{divide, remainder},
        core::{EvalResult, SymbolTable},
    },
    lexer::Token,
    parser::unary::parse_primary,
    token_stream::TokenStream,
};

/// Parses and evaluates an expression: addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`. The first token
/// that is neither is pushed back for the caller.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `table`: Variables visible to the expression.
///
/// # Returns
/// The value of the expression.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     evaluator::core::SymbolTable, parser::binary::parse_expression,
///     token_stream::TokenStream,
/// };
///
/// let mut tokens = TokenStream::new("10 - 2 - 3".as_bytes());
/// let value = parse_expression(&mut tokens, &SymbolTable::new()).unwrap();
/// assert_eq!(value, 5.0);
/// ```
pub fn parse_expression<R: BufRead>(tokens: &mut TokenStream<R>,
                                    table: &SymbolTable)
                                    -> EvalResult<f64> {
    let mut left = parse_term(tokens, table)?;
    loop {
        match tokens.get()? {
            Token::Plus => left += parse_term(tokens, table)?,
            Token::Minus => left -= parse_term(tokens, table)?,
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}

/// Parses and evaluates multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`. Division and
/// remainder reject a right operand of exactly zero.
///
/// The rule is: `term := primary (("*" | "/" | "%") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the term.
/// - `table`: Variables visible to the term.
///
/// # Returns
/// The value of the term.
pub fn parse_term<R: BufRead>(tokens: &mut TokenStream<R>, table: &SymbolTable) -> EvalResult<f64> {
    let mut left = parse_primary(tokens, table)?;
    loop {
        match tokens.get()? {
            Token::Star => left *= parse_primary(tokens, table)?,
            Token::Slash => {
                let right = parse_primary(tokens, table)?;
                left = divide(left, right, tokens.line())?;
            },
            Token::Percent => {
                let right = parse_primary(tokens, table)?;
                left = remainder(left, right, tokens.line())?;
            },
            token => {
                tokens.putback(token)?;
                return Ok(left);
            },
        }
    }
}
