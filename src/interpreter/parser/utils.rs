use std::io::BufRead;

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, token_stream::TokenStream},
};

/// Reads the next token and requires it to be `expected`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the required token.
/// - `expected`: The token that must come next.
///
/// # Errors
/// Returns `Expected` naming both tokens if anything else is read, or
/// `UnexpectedEndOfInput` if the input ran out.
pub(in crate::interpreter::parser) fn expect<R: BufRead>(tokens: &mut TokenStream<R>,
                                                         expected: &Token)
                                                         -> EvalResult<()> {
    match tokens.get()? {
        ref token if token == expected => Ok(()),
        Token::End => Err(ParseError::UnexpectedEndOfInput { line: tokens.line() }.into()),
        found => Err(ParseError::Expected { expected: expected.to_string(),
                                            found:    found.to_string(),
                                            line:     tokens.line(), }.into()),
    }
}
