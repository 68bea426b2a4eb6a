use std::io::BufRead;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            binary::power::ipow,
            core::{EvalResult, SymbolTable},
            function::sqrt::sqrt,
        },
        lexer::Token,
        parser::{binary::parse_expression, utils::expect},
        token_stream::TokenStream,
    },
    util::num::f64_to_exponent_checked,
};

/// Parses and evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - numeric literals
/// - variable names, resolved against `table`
/// - parenthesized expressions
/// - prefix `-` and `+`, applied to a further primary
/// - `sqrt(expression)`
/// - `pow(expression, integer)`
///
/// Grammar:
/// ```text
///     primary := number
///              | name
///              | "(" expression ")"
///              | ("-" | "+") primary
///              | "sqrt" "(" expression ")"
///              | "pow" "(" expression "," (number | name) ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary.
/// - `table`: Variables visible to the primary.
///
/// # Returns
/// The value of the primary.
///
/// # Errors
/// - `UndefinedVariable` for a name that was never declared.
/// - `PrimaryExpected` for any token that cannot start a primary.
/// - `UnexpectedEndOfInput` if the input ran out.
pub fn parse_primary<R: BufRead>(tokens: &mut TokenStream<R>, table: &SymbolTable) -> EvalResult<f64> {
    match tokens.get()? {
        Token::LParen => {
            let value = parse_expression(tokens, table)?;
            expect(tokens, &Token::RParen)?;
            Ok(value)
        },
        Token::Number(value) => Ok(value),
        Token::Name(name) => table.lookup(&name, tokens.line()),
        Token::Minus => Ok(-parse_primary(tokens, table)?),
        Token::Plus => parse_primary(tokens, table),
        Token::Sqrt => parse_sqrt_call(tokens, table),
        Token::Pow => parse_pow_call(tokens, table),
        Token::End => Err(ParseError::UnexpectedEndOfInput { line: tokens.line() }.into()),
        token => Err(ParseError::PrimaryExpected { found: token.to_string(),
                                                   line:  tokens.line(), }.into()),
    }
}

/// Parses the argument list of `sqrt` and evaluates the call.
///
/// Grammar: `sqrt_call := "(" expression ")"`, the `sqrt` keyword having been
/// consumed already.
///
/// # Errors
/// - `Expected` if either parenthesis is missing.
/// - `NegativeSquareRoot` if the argument is below zero; this is reported
///   before the closing parenthesis is read.
fn parse_sqrt_call<R: BufRead>(tokens: &mut TokenStream<R>, table: &SymbolTable) -> EvalResult<f64> {
    expect(tokens, &Token::LParen)?;
    let value = sqrt(parse_expression(tokens, table)?, tokens.line())?;
    expect(tokens, &Token::RParen)?;
    Ok(value)
}

/// Parses the argument list of `pow` and evaluates the call.
///
/// The base is a full expression. The exponent must be a single numeric
/// literal or a declared variable holding a non-negative integer; it is
/// multiplied out by [`ipow`].
///
/// Grammar: `pow_call := "(" expression "," (number | name) ")"`
///
/// # Errors
/// - `Expected` if `(`, `,` or `)` is missing.
/// - `ExponentNotNumber` if the exponent is any other kind of token.
/// - `ExponentNotInteger`, `NegativeExponent` or `ExponentTooLarge` if the
///   exponent value cannot be used.
/// - `UndefinedVariable` if the exponent names an undeclared variable.
fn parse_pow_call<R: BufRead>(tokens: &mut TokenStream<R>, table: &SymbolTable) -> EvalResult<f64> {
    expect(tokens, &Token::LParen)?;
    let base = parse_expression(tokens, table)?;
    expect(tokens, &Token::Comma)?;

    let exponent = match tokens.get()? {
        Token::Number(value) => value,
        Token::Name(name) => table.lookup(&name, tokens.line())?,
        token => {
            return Err(RuntimeError::ExponentNotNumber { found: token.to_string(),
                                                         line:  tokens.line(), }.into());
        },
    };
    let exponent = f64_to_exponent_checked(exponent, tokens.line())?;

    expect(tokens, &Token::RParen)?;
    Ok(ipow(base, exponent))
}
