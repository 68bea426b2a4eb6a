use std::io::BufRead;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{EvalResult, SymbolTable},
        lexer::Token,
        parser::binary::parse_expression,
        token_stream::TokenStream,
    },
};

/// Parses and evaluates a single statement.
///
/// A statement is either a declaration, introduced by `let` or `#`, or an
/// expression whose value is the statement's value.
///
/// Grammar: `statement := declaration | expression`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the statement.
/// - `table`: Variables; a declaration adds to them.
///
/// # Returns
/// The value of the statement.
///
/// # Example
/// ```
/// use deskcalc::interpreter::{
///     evaluator::core::SymbolTable, parser::statement::parse_statement,
///     token_stream::TokenStream,
/// };
///
/// let mut table = SymbolTable::new();
/// let mut tokens = TokenStream::new("let x = 3.0 = x * x + 1".as_bytes());
///
/// assert_eq!(parse_statement(&mut tokens, &mut table).unwrap(), 3.0);
/// tokens.get().unwrap(); // the `=` that ended the declaration
/// assert_eq!(parse_statement(&mut tokens, &mut table).unwrap(), 10.0);
/// ```
pub fn parse_statement<R: BufRead>(tokens: &mut TokenStream<R>,
                                   table: &mut SymbolTable)
                                   -> EvalResult<f64> {
    match tokens.get()? {
        Token::Let => parse_declaration(tokens, table),
        token => {
            tokens.putback(token)?;
            parse_expression(tokens, table)
        },
    }
}

/// Parses a declaration and binds its name.
///
/// A declaration has the form `let <name> = <expression>`; the `let` has
/// already been consumed. The expression is evaluated before the name is
/// bound, so it cannot refer to the name being declared.
///
/// # Returns
/// The declared value.
///
/// # Errors
/// Returns an error if:
/// - no name follows (keywords are not names),
/// - `=` is missing,
/// - the expression fails,
/// - the name is already declared.
fn parse_declaration<R: BufRead>(tokens: &mut TokenStream<R>,
                                 table: &mut SymbolTable)
                                 -> EvalResult<f64> {
    let name = match tokens.get()? {
        Token::Name(name) => name,
        Token::End => return Err(ParseError::UnexpectedEndOfInput { line: tokens.line() }.into()),
        token => {
            return Err(ParseError::NameExpected { found: token.to_string(),
                                                  line:  tokens.line(), }.into());
        },
    };

    match tokens.get()? {
        Token::Equals => {},
        _ => {
            return Err(ParseError::MissingEquals { name,
                                                   line: tokens.line() }.into());
        },
    }

    let value = parse_expression(tokens, table)?;
    table.declare(&name, value, tokens.line())
}
