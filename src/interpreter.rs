/// The evaluator module computes values and holds interpreter state.
///
/// Parsing and evaluation happen in a single pass, so this module carries no
/// tree walker. It provides the arithmetic that can fail, the built-in
/// functions, and the symbol table the parser consults and extends.
///
/// # Responsibilities
/// - Defines the result type shared by parsing and evaluation.
/// - Stores declared variables and enforces write-once declaration.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module defines the tokens of the calculator.
///
/// # Responsibilities
/// - Recognizes numbers, names, keywords and single-character operators.
/// - Skips whitespace between tokens.
pub mod lexer;
/// The parser module evaluates statements as it reads them.
///
/// A recursive-descent grammar over four levels (statement, expression,
/// term, primary) computes each value immediately instead of building a
/// tree. At most one token of lookahead is ever pushed back.
///
/// # Responsibilities
/// - Applies standard precedence and left associativity.
/// - Validates syntax, reporting errors with line info.
/// - Binds declared names in the symbol table.
pub mod parser;
/// The session module drives the read-evaluate-print loop.
///
/// # Responsibilities
/// - Reads statements until `exit` or the end of input.
/// - Prints every result, reports errors and resynchronizes after them.
pub mod session;
/// The token stream module reads tokens on demand from a character source.
///
/// # Responsibilities
/// - Pulls input line by line and lexes one token at a time.
/// - Offers a single slot of pushback.
/// - Skips ahead to a delimiter for error recovery.
pub mod token_stream;
