use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.`, `.5` or `2.1e-10`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `rate2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `let` or `#`, starting a declaration.
    #[token("let")]
    #[token("#")]
    Let,
    /// `exit`
    #[token("exit")]
    Quit,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `pow`
    #[token("pow")]
    Pow,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`; prints the statement before it, and binds the name in a
    /// declaration.
    #[token("=")]
    Equals,
    /// End of input. Never produced by the lexer itself; the token stream
    /// hands it out once its source is exhausted.
    End,
}

impl Token {
    /// Returns the single character spelling of structural tokens.
    ///
    /// Numbers, names, keywords and [`Token::End`] have no such spelling.
    ///
    /// # Example
    /// ```
    /// use deskcalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Equals.symbol(), Some('='));
    /// assert_eq!(Token::Sqrt.symbol(), None);
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Comma => Some(','),
            Self::Equals => Some('='),
            Self::Number(_) | Self::Name(_) | Self::Let | Self::Quit | Self::Sqrt | Self::Pow | Self::End => {
                None
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(symbol) = self.symbol() {
            return write!(f, "{symbol}");
        }
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Let => write!(f, "let"),
            Self::Quit => write!(f, "exit"),
            Self::Sqrt => write!(f, "sqrt"),
            Self::Pow => write!(f, "pow"),
            _ => write!(f, "end of input"),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
