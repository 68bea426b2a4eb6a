//! # deskcalc
//!
//! deskcalc is an interactive arithmetic calculator written in Rust.
//! It reads statements from a character stream, evaluates them under the
//! usual precedence rules as it parses, and supports named variables and the
//! built-in functions `sqrt` and `pow`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io, sync::Once};

use crate::{error::Error, interpreter::session::Session};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a statement, along with the I/O failures of the session.
/// Every statement-level error carries the line it was detected on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Tells recoverable errors apart from fatal ones.
pub mod error;
/// Orchestrates the entire process of statement execution.
///
/// This module ties together the lexer, the token stream, the evaluating
/// parser, the symbol table and the session loop.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for evaluating user input.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;
/// General numeric utilities.
///
/// # Responsibilities
/// - Convert `pow` exponents from `f64` without silent data loss.
/// - Format results the way a C output stream prints a `double`.
pub mod util;

static TRACING_INIT: Once = Once::new();

/// Evaluates every statement in `source` and returns their values in order.
///
/// Evaluation starts from a fresh symbol table holding `pi`, `e` and `k`,
/// and stops at `exit` or the end of `source`. Unlike an interactive
/// session, the first error ends evaluation.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error.
///
/// # Examples
/// ```
/// use deskcalc::evaluate;
///
/// let values = evaluate("let x = 2 = x * (3 + 4) = pow(x, 10)").unwrap();
/// assert_eq!(values, vec![2.0, 14.0, 1024.0]);
///
/// // Intentional error: 'y' is not declared.
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Vec<f64>, Error> {
    let mut session = Session::new(source.as_bytes(), io::sink(), io::sink());
    let mut values = Vec::new();
    while let Some(value) = session.next_value()? {
        values.push(value);
    }
    Ok(values)
}

/// Initializes tracing for diagnostic output on stderr.
///
/// Call this once at startup; later calls do nothing. Nothing is installed
/// unless `RUST_LOG` is set, e.g. `RUST_LOG=deskcalc=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                                        .with_target(true)
                                                                        .with_level(true))
                                                      .with(EnvFilter::from_default_env())
                                                      .init();
                    }
                });
}
