use deskcalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
};

fn assert_success(src: &str) -> Vec<f64> {
    evaluate(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(values) => panic!("Script succeeded with {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn value_of(src: &str) -> f64 {
    let values = assert_success(src);
    assert_eq!(values.len(), 1, "expected exactly one value from {src:?}");
    values[0]
}

#[test]
fn basic_arithmetic() {
    assert_eq!(value_of("1 + 2"), 3.0);
    assert_eq!(value_of("7 * 9"), 63.0);
    assert_eq!(value_of("8 - 5"), 3.0);
    assert_eq!(value_of("10 / 4"), 2.5);
    assert_eq!(value_of("7.5 % 2"), 1.5);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(value_of("2 + 3 * 4"), 14.0);
    assert_eq!(value_of("10 - 2 - 3"), 5.0);
    assert_eq!(value_of("100 / 10 / 5"), 2.0);
    assert_eq!(value_of("2 * 9 % 4"), 2.0);
    assert_eq!(value_of("1 + 8 % 3 * 2"), 5.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(value_of("(2 + 3) * 4"), 20.0);
    assert_eq!(value_of("10 - (2 - 3)"), 11.0);
    assert_eq!(value_of("((((7))))"), 7.0);
}

#[test]
fn unary_signs() {
    assert_eq!(value_of("-3"), -3.0);
    assert_eq!(value_of("+3"), 3.0);
    assert_eq!(value_of("--3"), 3.0);
    assert_eq!(value_of("-(2 + 3) * 2"), -10.0);
    assert_eq!(value_of("4 - -2"), 6.0);
}

#[test]
fn numeric_literal_forms() {
    assert_eq!(value_of(".5"), 0.5);
    assert_eq!(value_of("3."), 3.0);
    assert_eq!(value_of("2.5e2"), 250.0);
    assert_eq!(value_of("1E-3"), 0.001);
}

#[test]
fn remainder_sign_follows_dividend() {
    assert_eq!(value_of("-7 % 3"), -1.0);
    assert_eq!(value_of("7 % -3"), 1.0);
}

#[test]
fn builtin_constants() {
    assert_eq!(value_of("pi"), 3.141_592_653_5);
    assert_eq!(value_of("e"), 2.718_281_828_4);
    assert_eq!(value_of("k"), 1000.0);
    assert_eq!(value_of("2 * k"), 2000.0);
}

#[test]
fn declarations_bind_and_return_their_value() {
    assert_eq!(assert_success("let x = 3.0 = x * x + 1"), vec![3.0, 10.0]);
    assert_eq!(assert_success("# y = 4 = y"), vec![4.0, 4.0]);
    assert_eq!(assert_success("let rate2 = 0.25 = rate2 * 8"), vec![0.25, 2.0]);
}

#[test]
fn declared_value_reads_back_exactly() {
    let v = 0.1 + 0.2;
    let values = assert_success(&format!("let v = {v:?} = v"));
    assert_eq!(values, vec![v, v]);
}

#[test]
fn declaration_is_write_once() {
    let e = assert_failure("let x = 1 = let x = 2");
    assert!(matches!(e, Error::Runtime(RuntimeError::DeclaredTwice { ref name, .. }) if name == "x"));

    let e = assert_failure("let pi = 3");
    assert!(matches!(e, Error::Runtime(RuntimeError::DeclaredTwice { .. })));
}

#[test]
fn undeclared_variable_is_an_error() {
    let e = assert_failure("y + 1");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "y"));
}

#[test]
fn declaration_cannot_refer_to_itself() {
    let e = assert_failure("let z = z + 1");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn malformed_declarations() {
    assert!(matches!(assert_failure("let 3 = 4"),
                     Error::Parse(ParseError::NameExpected { .. })));
    assert!(matches!(assert_failure("let sqrt = 4"),
                     Error::Parse(ParseError::NameExpected { .. })));
    assert!(matches!(assert_failure("let x 4"),
                     Error::Parse(ParseError::MissingEquals { ref name, .. }) if name == "x"));
}

#[test]
fn square_root() {
    assert_eq!(value_of("sqrt(4)"), 2.0);
    assert_eq!(value_of("sqrt(2 * 8) + 1"), 5.0);
    assert_eq!(value_of("sqrt(0)"), 0.0);

    let e = assert_failure("sqrt(-1)");
    assert!(matches!(e, Error::Runtime(RuntimeError::NegativeSquareRoot { .. })));

    assert!(matches!(assert_failure("sqrt 4"), Error::Parse(ParseError::Expected { .. })));
    assert!(matches!(assert_failure("sqrt(4"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn integer_power() {
    assert_eq!(value_of("pow(2, 10)"), 1024.0);
    assert_eq!(value_of("pow(5, 0)"), 1.0);
    assert_eq!(value_of("pow(0, 0)"), 0.0);
    assert_eq!(value_of("pow(1.5, 1)"), 1.5);
    assert_eq!(value_of("pow(-2, 3)"), -8.0);
    assert_eq!(value_of("pow(1 + 1, 3) * 2"), 16.0);
    assert_eq!(assert_success("let n = 3 = pow(2, n)"), vec![3.0, 8.0]);
}

#[test]
fn power_exponent_must_be_a_non_negative_integer() {
    let e = assert_failure("pow(2, 2.5)");
    assert!(matches!(e, Error::Runtime(RuntimeError::ExponentNotInteger { .. })));

    let e = assert_failure("pow(2, -1)");
    assert!(matches!(e, Error::Runtime(RuntimeError::ExponentNotNumber { .. })));

    let e = assert_failure("let n = -2 = pow(2, n)");
    assert!(matches!(e, Error::Runtime(RuntimeError::NegativeExponent { exponent: -2, .. })));

    let e = assert_failure("pow(2, 1e12)");
    assert!(matches!(e, Error::Runtime(RuntimeError::ExponentTooLarge { .. })));

    let e = assert_failure("pow(2 3)");
    assert!(matches!(e, Error::Parse(ParseError::Expected { .. })));
}

#[test]
fn division_and_remainder_by_zero() {
    let e = assert_failure("1 / 0");
    assert!(matches!(e, Error::Runtime(RuntimeError::DivisionByZero { .. })));

    let e = assert_failure("1 % 0");
    assert!(matches!(e, Error::Runtime(RuntimeError::DivisionByZero { .. })));

    let e = assert_failure("1 / (2 - 2)");
    assert!(matches!(e, Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn lexical_and_syntax_errors() {
    assert!(matches!(assert_failure("2 $ 3"), Error::Parse(ParseError::BadToken { .. })));
    assert!(matches!(assert_failure("$"), Error::Parse(ParseError::BadToken { ref token, .. }) if token == "$"));
    assert!(matches!(assert_failure("(1 + 2"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(assert_failure("(1 + 2,"), Error::Parse(ParseError::Expected { .. })));
    assert!(matches!(assert_failure("* 3"), Error::Parse(ParseError::PrimaryExpected { .. })));
    assert!(matches!(assert_failure("1 +"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn keywords_are_case_sensitive() {
    let e = assert_failure("SQRT(4)");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
    assert_eq!(assert_success("let exitx = 1 = exitx"), vec![1.0, 1.0]);
}

#[test]
fn exit_stops_evaluation() {
    assert_eq!(assert_success("1 = 2 exit 3"), vec![1.0, 2.0]);
    assert_eq!(assert_success(""), Vec::<f64>::new());
    assert_eq!(assert_success("= = ="), Vec::<f64>::new());
}

#[test]
fn statements_may_span_lines() {
    assert_eq!(assert_success("1 +\n2\n*\n3"), vec![7.0]);
}

#[test]
fn error_messages_carry_the_line() {
    let e = assert_failure("1\n=\n2 / 0");
    assert_eq!(e.to_string(), "Error on line 3: Division by zero.");

    let e = assert_failure("let x = 1 = let x = 2");
    assert_eq!(e.to_string(), "Error on line 1: Variable 'x' declared twice.");
}
