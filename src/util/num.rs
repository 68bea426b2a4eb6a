use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Significant digits used when printing results, matching the default of a
/// C output stream.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest exponent accepted by `pow`.
///
/// Any base other than `0` or `±1` has already overflowed to infinity or
/// underflowed to zero long before this many multiplications.
pub const MAX_EXPONENT: u32 = 1 << 20;

/// Safely converts an `f64` exponent to `u32` if the value is finite,
/// integral, non-negative and within `MAX_EXPONENT`.
///
/// ## Errors
/// - `ExponentTooLarge` for infinite values or values above `MAX_EXPONENT`.
/// - `ExponentNotInteger` for values with a fractional part (including NaN).
/// - `NegativeExponent` for negative integers.
///
/// ## Example
/// ```
/// use deskcalc::{
///     error::{Error, RuntimeError},
///     util::num::f64_to_exponent_checked,
/// };
///
/// assert_eq!(f64_to_exponent_checked(10.0, 1).unwrap(), 10);
///
/// let err = f64_to_exponent_checked(2e9, 2).unwrap_err();
/// assert!(matches!(err, Error::Runtime(RuntimeError::ExponentTooLarge { line: 2, .. })));
///
/// let err = f64_to_exponent_checked(2.5, 3).unwrap_err();
/// assert!(matches!(err, Error::Runtime(RuntimeError::ExponentNotInteger { line: 3, .. })));
///
/// let err = f64_to_exponent_checked(-2.0, 4).unwrap_err();
/// assert!(matches!(err,
///                  Error::Runtime(RuntimeError::NegativeExponent { exponent: -2, line: 4 })));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_exponent_checked(value: f64, line: usize) -> EvalResult<u32> {
    if value.is_infinite() {
        return Err(RuntimeError::ExponentTooLarge { value, line }.into());
    }
    if value.fract() != 0.0 || value.is_nan() {
        return Err(RuntimeError::ExponentNotInteger { value, line }.into());
    }
    if value < 0.0 {
        return Err(RuntimeError::NegativeExponent { exponent: value as i64,
                                                    line }.into());
    }
    if value > f64::from(MAX_EXPONENT) {
        return Err(RuntimeError::ExponentTooLarge { value, line }.into());
    }
    Ok(value as u32)
}

/// Formats a value in "general" notation with `precision` significant
/// digits, the way `%g` does.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..precision`, scientific notation otherwise. Trailing zeros of the
/// fraction are removed in both forms, and scientific exponents carry a sign
/// and at least two digits. A precision of zero is treated as one.
///
/// ## Example
/// ```
/// use deskcalc::util::num::format_general;
///
/// assert_eq!(format_general(3.0, 6), "3");
/// assert_eq!(format_general(3.1415926535, 6), "3.14159");
/// assert_eq!(format_general(1024.0, 6), "1024");
/// assert_eq!(format_general(1e20, 6), "1e+20");
/// assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
/// assert_eq!(format_general(0.0001, 6), "0.0001");
/// assert_eq!(format_general(0.00001, 6), "1e-05");
/// assert_eq!(format_general(-2.5, 6), "-2.5");
/// assert_eq!(format_general(3.1415926535, 11), "3.1415926535");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return scientific;
    };
    let significant = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= significant {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}",
                       trim_fraction(mantissa),
                       exponent.unsigned_abs());
    }

    let decimals = usize::try_from(significant - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Strips trailing zeros after a decimal point, and the point itself when
/// nothing follows it.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
