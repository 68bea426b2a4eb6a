use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Divides `left` by `right`.
///
/// # Errors
/// Returns `DivisionByZero` if `right` is exactly zero.
///
/// # Example
/// ```
/// use deskcalc::interpreter::evaluator::binary::scalar::divide;
///
/// assert_eq!(divide(7.0, 2.0, 1).unwrap(), 3.5);
/// assert!(divide(7.0, 0.0, 1).is_err());
/// ```
pub fn divide(left: f64, right: f64, line: usize) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero { line }.into());
    }
    Ok(left / right)
}

/// Computes the floating-point remainder of `left` divided by `right`.
///
/// The result has the sign of `left`, like C's `fmod`.
///
/// # Errors
/// Returns `DivisionByZero` if `right` is exactly zero.
///
/// # Example
/// ```
/// use deskcalc::interpreter::evaluator::binary::scalar::remainder;
///
/// assert_eq!(remainder(7.5, 2.0, 1).unwrap(), 1.5);
/// assert_eq!(remainder(-7.0, 3.0, 1).unwrap(), -1.0);
/// assert!(remainder(1.0, 0.0, 1).is_err());
/// ```
pub fn remainder(left: f64, right: f64, line: usize) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero { line }.into());
    }
    Ok(left % right)
}
