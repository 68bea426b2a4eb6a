use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the square root of a non-negative value.
///
/// # Errors
/// Returns `NegativeSquareRoot` for values below zero. `-0.0` is accepted.
///
/// # Example
/// ```
/// use deskcalc::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(4.0, 1).unwrap(), 2.0);
/// assert!(sqrt(-1.0, 1).is_err());
/// ```
pub fn sqrt(value: f64, line: usize) -> EvalResult<f64> {
    if value < 0.0 {
        return Err(RuntimeError::NegativeSquareRoot { value, line }.into());
    }
    Ok(value.sqrt())
}
