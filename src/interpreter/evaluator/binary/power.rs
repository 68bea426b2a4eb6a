/// Raises `base` to a non-negative integer power by repeated multiplication.
///
/// The accumulator starts at `base` itself, so an exponent of one returns
/// `base` unchanged and every further step multiplies once more. An exponent
/// of zero yields `1`, except that `ipow(0.0, 0)` is `0`.
///
/// Multiplication stops early once the accumulator is zero, infinite or NaN,
/// since further steps cannot change it.
///
/// Negative exponents never reach this function; see
/// [`f64_to_exponent_checked`](crate::util::num::f64_to_exponent_checked).
///
/// # Example
/// ```
/// use deskcalc::interpreter::evaluator::binary::power::ipow;
///
/// assert_eq!(ipow(2.0, 10), 1024.0);
/// assert_eq!(ipow(5.0, 0), 1.0);
/// assert_eq!(ipow(0.0, 0), 0.0);
/// assert_eq!(ipow(-1.5, 1), -1.5);
/// assert_eq!(ipow(2.0, 1 << 20), f64::INFINITY);
/// assert_eq!(ipow(0.5, 1 << 20), 0.0);
/// ```
#[must_use]
pub fn ipow(base: f64, exponent: u32) -> f64 {
    if exponent == 0 {
        return if base == 0.0 { 0.0 } else { 1.0 };
    }

    let mut result = base;
    for _ in 1..exponent {
        if result == 0.0 || !result.is_finite() {
            break;
        }
        result *= base;
    }
    result
}
