/// Numeric helpers.
///
/// This module provides the checked conversion of a `pow` exponent from
/// `f64` to an integer, and the `%g`-style formatting used for every printed
/// result.
///
/// Conversions return a `Result`, which is `Ok` if the value is usable and
/// an error carrying the source line otherwise.
pub mod num;
