/// Multiplicative operators with a zero-divisor check.
///
/// Implements `/` and `%`; the remainder follows `fmod`, so its sign is the
/// sign of the dividend.
pub mod scalar;

/// Integer exponentiation.
///
/// Implements the repeated-multiplication power used by `pow`.
pub mod power;
