/// Square root of a non-negative value.
pub mod sqrt;
