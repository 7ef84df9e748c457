// src/validate.rs

use alloc::string::String;
use log::{debug, info};
use num_complex::Complex64;

use crate::common::FftError;

/// One element of an input sequence.
///
/// Values coming from typed code are always `Real` or `Complex`. `Text` holds
/// an entry from an untyped source (a spreadsheet cell, a JSON field) that
/// never became a number; it is carried only so it can be rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Real(f64),
    Complex(Complex64),
    Text(String),
}

impl Sample {
    #[inline]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Sample::Text(_))
    }

    /// Promotes a numeric sample to complex (zero imaginary part for reals).
    #[inline]
    pub fn to_complex(&self) -> Option<Complex64> {
        match self {
            Sample::Real(re) => Some(Complex64::new(*re, 0.0)),
            Sample::Complex(c) => Some(*c),
            Sample::Text(_) => None,
        }
    }
}

impl From<f64> for Sample {
    fn from(value: f64) -> Self {
        Sample::Real(value)
    }
}

impl From<f32> for Sample {
    fn from(value: f32) -> Self {
        Sample::Real(value as f64)
    }
}

impl From<i32> for Sample {
    fn from(value: i32) -> Self {
        Sample::Real(value as f64)
    }
}

impl From<Complex64> for Sample {
    fn from(value: Complex64) -> Self {
        Sample::Complex(value)
    }
}

/// True iff `n` is a positive integer with exactly one bit set.
#[inline]
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Same test for a sequence length.
#[inline]
pub(crate) fn len_is_power_of_two(len: usize) -> bool {
    i64::try_from(len).is_ok_and(is_power_of_two)
}

/// Checks that every element is numeric and that the length is `2^n`.
///
/// Reports the first failing condition: a non-numeric element takes
/// precedence over a bad length.
pub fn validate(input: &[Sample]) -> Result<(), FftError> {
    let first_text = input.iter().position(|s| !s.is_numeric());
    info!("Every item in input is numeric: {}", first_text.is_none());

    let size_ok = len_is_power_of_two(input.len());
    info!("Input size {} is a power of two: {}", input.len(), size_ok);

    if let Some(index) = first_text {
        debug!("Rejecting input, non-numeric element at {}", index);
        return Err(FftError::NonNumeric { index });
    }
    if !size_ok {
        return Err(FftError::NotPowerOfTwo { len: input.len() });
    }
    Ok(())
}

/// Boolean form of [`validate`]. The caller decides how to report a failure.
pub fn is_valid_input(input: &[Sample]) -> bool {
    validate(input).is_ok()
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
