// src/transform.rs

use alloc::vec::Vec;
use log::debug;
use num_complex::Complex64;

use crate::common::{Direction, FftError};
use crate::float::transform;
use crate::validate::{Sample, len_is_power_of_two, validate};

/// Forward DFT of real-or-complex samples.
///
/// Validates once, promotes reals to complex, then runs the recursive
/// engine. Fails with [`FftError::NonNumeric`] or
/// [`FftError::NotPowerOfTwo`] before any work is done.
pub fn forward_transform(input: &[Sample]) -> Result<Vec<Complex64>, FftError> {
    validate(input)?;

    let data: Vec<Complex64> = input
        .iter()
        .enumerate()
        .map(|(index, s)| s.to_complex().ok_or(FftError::NonNumeric { index }))
        .collect::<Result<_, _>>()?;

    debug!("Forward transform of {} samples", data.len());
    Ok(transform(&data, Direction::Forward))
}

/// Inverse DFT, normalized so that `inverse_transform(forward(x)) == x`.
pub fn inverse_transform(input: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    let n = input.len();
    if !len_is_power_of_two(n) {
        return Err(FftError::NotPowerOfTwo { len: n });
    }

    debug!("Inverse transform of {} samples", n);
    let scale = 1.0 / n as f64;
    let mut result = transform(input, Direction::Inverse);
    for value in result.iter_mut() {
        *value = value.scale(scale);
    }
    Ok(result)
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
