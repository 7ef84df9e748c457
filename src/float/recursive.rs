// src/float/recursive.rs

use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex64;

use crate::common::{Direction, FftError, FftProcess};
use crate::validate::len_is_power_of_two;
use super::core::twiddle;

/// Sizes at or above this fork the even/odd halves onto the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 1 << 12;

/// Recursive radix-2 DIT transform, unnormalized in both directions.
///
/// `data.len()` must be a power of two; this is not re-checked here, callers
/// validate once at the top. The input is only read: each level copies its
/// even and odd samples into fresh vectors before recursing.
pub fn transform(data: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let n = data.len();
    if n <= 1 {
        return data.to_vec();
    }

    let evens: Vec<Complex64> = data.iter().step_by(2).copied().collect();
    let odds: Vec<Complex64> = data.iter().skip(1).step_by(2).copied().collect();

    let (evens, odds) = transform_halves(&evens, &odds, direction);

    let half = n / 2;
    let mut result = vec![Complex64::default(); n];
    for k in 0..half {
        let t = twiddle(k, n, direction) * odds[k];
        result[k] = evens[k] + t;
        result[k + half] = evens[k] - t;
    }
    result
}

#[cfg(not(feature = "parallel"))]
#[inline]
fn transform_halves(
    evens: &[Complex64],
    odds: &[Complex64],
    direction: Direction,
) -> (Vec<Complex64>, Vec<Complex64>) {
    (transform(evens, direction), transform(odds, direction))
}

#[cfg(feature = "parallel")]
fn transform_halves(
    evens: &[Complex64],
    odds: &[Complex64],
    direction: Direction,
) -> (Vec<Complex64>, Vec<Complex64>) {
    if evens.len() * 2 >= PARALLEL_THRESHOLD {
        rayon::join(|| transform(evens, direction), || transform(odds, direction))
    } else {
        (transform(evens, direction), transform(odds, direction))
    }
}

/// The recursive engine behind the [`FftProcess`] seam, so it can stand in
/// wherever a planned [`CplxFft`](super::CplxFft) is used.
///
/// Unlike [`transform`], `process` checks the buffer length and applies the
/// `1/N` normalization on the inverse.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveFft;

impl FftProcess<Complex64> for RecursiveFft {
    fn process(&self, buffer: &mut [Complex64], direction: Direction) -> Result<(), FftError> {
        if !len_is_power_of_two(buffer.len()) {
            return Err(FftError::NotPowerOfTwo { len: buffer.len() });
        }

        let scale = if direction.is_inverse() { 1.0 / buffer.len() as f64 } else { 1.0 };
        let result = transform(buffer, direction);
        for (dst, src) in buffer.iter_mut().zip(result) {
            *dst = src.scale(scale);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "recursive_tests.rs"]
mod tests;
