use crate::common::{Direction, FftError, FftProcess};
use crate::validate::len_is_power_of_two;
use num_complex::Complex64;
use super::core::{radix_2_dit_fft_core, precompute_twiddles, precompute_bitrev};

/// Planned in-place transform of a fixed size.
///
/// Holds the precomputed twiddle (N/2) and bit-reversal (N) tables in
/// caller-provided storage, so one plan can be reused across many buffers
/// without allocating.
pub struct CplxFft<'a> {
    twiddles: &'a mut [Complex64],
    bitrev: &'a mut [usize],
    n: usize,
}

impl<'a> CplxFft<'a> {
    /// Fills the tables for size `n`.
    pub fn new(
        twiddles: &'a mut [Complex64],
        bitrev: &'a mut [usize],
        n: usize
    ) -> Result<Self, FftError> {
        if !len_is_power_of_two(n) {
            return Err(FftError::NotPowerOfTwo { len: n });
        }
        if twiddles.len() < n / 2 || bitrev.len() < n {
            return Err(FftError::BufferTooSmall);
        }

        let mut fft = Self { twiddles, bitrev, n };
        fft.precompute();
        Ok(fft)
    }

    fn precompute(&mut self) {
        precompute_bitrev(self.bitrev, self.n);
        precompute_twiddles(self.twiddles, self.n);
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Executes the FFT in-place. The inverse is normalized by `1/N`.
    pub fn process(&self, buffer: &mut [Complex64], direction: Direction) -> Result<(), FftError> {
        if buffer.len() != self.n {
            return Err(FftError::SizeMismatch { expected: self.n, actual: buffer.len() });
        }

        let twiddles = &self.twiddles[..self.n / 2];
        let bitrev = &self.bitrev[..self.n];
        match direction {
            Direction::Forward => radix_2_dit_fft_core::<false>(buffer, twiddles, bitrev),
            Direction::Inverse => radix_2_dit_fft_core::<true>(buffer, twiddles, bitrev),
        }

        Ok(())
    }
}

impl<'a> FftProcess<Complex64> for CplxFft<'a> {
    fn process(&self, buffer: &mut [Complex64], direction: Direction) -> Result<(), FftError> {
        self.process(buffer, direction)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
