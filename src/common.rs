// src/common.rs

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum FftError {
    #[error("Sequence length {len} is not a power of 2")]
    NotPowerOfTwo { len: usize },
    #[error("Element at index {index} is not numeric")]
    NonNumeric { index: usize },
    #[error("Data buffer size {actual} does not match FFT size {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Auxiliary buffers are too small")]
    BufferTooSmall,
}

impl FftError {
    /// True for the two conditions that make a sequence ineligible for the
    /// radix-2 transform, as opposed to misuse of the planned engine.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FftError::NotPowerOfTwo { .. } | FftError::NonNumeric { .. })
    }
}

/// Transform direction, fixed for a whole call tree.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    /// Twiddles `e^(-2πik/N)`.
    #[default]
    Forward,
    /// Twiddles `e^(+2πik/N)`, output normalized by `1/N`.
    Inverse,
}

impl Direction {
    /// Sign of the twiddle exponent.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }

    #[inline]
    pub fn is_inverse(self) -> bool {
        self == Direction::Inverse
    }
}

/// In-place transform over a buffer of `T`.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], direction: Direction) -> Result<(), FftError>;
}
