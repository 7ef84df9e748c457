// src/float/core.rs

use num_complex::Complex64;
use core::f64::consts::PI;

use crate::common::Direction;

/// Twiddle factor `e^(∓2πi·k/n)` for one butterfly, computed from the angle
/// directly so the error does not grow with `k`.
#[inline]
pub(crate) fn twiddle(k: usize, n: usize, direction: Direction) -> Complex64 {
    let angle = direction.sign() * 2.0 * PI * (k as f64) / (n as f64);
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Fills the forward twiddle table for an FFT of size N.
pub(crate) fn precompute_twiddles(twiddles: &mut [Complex64], n: usize) {
    // Radix-2 only ever needs the first half of the circle
    for (j, tw) in twiddles.iter_mut().take(n / 2).enumerate() {
        *tw = twiddle(j, n, Direction::Forward);
    }
}

/// Fills the bit-reversal table.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], n: usize) {
    bitrev[0] = 0;
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        bitrev[i] = j;
    }
}

fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Iterative in-place radix-2 DIT: bit-reversal permutation followed by
/// log2(N) butterfly stages. Same arithmetic as the recursive engine, with
/// a bounded stack.
///
/// The inverse halves both butterfly outputs at every stage, which over
/// log2(N) stages is exactly the `1/N` normalization.
pub(crate) fn radix_2_dit_fft_core<const INVERSE: bool>(
    buffer: &mut [Complex64],
    twiddles: &[Complex64],
    bitrev: &[usize],
) {
    let n = buffer.len();
    if n < 2 {
        return;
    }

    // 1. Bit-reverse
    for i in 1..(n - 1) {
        let j = bitrev[i];
        if i < j {
            buffer.swap(i, j);
        }
    }

    // 2. Butterfly
    let mut stride = 1;
    let mut tw_index = n >> 1;

    while stride < n {
        for j in (0..n).step_by(stride << 1) {
            for i in 0..stride {
                let mut w = twiddles[i * tw_index];
                if INVERSE {
                    w = w.conj();
                }

                let index = j + i;
                let a = buffer[index];
                let t = buffer[index + stride] * w;

                let mut v1 = a + t;
                let mut v2 = a - t;
                if INVERSE {
                    v1 = v1.scale(0.5);
                    v2 = v2.scale(0.5);
                }

                buffer[index] = v1;
                buffer[index + stride] = v2;
            }
        }
        stride <<= 1;
        tw_index >>= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
