use super::*;
use super::super::RecursiveFft;
use alloc::vec;
use alloc::vec::Vec;

fn assert_complex_close(val: Complex64, expected: Complex64) {
    let tolerance = 1e-4;
    let diff = (val - expected).l1_norm();
    assert!(
        diff < tolerance,
        "Error. Expected: {}, Got: {}", expected, val
    );
}

#[test]
fn test_fft_roundtrip() {
    let n = 8;

    let input = [
        Complex64::new(1.0, 2.0),
        Complex64::new(3.0, 4.0),
        Complex64::new(5.0, 6.0),
        Complex64::new(7.0, 8.0),
        Complex64::new(-8.0, -7.0),
        Complex64::new(-6.0, -5.0),
        Complex64::new(-4.0, -3.0),
        Complex64::new(-2.0, -1.0),
    ];

    let expected_fft = [
        Complex64::new(-4.0, 4.0),
        Complex64::new(30.72792, -12.72792),
        Complex64::new(-16.0, 0.0),
        Complex64::new(12.72792, 5.27208),
        Complex64::new(-8.0, -8.0),
        Complex64::new(5.27208, 12.72792),
        Complex64::new(0.0, -16.0),
        Complex64::new(-12.72792, 30.72792),
    ];

    let mut buffer = input.to_vec();
    let mut twiddles = vec![Complex64::default(); n / 2];
    let mut bitrev = vec![0; n];

    let fft = CplxFft::new(&mut twiddles, &mut bitrev, n).unwrap();
    assert_eq!(fft.size(), n);

    // 1. Forward
    fft.process(&mut buffer, Direction::Forward).unwrap();
    for (i, &val) in buffer.iter().enumerate() {
        assert_complex_close(val, expected_fft[i]);
    }

    // 2. Inverse brings back the input, already normalized
    fft.process(&mut buffer, Direction::Inverse).unwrap();
    for (i, &val) in buffer.iter().enumerate() {
        assert_complex_close(val, input[i]);
    }
}

#[test]
fn test_new_rejects_non_power_of_two() {
    let mut twiddles = vec![Complex64::default(); 8];
    let mut bitrev = vec![0; 12];
    assert!(matches!(
        CplxFft::new(&mut twiddles, &mut bitrev, 12),
        Err(FftError::NotPowerOfTwo { len: 12 })
    ));
}

#[test]
fn test_new_rejects_short_tables() {
    let mut twiddles = vec![Complex64::default(); 2];
    let mut bitrev = vec![0; 8];
    assert!(matches!(
        CplxFft::new(&mut twiddles, &mut bitrev, 8),
        Err(FftError::BufferTooSmall)
    ));
}

#[test]
fn test_process_size_mismatch() {
    let mut twiddles = vec![Complex64::default(); 2];
    let mut bitrev = vec![0; 4];
    let fft = CplxFft::new(&mut twiddles, &mut bitrev, 4).unwrap();
    let mut buffer = vec![Complex64::default(); 8];
    assert_eq!(
        fft.process(&mut buffer, Direction::Forward),
        Err(FftError::SizeMismatch { expected: 4, actual: 8 })
    );
}

#[test]
fn test_oversized_tables_are_accepted() {
    let n = 4;
    let mut twiddles = vec![Complex64::default(); 16];
    let mut bitrev = vec![0; 32];
    let fft = CplxFft::new(&mut twiddles, &mut bitrev, n).unwrap();

    let mut buffer = vec![Complex64::new(1.0, 0.0); n];
    fft.process(&mut buffer, Direction::Forward).unwrap();
    assert_complex_close(buffer[0], Complex64::new(4.0, 0.0));
    for &val in &buffer[1..] {
        assert_complex_close(val, Complex64::default());
    }
}

fn run<P: FftProcess<Complex64>>(engine: &P, input: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let mut buffer = input.to_vec();
    engine.process(&mut buffer, direction).unwrap();
    buffer
}

#[test]
fn test_agrees_with_recursive_engine() {
    for log_n in 0..10 {
        let n = 1usize << log_n;
        let input: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new(((i * 7) % 11) as f64 - 5.0, ((i * 3) % 5) as f64))
            .collect();

        let mut twiddles = vec![Complex64::default(); n / 2];
        let mut bitrev = vec![0; n];
        let planned = CplxFft::new(&mut twiddles, &mut bitrev, n).unwrap();

        for direction in [Direction::Forward, Direction::Inverse] {
            let a = run(&planned, &input, direction);
            let b = run(&RecursiveFft, &input, direction);
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).l1_norm() < 1e-9, "n={} {:?}: {} vs {}", n, direction, x, y);
            }
        }
    }
}
