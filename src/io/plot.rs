use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use log::info;
use num_complex::Complex64;
use thiserror::Error;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 400;
const MARGIN: u32 = 20;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([200, 200, 200]);
const REAL: Rgb<u8> = Rgb([220, 40, 40]);
const IMAG: Rgb<u8> = Rgb([40, 80, 220]);

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Nothing to plot")]
    Empty,
    #[error("Failed to create plot file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode plot: {0}")]
    Image(#[from] image::ImageError),
}

/// Maps sample index and value onto pixel coordinates.
struct Frame {
    n: usize,
    min: f64,
    max: f64,
}

impl Frame {
    fn new(values: &[Complex64]) -> Self {
        let (mut min, mut max) = values
            .iter()
            .flat_map(|c| [c.re, c.im])
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min > max {
            min = -1.0;
            max = 1.0;
        } else if max - min < f64::EPSILON {
            min -= 1.0;
            max += 1.0;
        }
        Self { n: values.len(), min, max }
    }

    fn x(&self, index: usize) -> i64 {
        let span = (WIDTH - 2 * MARGIN) as f64;
        let t = if self.n > 1 { index as f64 / (self.n - 1) as f64 } else { 0.5 };
        (MARGIN as f64 + t * span).round() as i64
    }

    fn y(&self, value: f64) -> i64 {
        let span = (HEIGHT - 2 * MARGIN) as f64;
        let t = (value.clamp(self.min, self.max) - self.min) / (self.max - self.min);
        (HEIGHT as f64 - MARGIN as f64 - t * span).round() as i64
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if (0..WIDTH as i64).contains(&x) && (0..HEIGHT as i64).contains(&y) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham segment.
fn draw_line(img: &mut RgbImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y, mut err) = (x0, y0, dx + dy);

    loop {
        put(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn draw_series(img: &mut RgbImage, frame: &Frame, values: impl Iterator<Item = f64>, color: Rgb<u8>) {
    let points: std::vec::Vec<(i64, i64)> = values
        .enumerate()
        .map(|(i, v)| (frame.x(i), frame.y(v)))
        .collect();
    match points.as_slice() {
        [single] => put(img, single.0, single.1, color),
        _ => {
            for pair in points.windows(2) {
                draw_line(img, pair[0], pair[1], color);
            }
        }
    }
}

/// Renders the real (red) and imaginary (blue) parts against index.
pub(crate) fn render(values: &[Complex64]) -> Result<RgbImage, PlotError> {
    if values.is_empty() {
        return Err(PlotError::Empty);
    }

    let frame = Frame::new(values);
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    if frame.min <= 0.0 && frame.max >= 0.0 {
        let zero = frame.y(0.0);
        draw_line(&mut img, (MARGIN as i64, zero), ((WIDTH - MARGIN) as i64, zero), AXIS);
    }
    draw_series(&mut img, &frame, values.iter().map(|c| c.re), REAL);
    draw_series(&mut img, &frame, values.iter().map(|c| c.im), IMAG);

    Ok(img)
}

/// Writes the plot as a PNG.
pub fn plot_components(values: &[Complex64], output_path: &Path) -> Result<(), PlotError> {
    let img = render(values)?;

    let file = File::create(output_path)?;
    let encoder = PngEncoder::new(BufWriter::new(file));
    encoder.write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)?;

    info!("Saved plot of {} values to {}", values.len(), output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert!(matches!(render(&[]), Err(PlotError::Empty)));
    }

    #[test]
    fn test_frame_maps_extremes_to_margins() {
        let values = [Complex64::new(-2.0, 0.0), Complex64::new(2.0, 1.0)];
        let frame = Frame::new(&values);
        assert_eq!(frame.x(0), MARGIN as i64);
        assert_eq!(frame.x(1), (WIDTH - MARGIN) as i64);
        assert_eq!(frame.y(-2.0), (HEIGHT - MARGIN) as i64);
        assert_eq!(frame.y(2.0), MARGIN as i64);
    }

    #[test]
    fn test_flat_signal_gets_a_range() {
        let frame = Frame::new(&[Complex64::new(3.0, 3.0); 4]);
        assert!(frame.max > frame.min);
    }

    #[test]
    fn test_both_series_drawn() {
        let values = [
            Complex64::new(1.0, -1.0),
            Complex64::new(0.0, 0.5),
            Complex64::new(-1.0, 1.0),
            Complex64::new(0.5, 0.0),
        ];
        let img = render(&values).unwrap();
        assert!(img.pixels().any(|p| *p == REAL));
        assert!(img.pixels().any(|p| *p == IMAG));
    }

    #[test]
    fn test_plot_components_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fft.png");
        let values = [Complex64::new(4.0, 0.0), Complex64::default(), Complex64::default(), Complex64::default()];

        plot_components(&values, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
