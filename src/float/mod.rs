pub mod complex;
pub mod recursive;
mod core;

pub use crate::common::{ Direction, FftError, FftProcess };
pub use complex::CplxFft;
pub use recursive::{RecursiveFft, transform};
