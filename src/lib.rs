#![no_std]

// The transform engines only need `alloc`. Everything touching files or
// processes lives behind the "std" feature.
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;
pub mod transform;
pub mod validate;

#[cfg(feature = "std")]
pub mod io;

pub use common::{Direction, FftError, FftProcess};
pub use num_complex::Complex64;
pub use transform::{forward_transform, inverse_transform};
pub use validate::{Sample, is_power_of_two, is_valid_input, validate};
