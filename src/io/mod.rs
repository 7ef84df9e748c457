//! Collaborators around the transform: text input, flat-file output and
//! optional plotting. Everything here needs `std`.

pub mod output;
pub mod parse;
#[cfg(feature = "plot")]
pub mod plot;

pub use output::{DEFAULT_OUTPUT_PATH, OutputError, format_value, save_to_file, write_results};
pub use parse::{ParseError, parse_complex, parse_samples};
#[cfg(feature = "plot")]
pub use plot::{PlotError, plot_components};
