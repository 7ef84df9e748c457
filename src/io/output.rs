use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::string::String;
use std::format;

use log::info;
use num_complex::Complex64;
use thiserror::Error;

/// Where results go when the caller does not name a file.
pub const DEFAULT_OUTPUT_PATH: &str = "result_data/fft_results.csv";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write results to {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// `<real>+<imag>j`, shortest round-trip float text. A negative imaginary
/// part is kept as written, giving `1.0+-2.0j`.
pub fn format_value(value: &Complex64) -> String {
    format!("{:?}+{:?}j", value.re, value.im)
}

/// Writes one value per line.
pub fn write_results<W: Write>(output: &[Complex64], mut writer: W) -> io::Result<()> {
    for value in output {
        writeln!(writer, "{}", format_value(value))?;
    }
    writer.flush()
}

/// Saves `output` to `path` (or [`DEFAULT_OUTPUT_PATH`]), creating missing
/// parent directories. Returns the path written.
pub fn save_to_file(output: &[Complex64], path: Option<&Path>) -> Result<PathBuf, OutputError> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH), Path::to_path_buf);
    info!("Current storage path: {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    File::create(&path)
        .and_then(|file| write_results(output, BufWriter::new(file)))
        .map_err(|source| OutputError::Write { path: path.clone(), source })?;

    info!("Stored {} values to {}", output.len(), path.display());
    Ok(path)
}
