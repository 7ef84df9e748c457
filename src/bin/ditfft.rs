use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use rs_dit_fft::io::{parse_samples, save_to_file};
use rs_dit_fft::{Sample, forward_transform, inverse_transform, validate};

#[derive(Parser, Debug)]
#[command(name = "ditfft")]
#[command(about = "Radix-2 DIT FFT of a comma-separated signal", long_about = None)]
struct Cli {
    /// Comma-separated real or complex elements (`1.5`, `2-3j`), 2^n of them
    #[arg(long, value_name = "CSV")]
    input: String,
    /// Result file, one `<real>+<imag>j` per line
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Run the normalized inverse transform instead
    #[arg(long)]
    inverse: bool,
    /// Also plot the real and imaginary parts of the result
    #[cfg(feature = "plot")]
    #[arg(long, value_name = "PNG")]
    plot: Option<PathBuf>,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let values = parse_samples(&cli.input).context("Could not handle input argument")?;
    let samples: Vec<Sample> = values.iter().copied().map(Sample::from).collect();

    validate(&samples).context("Input rejected")?;
    info!("Input is the correct type");

    let output = if cli.inverse {
        inverse_transform(&values)?
    } else {
        forward_transform(&samples)?
    };

    save_to_file(&output, cli.output.as_deref())?;

    #[cfg(feature = "plot")]
    if let Some(path) = cli.plot.as_deref() {
        rs_dit_fft::io::plot_components(&output, path)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
