use spectrine::io::{run_report, SpectrumPlotter, SpectrumTableWriter};
use spectrine::{run_pipeline, PipelineConfig, SpectralResult};

/// Output path of the spectrum table
const SPECTRUM_CSV: &str = "data/synthetic_pixel_spectrum.csv";
/// Output path of the signature plot
const SPECTRUM_PLOT: &str = "spectral_signature.png";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Pipeline failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> SpectralResult<()> {
    let config = PipelineConfig::default();
    let results = run_pipeline(&config)?;

    println!("{}", run_report(&results));

    SpectrumTableWriter::write_csv(&results.spectrum, SPECTRUM_CSV)?;
    println!("Spectral data saved to: {}", SPECTRUM_CSV);

    SpectrumPlotter::render(&results.spectrum, SPECTRUM_PLOT)?;
    println!("Spectral signature plot saved to: {}", SPECTRUM_PLOT);

    Ok(())
}
