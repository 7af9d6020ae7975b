//! Spectrum table output as CSV and aligned plain text

use crate::types::{Band, PixelSpectrum, SpectralResult};
use serde::Serialize;
use std::path::Path;

/// One row of the spectrum table
#[derive(Debug, Serialize)]
struct SpectrumRecord<'a> {
    #[serde(rename = "Band")]
    band: &'a str,
    #[serde(rename = "Central_Wavelength_nm")]
    central_wavelength_nm: f64,
    #[serde(rename = "Spectral_Range_nm")]
    spectral_range_nm: String,
    #[serde(rename = "Reflectance")]
    reflectance: f64,
}

/// Writer for per-pixel spectrum tables
pub struct SpectrumTableWriter;

impl SpectrumTableWriter {
    /// Write the spectrum to a CSV file, one row per band in wavelength
    /// order. Missing parent directories are created.
    pub fn write_csv<P: AsRef<Path>>(spectrum: &PixelSpectrum, path: P) -> SpectralResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        for sample in spectrum.samples() {
            writer.serialize(SpectrumRecord {
                band: &sample.band.name,
                central_wavelength_nm: sample.band.center_nm,
                spectral_range_nm: format_range(&sample.band),
                reflectance: sample.reflectance,
            })?;
        }
        writer.flush()?;

        log::info!(
            "Wrote {} spectrum rows to {}",
            spectrum.len(),
            path.display()
        );
        Ok(())
    }

    /// Render the spectrum as an aligned text table for console output
    pub fn format_table(spectrum: &PixelSpectrum) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<8} {:>21} {:>17} {:>11}\n",
            "Band", "Central_Wavelength_nm", "Spectral_Range_nm", "Reflectance"
        ));
        for sample in spectrum.samples() {
            out.push_str(&format!(
                "{:<8} {:>21} {:>17} {:>11.4}\n",
                sample.band.name,
                format!("{:.0}", sample.band.center_nm),
                format_range(&sample.band),
                sample.reflectance
            ));
        }
        out
    }
}

fn format_range(band: &Band) -> String {
    format!("{:.0}-{:.0}", band.range_min_nm, band.range_max_nm)
}
