use crate::types::{PixelSpectrum, SpectralError, SpectralResult};

/// Canonical near-infrared band name
pub const NIR_BAND: &str = "NIR";
/// Canonical red band name
pub const RED_BAND: &str = "Red";

/// Generic two-band normalized difference: (plus - minus) / (plus + minus).
///
/// Band names are matched exactly against the spectrum. The result lies in
/// [-1, 1] for non-negative reflectances; a zero denominator is an error
/// rather than a NaN sentinel.
pub fn normalized_difference(
    spectrum: &PixelSpectrum,
    plus_band: &str,
    minus_band: &str,
) -> SpectralResult<f64> {
    let plus = spectrum
        .reflectance(plus_band)
        .ok_or_else(|| SpectralError::BandNotFound(plus_band.to_string()))?;
    let minus = spectrum
        .reflectance(minus_band)
        .ok_or_else(|| SpectralError::BandNotFound(minus_band.to_string()))?;

    let denominator = plus + minus;
    if denominator == 0.0 {
        return Err(SpectralError::DivisionByZero { plus, minus });
    }
    Ok((plus - minus) / denominator)
}

/// Normalized Difference Vegetation Index: (NIR - Red) / (NIR + Red).
pub fn ndvi(spectrum: &PixelSpectrum) -> SpectralResult<f64> {
    let value = normalized_difference(spectrum, NIR_BAND, RED_BAND)?;
    log::debug!(
        "NDVI at (row={}, col={}): {:.4}",
        spectrum.row,
        spectrum.col,
        value
    );
    Ok(value)
}
