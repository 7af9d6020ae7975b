use crate::types::{PixelSpectrum, Raster, SpectralError, SpectralResult, SpectrumSample};

/// Read the spectral signature of one pixel.
///
/// Pairs `raster[b][row][col]` with band `b`'s definition for every band;
/// samples come back sorted ascending by central wavelength. The read is
/// pure, so repeated extraction of the same pixel yields identical results.
pub fn extract_spectrum(raster: &Raster, row: usize, col: usize) -> SpectralResult<PixelSpectrum> {
    if row >= raster.rows() || col >= raster.cols() {
        return Err(SpectralError::IndexOutOfBounds {
            row,
            col,
            rows: raster.rows(),
            cols: raster.cols(),
        });
    }

    log::debug!("Extracting spectrum at pixel (row={}, col={})", row, col);

    let samples = raster
        .bands()
        .iter()
        .enumerate()
        .map(|(b, band)| SpectrumSample {
            band: band.clone(),
            reflectance: raster.data()[[b, row, col]],
        })
        .collect();

    Ok(PixelSpectrum::new(row, col, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Band;
    use ndarray::Array3;

    // Bands deliberately defined out of wavelength order
    fn shuffled_raster() -> Raster {
        let bands = vec![
            Band::new("SWIR1", 1610.0, 1565.0, 1655.0),
            Band::new("Blue", 490.0, 458.0, 523.0),
            Band::new("NIR", 865.0, 855.0, 875.0),
        ];
        let mut data = Array3::zeros((3, 3, 3));
        for (b, &base) in [0.1, 0.2, 0.3].iter().enumerate() {
            for r in 0..3 {
                for c in 0..3 {
                    data[[b, r, c]] = base + 0.01 * r as f64 + 0.001 * c as f64;
                }
            }
        }
        Raster::new(bands, data).unwrap()
    }

    #[test]
    fn test_samples_sorted_by_wavelength() {
        let spectrum = extract_spectrum(&shuffled_raster(), 1, 2).unwrap();
        let names: Vec<&str> = spectrum
            .samples()
            .iter()
            .map(|s| s.band.name.as_str())
            .collect();
        assert_eq!(names, vec!["Blue", "NIR", "SWIR1"]);
        for pair in spectrum.samples().windows(2) {
            assert!(pair[0].band.center_nm <= pair[1].band.center_nm);
        }
    }

    #[test]
    fn test_values_follow_band_axis() {
        let spectrum = extract_spectrum(&shuffled_raster(), 1, 2).unwrap();
        // Band axis index 0 is SWIR1, 1 is Blue, 2 is NIR
        assert_eq!(spectrum.reflectance("SWIR1"), Some(0.1 + 0.01 + 0.002));
        assert_eq!(spectrum.reflectance("Blue"), Some(0.2 + 0.01 + 0.002));
        assert_eq!(spectrum.reflectance("NIR"), Some(0.3 + 0.01 + 0.002));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let raster = shuffled_raster();
        let first = extract_spectrum(&raster, 2, 0).unwrap();
        let second = extract_spectrum(&raster, 2, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_out_of_bounds() {
        let result = extract_spectrum(&shuffled_raster(), 3, 0);
        match result {
            Err(SpectralError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            }) => {
                assert_eq!((row, col, rows, cols), (3, 0, 3, 3));
            }
            other => panic!("expected IndexOutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_col_out_of_bounds() {
        let result = extract_spectrum(&shuffled_raster(), 0, 7);
        assert!(matches!(
            result,
            Err(SpectralError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_pixel_location_recorded() {
        let spectrum = extract_spectrum(&shuffled_raster(), 1, 2).unwrap();
        assert_eq!(spectrum.row, 1);
        assert_eq!(spectrum.col, 2);
        assert_eq!(spectrum.len(), 3);
    }
}
