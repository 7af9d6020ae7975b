use ndarray::{Array3, Axis};
use serde::{Deserialize, Serialize};

/// Unitless surface reflectance, clipped to [0, 1]
pub type Reflectance = f64;

/// 3D reflectance grid (band x row x col)
pub type ReflectanceCube = Array3<Reflectance>;

/// A spectral channel of a multi-band raster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Human-readable label, e.g. "Red"
    pub name: String,
    /// Central wavelength in nanometers
    pub center_nm: f64,
    /// Lower edge of the spectral range in nanometers
    pub range_min_nm: f64,
    /// Upper edge of the spectral range in nanometers
    pub range_max_nm: f64,
}

impl Band {
    /// Create a band definition
    pub fn new(name: impl Into<String>, center_nm: f64, range_min_nm: f64, range_max_nm: f64) -> Self {
        Self {
            name: name.into(),
            center_nm,
            range_min_nm,
            range_max_nm,
        }
    }

    /// The six standard bands of the demo raster, in band-axis order (0..5).
    ///
    /// Central wavelengths follow a Sentinel-2-like layout; the spectral
    /// range brackets are symmetric around the center.
    pub fn standard_six() -> Vec<Band> {
        vec![
            Band::new("Blue", 490.0, 458.0, 523.0),
            Band::new("Green", 560.0, 543.0, 578.0),
            Band::new("Red", 665.0, 650.0, 680.0),
            Band::new("NIR", 865.0, 855.0, 875.0),
            Band::new("SWIR1", 1610.0, 1565.0, 1655.0),
            Band::new("SWIR2", 2200.0, 2120.0, 2280.0),
        ]
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Immutable multi-band reflectance raster.
///
/// Owns the band definitions alongside the grid so band names, wavelengths
/// and values can never drift out of alignment. Axis order is
/// (band, row, col); every value is within [0, 1].
#[derive(Debug, Clone)]
pub struct Raster {
    bands: Vec<Band>,
    data: ReflectanceCube,
}

impl Raster {
    /// Build a raster from band definitions and a matching reflectance grid.
    ///
    /// Fails with `InvalidConfiguration` when the band count does not match
    /// the grid's band axis or any value falls outside [0, 1].
    pub fn new(bands: Vec<Band>, data: ReflectanceCube) -> SpectralResult<Self> {
        let n_bands = data.shape()[0];
        if bands.len() != n_bands {
            return Err(SpectralError::InvalidConfiguration(format!(
                "{} band definitions for a grid with {} bands",
                bands.len(),
                n_bands
            )));
        }
        for (idx, &value) in data.indexed_iter() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SpectralError::InvalidConfiguration(format!(
                    "reflectance {} at (band={}, row={}, col={}) is outside [0, 1]",
                    value, idx.0, idx.1, idx.2
                )));
            }
        }
        Ok(Self { bands, data })
    }

    /// Grid dimensions as (bands, rows, cols)
    pub fn shape(&self) -> (usize, usize, usize) {
        let s = self.data.shape();
        (s[0], s[1], s[2])
    }

    /// Number of spectral bands
    pub fn n_bands(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.data.shape()[1]
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        self.data.shape()[2]
    }

    /// Band definitions in band-axis order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Reflectance grid (band x row x col)
    pub fn data(&self) -> &ReflectanceCube {
        &self.data
    }

    /// Single reflectance value, or None when any index is out of range
    pub fn value(&self, band: usize, row: usize, col: usize) -> Option<Reflectance> {
        self.data.get((band, row, col)).copied()
    }

    /// Per-band min/max/mean over the full grid
    pub fn band_statistics(&self) -> Vec<BandStatistics> {
        self.bands
            .iter()
            .enumerate()
            .map(|(b, band)| {
                let view = self.data.index_axis(Axis(0), b);
                let min = view.iter().fold(f64::INFINITY, |a, &v| a.min(v));
                let max = view.iter().fold(f64::NEG_INFINITY, |a, &v| a.max(v));
                let mean = view.mean().unwrap_or(0.0);
                BandStatistics {
                    band: band.name.clone(),
                    min,
                    max,
                    mean,
                }
            })
            .collect()
    }
}

/// Summary statistics of one band across the whole grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandStatistics {
    pub band: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// One spectrum entry: a band definition and the reflectance observed there
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumSample {
    pub band: Band,
    pub reflectance: Reflectance,
}

/// Spectral signature of a single pixel.
///
/// Samples are kept sorted ascending by central wavelength; bands sharing a
/// wavelength stay in definition order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixelSpectrum {
    /// Grid row the spectrum was read from
    pub row: usize,
    /// Grid column the spectrum was read from
    pub col: usize,
    samples: Vec<SpectrumSample>,
}

impl PixelSpectrum {
    /// Assemble a spectrum, sorting the samples by central wavelength.
    ///
    /// The sort is stable, so equal wavelengths keep their input order.
    pub fn new(row: usize, col: usize, mut samples: Vec<SpectrumSample>) -> Self {
        samples.sort_by(|a, b| {
            a.band
                .center_nm
                .partial_cmp(&b.band.center_nm)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { row, col, samples }
    }

    /// Samples in ascending wavelength order
    pub fn samples(&self) -> &[SpectrumSample] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the spectrum holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Reflectance of the band with the given name, if present
    pub fn reflectance(&self, band_name: &str) -> Option<Reflectance> {
        self.samples
            .iter()
            .find(|s| s.band.name == band_name)
            .map(|s| s.reflectance)
    }

    /// (wavelength, reflectance) pairs in plotting order
    pub fn wavelength_series(&self) -> Vec<(f64, Reflectance)> {
        self.samples
            .iter()
            .map(|s| (s.band.center_nm, s.reflectance))
            .collect()
    }
}

/// Error types for raster synthesis and spectral operations
#[derive(Debug, thiserror::Error)]
pub enum SpectralError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Pixel (row={row}, col={col}) is outside the raster extent of {rows} rows x {cols} cols")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Band '{0}' not found in spectrum")]
    BandNotFound(String),

    #[error("Normalized difference denominator is zero (plus={plus}, minus={minus})")]
    DivisionByZero { plus: f64, minus: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot rendering error: {0}")]
    Plot(String),
}

/// Result type for raster and spectral operations
pub type SpectralResult<T> = Result<T, SpectralError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn small_raster() -> Raster {
        let bands = vec![
            Band::new("A", 500.0, 480.0, 520.0),
            Band::new("B", 800.0, 780.0, 820.0),
        ];
        let data = Array3::from_shape_vec(
            (2, 2, 2),
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8],
        )
        .unwrap();
        Raster::new(bands, data).unwrap()
    }

    #[test]
    fn test_standard_six_order() {
        let bands = Band::standard_six();
        assert_eq!(bands.len(), 6);
        assert_eq!(bands[0].name, "Blue");
        assert_eq!(bands[3].name, "NIR");
        assert_eq!(bands[5].name, "SWIR2");

        // Definition order is already ascending in wavelength
        for pair in bands.windows(2) {
            assert!(pair[0].center_nm < pair[1].center_nm);
        }
        // Ranges bracket the central wavelength
        for band in &bands {
            assert!(band.range_min_nm < band.center_nm);
            assert!(band.center_nm < band.range_max_nm);
        }
    }

    #[test]
    fn test_raster_rejects_band_count_mismatch() {
        let bands = vec![Band::new("A", 500.0, 480.0, 520.0)];
        let data = Array3::zeros((2, 2, 2));
        let result = Raster::new(bands, data);
        assert!(matches!(
            result,
            Err(SpectralError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_raster_rejects_out_of_range_values() {
        let bands = vec![Band::new("A", 500.0, 480.0, 520.0)];
        let mut data = Array3::zeros((1, 2, 2));
        data[[0, 1, 1]] = 1.5;
        let result = Raster::new(bands, data);
        assert!(matches!(
            result,
            Err(SpectralError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_raster_accessors() {
        let raster = small_raster();
        assert_eq!(raster.shape(), (2, 2, 2));
        assert_eq!(raster.n_bands(), 2);
        assert_eq!(raster.rows(), 2);
        assert_eq!(raster.cols(), 2);
        assert_eq!(raster.value(1, 0, 1), Some(0.6));
        assert_eq!(raster.value(2, 0, 0), None);
    }

    #[test]
    fn test_band_statistics_exact() {
        let raster = small_raster();
        let stats = raster.band_statistics();
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].band, "A");
        assert_eq!(stats[0].min, 0.1);
        assert_eq!(stats[0].max, 0.4);
        assert!((stats[0].mean - 0.25).abs() < 1e-12);

        assert_eq!(stats[1].band, "B");
        assert_eq!(stats[1].min, 0.5);
        assert_eq!(stats[1].max, 0.8);
        assert!((stats[1].mean - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_spectrum_sorts_by_wavelength() {
        let samples = vec![
            SpectrumSample {
                band: Band::new("SWIR", 1600.0, 1550.0, 1650.0),
                reflectance: 0.3,
            },
            SpectrumSample {
                band: Band::new("Blue", 490.0, 458.0, 523.0),
                reflectance: 0.1,
            },
            SpectrumSample {
                band: Band::new("NIR", 865.0, 855.0, 875.0),
                reflectance: 0.5,
            },
        ];
        let spectrum = PixelSpectrum::new(0, 0, samples);
        let names: Vec<&str> = spectrum
            .samples()
            .iter()
            .map(|s| s.band.name.as_str())
            .collect();
        assert_eq!(names, vec!["Blue", "NIR", "SWIR"]);
    }

    #[test]
    fn test_spectrum_sort_is_stable_on_ties() {
        let samples = vec![
            SpectrumSample {
                band: Band::new("First", 700.0, 690.0, 710.0),
                reflectance: 0.2,
            },
            SpectrumSample {
                band: Band::new("Second", 700.0, 695.0, 705.0),
                reflectance: 0.4,
            },
        ];
        let spectrum = PixelSpectrum::new(0, 0, samples);
        assert_eq!(spectrum.samples()[0].band.name, "First");
        assert_eq!(spectrum.samples()[1].band.name, "Second");
    }

    #[test]
    fn test_spectrum_reflectance_lookup() {
        let samples = vec![SpectrumSample {
            band: Band::new("Red", 665.0, 650.0, 680.0),
            reflectance: 0.22,
        }];
        let spectrum = PixelSpectrum::new(1, 2, samples);
        assert_eq!(spectrum.reflectance("Red"), Some(0.22));
        assert_eq!(spectrum.reflectance("NIR"), None);
        assert_eq!(spectrum.len(), 1);
        assert!(!spectrum.is_empty());
    }
}
