use crate::types::{Band, Raster, SpectralError, SpectralResult};
use ndarray::Array3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Parameters for synthetic raster generation
#[derive(Debug, Clone)]
pub struct SynthesisParams {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Reflectance added per row index
    pub row_gradient_step: f64,
    /// Reflectance added per column index
    pub col_gradient_step: f64,
    /// Standard deviation of the Gaussian perturbation
    pub noise_scale: f64,
    /// Seed for the noise generator
    pub seed: u64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            row_gradient_step: 0.01,  // gentle south-facing brightening
            col_gradient_step: 0.005, // half as strong eastward
            noise_scale: 0.002,
            seed: 42,
        }
    }
}

/// Synthesizer for a small multi-band reflectance raster.
///
/// Each cell value is `base[b] + row * row_gradient_step +
/// col * col_gradient_step + N(0, noise_scale)`, clipped to [0, 1].
pub struct RasterSynthesizer {
    params: SynthesisParams,
}

impl RasterSynthesizer {
    /// Create a new synthesizer
    pub fn new(params: SynthesisParams) -> Self {
        Self { params }
    }

    /// Create a synthesizer with standard parameters
    pub fn standard() -> Self {
        Self::new(SynthesisParams::default())
    }

    /// Current parameters
    pub fn params(&self) -> &SynthesisParams {
        &self.params
    }

    /// Generate the raster for the given bands and per-band base reflectance.
    ///
    /// The noise generator is seeded once from `params.seed` and consumed in
    /// a fixed order: band-major, then row-major within each band. The same
    /// seed therefore reproduces the raster bit for bit.
    pub fn synthesize(&self, bands: &[Band], base_reflectance: &[f64]) -> SpectralResult<Raster> {
        self.validate(bands, base_reflectance)?;

        let (rows, cols) = (self.params.rows, self.params.cols);
        log::info!(
            "Synthesizing {} bands over a {}x{} grid (seed {})",
            bands.len(),
            rows,
            cols,
            self.params.seed
        );
        log::debug!("Synthesis parameters: {:?}", self.params);

        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let noise = Normal::new(0.0, self.params.noise_scale).map_err(|e| {
            SpectralError::InvalidConfiguration(format!(
                "noise distribution with stddev {}: {}",
                self.params.noise_scale, e
            ))
        })?;

        let mut data = Array3::<f64>::zeros((bands.len(), rows, cols));
        let mut clipped = 0usize;
        for (b, base) in base_reflectance.iter().enumerate() {
            for r in 0..rows {
                for c in 0..cols {
                    let gradient = r as f64 * self.params.row_gradient_step
                        + c as f64 * self.params.col_gradient_step;
                    let value = base + gradient + noise.sample(&mut rng);
                    if !(0.0..=1.0).contains(&value) {
                        clipped += 1;
                    }
                    data[[b, r, c]] = value.clamp(0.0, 1.0);
                }
            }
        }

        if clipped > 0 {
            log::debug!("Clipped {} of {} values into [0, 1]", clipped, data.len());
        }
        log::info!("Synthesis complete: shape ({}, {}, {})", bands.len(), rows, cols);

        Raster::new(bands.to_vec(), data)
    }

    fn validate(&self, bands: &[Band], base_reflectance: &[f64]) -> SpectralResult<()> {
        if self.params.rows == 0 || self.params.cols == 0 {
            return Err(SpectralError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.params.rows, self.params.cols
            )));
        }
        if bands.is_empty() {
            return Err(SpectralError::InvalidConfiguration(
                "at least one band definition is required".to_string(),
            ));
        }
        if bands.len() != base_reflectance.len() {
            return Err(SpectralError::InvalidConfiguration(format!(
                "{} band definitions but {} base reflectance values",
                bands.len(),
                base_reflectance.len()
            )));
        }
        for band in bands {
            if !band.center_nm.is_finite() || band.center_nm <= 0.0 {
                return Err(SpectralError::InvalidConfiguration(format!(
                    "band '{}' has non-positive central wavelength {}",
                    band.name, band.center_nm
                )));
            }
        }
        for (b, &base) in base_reflectance.iter().enumerate() {
            if !base.is_finite() || !(0.0..=1.0).contains(&base) {
                return Err(SpectralError::InvalidConfiguration(format!(
                    "base reflectance {} for band '{}' is outside [0, 1]",
                    base, bands[b].name
                )));
            }
        }
        if !self.params.noise_scale.is_finite() || self.params.noise_scale < 0.0 {
            return Err(SpectralError::InvalidConfiguration(format!(
                "noise scale must be finite and non-negative, got {}",
                self.params.noise_scale
            )));
        }
        if !self.params.row_gradient_step.is_finite() || !self.params.col_gradient_step.is_finite()
        {
            return Err(SpectralError::InvalidConfiguration(format!(
                "gradient steps must be finite, got ({}, {})",
                self.params.row_gradient_step, self.params.col_gradient_step
            )));
        }
        Ok(())
    }
}

impl Default for RasterSynthesizer {
    fn default() -> Self {
        Self::standard()
    }
}
