//! End-to-end demo pipeline
//!
//! Chains the processing stages into a single run: synthesize a raster,
//! georeference it, extract one pixel's spectrum and compute NDVI.

use crate::core::extract::extract_spectrum;
use crate::core::georeference::{GeoCoordinate, GeoReference};
use crate::core::indices::ndvi;
use crate::core::synthesize::{RasterSynthesizer, SynthesisParams};
use crate::types::{Band, BandStatistics, PixelSpectrum, Raster, SpectralResult};

/// Configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Band definitions in band-axis order
    pub bands: Vec<Band>,
    /// Base reflectance per band, each in [0, 1]
    pub base_reflectance: Vec<f64>,
    /// Raster synthesis parameters
    pub synthesis: SynthesisParams,
    /// Longitude of the top-left raster corner in degrees
    pub origin_lon: f64,
    /// Latitude of the top-left raster corner in degrees
    pub origin_lat: f64,
    /// Pixel width in degrees of longitude
    pub xres: f64,
    /// Pixel height in degrees of latitude
    pub yres: f64,
    /// Coordinate reference system label
    pub crs: String,
    /// Row of the pixel to extract
    pub pixel_row: usize,
    /// Column of the pixel to extract
    pub pixel_col: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bands: Band::standard_six(),
            base_reflectance: vec![0.12, 0.18, 0.22, 0.46, 0.31, 0.27],
            synthesis: SynthesisParams::default(),
            origin_lon: -59.0,
            origin_lat: 15.0,
            xres: 0.01,
            yres: 0.01,
            crs: "EPSG:4326".to_string(),
            pixel_row: 1,
            pixel_col: 2,
        }
    }
}

/// Results of a completed pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// The synthesized raster
    pub raster: Raster,
    /// Georeference the raster is annotated with
    pub georeference: GeoReference,
    /// Center coordinate of the extracted pixel
    pub coordinate: GeoCoordinate,
    /// Spectral signature at the extracted pixel, sorted by wavelength
    pub spectrum: PixelSpectrum,
    /// NDVI at the extracted pixel
    pub ndvi: f64,
    /// Per-band statistics over the whole grid
    pub statistics: Vec<BandStatistics>,
}

/// Run the full demo pipeline for the given configuration
pub fn run_pipeline(config: &PipelineConfig) -> SpectralResult<PipelineRun> {
    log::info!(
        "Starting spectral signature pipeline: {} bands, {}x{} grid, pixel (row={}, col={})",
        config.bands.len(),
        config.synthesis.rows,
        config.synthesis.cols,
        config.pixel_row,
        config.pixel_col
    );

    let synthesizer = RasterSynthesizer::new(config.synthesis.clone());
    let raster = synthesizer.synthesize(&config.bands, &config.base_reflectance)?;

    let georeference = GeoReference::new(
        config.origin_lon,
        config.origin_lat,
        config.xres,
        config.yres,
        config.crs.clone(),
    )?;
    let coordinate = georeference.pixel_center(config.pixel_row as i64, config.pixel_col as i64);
    log::info!(
        "Pixel (row={}, col={}) maps to {}",
        config.pixel_row,
        config.pixel_col,
        coordinate
    );

    let spectrum = extract_spectrum(&raster, config.pixel_row, config.pixel_col)?;
    let ndvi_value = ndvi(&spectrum)?;
    let statistics = raster.band_statistics();

    log::info!("Pipeline complete: NDVI = {:.4}", ndvi_value);

    Ok(PipelineRun {
        raster,
        georeference,
        coordinate,
        spectrum,
        ndvi: ndvi_value,
        statistics,
    })
}
