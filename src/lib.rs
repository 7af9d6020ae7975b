//! Spectrine: A Tiny Multispectral Raster Synthesizer and Spectral Signature Demo
//!
//! This library builds a small synthetic multi-band reflectance raster,
//! georeferences it with an affine pixel-to-coordinate mapping, extracts the
//! spectral signature of a single pixel and computes NDVI from it.

pub mod types;
pub mod io;
pub mod core;

// Re-export main types and functions for easier access
pub use types::{
    Band, BandStatistics, PixelSpectrum, Raster, Reflectance, ReflectanceCube, SpectralError,
    SpectralResult, SpectrumSample,
};

pub use crate::core::{
    extract_spectrum, ndvi, normalized_difference, run_pipeline, GeoCoordinate, GeoReference,
    PipelineConfig, PipelineRun, RasterSynthesizer, SynthesisParams, NIR_BAND, RED_BAND,
};

pub use io::{run_report, SpectrumPlotter, SpectrumTableWriter};
