//! Core raster processing modules

pub mod synthesize;
pub mod georeference;
pub mod extract;
pub mod indices;
pub mod pipeline;

// Re-export main types
pub use synthesize::{RasterSynthesizer, SynthesisParams};
pub use georeference::{GeoCoordinate, GeoReference};
pub use extract::extract_spectrum;
pub use indices::{ndvi, normalized_difference, NIR_BAND, RED_BAND};
pub use pipeline::{run_pipeline, PipelineConfig, PipelineRun};
