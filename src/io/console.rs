//! Human-readable report of a pipeline run

use crate::core::pipeline::PipelineRun;
use crate::io::table::SpectrumTableWriter;

/// Render a pipeline run as the multi-section console report: raster
/// shape and CRS, the extracted pixel's coordinate and spectrum table,
/// NDVI, and per-band statistics.
pub fn run_report(run: &PipelineRun) -> String {
    let (bands, rows, cols) = run.raster.shape();

    let mut out = String::new();
    out.push_str(&format!(
        "Raster shape (bands, rows, cols): ({}, {}, {})\n",
        bands, rows, cols
    ));
    out.push_str(&format!("CRS: {}\n", run.georeference.crs()));
    out.push_str(&format!(
        "Pixel (row={}, col={}) center coordinate: {}\n",
        run.spectrum.row, run.spectrum.col, run.coordinate
    ));
    out.push('\n');

    out.push_str(&SpectrumTableWriter::format_table(&run.spectrum));

    out.push_str(&format!(
        "\nNDVI at (row={}, col={}): {:.4}\n",
        run.spectrum.row, run.spectrum.col, run.ndvi
    ));

    out.push_str("\nBand statistics over the full grid:\n");
    for stats in &run.statistics {
        out.push_str(&format!(
            "  {:<8} min={:.4}  max={:.4}  mean={:.4}\n",
            stats.band, stats.min, stats.max, stats.mean
        ));
    }
    out
}
