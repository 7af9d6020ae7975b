//! Spectral signature plot rendering

use crate::types::{PixelSpectrum, SpectralError, SpectralResult};
use plotters::prelude::*;
use std::path::Path;

/// Renderer for reflectance-vs-wavelength line plots
pub struct SpectrumPlotter;

impl SpectrumPlotter {
    /// Default canvas size in pixels (width, height)
    pub const DEFAULT_SIZE: (u32, u32) = (1000, 600);

    /// Render the spectral signature to a PNG at the default canvas size
    pub fn render<P: AsRef<Path>>(spectrum: &PixelSpectrum, path: P) -> SpectralResult<()> {
        Self::render_sized(spectrum, path, Self::DEFAULT_SIZE)
    }

    /// Render the spectral signature to a PNG with an explicit canvas size
    pub fn render_sized<P: AsRef<Path>>(
        spectrum: &PixelSpectrum,
        path: P,
        size: (u32, u32),
    ) -> SpectralResult<()> {
        let path = path.as_ref();
        let series = spectrum.wavelength_series();
        if series.is_empty() {
            return Err(SpectralError::Plot(
                "spectrum has no samples to plot".to_string(),
            ));
        }

        let wl_min = series.iter().fold(f64::INFINITY, |a, &(wl, _)| a.min(wl));
        let wl_max = series
            .iter()
            .fold(f64::NEG_INFINITY, |a, &(wl, _)| a.max(wl));
        let re_min = series.iter().fold(f64::INFINITY, |a, &(_, re)| a.min(re));
        let re_max = series
            .iter()
            .fold(f64::NEG_INFINITY, |a, &(_, re)| a.max(re));

        // Pad the axis ranges so markers do not sit on the plot border;
        // the floor keeps degenerate spans drawable.
        let wl_pad = ((wl_max - wl_min) * 0.05).max(1.0);
        let re_pad = ((re_max - re_min) * 0.1).max(0.01);

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let caption = format!(
            "Spectral Signature at pixel (row={}, col={})",
            spectrum.row, spectrum.col
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 28).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (wl_min - wl_pad)..(wl_max + wl_pad),
                (re_min - re_pad)..(re_max + re_pad),
            )
            .map_err(plot_error)?;

        chart
            .configure_mesh()
            .x_desc("Wavelength (nm)")
            .y_desc("Reflectance")
            .label_style(("sans-serif", 16))
            .axis_desc_style(("sans-serif", 20))
            .light_line_style(&BLACK.mix(0.1))
            .draw()
            .map_err(plot_error)?;

        chart
            .draw_series(LineSeries::new(
                series.iter().copied(),
                BLUE.stroke_width(2),
            ))
            .map_err(plot_error)?;
        chart
            .draw_series(
                series
                    .iter()
                    .map(|&(wl, re)| Circle::new((wl, re), 4, BLUE.filled())),
            )
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;

        log::info!("Rendered spectral signature plot to {}", path.display());
        Ok(())
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> SpectralError {
    SpectralError::Plot(err.to_string())
}
