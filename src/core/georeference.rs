use crate::types::{SpectralError, SpectralResult};
use serde::Serialize;

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub lon: f64,
    pub lat: f64,
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lon={:.5}, lat={:.5}", self.lon, self.lat)
    }
}

/// Affine mapping from pixel indices to geographic coordinates.
///
/// North-up convention: the origin is the top-left corner of the grid,
/// latitude decreases as the row index grows and longitude increases with
/// the column index. Resolutions are degrees per pixel and must be positive.
#[derive(Debug, Clone, Serialize)]
pub struct GeoReference {
    origin_lon: f64,
    origin_lat: f64,
    xres: f64,
    yres: f64,
    crs: String,
}

impl GeoReference {
    /// Create a georeference, validating the resolution parameters.
    pub fn new(
        origin_lon: f64,
        origin_lat: f64,
        xres: f64,
        yres: f64,
        crs: impl Into<String>,
    ) -> SpectralResult<Self> {
        if !xres.is_finite() || !yres.is_finite() || xres <= 0.0 || yres <= 0.0 {
            return Err(SpectralError::InvalidConfiguration(format!(
                "pixel resolutions must be positive and finite, got xres={}, yres={}",
                xres, yres
            )));
        }
        if !origin_lon.is_finite() || !origin_lat.is_finite() {
            return Err(SpectralError::InvalidConfiguration(format!(
                "origin must be finite, got lon={}, lat={}",
                origin_lon, origin_lat
            )));
        }
        Ok(Self {
            origin_lon,
            origin_lat,
            xres,
            yres,
            crs: crs.into(),
        })
    }

    /// Create a georeference annotated with the "EPSG:4326" CRS label
    pub fn wgs84(origin_lon: f64, origin_lat: f64, xres: f64, yres: f64) -> SpectralResult<Self> {
        Self::new(origin_lon, origin_lat, xres, yres, "EPSG:4326")
    }

    /// Origin (top-left corner of pixel (0, 0))
    pub fn origin(&self) -> GeoCoordinate {
        GeoCoordinate {
            lon: self.origin_lon,
            lat: self.origin_lat,
        }
    }

    /// Longitude resolution in degrees per pixel
    pub fn xres(&self) -> f64 {
        self.xres
    }

    /// Latitude resolution in degrees per pixel
    pub fn yres(&self) -> f64 {
        self.yres
    }

    /// Free-text CRS annotation, e.g. "EPSG:4326"
    pub fn crs(&self) -> &str {
        &self.crs
    }

    /// Top-left corner coordinate of a pixel.
    ///
    /// The transform is a pure affine formula, valid for any integer index
    /// including indices outside the raster extent.
    pub fn pixel_corner(&self, row: i64, col: i64) -> GeoCoordinate {
        GeoCoordinate {
            lon: self.origin_lon + col as f64 * self.xres,
            lat: self.origin_lat - row as f64 * self.yres,
        }
    }

    /// Center coordinate of a pixel
    pub fn pixel_center(&self, row: i64, col: i64) -> GeoCoordinate {
        GeoCoordinate {
            lon: self.origin_lon + (col as f64 + 0.5) * self.xres,
            lat: self.origin_lat - (row as f64 + 0.5) * self.yres,
        }
    }

    /// Pixel-to-geographic transform, centered or top-left
    pub fn pixel_to_geo(&self, row: i64, col: i64, centered: bool) -> GeoCoordinate {
        if centered {
            self.pixel_center(row, col)
        } else {
            self.pixel_corner(row, col)
        }
    }
}
