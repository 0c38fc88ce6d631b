//! Fixed geographic-to-grid transform built on top of the `proj` crate.
//!
//! All on-map arithmetic runs in a scaled planar grid derived from one fixed
//! transverse-Mercator projection. Both conversion directions read the same
//! parameter object.

use once_cell::sync::Lazy;
use proj::Proj;

use crate::geometry::Point;

/// WGS84 geographic definition used as the far side of every transform.
const WGS84_DEF: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Projected definition of the survey grid: Gauss-Krüger east zone on the
/// Bessel 1841 ellipsoid with the published seven-parameter MGI shift
/// (MGI / Austria GK M31).
const GRID_DEF: &str = "+proj=tmerc +lat_0=0 +lon_0=16.33333333333333 +k=1 \
                        +x_0=450000 +y_0=-5000000 +ellps=bessel \
                        +towgs84=577.326,90.129,463.919,5.137,1.474,5.297,2.4232 \
                        +units=m +no_defs";

/// Ratio of projected meters to grid units.
const GRID_SCALE: f64 = 10.0;

/// A geographic coordinate in WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(g: GeoPoint) -> Self {
        Self::new(g.longitude, g.latitude)
    }
}

impl From<geo_types::Point<f64>> for GeoPoint {
    fn from(p: geo_types::Point<f64>) -> Self {
        Self::new(p.y(), p.x())
    }
}

/// The projection parameter set shared by both transform directions.
///
/// Constructed once and treated as read-only; [`GridCrs::default`] yields
/// the fixed projection definition and [`GRID`] the process-wide instance.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridCrs {
    definition: String,
    scale: f64,
}

/// Process-wide shared projection configuration.
pub static GRID: Lazy<GridCrs> = Lazy::new(GridCrs::default);

impl Default for GridCrs {
    fn default() -> Self {
        Self {
            definition: GRID_DEF.to_string(),
            scale: GRID_SCALE,
        }
    }
}

impl GridCrs {
    /// Returns the underlying proj definition string.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Returns the projected-meters-per-grid-unit scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Projects a WGS84 coordinate into the planar grid.
    ///
    /// Grid axes are swapped relative to the projection: `x` carries the
    /// northing and `y` the easting, both divided by the grid scale.
    /// Returns `None` for coordinates the projection cannot represent.
    pub fn to_planar(&self, geo: GeoPoint) -> Option<Point> {
        let proj = Proj::new_known_crs(WGS84_DEF, &self.definition, None).ok()?;
        let (easting, northing) = proj.convert((geo.longitude, geo.latitude)).ok()?;
        Some(Point::new(northing / self.scale, easting / self.scale))
    }

    /// Converts a planar grid coordinate back to WGS84.
    pub fn to_geo(&self, p: Point) -> Option<GeoPoint> {
        let proj = Proj::new_known_crs(&self.definition, WGS84_DEF, None).ok()?;
        let (longitude, latitude) = proj.convert((p.y * self.scale, p.x * self.scale)).ok()?;
        Some(GeoPoint::new(latitude, longitude))
    }

    /// Saves this projection definition to a JSON file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }

    /// Loads a projection definition from a JSON file.
    pub fn load(path: &str) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
