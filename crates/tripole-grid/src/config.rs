//! Configuration for cell-area estimation.

use serde::{Deserialize, Serialize};

/// Parameters of the regular lat/lon grid that cell areas are computed for.
///
/// The defaults describe the 1/12° grid the downstream plotting code works
/// with; other resolutions only need different values here, not different
/// code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellAreaConfig {
    /// Cell width in longitude, degrees.
    pub resolution_lon_deg: f64,

    /// Cell height in latitude, degrees.
    pub resolution_lat_deg: f64,

    /// Earth radius in kilometers.
    pub earth_radius_km: f64,
}

impl Default for CellAreaConfig {
    fn default() -> Self {
        Self {
            resolution_lon_deg: 1.0 / 12.0,
            resolution_lat_deg: 1.0 / 12.0,
            earth_radius_km: 6378.137,
        }
    }
}

impl CellAreaConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CELL_RESOLUTION_LON_DEG") {
            if let Ok(res) = val.parse() {
                config.resolution_lon_deg = res;
            }
        }

        if let Ok(val) = std::env::var("CELL_RESOLUTION_LAT_DEG") {
            if let Ok(res) = val.parse() {
                config.resolution_lat_deg = res;
            }
        }

        if let Ok(val) = std::env::var("EARTH_RADIUS_KM") {
            if let Ok(radius) = val.parse() {
                config.earth_radius_km = radius;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.resolution_lon_deg > 0.0) {
            return Err("resolution_lon_deg must be > 0".to_string());
        }

        if !(self.resolution_lat_deg > 0.0) {
            return Err("resolution_lat_deg must be > 0".to_string());
        }

        if !(self.earth_radius_km > 0.0) {
            return Err("earth_radius_km must be > 0".to_string());
        }

        Ok(())
    }
}
