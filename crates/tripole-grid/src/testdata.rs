//! Synthetic grid builders for tests and the demo binary.
//!
//! Real tripole meshes are large and live behind the loader collaborator;
//! these builders produce small grids with the same awkward properties:
//! 0-360 longitudes with the wraparound discontinuity mid-array, rows that
//! bend away from constant latitude near the top, and continent-like masked
//! bands in the field.

use crate::types::{Grid2d, MaskedGrid};

/// Build a tripole-style coordinate mesh of `ni` columns and `nj` rows.
///
/// Longitudes start at `first_lon` on column 0 and advance eastward by
/// 360/ni per column, stored in the 0-360 convention, so the wraparound
/// discontinuity lands mid-array the way model output does. Latitude rows
/// run from 79°S to 87°N, with a mild column-dependent bend over the top
/// tenth of the rows standing in for the displaced poles.
pub fn create_tripole_mesh(ni: usize, nj: usize, first_lon: f64) -> (Grid2d, Grid2d) {
    let dlon = 360.0 / ni as f64;
    let lon = Grid2d::from_fn(ni, nj, |col, _row| {
        (first_lon + col as f64 * dlon).rem_euclid(360.0)
    });

    let lat_south = -79.0;
    let lat_north = 87.0;
    let lat = Grid2d::from_fn(ni, nj, |col, row| {
        let frac = if nj > 1 {
            row as f64 / (nj - 1) as f64
        } else {
            0.0
        };
        let base = lat_south + frac * (lat_north - lat_south);

        // displaced-pole bend over the top rows
        let ramp = ((frac - 0.9) / 0.1).max(0.0);
        let angle = col as f64 / ni as f64 * 2.0 * std::f64::consts::PI;
        base + 2.0 * ramp * ramp * angle.cos()
    });

    (lon, lat)
}

/// Create a fully valid test field where value at (col, row) = col * 1000 + row.
/// This pattern makes it easy to verify cell placement after reshaping.
pub fn create_field(ni: usize, nj: usize) -> MaskedGrid {
    let mut data = Vec::with_capacity(ni * nj);
    for row in 0..nj {
        for col in 0..ni {
            data.push((col * 1000 + row) as f64);
        }
    }
    MaskedGrid::from_values(data, ni, nj)
}

/// Create the same test field with a vertical band of columns masked out,
/// standing in for a continent.
///
/// The band covers columns `ni/4` up to (but excluding) `ni/3`.
pub fn create_masked_field(ni: usize, nj: usize) -> MaskedGrid {
    let mut field = create_field(ni, nj);
    let band_start = ni / 4;
    let band_end = ni / 3;
    for row in 0..nj {
        for col in band_start..band_end {
            field.mask[row * ni + col] = false;
        }
    }
    field
}
