//! Longitude canonicalization.

use crate::types::MaskedGrid;

/// Map a longitude in degrees into the canonical [-180, 180] convention.
///
/// Values above 180 lose one period; everything else passes through
/// unchanged.
pub fn normalize_lon(lon: f64) -> f64 {
    if lon > 180.0 {
        lon - 360.0
    } else {
        lon
    }
}

/// Normalize every valid cell of a longitude grid into [-180, 180].
///
/// Masked cells stay masked and their stored values are not interpreted.
pub fn normalize_lons(lons: &MaskedGrid) -> MaskedGrid {
    let data = lons
        .data
        .iter()
        .zip(&lons.mask)
        .map(|(&value, &valid)| if valid { normalize_lon(value) } else { value })
        .collect();

    MaskedGrid::new(data, lons.mask.clone(), lons.width, lons.height)
}
