//! Unwrapping of displaced-pole ocean grids for cyclic plotting.
//!
//! Ocean models built on tripole meshes store longitude with a wraparound
//! discontinuity somewhere mid-array: part of each row sits above the
//! anchor range and part below. Plotting libraries instead need every row to
//! cover one continuous 360° window, with the last column repeating the
//! first one period later so the map closes without a visible seam.
//!
//! The transformation here re-centers the wrap onto the array edge by
//! doubling the longitude array, taking an ni-wide window starting at
//! `ni/2 - 1`, shifting the result down one period and appending the closing
//! column. Latitude and the data field ride the same double/window/append
//! path without the longitude-specific shifts.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::{Grid2d, MaskedGrid};

/// One full longitude period in degrees.
const PERIOD_DEG: f64 = 360.0;

/// Offset subtracted from column 0 so the closing column is not exactly one
/// period away. Plotting code treats exactly-cyclic coordinate pairs as
/// degenerate.
const SEAM_EPSILON_DEG: f64 = 1e-8;

/// A per-resolution longitude fixup for rows where the generic re-centering
/// window leaves a residual discontinuity.
///
/// The affected band gets +360° on the leading column (rows `row_start` up to
/// `nj - row_end_trim`) and -360° on the closing column (rows `row_start` to
/// the end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeamCorrection {
    /// Source column count this entry applies to.
    pub ni: usize,
    /// First affected row.
    pub row_start: usize,
    /// Rows excluded from the end of the band on the leading column.
    pub row_end_trim: usize,
}

/// Resolution-keyed collection of seam corrections.
///
/// NOTE: only the 320-column mesh family is known to need a fixup; why the
/// generic window leaves a residual seam at that size alone has not been
/// pinned down (suspected off-by-one in that mesh's pole fold). New
/// resolutions should get table entries, not new branches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeamCorrectionTable {
    entries: Vec<SeamCorrection>,
}

impl SeamCorrectionTable {
    /// A table with no corrections; every resolution takes the generic path.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The corrections known to be required for production meshes.
    pub fn standard() -> Self {
        Self {
            entries: vec![SeamCorrection {
                ni: 320,
                row_start: 367,
                row_end_trim: 3,
            }],
        }
    }

    /// Add an entry, replacing any existing entry for the same column count.
    pub fn with_entry(mut self, entry: SeamCorrection) -> Self {
        self.entries.retain(|e| e.ni != entry.ni);
        self.entries.push(entry);
        self
    }

    /// Find the correction for a given source column count.
    pub fn lookup(&self, ni: usize) -> Option<&SeamCorrection> {
        self.entries.iter().find(|e| e.ni == ni)
    }
}

/// A plot-ready grid: singly periodic, with a duplicated closing column.
///
/// All three arrays are shaped (nj, ni+1). The closing column repeats column
/// 0, shifted by +360° for longitude only.
#[derive(Debug, Clone)]
pub struct UnwrappedGrid {
    /// Longitude in degrees, continuous per row within one 360° window.
    pub lon: Grid2d,
    /// Latitude in degrees.
    pub lat: Grid2d,
    /// The data field, masks carried through unchanged.
    pub field: MaskedGrid,
}

impl UnwrappedGrid {
    /// Largest absolute longitude step between adjacent columns over all
    /// rows. `include_closing` controls whether the step onto the closing
    /// column is considered.
    pub fn max_lon_step(&self, include_closing: bool) -> f64 {
        let width = self.lon.width;
        let last = if include_closing { width } else { width - 1 };
        let mut max_step = 0.0f64;
        for row in 0..self.lon.height {
            let base = row * width;
            for col in 1..last {
                let step = (self.lon.data[base + col] - self.lon.data[base + col - 1]).abs();
                max_step = max_step.max(step);
            }
        }
        max_step
    }
}

/// Re-center a row-major array onto the window of `width` columns starting at
/// `x_left` in the column-doubled frame, appending a closing column that
/// repeats the window's first column. Output is (width + 1) x height.
fn recenter_with_closing<T: Copy>(src: &[T], width: usize, height: usize, x_left: usize) -> Vec<T> {
    let out_width = width + 1;
    let mut out = Vec::with_capacity(out_width * height);
    for row in 0..height {
        let base = row * width;
        for col in 0..width {
            out.push(src[base + (x_left + col) % width]);
        }
        out.push(src[base + x_left]);
    }
    out
}

/// Unwrap a tripole coordinate mesh and its co-located field for cyclic
/// plotting.
///
/// The window anchor is the minimum longitude of the first column; any value
/// at or above it is shifted down one period before re-centering, which
/// removes the mid-array discontinuity. Corrections from `corrections` are
/// applied for source column counts that are known to need an extra ±360°
/// band.
///
/// # Arguments
/// * `lon` - Longitude mesh in degrees, shape (nj, ni), any longitude convention
/// * `lat` - Latitude mesh in degrees, same shape
/// * `field` - Data field co-indexed with the mesh, same shape
/// * `corrections` - Resolution-keyed seam corrections (usually
///   [`SeamCorrectionTable::standard`])
///
/// # Returns
/// An [`UnwrappedGrid`] of shape (nj, ni+1): longitude continuous per row
/// within one 360°-wide window, the closing column one period above column
/// 0, latitude and field duplicated without shifts.
///
/// # Errors
/// * [`GridError::ShapeMismatch`] if the three inputs disagree on shape
/// * [`GridError::UnsupportedResolution`] if the grid is empty or `ni` is odd
///   (the re-centering window needs an even column count)
pub fn unwrap_tripole(
    lon: &Grid2d,
    lat: &Grid2d,
    field: &MaskedGrid,
    corrections: &SeamCorrectionTable,
) -> Result<UnwrappedGrid> {
    let (ni, nj) = lon.shape();

    if lat.shape() != (ni, nj) {
        return Err(GridError::shape_mismatch("latitude", (ni, nj), lat.shape()));
    }
    if field.shape() != (ni, nj) {
        return Err(GridError::shape_mismatch("field", (ni, nj), field.shape()));
    }
    if ni == 0 || nj == 0 {
        return Err(GridError::unsupported_resolution("empty grid"));
    }
    if ni % 2 != 0 {
        return Err(GridError::unsupported_resolution(format!(
            "{} columns; the re-centering window needs an even count",
            ni
        )));
    }

    let x_left = ni / 2 - 1;
    let out_width = ni + 1;

    // Window anchor: minimum longitude of the first column.
    let lon0 = (0..nj)
        .map(|row| lon.data[row * ni])
        .fold(f64::INFINITY, f64::min);

    let correction = corrections.lookup(ni);
    if let Some(c) = correction {
        tracing::debug!(
            ni,
            row_start = c.row_start,
            row_end_trim = c.row_end_trim,
            "applying seam correction"
        );
    }

    let mut out_lon = Grid2d::filled(0.0, out_width, nj);
    for row in 0..nj {
        let base = row * out_width;
        for col in 0..ni {
            let doubled_col = x_left + col;
            let mut value = lon.data[row * ni + doubled_col % ni];
            if value >= lon0 {
                value -= PERIOD_DEG;
            }
            if doubled_col >= ni {
                value += PERIOD_DEG;
            }
            out_lon.data[base + col] = value;
        }
    }

    // Leading-edge correction, applied before the uniform shift and before
    // the closing column is taken.
    if let Some(c) = correction {
        let row_end = nj.saturating_sub(c.row_end_trim);
        for row in c.row_start..row_end {
            out_lon.data[row * out_width] += PERIOD_DEG;
        }
    }

    for row in 0..nj {
        let base = row * out_width;
        for col in 0..ni {
            out_lon.data[base + col] -= PERIOD_DEG;
        }
        out_lon.data[base + ni] = out_lon.data[base] + PERIOD_DEG;
    }

    // Closing-edge correction mirrors the leading band on the duplicated
    // column, with no trim at the top.
    if let Some(c) = correction {
        for row in c.row_start..nj {
            out_lon.data[row * out_width + ni] -= PERIOD_DEG;
        }
    }

    for row in 0..nj {
        out_lon.data[row * out_width] -= SEAM_EPSILON_DEG;
    }

    let out_lat = Grid2d::new(
        recenter_with_closing(&lat.data, ni, nj, x_left),
        out_width,
        nj,
    );

    let out_field = MaskedGrid::new(
        recenter_with_closing(&field.data, ni, nj, x_left),
        recenter_with_closing(&field.mask, ni, nj, x_left),
        out_width,
        nj,
    );

    Ok(UnwrappedGrid {
        lon: out_lon,
        lat: out_lat,
        field: out_field,
    })
}
