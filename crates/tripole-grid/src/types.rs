//! Core array types for curvilinear grid fields.

use serde::{Deserialize, Serialize};

/// Dense 2-D array of f64 values in row-major order.
///
/// Used for coordinate meshes (degrees) and derived quantities such as cell
/// areas. Values are f64 throughout: the seam-breaking nudge applied during
/// unwrapping is 1e-8°, below f32 resolution at magnitudes near 360.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2d {
    /// The values (row-major, row 0 first).
    pub data: Vec<f64>,
    /// Number of columns (grid i direction).
    pub width: usize,
    /// Number of rows (grid j direction).
    pub height: usize,
}

impl Grid2d {
    /// Create a grid from existing row-major data.
    pub fn new(data: Vec<f64>, width: usize, height: usize) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(value: f64, width: usize, height: usize) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Create a grid by evaluating `f(col, row)` at every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(col, row));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Get the value at a specific grid coordinate.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Set the value at a specific grid coordinate. Out-of-range indices are ignored.
    pub fn set(&mut self, col: usize, row: usize, value: f64) {
        if col < self.width && row < self.height {
            self.data[row * self.width + col] = value;
        }
    }

    /// Borrow one row of values.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Grid dimensions as (width, height).
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A 2-D field with a parallel validity mask.
///
/// `mask[i]` is true where `data[i]` holds a real observation. Missing cells
/// keep whatever value they carry, but that value is never interpreted; every
/// transformation in this crate moves mask and value together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskedGrid {
    /// The values (row-major, row 0 first).
    pub data: Vec<f64>,
    /// Per-cell validity flags, same layout as `data`.
    pub mask: Vec<bool>,
    /// Number of columns (grid i direction).
    pub width: usize,
    /// Number of rows (grid j direction).
    pub height: usize,
}

impl MaskedGrid {
    /// Create a masked grid from existing data and mask arrays.
    pub fn new(data: Vec<f64>, mask: Vec<bool>, width: usize, height: usize) -> Self {
        Self {
            data,
            mask,
            width,
            height,
        }
    }

    /// Create a fully valid masked grid from plain data.
    pub fn from_values(data: Vec<f64>, width: usize, height: usize) -> Self {
        let mask = vec![true; data.len()];
        Self {
            data,
            mask,
            width,
            height,
        }
    }

    /// Get the value at a grid coordinate, or None if out of range or masked out.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let idx = row * self.width + col;
        if *self.mask.get(idx)? {
            self.data.get(idx).copied()
        } else {
            None
        }
    }

    /// Check whether a cell holds a valid value.
    pub fn is_valid(&self, col: usize, row: usize) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        self.mask.get(row * self.width + col).copied().unwrap_or(false)
    }

    /// Number of valid cells.
    pub fn valid_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Grid dimensions as (width, height).
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Dimensions of a curvilinear model mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshDims {
    /// Number of columns (ni).
    pub ni: usize,
    /// Number of rows (nj).
    pub nj: usize,
}

/// Mesh dimensions for the ocean models this crate is routinely pointed at.
pub mod meshes {
    use super::MeshDims;

    /// Nominal 1° displaced-pole mesh, 320 x 384.
    pub fn gx1() -> MeshDims {
        MeshDims { ni: 320, nj: 384 }
    }

    /// Nominal 0.1° tripole mesh, 3600 x 2400.
    pub fn tx0_1() -> MeshDims {
        MeshDims { ni: 3600, nj: 2400 }
    }
}
