//! Plot-ready reshaping of displaced-pole ocean model grids.
//!
//! Global ocean circulation models run on curvilinear tripole meshes: the
//! grid poles sit over land instead of the geographic North Pole, and the
//! stored longitude array wraps around somewhere mid-array. Handing such a
//! mesh straight to a plotting library produces a self-overlapping map with
//! a visible seam. This crate reshapes coordinate and field arrays so the
//! plotting layer receives continuous, singly periodic longitude coverage:
//!
//! - **Tripole unwrap** ([`unwrap_tripole`]): re-centers the wraparound onto
//!   the array edge and appends a closing column so the grid can be drawn
//!   cyclically.
//! - **Longitude normalization** ([`normalize_lons`]): canonical
//!   [-180, 180] remap for arbitrary-range longitude arrays.
//! - **Cell areas** ([`cell_area`]): spherical-band areas for a regular
//!   lat/lon grid.
//!
//! The three operations are independent, pure functions over in-memory
//! arrays; there is no I/O here. Dataset loading, level selection and
//! rendering belong to the surrounding tooling.
//!
//! # Example
//!
//! ```
//! use tripole_grid::{testdata, unwrap_tripole, SeamCorrectionTable};
//!
//! let (lon, lat) = testdata::create_tripole_mesh(6, 4, 239.0);
//! let field = testdata::create_field(6, 4);
//!
//! let unwrapped = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard())
//!     .expect("synthetic grid is well formed");
//!
//! // one extra column closes the cycle
//! assert_eq!(unwrapped.lon.shape(), (7, 4));
//! // and each row is continuous: no step larger than the cell width
//! assert!(unwrapped.max_lon_step(true) < 61.0);
//! ```

pub mod area;
pub mod config;
pub mod error;
pub mod normalize;
pub mod testdata;
pub mod types;
pub mod unwrap;

// Re-export commonly used types at crate root
pub use area::cell_area;
pub use config::CellAreaConfig;
pub use error::{GridError, Result};
pub use normalize::{normalize_lon, normalize_lons};
pub use types::{meshes, Grid2d, MaskedGrid, MeshDims};
pub use unwrap::{unwrap_tripole, SeamCorrection, SeamCorrectionTable, UnwrappedGrid};
