//! Comprehensive tests for the tripole unwrap.

use tripole_grid::{
    testdata, unwrap_tripole, Grid2d, GridError, MaskedGrid, SeamCorrectionTable,
};

// ============================================================================
// Shape and closing-seam postconditions
// ============================================================================

#[test]
fn test_output_shapes() {
    let (lon, lat) = testdata::create_tripole_mesh(8, 6, 320.0);
    let field = testdata::create_field(8, 6);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    assert_eq!(out.lon.shape(), (9, 6));
    assert_eq!(out.lat.shape(), (9, 6));
    assert_eq!(out.field.shape(), (9, 6));
}

#[test]
fn test_closing_column_repeats_first_plus_period() {
    let (lon, lat) = testdata::create_tripole_mesh(8, 6, 320.0);
    let field = testdata::create_field(8, 6);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    for row in 0..6 {
        let first = out.lon.get(0, row).unwrap();
        let last = out.lon.get(8, row).unwrap();
        // one period apart, plus the deliberate seam-breaking nudge
        assert!(
            ((last - first) - (360.0 + 1e-8)).abs() < 1e-12,
            "row {}: closing gap {} not 360 + epsilon",
            row,
            last - first
        );
    }
}

#[test]
fn test_closing_column_duplicates_lat_and_field() {
    let (lon, lat) = testdata::create_tripole_mesh(8, 6, 320.0);
    let field = testdata::create_field(8, 6);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    for row in 0..6 {
        assert_eq!(out.lat.get(8, row), out.lat.get(0, row));
        assert_eq!(out.field.data[row * 9 + 8], out.field.data[row * 9]);
        assert_eq!(out.field.mask[row * 9 + 8], out.field.mask[row * 9]);
    }
}

#[test]
fn test_first_and_last_columns_are_not_exactly_cyclic() {
    let (lon, lat) = testdata::create_tripole_mesh(8, 6, 320.0);
    let field = testdata::create_field(8, 6);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    for row in 0..6 {
        let first = out.lon.get(0, row).unwrap();
        let last = out.lon.get(8, row).unwrap();
        assert!(
            last - first > 360.0,
            "row {}: first/last columns are degenerate cyclic pair",
            row
        );
    }
}

// ============================================================================
// Seam removal on a grid with a mid-array wrap
// ============================================================================

#[test]
fn test_wrap_discontinuity_becomes_monotone() {
    // 239 + k*60 stored mod 360: [239, 299, 359, 59, 119, 179], wrap after
    // column 2
    let (lon, lat) = testdata::create_tripole_mesh(6, 4, 239.0);
    let field = testdata::create_field(6, 4);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    for row in 0..4 {
        for col in 1..7 {
            let prev = out.lon.get(col - 1, row).unwrap();
            let curr = out.lon.get(col, row).unwrap();
            assert!(
                curr > prev,
                "row {} col {}: longitude not increasing ({} -> {})",
                row,
                col,
                prev,
                curr
            );
        }
    }

    // no jump beyond the 60° cell width anywhere, closing step included
    assert!(out.max_lon_step(true) < 60.0 + 1e-6);
}

#[test]
fn test_unwrapped_window_values() {
    let (lon, lat) = testdata::create_tripole_mesh(6, 4, 239.0);
    let field = testdata::create_field(6, 4);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    // anchor 239 shifts [239, 299, 359] down; window starts at doubled
    // column 2, lands on [-361, -301, -241, -181, -121, -61, -1]
    let expected = [-361.0, -301.0, -241.0, -181.0, -121.0, -61.0, -1.0];
    for row in 0..4 {
        for (col, &want) in expected.iter().enumerate() {
            let got = out.lon.get(col, row).unwrap();
            assert!(
                (got - want).abs() < 1e-6,
                "row {} col {}: {} != {}",
                row,
                col,
                got,
                want
            );
        }
    }
}

#[test]
fn test_field_values_follow_their_columns() {
    let (lon, lat) = testdata::create_tripole_mesh(6, 4, 239.0);
    let field = testdata::create_field(6, 4);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    // window starts at source column ni/2 - 1 = 2
    for row in 0..4 {
        for col in 0..6 {
            let src_col = (2 + col) % 6;
            let want = (src_col * 1000 + row) as f64;
            assert_eq!(out.field.data[row * 7 + col], want);
        }
    }
}

// ============================================================================
// Mask passthrough
// ============================================================================

#[test]
fn test_masked_cells_stay_masked() {
    // band is column 3 of 12; the window re-centering moves it to column 10
    let (lon, lat) = testdata::create_tripole_mesh(12, 5, 320.0);
    let field = testdata::create_masked_field(12, 5);

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();

    for row in 0..5 {
        assert!(!out.field.is_valid(10, row));
        assert!(out.field.is_valid(9, row));
        assert!(out.field.is_valid(11, row));
        // the masked cell's stored value still travels with it
        assert_eq!(out.field.data[row * 13 + 10], (3 * 1000 + row) as f64);
    }
    assert_eq!(out.field.valid_count(), 12 * 5);
}

#[test]
fn test_no_values_invented_for_masked_cells() {
    let (lon, lat) = testdata::create_tripole_mesh(12, 5, 320.0);
    let field = testdata::create_masked_field(12, 5);
    let masked_before = field.data.len() - field.valid_count();

    let out = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();
    let masked_after = out.field.data.len() - out.field.valid_count();

    // one masked column of 12 stays one masked column of 13
    assert_eq!(masked_before, 5);
    assert_eq!(masked_after, 5);
}

// ============================================================================
// Resolution-keyed seam correction (320-column regression)
// ============================================================================

#[test]
fn test_320_column_correction_bands() {
    let (ni, nj) = (320, 384);
    let (lon, lat) = testdata::create_tripole_mesh(ni, nj, 320.0);
    let field = testdata::create_field(ni, nj);

    let corrected =
        unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();
    let generic = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::empty()).unwrap();

    for row in 0..nj {
        for col in 0..=ni {
            let c = corrected.lon.get(col, row).unwrap();
            let g = generic.lon.get(col, row).unwrap();
            // leading column shifts up over rows 367..nj-3; on the closing
            // column the two band corrections cancel there and only the
            // untrimmed top rows shift down
            let expected = if col == 0 && (367..nj - 3).contains(&row) {
                360.0
            } else if col == ni && row >= nj - 3 {
                -360.0
            } else {
                0.0
            };
            assert!(
                ((c - g) - expected).abs() < 1e-9,
                "row {} col {}: corrected-generic = {}, expected {}",
                row,
                col,
                c - g,
                expected
            );
        }
    }
}

#[test]
fn test_other_resolutions_take_generic_path() {
    let (lon, lat) = testdata::create_tripole_mesh(64, 48, 320.0);
    let field = testdata::create_field(64, 48);

    let corrected =
        unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap();
    let generic = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::empty()).unwrap();

    assert_eq!(corrected.lon.data, generic.lon.data);
}

// ============================================================================
// Precondition violations
// ============================================================================

#[test]
fn test_lat_shape_mismatch() {
    let lon = Grid2d::filled(0.0, 8, 6);
    let lat = Grid2d::filled(0.0, 8, 5);
    let field = MaskedGrid::from_values(vec![0.0; 48], 8, 6);

    let err = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { .. }));
    assert!(err.to_string().contains("latitude"));
}

#[test]
fn test_field_shape_mismatch() {
    let lon = Grid2d::filled(0.0, 8, 6);
    let lat = Grid2d::filled(0.0, 8, 6);
    let field = MaskedGrid::from_values(vec![0.0; 40], 8, 5);

    let err = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap_err();
    assert!(matches!(err, GridError::ShapeMismatch { .. }));
    assert!(err.to_string().contains("field"));
}

#[test]
fn test_odd_columns_rejected() {
    let (lon, lat) = testdata::create_tripole_mesh(7, 4, 320.0);
    let field = testdata::create_field(7, 4);

    let err = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard()).unwrap_err();
    assert!(matches!(err, GridError::UnsupportedResolution(_)));
}
