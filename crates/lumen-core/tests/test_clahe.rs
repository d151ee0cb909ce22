use ndarray::Array2;

use lumen_core::filters::clahe::{clahe, ClaheParams};

#[test]
fn test_default_params() {
    let params = ClaheParams::default();
    assert_eq!(params.clip_limit, 3.0);
    assert_eq!(params.tile_grid, (8, 8));
}

#[test]
fn test_uniform_plane_maps_to_single_value() {
    // 320x240 with an 8x8 grid: 40x30 tiles, clip at 14 counts per bin.
    // After redistribution the CDF at 128 is 659 / 1200 -> 140.
    let plane = Array2::<u8>::from_elem((240, 320), 128);
    let out = clahe(&plane, &ClaheParams::default());
    assert_eq!(out.dim(), (240, 320));
    assert!(out.iter().all(|&v| v == 140), "expected every pixel to be 140");
}

#[test]
fn test_no_clip_equalizes_fully() {
    let plane = Array2::<u8>::from_elem((16, 16), 128);
    let params = ClaheParams {
        clip_limit: 0.0,
        ..Default::default()
    };
    let out = clahe(&plane, &params);
    assert!(out.iter().all(|&v| v == 255));
}

#[test]
fn test_low_contrast_ramp_is_stretched() {
    let plane = Array2::from_shape_fn((64, 64), |(_, c)| (100 + c * 20 / 63) as u8);
    let out = clahe(&plane, &ClaheParams::default());

    let in_range = 20;
    let min = *out.iter().min().unwrap();
    let max = *out.iter().max().unwrap();
    assert!(
        (max - min) as usize > in_range,
        "output range {min}..{max} not wider than input"
    );
}

#[test]
fn test_size_not_multiple_of_grid() {
    let plane = Array2::from_shape_fn((10, 13), |(r, c)| ((r * 13 + c * 7) % 256) as u8);
    let out = clahe(&plane, &ClaheParams::default());
    assert_eq!(out.dim(), (10, 13));
}

#[test]
fn test_ordering_preserved_within_flat_tile_grid() {
    // One tile: the mapping is a single monotonic CDF.
    let plane = Array2::from_shape_fn((32, 32), |(r, c)| ((r * 32 + c) / 4) as u8);
    let params = ClaheParams {
        clip_limit: 3.0,
        tile_grid: (1, 1),
    };
    let out = clahe(&plane, &params);
    for r in 0..32 {
        for c in 1..32 {
            assert!(out[[r, c]] >= out[[r, c - 1]]);
        }
    }
}
