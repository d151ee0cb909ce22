use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::color::yuv::saturate_u8;
use crate::consts::{DEFAULT_CLAHE_CLIP_LIMIT, DEFAULT_CLAHE_TILE_GRID, HISTOGRAM_BINS, PIXEL_MAX};
use crate::frame::Plane;

type Histogram = [usize; HISTOGRAM_BINS];
type TileLut = [u8; HISTOGRAM_BINS];

/// Contrast-limited adaptive histogram equalization parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaheParams {
    /// Contrast limit relative to a flat histogram. Values <= 0 disable clipping.
    pub clip_limit: f64,
    /// Tile grid as (columns, rows).
    pub tile_grid: (usize, usize),
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            clip_limit: DEFAULT_CLAHE_CLIP_LIMIT,
            tile_grid: DEFAULT_CLAHE_TILE_GRID,
        }
    }
}

/// Apply CLAHE to a single 8-bit plane.
///
/// The plane is split into `tile_grid` tiles (the bottom/right edge is
/// padded by reflection when the size is not a multiple of the grid). Each
/// tile gets its own clipped-histogram equalization table, and every output
/// pixel bilinearly blends the tables of the four nearest tile centres.
pub fn clahe(plane: &Plane, params: &ClaheParams) -> Plane {
    let (h, w) = plane.dim();
    let tiles_x = params.tile_grid.0.max(1);
    let tiles_y = params.tile_grid.1.max(1);

    let tile_w = w.div_ceil(tiles_x);
    let tile_h = h.div_ceil(tiles_y);
    let tile_area = tile_w * tile_h;
    if tile_area == 0 {
        return plane.clone();
    }

    let clip = clip_count(params.clip_limit, tile_area);

    let mut luts: Vec<TileLut> = Vec::with_capacity(tiles_x * tiles_y);
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let mut hist = [0usize; HISTOGRAM_BINS];
            for row in ty * tile_h..(ty + 1) * tile_h {
                let src_row = reflect_101(row, h);
                for col in tx * tile_w..(tx + 1) * tile_w {
                    hist[plane[[src_row, reflect_101(col, w)]] as usize] += 1;
                }
            }
            if let Some(limit) = clip {
                clip_histogram(&mut hist, limit);
            }
            luts.push(tile_lut(&hist, tile_area));
        }
    }

    let columns: Vec<(usize, usize, f32)> = (0..w)
        .map(|col| neighbour_tiles(col, tile_w, tiles_x))
        .collect();

    let mut out = Array2::<u8>::zeros((h, w));
    for row in 0..h {
        let (ty1, ty2, ya) = neighbour_tiles(row, tile_h, tiles_y);
        let ya1 = 1.0 - ya;
        for (col, &(tx1, tx2, xa)) in columns.iter().enumerate() {
            let v = plane[[row, col]] as usize;
            let xa1 = 1.0 - xa;
            let top = luts[ty1 * tiles_x + tx1][v] as f32 * xa1
                + luts[ty1 * tiles_x + tx2][v] as f32 * xa;
            let bottom = luts[ty2 * tiles_x + tx1][v] as f32 * xa1
                + luts[ty2 * tiles_x + tx2][v] as f32 * xa;
            out[[row, col]] = saturate_u8(top * ya1 + bottom * ya);
        }
    }

    out
}

/// Absolute per-bin clip count for a tile, or None when clipping is disabled.
fn clip_count(clip_limit: f64, tile_area: usize) -> Option<usize> {
    if clip_limit <= 0.0 {
        return None;
    }
    let limit = (clip_limit * tile_area as f64 / HISTOGRAM_BINS as f64) as usize;
    Some(limit.max(1))
}

/// Clip every bin at `limit` and hand the excess back out evenly.
fn clip_histogram(hist: &mut Histogram, limit: usize) {
    let mut clipped = 0usize;
    for bin in hist.iter_mut() {
        if *bin > limit {
            clipped += *bin - limit;
            *bin = limit;
        }
    }

    let batch = clipped / HISTOGRAM_BINS;
    let mut residual = clipped - batch * HISTOGRAM_BINS;
    for bin in hist.iter_mut() {
        *bin += batch;
    }

    if residual > 0 {
        let step = (HISTOGRAM_BINS / residual).max(1);
        let mut i = 0;
        while i < HISTOGRAM_BINS && residual > 0 {
            hist[i] += 1;
            residual -= 1;
            i += step;
        }
    }
}

/// Cumulative distribution of a tile histogram scaled to [0, 255].
fn tile_lut(hist: &Histogram, tile_area: usize) -> TileLut {
    let scale = PIXEL_MAX as f32 / tile_area as f32;
    let mut lut = [0u8; HISTOGRAM_BINS];
    let mut sum = 0usize;
    for (entry, &count) in lut.iter_mut().zip(hist.iter()) {
        sum += count;
        *entry = saturate_u8(sum as f32 * scale);
    }
    lut
}

/// The two tiles whose centres bracket `pos`, and the weight of the second.
fn neighbour_tiles(pos: usize, tile_size: usize, tiles: usize) -> (usize, usize, f32) {
    let f = pos as f32 / tile_size as f32 - 0.5;
    let lower = f.floor();
    let weight = f - lower;
    let first = lower.max(0.0) as usize;
    let second = ((lower + 1.0).max(0.0) as usize).min(tiles - 1);
    (first.min(tiles - 1), second, weight)
}

/// Reflect-101 border indexing (`dcb|abcd|cba`).
fn reflect_101(index: usize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * len - 2;
    let i = index % period;
    if i < len {
        i
    } else {
        period - i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_101_mirrors_without_repeating_edge() {
        let idx: Vec<usize> = (0..8).map(|i| reflect_101(i, 4)).collect();
        assert_eq!(idx, vec![0, 1, 2, 3, 2, 1, 0, 1]);
    }

    #[test]
    fn clip_histogram_preserves_total() {
        let mut hist = [0usize; HISTOGRAM_BINS];
        hist[128] = 1200;
        clip_histogram(&mut hist, 14);
        assert_eq!(hist.iter().sum::<usize>(), 1200);
        assert!(hist.iter().all(|&c| c <= 14 + 5));
    }

    #[test]
    fn edge_tiles_clamp() {
        assert_eq!(neighbour_tiles(0, 40, 8), (0, 0, 0.5));
        let (a, b, _) = neighbour_tiles(319, 40, 8);
        assert_eq!((a, b), (7, 7));
    }
}
