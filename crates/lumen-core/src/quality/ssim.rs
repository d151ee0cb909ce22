use ndarray::Array2;

use crate::color::yuv::luminance;
use crate::consts::{PIXEL_MAX, SSIM_K1, SSIM_K2, SSIM_WINDOW};
use crate::error::{LumenError, Result};
use crate::frame::{Frame, Plane};

/// Mean structural similarity of the grayscale versions of two frames.
pub fn ssim(original: &Frame, enhanced: &Frame) -> Result<f64> {
    if original.dim() != enhanced.dim() {
        return Err(LumenError::DimensionMismatch {
            left: original.dim(),
            right: enhanced.dim(),
        });
    }
    ssim_plane(&luminance(original), &luminance(enhanced))
}

/// Mean SSIM of two 8-bit planes.
///
/// Local statistics come from a `SSIM_WINDOW` x `SSIM_WINDOW` uniform
/// window with sample (N - 1) covariance. Only windows lying entirely inside
/// the image contribute to the mean, so no border handling is needed.
pub fn ssim_plane(a: &Plane, b: &Plane) -> Result<f64> {
    if a.dim() != b.dim() {
        return Err(LumenError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    let (h, w) = a.dim();
    if h < SSIM_WINDOW || w < SSIM_WINDOW {
        return Err(LumenError::WindowTooLarge {
            window: SSIM_WINDOW,
            width: w,
            height: h,
        });
    }

    let x = |r: usize, c: usize| a[[r, c]] as f64;
    let y = |r: usize, c: usize| b[[r, c]] as f64;

    let sum_x = integral(h, w, x);
    let sum_y = integral(h, w, y);
    let sum_xx = integral(h, w, |r, c| x(r, c) * x(r, c));
    let sum_yy = integral(h, w, |r, c| y(r, c) * y(r, c));
    let sum_xy = integral(h, w, |r, c| x(r, c) * y(r, c));

    let n = (SSIM_WINDOW * SSIM_WINDOW) as f64;
    let cov_norm = n / (n - 1.0);
    let c1 = (SSIM_K1 * PIXEL_MAX).powi(2);
    let c2 = (SSIM_K2 * PIXEL_MAX).powi(2);

    let rows = h - SSIM_WINDOW + 1;
    let cols = w - SSIM_WINDOW + 1;
    let mut total = 0.0f64;

    for row in 0..rows {
        for col in 0..cols {
            let ux = window_sum(&sum_x, row, col) / n;
            let uy = window_sum(&sum_y, row, col) / n;
            let uxx = window_sum(&sum_xx, row, col) / n;
            let uyy = window_sum(&sum_yy, row, col) / n;
            let uxy = window_sum(&sum_xy, row, col) / n;

            let vx = cov_norm * (uxx - ux * ux);
            let vy = cov_norm * (uyy - uy * uy);
            let vxy = cov_norm * (uxy - ux * uy);

            let numerator = (2.0 * ux * uy + c1) * (2.0 * vxy + c2);
            let denominator = (ux * ux + uy * uy + c1) * (vx + vy + c2);
            total += numerator / denominator;
        }
    }

    Ok(total / (rows * cols) as f64)
}

/// Summed-area table with a leading row and column of zeros.
fn integral(h: usize, w: usize, value: impl Fn(usize, usize) -> f64) -> Array2<f64> {
    let mut table = Array2::<f64>::zeros((h + 1, w + 1));
    for row in 0..h {
        let mut row_sum = 0.0;
        for col in 0..w {
            row_sum += value(row, col);
            table[[row + 1, col + 1]] = table[[row, col + 1]] + row_sum;
        }
    }
    table
}

/// Sum over the window whose top-left corner is (row, col).
fn window_sum(table: &Array2<f64>, row: usize, col: usize) -> f64 {
    let (r2, c2) = (row + SSIM_WINDOW, col + SSIM_WINDOW);
    table[[r2, c2]] - table[[row, c2]] - table[[r2, col]] + table[[row, col]]
}
