use crate::consts::{PIXEL_MAX, PSNR_IDENTICAL_DB};
use crate::error::{LumenError, Result};
use crate::frame::Frame;

/// Peak signal-to-noise ratio between two frames, in dB.
///
/// The squared error is averaged over every channel of every pixel.
/// Identical frames return [`PSNR_IDENTICAL_DB`] instead of infinity.
pub fn psnr(original: &Frame, enhanced: &Frame) -> Result<f64> {
    if original.dim() != enhanced.dim() {
        return Err(LumenError::DimensionMismatch {
            left: original.dim(),
            right: enhanced.dim(),
        });
    }
    Ok(psnr_from_mse(mean_squared_error(original, enhanced)))
}

pub fn mean_squared_error(original: &Frame, enhanced: &Frame) -> f64 {
    let (a, b) = (original.data(), enhanced.data());
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum();
    sum / a.len() as f64
}

pub fn psnr_from_mse(mse: f64) -> f64 {
    if mse == 0.0 {
        return PSNR_IDENTICAL_DB;
    }
    20.0 * (PIXEL_MAX / mse.sqrt()).log10()
}
