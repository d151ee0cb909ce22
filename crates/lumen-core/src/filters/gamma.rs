use crate::consts::{HISTOGRAM_BINS, PIXEL_MAX};
use crate::frame::Frame;

/// 256-entry intensity remapping table.
pub type Lut = [u8; HISTOGRAM_BINS];

/// Power-law table: `lut[i] = 255 * (i / 255)^(1 / gamma)`, truncated.
///
/// gamma > 1.0 brightens shadows and midtones, gamma < 1.0 darkens them.
/// The endpoints 0 and 255 are fixed for any positive gamma.
pub fn gamma_lut(gamma: f64) -> Lut {
    let inv_gamma = 1.0 / gamma;
    std::array::from_fn(|i| ((i as f64 / PIXEL_MAX).powf(inv_gamma) * PIXEL_MAX) as u8)
}

/// Remap every channel of every pixel through `lut`.
pub fn apply_lut(frame: &Frame, lut: &Lut) -> Frame {
    frame.map_samples(|v| lut[v as usize])
}

