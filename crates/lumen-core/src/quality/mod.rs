pub mod psnr;
pub mod ssim;

use crate::error::Result;
use crate::frame::Frame;

/// Quality of an enhanced frame relative to its source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// Peak signal-to-noise ratio in dB.
    pub psnr: f64,
    /// Mean structural similarity of the luma planes.
    pub ssim: f64,
}

impl Metrics {
    /// One-line summary drawn over the preview.
    pub fn overlay_text(&self) -> String {
        format!("PSNR: {:.2} dB | SSIM: {:.3}", self.psnr, self.ssim)
    }
}

/// Score `enhanced` against `original`.
pub fn measure(original: &Frame, enhanced: &Frame) -> Result<Metrics> {
    Ok(Metrics {
        psnr: psnr::psnr(original, enhanced)?,
        ssim: ssim::ssim(original, enhanced)?,
    })
}
