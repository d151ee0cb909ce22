use crate::color::yuv::{rgb_to_yuv, yuv_to_rgb};
use crate::error::Result;
use crate::filters::clahe::clahe;
use crate::filters::gamma::{apply_lut, gamma_lut};
use crate::frame::Frame;

use super::config::EnhanceParams;

/// Equalize luma with CLAHE, then brighten with a gamma table.
///
/// Chroma is carried through untouched, so hues are preserved while local
/// contrast is raised. The output has the same size as the input.
pub fn enhance(frame: &Frame, params: &EnhanceParams) -> Result<Frame> {
    let mut yuv = rgb_to_yuv(frame);
    yuv.y = clahe(&yuv.y, &params.clahe);
    let equalized = yuv_to_rgb(&yuv)?;
    Ok(apply_lut(&equalized, &gamma_lut(params.gamma)))
}
