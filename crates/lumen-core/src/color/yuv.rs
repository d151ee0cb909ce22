use ndarray::Array2;

use crate::consts::{CHROMA_OFFSET, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{LumenError, Result};
use crate::frame::{Frame, Plane};

// Analog YUV chroma scaling (BT.601 primaries).
const U_FROM_B_MINUS_Y: f32 = 0.492;
const V_FROM_R_MINUS_Y: f32 = 0.877;

const R_FROM_V: f32 = 1.140;
const G_FROM_U: f32 = -0.395;
const G_FROM_V: f32 = -0.581;
const B_FROM_U: f32 = 2.032;

/// Luma and offset chroma planes of a color frame.
#[derive(Clone, Debug)]
pub struct YuvPlanes {
    pub y: Plane,
    pub u: Plane,
    pub v: Plane,
}

/// Convert an RGB frame into Y, U, V planes.
pub fn rgb_to_yuv(frame: &Frame) -> YuvPlanes {
    let (h, w) = frame.dim();
    let (r, g, b) = (frame.channel(0), frame.channel(1), frame.channel(2));

    let mut y = Array2::<u8>::zeros((h, w));
    let mut u = Array2::<u8>::zeros((h, w));
    let mut v = Array2::<u8>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            let (rf, gf, bf) = (
                r[[row, col]] as f32,
                g[[row, col]] as f32,
                b[[row, col]] as f32,
            );
            let luma = LUMINANCE_R * rf + LUMINANCE_G * gf + LUMINANCE_B * bf;
            y[[row, col]] = saturate_u8(luma);
            u[[row, col]] = saturate_u8((bf - luma) * U_FROM_B_MINUS_Y + CHROMA_OFFSET);
            v[[row, col]] = saturate_u8((rf - luma) * V_FROM_R_MINUS_Y + CHROMA_OFFSET);
        }
    }

    YuvPlanes { y, u, v }
}

/// Convert Y, U, V planes back into an RGB frame.
pub fn yuv_to_rgb(yuv: &YuvPlanes) -> Result<Frame> {
    let (h, w) = yuv.y.dim();
    for chroma in [&yuv.u, &yuv.v] {
        if chroma.dim() != (h, w) {
            return Err(LumenError::DimensionMismatch {
                left: (h, w),
                right: chroma.dim(),
            });
        }
    }
    let mut r = Array2::<u8>::zeros((h, w));
    let mut g = Array2::<u8>::zeros((h, w));
    let mut b = Array2::<u8>::zeros((h, w));

    for ((row, col), &luma) in yuv.y.indexed_iter() {
        let luma = luma as f32;
        let u = yuv.u[[row, col]] as f32 - CHROMA_OFFSET;
        let v = yuv.v[[row, col]] as f32 - CHROMA_OFFSET;
        r[[row, col]] = saturate_u8(luma + R_FROM_V * v);
        g[[row, col]] = saturate_u8(luma + G_FROM_U * u + G_FROM_V * v);
        b[[row, col]] = saturate_u8(luma + B_FROM_U * u);
    }

    Frame::from_channels(&r, &g, &b)
}

/// Grayscale (BT.601 luma) version of a color frame.
pub fn luminance(frame: &Frame) -> Plane {
    let (h, w) = frame.dim();
    let (r, g, b) = (frame.channel(0), frame.channel(1), frame.channel(2));
    Array2::from_shape_fn((h, w), |(row, col)| {
        saturate_u8(
            LUMINANCE_R * r[[row, col]] as f32
                + LUMINANCE_G * g[[row, col]] as f32
                + LUMINANCE_B * b[[row, col]] as f32,
        )
    })
}

/// Round to nearest and clamp into the 8-bit range.
pub(crate) fn saturate_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
