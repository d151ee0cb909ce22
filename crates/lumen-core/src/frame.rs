use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{LumenError, Result};

/// A single-channel 8-bit image, shape = (height, width).
pub type Plane = Array2<u8>;

/// A color video frame with three 8-bit channels in R, G, B order.
///
/// A `Frame` is never empty: every constructor rejects zero-sized data or
/// a channel count other than three, so downstream transforms do not need
/// their own validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width, 3)
    data: Array3<u8>,
}

impl Frame {
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        if h == 0 || w == 0 || c != COLOR_CHANNEL_COUNT {
            return Err(LumenError::InvalidDimensions {
                width: w,
                height: h,
                channels: c,
            });
        }
        Ok(Self { data })
    }

    /// Frame filled with a single color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self> {
        Self::new(Array3::from_shape_fn((height, width, COLOR_CHANNEL_COUNT), |(_, _, c)| {
            rgb[c]
        }))
    }

    /// Build a frame from tightly packed RGB bytes.
    pub fn from_raw_rgb(width: usize, height: usize, raw: Vec<u8>) -> Result<Self> {
        let channels = if width * height == 0 {
            0
        } else {
            raw.len() / (width * height)
        };
        let data = Array3::from_shape_vec((height, width, COLOR_CHANNEL_COUNT), raw).map_err(
            |_| LumenError::InvalidDimensions {
                width,
                height,
                channels,
            },
        )?;
        Self::new(data)
    }

    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        Self::from_raw_rgb(img.width() as usize, img.height() as usize, img.as_raw().clone())
    }

    /// Assemble a frame from three equally sized channel planes.
    pub fn from_channels(red: &Plane, green: &Plane, blue: &Plane) -> Result<Self> {
        for other in [green, blue] {
            if other.dim() != red.dim() {
                return Err(LumenError::DimensionMismatch {
                    left: red.dim(),
                    right: other.dim(),
                });
            }
        }
        let data = ndarray::stack(Axis(2), &[red.view(), green.view(), blue.view()]).map_err(
            |_| LumenError::InvalidDimensions {
                width: red.ncols(),
                height: red.nrows(),
                channels: COLOR_CHANNEL_COUNT,
            },
        )?;
        Self::new(data)
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let (row, col) = (y as usize, x as usize);
            Rgb([
                self.data[[row, col, 0]],
                self.data[[row, col, 1]],
                self.data[[row, col, 2]],
            ])
        })
    }

    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// (height, width), matching the shape of a single plane.
    pub fn dim(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// View of one channel (0 = R, 1 = G, 2 = B).
    pub fn channel(&self, index: usize) -> ArrayView2<'_, u8> {
        self.data.index_axis(Axis(2), index)
    }

    /// Apply a per-sample mapping to every channel of every pixel.
    pub fn map_samples(&self, f: impl Fn(u8) -> u8) -> Frame {
        Frame {
            data: self.data.mapv(f),
        }
    }

    /// Bilinear resize to `width` x `height`.
    pub fn resized(&self, width: u32, height: u32) -> Result<Frame> {
        if self.width() == width as usize && self.height() == height as usize {
            return Ok(self.clone());
        }
        if width == 0 || height == 0 {
            return Err(LumenError::InvalidDimensions {
                width: width as usize,
                height: height as usize,
                channels: COLOR_CHANNEL_COUNT,
            });
        }
        let resized = imageops::resize(&self.to_rgb_image(), width, height, FilterType::Triangle);
        Frame::from_rgb_image(&resized)
    }
}

/// Concatenate two frames horizontally: `left` | `right`.
pub fn side_by_side(left: &Frame, right: &Frame) -> Result<Frame> {
    if left.height() != right.height() {
        return Err(LumenError::DimensionMismatch {
            left: left.dim(),
            right: right.dim(),
        });
    }
    let data = ndarray::concatenate(Axis(1), &[left.data.view(), right.data.view()]).map_err(
        |_| LumenError::DimensionMismatch {
            left: left.dim(),
            right: right.dim(),
        },
    )?;
    Frame::new(data)
}
