/// Capture device opened when none is given on the command line.
pub const DEFAULT_DEVICE_INDEX: u32 = 0;

/// Width every captured frame is resized to before enhancement.
pub const PREVIEW_WIDTH: u32 = 320;

/// Height every captured frame is resized to before enhancement.
pub const PREVIEW_HEIGHT: u32 = 240;

/// Key that ends the preview loop.
pub const EXIT_KEY: char = 'q';

/// Gamma applied after equalization. Values above 1.0 brighten shadows.
pub const DEFAULT_GAMMA: f64 = 1.5;

/// CLAHE contrast limit, relative to a flat histogram.
pub const DEFAULT_CLAHE_CLIP_LIMIT: f64 = 3.0;

/// CLAHE tile grid as (columns, rows).
pub const DEFAULT_CLAHE_TILE_GRID: (usize, usize) = (8, 8);

/// Number of intensity levels in an 8-bit channel.
pub const HISTOGRAM_BINS: usize = 256;

/// Largest 8-bit pixel value.
pub const PIXEL_MAX: f64 = 255.0;

/// PSNR reported when two frames are identical (MSE == 0).
pub const PSNR_IDENTICAL_DB: f64 = 100.0;

/// Side length of the uniform SSIM window.
pub const SSIM_WINDOW: usize = 7;

/// SSIM luminance stabilizer coefficient.
pub const SSIM_K1: f64 = 0.01;

/// SSIM contrast stabilizer coefficient.
pub const SSIM_K2: f64 = 0.03;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Offset added to both chroma channels so they fit in an unsigned byte.
pub const CHROMA_OFFSET: f32 = 128.0;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;
