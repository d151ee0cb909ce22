use thiserror::Error;

#[derive(Error, Debug)]
pub enum LumenError {
    #[error("Cannot open capture device {index}: {reason}")]
    DeviceUnavailable { index: u32, reason: String },

    #[error("Frame not received: {0}")]
    FrameRead(String),

    #[error("Invalid image dimensions: {width}x{height}x{channels}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("Image size mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Window size {window} exceeds image size {width}x{height}")]
    WindowTooLarge {
        window: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, LumenError>;
