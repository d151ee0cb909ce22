#[cfg(feature = "camera")]
pub mod camera;
pub mod session;

use crate::error::Result;
use crate::frame::Frame;

pub use session::CaptureSession;

/// A device that yields color frames on demand.
///
/// Implementors only move raw frames; resizing and enhancement happen
/// downstream. `release` must be safe to call on a source that never opened
/// or was already released.
pub trait FrameSource {
    /// Short label used in log messages.
    fn label(&self) -> String;

    /// Acquire the underlying device.
    fn open(&mut self) -> Result<()>;

    /// Block until the next frame is available.
    fn read_frame(&mut self) -> Result<Frame>;

    /// Give the device back.
    fn release(&mut self);
}
