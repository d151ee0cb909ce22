use tracing::{debug, info};

use crate::error::{LumenError, Result};
use crate::frame::Frame;

use super::FrameSource;

/// Exclusive ownership of an opened capture device.
///
/// The device is released exactly once: by [`CaptureSession::release`], or
/// on drop if that was never called. A source whose `open` fails is released
/// before the error is returned.
pub struct CaptureSession<S: FrameSource> {
    source: S,
    open: bool,
    frames_read: u64,
}

impl<S: FrameSource> CaptureSession<S> {
    pub fn acquire(mut source: S) -> Result<Self> {
        if let Err(e) = source.open() {
            source.release();
            return Err(e);
        }
        info!(device = %source.label(), "Capture device opened");
        Ok(Self {
            source,
            open: true,
            frames_read: 0,
        })
    }

    pub fn read(&mut self) -> Result<Frame> {
        if !self.open {
            return Err(LumenError::FrameRead(format!(
                "{} has been released",
                self.source.label()
            )));
        }
        let frame = self.source.read_frame()?;
        self.frames_read += 1;
        Ok(frame)
    }

    pub fn release(&mut self) {
        if !self.open {
            return;
        }
        self.source.release();
        self.open = false;
        info!(
            device = %self.source.label(),
            frames = self.frames_read,
            "Capture device released"
        );
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }
}

impl<S: FrameSource> Drop for CaptureSession<S> {
    fn drop(&mut self) {
        if self.open {
            debug!("Capture session dropped while open");
        }
        self.release();
    }
}
