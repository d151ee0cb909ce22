use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use tracing::{debug, warn};

use crate::error::{LumenError, Result};
use crate::frame::Frame;

use super::FrameSource;

/// Native webcam capture through nokhwa.
pub struct CameraSource {
    index: u32,
    camera: Option<Camera>,
}

impl CameraSource {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            camera: None,
        }
    }

    fn unavailable(&self, e: impl std::fmt::Display) -> LumenError {
        LumenError::DeviceUnavailable {
            index: self.index,
            reason: e.to_string(),
        }
    }
}

impl FrameSource for CameraSource {
    fn label(&self) -> String {
        format!("camera {}", self.index)
    }

    fn open(&mut self) -> Result<()> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(self.index), requested)
            .map_err(|e| self.unavailable(e))?;
        camera.open_stream().map_err(|e| self.unavailable(e))?;
        debug!(format = ?camera.camera_format(), "Camera stream started");
        self.camera = Some(camera);
        Ok(())
    }

    fn read_frame(&mut self) -> Result<Frame> {
        let camera = self
            .camera
            .as_mut()
            .ok_or_else(|| LumenError::FrameRead("camera stream is not open".to_string()))?;

        // MJPEG and YUYV payloads are both decoded to packed RGB here.
        let buffer = camera
            .frame()
            .map_err(|e| LumenError::FrameRead(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| LumenError::FrameRead(e.to_string()))?;

        let (width, height) = (decoded.width() as usize, decoded.height() as usize);
        Frame::from_raw_rgb(width, height, decoded.into_raw())
    }

    fn release(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            if let Err(e) = camera.stop_stream() {
                warn!(index = self.index, "Failed to stop camera stream: {e}");
            }
        }
    }
}
