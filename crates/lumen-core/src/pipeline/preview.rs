use tracing::{debug, error, info, warn};

use crate::capture::{CaptureSession, FrameSource};
use crate::error::Result;
use crate::frame::{side_by_side, Frame};
use crate::quality::measure;

use super::config::PreviewConfig;
use super::enhance::enhance;
use super::types::{DisplayInput, LoopControl, PreviewStep, StopReason};

/// Something that can put a [`PreviewStep`] in front of the user.
pub trait DisplaySink {
    /// Render one step and report input gathered while it was shown.
    fn show(&mut self, step: &PreviewStep) -> Result<DisplayInput>;

    /// Tear down any windows. Called once, on every exit path.
    fn close(&mut self);
}

/// Outcome of pulling one frame through the pipeline.
#[derive(Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Advance {
    Frame(PreviewStep),
    Stop(StopReason),
}

/// Resize, enhance, score and compose a single captured frame.
pub fn process_frame(raw: &Frame, config: &PreviewConfig) -> Result<PreviewStep> {
    let original = raw.resized(config.frame_width, config.frame_height)?;
    let enhanced = enhance(&original, &config.enhance)?;
    let metrics = measure(&original, &enhanced)?;
    let combined = side_by_side(&original, &enhanced)?;
    Ok(PreviewStep {
        original,
        enhanced,
        combined,
        metrics,
    })
}

/// A running preview: an open capture session plus its configuration.
pub struct Preview<S: FrameSource> {
    session: CaptureSession<S>,
    config: PreviewConfig,
}

impl<S: FrameSource> Preview<S> {
    /// Open the device. Nothing is read until [`Preview::advance`].
    pub fn start(source: S, config: PreviewConfig) -> Result<Self> {
        let session = CaptureSession::acquire(source)?;
        info!(
            width = config.frame_width,
            height = config.frame_height,
            gamma = config.enhance.gamma,
            clip_limit = config.enhance.clahe.clip_limit,
            "Preview started"
        );
        Ok(Self { session, config })
    }

    /// Read the next frame and run it through the pipeline.
    ///
    /// A failed read is not retried; it ends the loop with
    /// [`StopReason::ReadFailed`]. Errors from the transforms themselves are
    /// returned as-is.
    pub fn advance(&mut self) -> Result<Advance> {
        let raw = match self.session.read() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Frame not received, exiting: {e}");
                return Ok(Advance::Stop(StopReason::ReadFailed(e.to_string())));
            }
        };

        let step = process_frame(&raw, &self.config)?;
        debug!(
            frame = self.session.frames_read(),
            psnr = step.metrics.psnr,
            ssim = step.metrics.ssim,
            "Frame enhanced"
        );
        Ok(Advance::Frame(step))
    }

    pub fn control(&self, input: &DisplayInput) -> LoopControl {
        LoopControl::from_input(input, self.config.exit_key)
    }

    pub fn frames_read(&self) -> u64 {
        self.session.frames_read()
    }

    /// Release the capture device. Also happens on drop.
    pub fn stop(&mut self) {
        self.session.release();
    }
}

/// Drive capture → enhance → score → display until something stops it.
///
/// The capture device and the sink are both released before returning,
/// whatever the reason. A device that cannot be opened yields
/// [`StopReason::DeviceUnavailable`] without any frame being read.
pub fn run<S, D>(source: S, sink: &mut D, config: &PreviewConfig) -> Result<StopReason>
where
    S: FrameSource,
    D: DisplaySink,
{
    let mut preview = match Preview::start(source, config.clone()) {
        Ok(preview) => preview,
        Err(e) => {
            error!("{e}");
            sink.close();
            return Ok(StopReason::DeviceUnavailable(e.to_string()));
        }
    };

    let outcome = drive(&mut preview, sink);
    preview.stop();
    sink.close();

    if let Ok(reason) = &outcome {
        info!(frames = preview.frames_read(), "Preview stopped: {reason}");
    }
    outcome
}

fn drive<S, D>(preview: &mut Preview<S>, sink: &mut D) -> Result<StopReason>
where
    S: FrameSource,
    D: DisplaySink,
{
    loop {
        let step = match preview.advance()? {
            Advance::Frame(step) => step,
            Advance::Stop(reason) => return Ok(reason),
        };
        let input = sink.show(&step)?;
        if let LoopControl::Stop(reason) = preview.control(&input) {
            return Ok(reason);
        }
    }
}
