use anyhow::Result;
use lumen_core::capture::camera::CameraSource;
use lumen_core::capture::FrameSource;
use lumen_core::pipeline::config::PreviewConfig;
use lumen_core::pipeline::{self, DisplayInput, DisplaySink, PreviewStep, StopReason};
use tracing::info;

/// Display sink that logs metrics instead of drawing them.
struct LogSink {
    exit_key: char,
    limit: Option<u64>,
    shown: u64,
}

impl DisplaySink for LogSink {
    fn show(&mut self, step: &PreviewStep) -> lumen_core::error::Result<DisplayInput> {
        self.shown += 1;
        info!(frame = self.shown, "{}", step.metrics.overlay_text());

        // Reaching the frame budget counts as the user pressing the exit key.
        let done = self.limit.is_some_and(|limit| self.shown >= limit);
        Ok(DisplayInput {
            keys: done.then_some(self.exit_key).into_iter().collect(),
            close_requested: false,
        })
    }

    fn close(&mut self) {
        info!(frames = self.shown, "Headless preview closed");
    }
}

pub fn run(config: &PreviewConfig, frames: Option<u64>) -> Result<StopReason> {
    run_with(CameraSource::new(config.device_index), config, frames)
}

fn run_with<S: FrameSource>(
    source: S,
    config: &PreviewConfig,
    frames: Option<u64>,
) -> Result<StopReason> {
    // An empty budget never touches the device.
    if frames == Some(0) {
        info!("Frame budget is zero, nothing to capture");
        return Ok(StopReason::UserQuit);
    }
    let mut sink = LogSink {
        exit_key: config.exit_key,
        limit: frames,
        shown: 0,
    };
    Ok(pipeline::run(source, &mut sink, config)?)
}
