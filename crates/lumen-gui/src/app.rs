use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use lumen_core::capture::camera::CameraSource;
use lumen_core::error::LumenError;
use lumen_core::pipeline::config::PreviewConfig;
use lumen_core::pipeline::{Advance, DisplayInput, LoopControl, Preview, PreviewStep, StopReason};
use tracing::error;

use crate::convert::frame_to_color_image;
use crate::panels;

pub const WINDOW_TITLE: &str = "Original (Left) vs Enhanced (Right)";

/// How the window loop ended, read back after `run_native` returns.
type Outcome = Rc<RefCell<Option<std::result::Result<StopReason, LumenError>>>>;

pub struct PreviewApp {
    /// None once the loop has stopped and the camera is released.
    pub preview: Option<Preview<CameraSource>>,
    pub texture: Option<egui::TextureHandle>,
    pub overlay: String,
    outcome: Outcome,
}

impl PreviewApp {
    fn new(preview: Preview<CameraSource>, outcome: Outcome) -> Self {
        Self {
            preview: Some(preview),
            texture: None,
            overlay: String::new(),
            outcome,
        }
    }

    /// Pull one frame through the pipeline and upload it.
    fn step(&mut self, ctx: &egui::Context) {
        let Some(preview) = self.preview.as_mut() else {
            return;
        };
        match preview.advance() {
            Ok(Advance::Frame(step)) => self.show_step(ctx, &step),
            Ok(Advance::Stop(reason)) => self.finish(ctx, Ok(reason)),
            Err(e) => {
                error!("Enhancement failed: {e}");
                self.finish(ctx, Err(e));
            }
        }
    }

    fn show_step(&mut self, ctx: &egui::Context, step: &PreviewStep) {
        let image = frame_to_color_image(&step.combined);
        if let Some(texture) = self.texture.as_mut() {
            texture.set(image, egui::TextureOptions::LINEAR);
        } else {
            self.texture = Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
        }
        self.overlay = step.metrics.overlay_text();
    }

    /// Release the camera, record why, and close the window.
    fn finish(&mut self, ctx: &egui::Context, outcome: std::result::Result<StopReason, LumenError>) {
        if let Some(mut preview) = self.preview.take() {
            preview.stop();
        }
        let mut slot = self.outcome.borrow_mut();
        if slot.is_none() {
            *slot = Some(outcome);
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

/// Keys typed and close requests since the previous repaint.
fn collect_input(ctx: &egui::Context) -> DisplayInput {
    ctx.input(|i| DisplayInput {
        keys: i
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Text(text) => Some(text.chars()),
                _ => None,
            })
            .flatten()
            .collect(),
        close_requested: i.viewport().close_requested(),
    })
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = collect_input(ctx);
        let control = self.preview.as_ref().map(|preview| preview.control(&input));
        if let Some(LoopControl::Stop(reason)) = control {
            self.finish(ctx, Ok(reason));
        }

        self.step(ctx);
        panels::viewport::show(ctx, self);

        if self.preview.is_some() {
            ctx.request_repaint();
        }
    }
}

/// Open the camera, then run the preview window until it stops.
///
/// The window is never created when the camera cannot be opened.
pub fn run(config: PreviewConfig) -> Result<StopReason> {
    let size = [
        (config.frame_width * 2) as f32,
        config.frame_height as f32,
    ];
    let preview = match Preview::start(CameraSource::new(config.device_index), config) {
        Ok(preview) => preview,
        Err(e) => {
            error!("{e}");
            return Ok(StopReason::DeviceUnavailable(e.to_string()));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let outcome: Outcome = Rc::default();
    let app_outcome = Rc::clone(&outcome);
    eframe::run_native(
        "lumen",
        options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(preview, app_outcome)))),
    )
    .map_err(|e| anyhow!("Preview window failed: {e}"))?;

    let result = outcome.borrow_mut().take();
    match result {
        Some(result) => Ok(result?),
        None => Ok(StopReason::WindowClosed),
    }
}
