#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ndarray::Array3;

use lumen_core::capture::FrameSource;
use lumen_core::error::{LumenError, Result};
use lumen_core::frame::Frame;
use lumen_core::pipeline::{DisplayInput, DisplaySink, PreviewStep};

/// Uniform gray frame.
pub fn gray_frame(w: usize, h: usize, value: u8) -> Frame {
    Frame::filled(w, h, [value, value, value]).expect("non-empty frame")
}

/// Deterministic high-frequency gray texture.
pub fn textured_frame(w: usize, h: usize) -> Frame {
    let data = Array3::from_shape_fn((h, w, 3), |(r, c, _)| {
        (((c * 7919 + r * 104_729) ^ (c * r * 31)) % 256) as u8
    });
    Frame::new(data).expect("non-empty frame")
}

/// Add +amplitude / -amplitude in a checkerboard, saturating at the range ends.
pub fn add_checker_noise(frame: &Frame, amplitude: u8) -> Frame {
    let data = Array3::from_shape_fn(frame.data().dim(), |(r, c, ch)| {
        let v = frame.data()[[r, c, ch]];
        if (r + c) % 2 == 0 {
            v.saturating_add(amplitude)
        } else {
            v.saturating_sub(amplitude)
        }
    });
    Frame::new(data).expect("non-empty frame")
}

/// Box blur of the given radius with clamped edges.
pub fn box_blur(frame: &Frame, radius: usize) -> Frame {
    let (h, w, _) = frame.data().dim();
    let r = radius as isize;
    let data = Array3::from_shape_fn((h, w, 3), |(row, col, ch)| {
        let mut sum = 0u32;
        let mut n = 0u32;
        for dr in -r..=r {
            for dc in -r..=r {
                let rr = (row as isize + dr).clamp(0, h as isize - 1) as usize;
                let cc = (col as isize + dc).clamp(0, w as isize - 1) as usize;
                sum += frame.data()[[rr, cc, ch]] as u32;
                n += 1;
            }
        }
        ((sum as f32 / n as f32) + 0.5) as u8
    });
    Frame::new(data).expect("non-empty frame")
}

/// What a mock device saw, shared with the test after the session is gone.
#[derive(Debug, Default)]
pub struct DeviceLog {
    pub opens: usize,
    pub reads: usize,
    pub releases: usize,
}

/// Scripted capture device.
pub struct MockSource {
    pub log: Rc<RefCell<DeviceLog>>,
    pub fail_open: bool,
    pub frames: VecDeque<Frame>,
}

impl MockSource {
    pub fn new(frames: Vec<Frame>) -> (Self, Rc<RefCell<DeviceLog>>) {
        let log = Rc::new(RefCell::new(DeviceLog::default()));
        let source = Self {
            log: Rc::clone(&log),
            fail_open: false,
            frames: frames.into(),
        };
        (source, log)
    }

    pub fn unavailable() -> (Self, Rc<RefCell<DeviceLog>>) {
        let (mut source, log) = Self::new(Vec::new());
        source.fail_open = true;
        (source, log)
    }
}

impl FrameSource for MockSource {
    fn label(&self) -> String {
        "mock".to_string()
    }

    fn open(&mut self) -> Result<()> {
        self.log.borrow_mut().opens += 1;
        if self.fail_open {
            return Err(LumenError::DeviceUnavailable {
                index: 0,
                reason: "no such device".to_string(),
            });
        }
        Ok(())
    }

    fn read_frame(&mut self) -> Result<Frame> {
        self.log.borrow_mut().reads += 1;
        self.frames
            .pop_front()
            .ok_or_else(|| LumenError::FrameRead("end of stream".to_string()))
    }

    fn release(&mut self) {
        self.log.borrow_mut().releases += 1;
    }
}

/// Display that replays scripted key presses, one per shown step.
#[derive(Default)]
pub struct MockSink {
    pub inputs: VecDeque<DisplayInput>,
    pub shown: Vec<PreviewStep>,
    pub closes: usize,
}

impl MockSink {
    pub fn with_inputs(inputs: Vec<DisplayInput>) -> Self {
        Self {
            inputs: inputs.into(),
            ..Default::default()
        }
    }
}

impl DisplaySink for MockSink {
    fn show(&mut self, step: &PreviewStep) -> Result<DisplayInput> {
        self.shown.push(step.clone());
        Ok(self.inputs.pop_front().unwrap_or_default())
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

pub fn key(c: char) -> DisplayInput {
    DisplayInput {
        keys: vec![c],
        close_requested: false,
    }
}
