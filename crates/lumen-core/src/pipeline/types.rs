use crate::frame::Frame;
use crate::quality::Metrics;

/// Everything produced for one captured frame.
#[derive(Clone, Debug)]
pub struct PreviewStep {
    /// Captured frame after resizing.
    pub original: Frame,
    pub enhanced: Frame,
    /// `original` | `enhanced`, side by side.
    pub combined: Frame,
    pub metrics: Metrics,
}

/// User input collected while a step was on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayInput {
    /// Every character typed since the previous step, in order.
    pub keys: Vec<char>,
    pub close_requested: bool,
}

/// Why the preview loop ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    UserQuit,
    WindowClosed,
    ReadFailed(String),
    DeviceUnavailable(String),
}

impl StopReason {
    /// Only a device that never opened is reported as a failed run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DeviceUnavailable(_))
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserQuit => write!(f, "quit requested"),
            Self::WindowClosed => write!(f, "window closed"),
            Self::ReadFailed(msg) => write!(f, "frame not received ({msg})"),
            Self::DeviceUnavailable(msg) => write!(f, "{msg}"),
        }
    }
}

/// Decision taken after each displayed frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop(StopReason),
}

impl LoopControl {
    pub fn from_input(input: &DisplayInput, exit_key: char) -> Self {
        if input.close_requested {
            Self::Stop(StopReason::WindowClosed)
        } else if input.keys.contains(&exit_key) {
            Self::Stop(StopReason::UserQuit)
        } else {
            Self::Continue
        }
    }
}
