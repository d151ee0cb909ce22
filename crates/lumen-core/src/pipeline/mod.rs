pub mod config;
pub mod enhance;
pub mod preview;
mod types;

pub use enhance::enhance;
pub use preview::{process_frame, run, Advance, DisplaySink, Preview};
pub use types::{DisplayInput, LoopControl, PreviewStep, StopReason};
