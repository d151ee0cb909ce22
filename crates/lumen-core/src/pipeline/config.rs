use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DEVICE_INDEX, DEFAULT_GAMMA, EXIT_KEY, PREVIEW_HEIGHT, PREVIEW_WIDTH};
use crate::filters::clahe::ClaheParams;

/// Parameters of the two-stage enhancement (CLAHE on luma, then gamma).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnhanceParams {
    /// Power-law exponent; output = input^(1/gamma).
    pub gamma: f64,
    #[serde(default)]
    pub clahe: ClaheParams,
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            clahe: ClaheParams::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub device_index: u32,
    /// Every captured frame is resized to frame_width x frame_height.
    pub frame_width: u32,
    pub frame_height: u32,
    pub exit_key: char,
    #[serde(default)]
    pub enhance: EnhanceParams,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            device_index: DEFAULT_DEVICE_INDEX,
            frame_width: PREVIEW_WIDTH,
            frame_height: PREVIEW_HEIGHT,
            exit_key: EXIT_KEY,
            enhance: EnhanceParams::default(),
        }
    }
}
