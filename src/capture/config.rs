//! Camera device configuration.
//!
//! Settings the backend needs to open a stream. These are fixed
//! code-level defaults, not an exposed configuration surface: the tool
//! deliberately has no flags, environment variables, or config files.

use serde::{Deserialize, Serialize};

/// Autofocus mode programmed on the device after it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusMode {
    /// Leave focus where the driver put it; no automatic refocusing.
    Manual,
    /// Continuously refocus without a manual trigger.
    #[default]
    Continuous,
}

/// Configuration for the camera device.
///
/// The capture loop hands this to the backend once, at open time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Camera device index or identifier.
    pub device_id: u32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Target frames per second for the stream.
    pub fps: u32,
    /// Autofocus mode to program once the device is open.
    pub focus: FocusMode,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            width: 1280,
            height: 720,
            fps: 30,
            focus: FocusMode::Continuous,
        }
    }
}

impl CaptureConfig {
    /// Creates a new configuration with the specified dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.fps == 0 || self.fps > 120 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid frame dimensions")]
    InvalidDimensions,
    #[error("invalid frame rate (must be 1-120 fps)")]
    InvalidFrameRate,
}
