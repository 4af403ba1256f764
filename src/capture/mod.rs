//! Camera input and the device boundary.
//!
//! This module provides the abstraction the capture loop drives: a
//! [`Camera`] trait treating the device as an opaque capability, the
//! device-level configuration, a mock implementation for tests and
//! hardware-free runs, and (behind the `camera` feature) a nokhwa-backed
//! webcam implementation.

mod camera;
mod config;
#[cfg(feature = "camera")]
mod nokhwa;

pub use camera::{Camera, CameraError, MockCamera};
pub use config::{CaptureConfig, ConfigError, FocusMode};
#[cfg(feature = "camera")]
pub use self::nokhwa::NokhwaCamera;
