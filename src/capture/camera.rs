//! Camera abstraction for still capture.
//!
//! This module provides a trait-based abstraction over camera hardware,
//! allowing for both real camera input and mock implementations for testing.

use super::{CaptureConfig, FocusMode};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("failed to open camera: {0}")]
    OpenFailed(String),
    #[error("failed to configure camera: {0}")]
    ConfigFailed(String),
    #[error("failed to capture still image: {0}")]
    CaptureFailed(String),
    #[error("failed to write image file: {0}")]
    WriteFailed(String),
    #[error("camera not initialized")]
    NotInitialized,
}

/// Trait for camera implementations.
///
/// The capture loop treats the camera as an opaque capability with four
/// operations: open the device, program the focus mode, write one still
/// image to a file, and release the device. Backends own the pixel data
/// and the file format; nothing image-shaped crosses this boundary.
pub trait Camera {
    /// Opens the device and starts its stream with the given configuration.
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError>;

    /// Programs the autofocus mode on the open device.
    fn set_focus(&mut self, mode: FocusMode) -> Result<(), CameraError>;

    /// Captures a single still image and writes it to `path`.
    ///
    /// Blocks until the image is on disk. An existing file at `path` is
    /// silently overwritten.
    fn capture_to_file(&mut self, path: &Path) -> Result<(), CameraError>;

    /// Checks if the camera is currently open.
    fn is_open(&self) -> bool;

    /// Closes the camera and releases resources.
    fn close(&mut self);
}

/// Mock camera for testing that writes synthetic still images.
///
/// Each capture produces a small file framed by JPEG start/end markers
/// around a deterministic byte pattern derived from the capture sequence.
/// The files exercise the on-disk behavior; they are not decodable
/// photographs.
#[derive(Debug, Default)]
pub struct MockCamera {
    config: Option<CaptureConfig>,
    focus: Option<FocusMode>,
    sequence: u64,
    fail_open: bool,
    fail_capture_at: Option<u64>,
}

impl MockCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose `open` always fails, for failure-path tests.
    pub fn with_open_failure() -> Self {
        Self {
            fail_open: true,
            ..Self::default()
        }
    }

    /// Creates a mock whose capture with the given sequence number fails.
    ///
    /// Sequence numbers start at 1 for the first capture.
    pub fn with_capture_failure_at(sequence: u64) -> Self {
        Self {
            fail_capture_at: Some(sequence),
            ..Self::default()
        }
    }

    /// Returns the focus mode programmed by the last `set_focus` call.
    pub fn focus(&self) -> Option<FocusMode> {
        self.focus
    }
}

impl Camera for MockCamera {
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError> {
        if self.fail_open {
            return Err(CameraError::OpenFailed(
                "mock camera configured to fail".to_string(),
            ));
        }
        config
            .validate()
            .map_err(|e| CameraError::ConfigFailed(e.to_string()))?;
        self.config = Some(config.clone());
        self.sequence = 0;
        tracing::info!("MockCamera opened with config: {:?}", config);
        Ok(())
    }

    fn set_focus(&mut self, mode: FocusMode) -> Result<(), CameraError> {
        if self.config.is_none() {
            return Err(CameraError::NotInitialized);
        }
        self.focus = Some(mode);
        Ok(())
    }

    fn capture_to_file(&mut self, path: &Path) -> Result<(), CameraError> {
        if self.config.is_none() {
            return Err(CameraError::NotInitialized);
        }

        let next = self.sequence + 1;
        if self.fail_capture_at == Some(next) {
            return Err(CameraError::CaptureFailed(format!(
                "mock capture {} configured to fail",
                next
            )));
        }

        std::fs::write(path, synthetic_still(next))
            .map_err(|e| CameraError::WriteFailed(e.to_string()))?;
        self.sequence = next;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.config.is_some()
    }

    fn close(&mut self) {
        self.config = None;
        tracing::info!("MockCamera closed");
    }
}

/// Builds the byte payload for one mock capture.
fn synthetic_still(sequence: u64) -> Vec<u8> {
    const SOI: [u8; 2] = [0xFF, 0xD8];
    const EOI: [u8; 2] = [0xFF, 0xD9];

    let mut bytes = Vec::with_capacity(68);
    bytes.extend_from_slice(&SOI);
    // Deterministic pattern mixed with sequence - only for exercising
    // file handling, nothing a real sensor would produce
    bytes.extend((0..64u64).map(|i| ((i ^ sequence) % 256) as u8));
    bytes.extend_from_slice(&EOI);
    bytes
}
