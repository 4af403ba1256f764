//! Capture run orchestration.
//!
//! A session owns a camera and an output layout and drives the fixed
//! open, focus, capture loop, close sequence. Captures are paced by a
//! [`Schedule`] and reported through a caller-supplied callback as each
//! image lands on disk.

mod schedule;

pub use schedule::Schedule;

use crate::capture::{Camera, CameraError, CaptureConfig, ConfigError};
use crate::output::{OutputDir, OutputError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::thread;
use thiserror::Error;

/// Errors that abort a capture run.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The configured image count is zero.
    #[error("image count must be at least 1")]
    InvalidImageCount,

    /// The camera configuration is invalid.
    #[error("invalid capture configuration: {0}")]
    Config(#[from] ConfigError),

    /// The camera failed to open, focus, or capture.
    #[error("camera error: {0}")]
    Camera(#[from] CameraError),

    /// The output directory could not be prepared.
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

/// Parameters of one capture run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of still images to capture.
    pub image_count: u32,
    /// Pacing applied around each capture.
    pub schedule: Schedule,
    /// Camera device configuration.
    pub camera: CaptureConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            image_count: 20,
            schedule: Schedule::default(),
            camera: CaptureConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Validates the run parameters.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.image_count == 0 {
            return Err(SessionError::InvalidImageCount);
        }
        self.camera.validate()?;
        Ok(())
    }
}

/// One still image that reached disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// 1-based capture number.
    pub index: u32,
    /// Where the image was written.
    pub path: PathBuf,
}

/// Record of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    images: Vec<CapturedImage>,
}

impl SessionSummary {
    /// Captured images, in capture order.
    #[inline]
    pub fn images(&self) -> &[CapturedImage] {
        &self.images
    }

    /// Number of images captured.
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the run produced no images.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Drives a camera through a fixed-count capture run.
///
/// The session is single-shot: [`run`](Self::run) consumes it and returns
/// a [`SessionSummary`] describing what was written.
pub struct CaptureSession<C: Camera> {
    camera: C,
    config: SessionConfig,
    output: OutputDir,
}

impl<C: Camera> CaptureSession<C> {
    /// Creates a session over `camera`, writing into `output`.
    pub fn new(camera: C, config: SessionConfig, output: OutputDir) -> Self {
        Self {
            camera,
            config,
            output,
        }
    }

    /// Runs the capture sequence to completion.
    ///
    /// Opens the camera, applies the configured focus mode, prepares the
    /// output directory, then captures `image_count` stills with the
    /// schedule's sleeps around each one. `on_capture` is invoked after
    /// every image is written, in capture order.
    ///
    /// The first error aborts the run; images already written stay on disk.
    pub fn run<F>(mut self, mut on_capture: F) -> Result<SessionSummary, SessionError>
    where
        F: FnMut(&CapturedImage),
    {
        self.config.validate()?;

        self.camera.open(&self.config.camera)?;
        self.camera.set_focus(self.config.camera.focus)?;
        self.output.ensure_exists()?;

        let schedule = self.config.schedule;
        tracing::info!(
            image_count = self.config.image_count,
            output = %self.output.root().display(),
            min_duration = ?schedule.total_sleep(self.config.image_count),
            "Starting capture run"
        );

        // Let exposure and focus settle before the first capture
        thread::sleep(schedule.warm_up);

        let mut images = Vec::with_capacity(self.config.image_count as usize);
        for index in 1..=self.config.image_count {
            thread::sleep(schedule.pre_capture);

            let path = self.output.image_path(index);
            self.camera.capture_to_file(&path)?;

            let image = CapturedImage { index, path };
            tracing::debug!(index = image.index, path = %image.path.display(), "Captured still");
            on_capture(&image);
            images.push(image);

            thread::sleep(schedule.post_capture);
        }

        self.camera.close();
        tracing::info!(images = images.len(), "Capture run complete");

        Ok(SessionSummary { images })
    }
}
