//! nokhwa-backed webcam capture.
//!
//! Real-hardware implementation of the [`Camera`] trait, available with
//! the `camera` cargo feature. The default build stays hardware-free.

use super::{Camera, CameraError, CaptureConfig, FocusMode};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, ControlValueSetter, FrameFormat, KnownCameraControl,
    RequestedFormat, RequestedFormatType, Resolution,
};
use std::path::Path;

/// Camera backend driving a real webcam through nokhwa.
///
/// Opening requests the closest MJPEG format for the configured
/// resolution and rate; captures decode one frame to RGB and save it
/// through the `image` crate, with the format inferred from the `.jpg`
/// extension.
pub struct NokhwaCamera {
    inner: Option<nokhwa::Camera>,
}

impl NokhwaCamera {
    /// Creates an unopened backend.
    pub fn new() -> Self {
        Self { inner: None }
    }
}

impl Default for NokhwaCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NokhwaCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NokhwaCamera")
            .field("is_open", &self.inner.is_some())
            .finish_non_exhaustive()
    }
}

impl Camera for NokhwaCamera {
    fn open(&mut self, config: &CaptureConfig) -> Result<(), CameraError> {
        config
            .validate()
            .map_err(|e| CameraError::ConfigFailed(e.to_string()))?;

        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
            CameraFormat::new(
                Resolution::new(config.width, config.height),
                FrameFormat::MJPEG,
                config.fps,
            ),
        ));
        let mut camera = nokhwa::Camera::new(CameraIndex::Index(config.device_id), requested)
            .map_err(|e| CameraError::OpenFailed(e.to_string()))?;
        camera
            .open_stream()
            .map_err(|e| CameraError::OpenFailed(e.to_string()))?;

        tracing::info!(
            width = camera.resolution().width(),
            height = camera.resolution().height(),
            fps = camera.frame_rate(),
            "Camera stream opened"
        );
        self.inner = Some(camera);
        Ok(())
    }

    fn set_focus(&mut self, mode: FocusMode) -> Result<(), CameraError> {
        let camera = self.inner.as_mut().ok_or(CameraError::NotInitialized)?;

        // Autofocus is exposed as a boolean control; continuous maps to
        // enabled, manual to disabled.
        let enabled = mode == FocusMode::Continuous;
        camera
            .set_camera_control(
                KnownCameraControl::Focus,
                ControlValueSetter::Boolean(enabled),
            )
            .map_err(|e| CameraError::ConfigFailed(e.to_string()))
    }

    fn capture_to_file(&mut self, path: &Path) -> Result<(), CameraError> {
        let camera = self.inner.as_mut().ok_or(CameraError::NotInitialized)?;

        let buffer = camera
            .frame()
            .map_err(|e| CameraError::CaptureFailed(e.to_string()))?;
        let decoded: image::RgbImage = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::CaptureFailed(e.to_string()))?;
        decoded
            .save(path)
            .map_err(|e| CameraError::WriteFailed(e.to_string()))
    }

    fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    fn close(&mut self) {
        if let Some(mut camera) = self.inner.take() {
            let _ = camera.stop_stream();
            tracing::info!("Camera stream closed");
        }
    }
}
