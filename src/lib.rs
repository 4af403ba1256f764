//! Stillcam Library
//!
//! Fixed-cadence still image capture from a camera to numbered JPEG files.
//! Opens a camera once, then writes a configured number of stills into an
//! output directory with fixed pauses between captures.
//!
//! # Architecture
//!
//! A run follows an explicit sequence:
//!
//! ```text
//! open → focus → warm-up → [pause → capture image_<n>.jpg → pause] × N → close
//! ```
//!
//! # Design Principles
//!
//! - **Fail-fast**: The first error aborts the run; images already written stay on disk
//! - **Deterministic naming**: Files are `image_1.jpg` through `image_N.jpg`, so a rerun overwrites the previous set
//! - **Hardware optional**: The `camera` feature gates the real backend; [`MockCamera`] works anywhere
//! - **Fixed pacing**: Sleep intervals are constants of the run, not adaptive
//!
//! # Example
//!
//! ```no_run
//! use stillcam::{CaptureSession, MockCamera, OutputDir, Schedule, SessionConfig};
//!
//! let config = SessionConfig {
//!     image_count: 3,
//!     schedule: Schedule::immediate(),
//!     ..SessionConfig::default()
//! };
//!
//! let session = CaptureSession::new(MockCamera::new(), config, OutputDir::new("images"));
//! let summary = session
//!     .run(|image| println!("Captured {}", image.path.display()))
//!     .unwrap();
//!
//! assert_eq!(summary.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod capture;
pub mod output;
pub mod session;

// Re-export commonly used types at crate root
pub use capture::{Camera, CameraError, CaptureConfig, FocusMode, MockCamera};
pub use output::{OutputDir, OutputError};
pub use session::{
    CaptureSession, CapturedImage, Schedule, SessionConfig, SessionError, SessionSummary,
};

#[cfg(feature = "camera")]
pub use capture::NokhwaCamera;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
