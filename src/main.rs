//! Stillcam CLI
//!
//! Captures a fixed series of still images from a camera into a local
//! directory, one numbered JPEG per capture.

use stillcam::{CaptureSession, OutputDir, SessionConfig};
use tracing::info;

/// Directory the numbered images are written into.
const OUTPUT_DIR: &str = "images";

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Stillcam v{}", stillcam::VERSION);

    #[cfg(feature = "camera")]
    let camera = stillcam::NokhwaCamera::new();

    #[cfg(not(feature = "camera"))]
    let camera = {
        info!("Built without the `camera` feature; capturing synthetic stills");
        stillcam::MockCamera::new()
    };

    let session = CaptureSession::new(camera, SessionConfig::default(), OutputDir::new(OUTPUT_DIR));

    match session.run(|image| println!("Captured {}", image.path.display())) {
        Ok(summary) => {
            info!("Done. Captured {} images into {}", summary.len(), OUTPUT_DIR);
        }
        Err(e) => {
            eprintln!("Capture run failed: {}", e);
            std::process::exit(1);
        }
    }
}
