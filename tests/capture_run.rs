//! End-to-end tests for the capture run.
//!
//! These tests drive a full session through the mock camera and verify
//! the on-disk contract:
//! - Exactly `image_count` files named `image_1.jpg` .. `image_N.jpg`
//! - Output directory created on demand, intermediates included
//! - Reruns overwrite the previous set
//! - The first error stops the run and leaves earlier images in place

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use stillcam::{
    CameraError, CaptureSession, MockCamera, OutputDir, Schedule, SessionConfig, SessionError,
};
use tempfile::tempdir;

fn quick_config(image_count: u32) -> SessionConfig {
    SessionConfig {
        image_count,
        schedule: Schedule::immediate(),
        ..SessionConfig::default()
    }
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

/// Test that a run writes exactly the numbered files, reported in order.
#[test]
fn test_run_produces_exactly_n_files() {
    let dir = tempdir().unwrap();
    let output = OutputDir::new(dir.path().join("shots"));
    let session = CaptureSession::new(MockCamera::new(), quick_config(3), output.clone());

    let mut lines = Vec::new();
    let summary = session
        .run(|image| lines.push(format!("Captured {}", image.path.display())))
        .unwrap();

    assert_eq!(summary.len(), 3);

    let expected: BTreeSet<String> = (1..=3).map(|i| format!("image_{}.jpg", i)).collect();
    assert_eq!(file_names(output.root()), expected);

    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        assert!(
            line.ends_with(&format!("image_{}.jpg", i + 1)),
            "line {} out of order: {}",
            i,
            line
        );
    }
}

/// Test that a second run over the same directory replaces the files.
#[test]
fn test_rerun_overwrites_existing_files() {
    let dir = tempdir().unwrap();
    let output = OutputDir::new(dir.path().join("shots"));

    CaptureSession::new(MockCamera::new(), quick_config(2), output.clone())
        .run(|_| {})
        .unwrap();

    // Damage one file, then rerun
    fs::write(output.image_path(1), b"stale").unwrap();

    CaptureSession::new(MockCamera::new(), quick_config(2), output.clone())
        .run(|_| {})
        .unwrap();

    let rewritten = fs::read(output.image_path(1)).unwrap();
    assert_ne!(rewritten, b"stale");
    assert_eq!(&rewritten[..2], &[0xFF, 0xD8], "expected a JPEG marker");
    assert_eq!(file_names(output.root()).len(), 2);
}

/// Test that the output directory is created with intermediates.
#[test]
fn test_run_creates_nested_output_directory() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("out").join("session").join("shots");
    let session = CaptureSession::new(MockCamera::new(), quick_config(1), OutputDir::new(&root));

    session.run(|_| {}).unwrap();

    assert!(root.is_dir());
    assert!(root.join("image_1.jpg").is_file());
}

/// Test that an open failure aborts before the directory is touched.
#[test]
fn test_open_failure_creates_no_files() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("shots");
    let session = CaptureSession::new(
        MockCamera::with_open_failure(),
        quick_config(3),
        OutputDir::new(&root),
    );

    let result = session.run(|_| panic!("no captures should be reported"));

    match result.unwrap_err() {
        SessionError::Camera(CameraError::OpenFailed(_)) => {}
        other => panic!("expected an open failure, got: {}", other),
    }
    assert!(!root.exists(), "output directory should not be created");
}

/// Test that a mid-run capture failure keeps the earlier images.
#[test]
fn test_capture_failure_keeps_earlier_images() {
    let dir = tempdir().unwrap();
    let output = OutputDir::new(dir.path().join("shots"));
    let session = CaptureSession::new(
        MockCamera::with_capture_failure_at(2),
        quick_config(3),
        output.clone(),
    );

    let result = session.run(|_| {});

    assert!(matches!(result, Err(SessionError::Camera(_))));
    assert_eq!(
        file_names(output.root()),
        BTreeSet::from(["image_1.jpg".to_string()])
    );
}

/// Test that the run takes at least the scheduled sleep time.
#[test]
fn test_run_blocks_for_scheduled_time() {
    let dir = tempdir().unwrap();
    let schedule = Schedule {
        warm_up: Duration::from_millis(25),
        pre_capture: Duration::from_millis(10),
        post_capture: Duration::from_millis(5),
    };
    let config = SessionConfig {
        image_count: 2,
        schedule,
        ..SessionConfig::default()
    };
    let session = CaptureSession::new(MockCamera::new(), config, OutputDir::new(dir.path()));

    let start = Instant::now();
    session.run(|_| {}).unwrap();

    let minimum = schedule.total_sleep(2);
    assert!(
        start.elapsed() >= minimum,
        "run finished in {:?}, expected at least {:?}",
        start.elapsed(),
        minimum
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Any valid image count yields exactly the matching file set.
    #[test]
    fn test_any_count_yields_matching_file_set(count in 1u32..=8) {
        let dir = tempdir().unwrap();
        let output = OutputDir::new(dir.path().join("shots"));
        let session = CaptureSession::new(MockCamera::new(), quick_config(count), output.clone());

        let summary = session.run(|_| {}).unwrap();
        prop_assert_eq!(summary.len() as u32, count);

        let expected: BTreeSet<String> =
            (1..=count).map(|i| format!("image_{}.jpg", i)).collect();
        prop_assert_eq!(file_names(output.root()), expected);
    }
}
