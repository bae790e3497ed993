//! Shutter button state machine.
//!

use std::sync::mpsc::Sender;
use std::{thread, time};

use crate::module::define;
use crate::module::device::base::Switch;
use crate::module::device::beeper::Beeper;
use crate::module::vision::camera::CameraDriver;

/// Shutter states.
#[derive(Debug, Clone, PartialEq)]
pub enum ShutterState {
    Idle,
    Capturing,
}

/// Shutter-button state machine.
///
/// A press is honored only while the camera is open; mode positions 0 and 1
/// close the camera, which is what disables the shutter there.
pub struct CaptureController {
    state: ShutterState,
    original_dir: String,
}

impl CaptureController {
    /// CaptureController's constructor
    ///
    /// * `original_dir` - Directory receiving captured originals.
    pub fn new(original_dir: &str) -> Self {
        Self {
            state: ShutterState::Idle,
            original_dir: original_dir.to_string(),
        }
    }

    /// Current state. Idle between ticks; the capture runs inside `tick`.
    pub fn state(&self) -> &ShutterState {
        &self.state
    }

    /// Run one shutter poll.
    ///
    /// On a press with the camera open: pre-capture cue, capture to a
    /// timestamped file, post-capture cue, hand the path to the
    /// post-processing queue, then busy-wait for release so one physical
    /// press yields one frame.
    pub fn tick(
        &mut self,
        button: &dyn Switch,
        camera: &mut dyn CameraDriver,
        beeper: &Beeper,
        queue: &Sender<String>,
    ) {
        if !button.closed() || !camera.is_open() {
            return;
        }

        self.state = ShutterState::Capturing;
        beeper.chirp(define::beep::SHUTTER_PRE_MS);

        let path = self.capture_path();
        match camera.capture(&path) {
            Ok(()) => {
                log::info!("Snap {}", path);
                beeper.chirp(define::beep::SHUTTER_POST_MS);
                thread::sleep(time::Duration::from_millis(
                    define::beep::SHUTTER_POST_WAIT_MS,
                ));
                beeper.chirp(define::beep::SHUTTER_POST_LONG_MS);

                // Hand-off: the pipeline owns the file from here. The send
                // never blocks, whatever the pipeline backlog.
                let _ = queue.send(path);
            }
            Err(e) => log::error!("Capture failed: {}", e),
        }

        // Debounce: wait for release before accepting the next press
        while button.closed() {
            thread::sleep(time::Duration::from_millis(define::tick::DEBOUNCE_MS));
        }
        self.state = ShutterState::Idle;
    }

    /// Capture target path, filename from the local time at microsecond
    /// resolution. No collision check; the shutter cannot cycle twice
    /// within a microsecond.
    fn capture_path(&self) -> String {
        let filename = chrono::Local::now()
            .format(define::path::CAPTURE_FILENAME_FMT)
            .to_string();
        crate::module::util::path::join(&[&self.original_dir, &filename])
    }
}
