//! Rotary mode switch state machine.
//!

use crate::module::define;
use crate::module::device::base::RotarySwitch;
use crate::module::device::beeper::Beeper;
use crate::module::util::conf;
use crate::module::vision::camera::{profile_for, CameraDriver};

/// Rotary-switch state machine.
///
/// Owns the current position (0 = off at startup). A transition announces
/// the new position on the beeper, applies the position's camera profile
/// and opens or closes the camera. The halt detent additionally asks the
/// caller to power the system off.
pub struct ModeController {
    current: u8,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    /// ModeController's constructor
    ///
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Current position.
    pub fn position(&self) -> u8 {
        self.current
    }

    /// Scan the rotary switch and run one transition if the position moved.
    ///
    /// Holding a detent does not re-trigger, and no contact closed (switch
    /// between detents) keeps the current position.
    ///
    /// Returns `true` when the new position requests a system halt.
    pub fn tick(
        &mut self,
        rotary: &RotarySwitch,
        camera: &mut dyn CameraDriver,
        beeper: &Beeper,
        conf: &conf::Camera,
    ) -> bool {
        match rotary.position() {
            Some(new) if new != self.current => self.transition(new, camera, beeper, conf),
            _ => false,
        }
    }

    /// Apply a position change.
    ///
    /// The camera handle is held exactly while the position is 2 or above.
    pub fn transition(
        &mut self,
        new: u8,
        camera: &mut dyn CameraDriver,
        beeper: &Beeper,
        conf: &conf::Camera,
    ) -> bool {
        log::info!("Mode {} -> {}", self.current, new);

        // Pulse count announces the new position audibly
        beeper.beep(define::beep::MODE_MS, new, define::beep::MODE_GAP_MS);

        if new >= 2 {
            match camera.open() {
                Ok(()) => {
                    for field in camera.apply(&profile_for(new, conf)) {
                        log::warn!("Camera attribute not supported, skipped: {}", field);
                    }
                }
                Err(e) => log::error!("Camera open failed: {}", e),
            }
        } else {
            camera.close();
        }

        self.current = new;
        new == 5
    }
}
