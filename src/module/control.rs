//! Provide Loop for Panel Control.
//!

pub mod mode;
pub mod shutter;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::{thread, time};

use crate::module::control::mode::ModeController;
use crate::module::control::shutter::CaptureController;
use crate::module::define;
use crate::module::device::beeper::Beeper;
use crate::module::device::{Fieldcam, Teardown};
use crate::module::util::init::FieldcamProperty;
use crate::module::vision::camera::{CameraDriver, V4l2};

/// Start the panel poll thread.
///
/// The thread owns the panel devices and the camera handle: the mode
/// controller is the only code opening and closing the camera, the shutter
/// controller the only code capturing from it. Each tick runs the mode
/// controller first so a fresh mode change arms the shutter within the
/// same tick.
pub fn run(
    property: FieldcamProperty,
    queue: Sender<String>,
    beeper: Beeper,
    teardown: Teardown,
    running: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // init devices
        let device = Fieldcam::new(property.conf.clone(), beeper);
        // init camera, closed until the rotary switch asks for it
        let mut camera = V4l2::new(&property.conf.camera);
        // init state machines
        let mut mode = ModeController::new();
        let mut shutter = CaptureController::new(&property.path.dir.original);

        device.beeper.boot_ack();
        let stored = crate::module::util::path::list_originals(&property.path.dir.original);
        log::info!("Camera ready ({} pictures stored)", stored.len());

        while running.load(Ordering::SeqCst) {
            let halt = mode.tick(
                &device.rotary,
                &mut camera,
                &device.beeper,
                &property.conf.camera,
            );
            if halt {
                poweroff();
            }

            shutter.tick(&device.button, &mut camera, &device.beeper, &queue);

            // loop wait
            thread::sleep(time::Duration::from_millis(define::tick::LOOP_MS));
        }

        // Termination: release the hardware. Dropping the queue sender
        // lets the post-processing thread drain and finish.
        camera.close();
        teardown.run();
        log::info!("Panel loop stopped");
    })
}

/// Ask the OS for a graceful power-off.
///
/// Fire-and-forget: the command is not expected to return, and a failure
/// is logged without stopping the appliance.
fn poweroff() {
    let cmd = define::system::POWEROFF_CMD;
    match std::process::Command::new(cmd[0]).args(&cmd[1..]).spawn() {
        Ok(_) => log::info!("Poweroff requested"),
        Err(e) => log::error!("Poweroff command failed: {}", e),
    }
}
