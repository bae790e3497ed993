//! Provide Device Control.
//!
pub mod base;
pub mod beeper;

use std::sync::{Arc, Once};

use crate::module::device::base::{PushButton, RotarySwitch};
use crate::module::device::beeper::Beeper;
use crate::module::util::conf::Config;

/// Device aggregator
///
pub struct Fieldcam {
    pub button: PushButton,
    pub rotary: RotarySwitch,
    pub beeper: Beeper,
}

/// Device's methods
///
impl Fieldcam {
    /// Fieldcam constructor
    ///
    /// The beeper handle is built by the caller because it is shared with
    /// the post-processing thread and the teardown guard.
    pub fn new(conf: Config, beeper: Beeper) -> Self {
        Self {
            button: PushButton::new(conf.pin.button_pin),
            rotary: RotarySwitch::new(&[
                (1, conf.pin.mode1_pin),
                (2, conf.pin.mode2_pin),
                (3, conf.pin.mode3_pin),
                (4, conf.pin.mode4_pin),
                (5, conf.pin.mode5_pin),
            ]),
            beeper,
        }
    }
}

/// Hardware teardown guard.
///
/// Both the termination signal handler and the poll loop's normal exit call
/// `run`; the `Once` makes sure the release happens exactly once no matter
/// how many of them get there, or how many signals arrive.
#[derive(Clone)]
pub struct Teardown {
    beeper: Beeper,
    once: Arc<Once>,
}

impl Teardown {
    /// Teardown's constructor
    ///
    pub fn new(beeper: Beeper) -> Self {
        Self {
            beeper,
            once: Arc::new(Once::new()),
        }
    }

    /// Force the beeper low, even when termination lands mid-pulse.
    /// Later calls are no-ops.
    pub fn run(&self) {
        self.once.call_once(|| {
            self.beeper.quiet();
            log::info!("Beeper released");
        });
    }
}
