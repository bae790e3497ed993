//! Piezo beeper control.

use std::sync::{Arc, Mutex};
use std::{thread, time};

use rppal::gpio::Gpio;

use crate::module::define;

/// Single digital output line.
///
pub trait Line: Send {
    fn set_high(&mut self);
    fn set_low(&mut self);
}

/// GPIO-backed output line.
///
pub struct GpioLine {
    pin: rppal::gpio::OutputPin,
}

impl GpioLine {
    /// GpioLine's constructor
    ///
    pub fn new(pin: u8) -> Self {
        let gpio = Gpio::new().unwrap();
        Self {
            pin: gpio.get(pin).unwrap().into_output(),
        }
    }
}

impl Line for GpioLine {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Shared handle to the beeper pin.
///
/// The pin is pulsed from both the poll loop and the post-processing
/// thread. The mutex keeps whole envelopes from interleaving.
#[derive(Clone)]
pub struct Beeper {
    inner: Arc<Mutex<Box<dyn Line>>>,
}

impl Beeper {
    /// Beeper's constructor
    ///
    pub fn new(pin: u8) -> Self {
        Self::with_line(Box::new(GpioLine::new(pin)))
    }

    /// Build a beeper over a prepared output line.
    ///
    pub fn with_line(line: Box<dyn Line>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(line)),
        }
    }

    /// Emit a pulse envelope.
    ///
    /// Each pulse drives the pin high for `duration_ms` then low. The
    /// inter-pulse delay is inserted only between pulses, so a single
    /// pulse returns as soon as the pin drops.
    ///
    /// # Arguments
    ///
    /// * `duration_ms` - Width of each pulse.
    /// * `repeat` - Number of pulses.
    /// * `interpulse_ms` - Gap between consecutive pulses.
    ///
    pub fn beep(&self, duration_ms: u64, repeat: u8, interpulse_ms: u64) {
        let mut line = self.inner.lock().unwrap();
        for i in 0..repeat {
            if i > 0 {
                thread::sleep(time::Duration::from_millis(interpulse_ms));
            }
            line.set_high();
            thread::sleep(time::Duration::from_millis(duration_ms));
            line.set_low();
        }
    }

    /// Single pulse.
    ///
    pub fn chirp(&self, duration_ms: u64) {
        self.beep(duration_ms, 1, 0);
    }

    /// Boot acknowledgement envelope, emitted once the appliance is ready.
    ///
    pub fn boot_ack(&self) {
        let (duration, repeat, gap) = define::beep::BOOT;
        self.beep(duration, repeat, gap);
    }

    /// Warning envelope for a captured frame judged blank.
    ///
    pub fn blank_warning(&self) {
        let (duration, repeat, gap) = define::beep::BLANK_WARN;
        self.beep(duration, repeat, gap);
    }

    /// Force the pin low. Safe to call any number of times, including
    /// while another thread is mid-envelope (the mutex orders the writes).
    ///
    pub fn quiet(&self) {
        self.inner.lock().unwrap().set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Records every edge written to the line.
    pub struct RecordingLine {
        pub edges: Arc<Mutex<Vec<char>>>,
    }

    impl Line for RecordingLine {
        fn set_high(&mut self) {
            self.edges.lock().unwrap().push('H');
        }

        fn set_low(&mut self) {
            self.edges.lock().unwrap().push('L');
        }
    }

    fn recording_beeper() -> (Beeper, Arc<Mutex<Vec<char>>>) {
        let edges = Arc::new(Mutex::new(vec![]));
        let line = RecordingLine {
            edges: Arc::clone(&edges),
        };
        (Beeper::with_line(Box::new(line)), edges)
    }

    #[test]
    fn beep_edges_test() {
        let (beeper, edges) = recording_beeper();

        beeper.chirp(1);
        assert_eq!(*edges.lock().unwrap(), vec!['H', 'L']);

        edges.lock().unwrap().clear();
        beeper.beep(1, 3, 1);
        assert_eq!(*edges.lock().unwrap(), vec!['H', 'L', 'H', 'L', 'H', 'L']);
    }

    #[test]
    fn single_pulse_skips_gap_test() {
        let (beeper, _edges) = recording_beeper();

        // A lone pulse must not pay the inter-pulse delay
        let start = Instant::now();
        beeper.beep(1, 1, 1000);
        assert!(start.elapsed().as_millis() < 500);
    }

    #[test]
    fn quiet_idempotent_test() {
        let (beeper, edges) = recording_beeper();

        beeper.quiet();
        beeper.quiet();
        assert_eq!(*edges.lock().unwrap(), vec!['L', 'L']);
    }
}
