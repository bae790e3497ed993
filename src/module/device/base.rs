//! Provide panel input devices
//!

use rppal::gpio::Gpio;

/// Simple active-low contact.
///
pub trait Switch {
    /// Whether the contact currently pulls its pin low.
    fn closed(&self) -> bool;
}

/// Momentary push button, used as the shutter release.
///
pub struct PushButton {
    pub pin: rppal::gpio::InputPin,
}

/// PushButton's methods
///
impl PushButton {
    /// PushButton's constructor
    ///
    pub fn new(pin: u8) -> Self {
        let gpio = Gpio::new().unwrap();
        Self {
            pin: gpio.get(pin).unwrap().into_input_pullup(),
        }
    }
}

/// Implement Switch for PushButton.
///
impl Switch for PushButton {
    fn closed(&self) -> bool {
        self.pin.is_low()
    }
}

/// 5-position rotary mode switch.
///
/// One input pin per detent. The switch hardware makes the contacts mutually
/// exclusive, so at most one pin reads low at a time.
pub struct RotarySwitch {
    positions: Vec<(u8, Box<dyn Switch + Send>)>,
}

impl RotarySwitch {
    /// Build a rotary switch from `(position, pin)` pairs.
    ///
    pub fn new(pins: &[(u8, u8)]) -> Self {
        Self {
            positions: pins
                .iter()
                .map(|(position, pin)| {
                    (
                        *position,
                        Box::new(PushButton::new(*pin)) as Box<dyn Switch + Send>,
                    )
                })
                .collect(),
        }
    }

    /// Build a rotary switch from prepared contacts.
    ///
    pub fn with_switches(positions: Vec<(u8, Box<dyn Switch + Send>)>) -> Self {
        Self { positions }
    }

    /// Scan the contacts and report the selected position.
    ///
    /// Returns `None` while the switch sits between detents.
    pub fn position(&self) -> Option<u8> {
        self.positions
            .iter()
            .find(|(_, switch)| switch.closed())
            .map(|(position, _)| *position)
    }
}
