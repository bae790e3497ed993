//! Emergency beeper silence.

use rppal::gpio::Gpio;

// Beeper output pin (see conf.toml [pin])
const BEEPER_PIN: u8 = 6;

fn main() {
    let gpio = Gpio::new().unwrap();
    let mut pin = gpio.get(BEEPER_PIN).unwrap().into_output();
    pin.set_low();
}
