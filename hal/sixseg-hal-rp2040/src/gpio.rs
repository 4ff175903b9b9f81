//! Display output lines
//!
//! The two-wire bus idles high through pull-ups. Lines are configured as
//! outputs with the internal pull-up enabled and start low.

use embassy_rp::gpio::{AnyPin, Flex, Pull};
use embassy_rp::Peri;
use sixseg_hal::OutputPin;

/// GPIO configured as a pull-up output for the display bus
pub struct DisplayLine<'d> {
    pin: Flex<'d>,
}

impl<'d> DisplayLine<'d> {
    /// Configure `pin` as a pull-up output, driven low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::Up);
        pin.set_low();
        pin.set_as_output();
        Self { pin }
    }
}

impl OutputPin for DisplayLine<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}
