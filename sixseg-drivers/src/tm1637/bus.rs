//! Bit-level transport
//!
//! Start/stop framing and LSB-first byte serialization over two output
//! lines. Every transition is followed by a fixed [`BIT_DELAY_US`] wait,
//! except the final data rise of the stop condition.
//!
//! # Timing
//!
//! ```text
//!         start        bit0   bit1  ...  ack        stop
//! CLK  ‾‾‾‾‾‾‾\__/‾‾\__/‾‾\__ ... _/‾‾\_____/‾‾‾‾‾‾
//! DIO  __/‾‾\_____X=====X=====... ________/‾‾‾‾‾
//! ```

use sixseg_hal::{DelayUs, OutputPin};

use super::command::Transport;

/// Wait between line transitions, in microseconds
///
/// Part of the timing contract with the device, not a tuning knob.
pub const BIT_DELAY_US: u32 = 10;

/// Two-wire bus owning the clock line, data line and delay
pub struct Bus<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
}

impl<CLK, DIO, D> Bus<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayUs,
{
    /// Take ownership of the lines and drive both low
    pub fn new(mut clk: CLK, mut dio: DIO, delay: D) -> Self {
        clk.set_low();
        dio.set_low();
        Self { clk, dio, delay }
    }

    /// Give back the lines and delay
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }

    fn wait(&mut self) {
        self.delay.delay_us(BIT_DELAY_US);
    }
}

impl<CLK, DIO, D> Transport for Bus<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayUs,
{
    fn start(&mut self) {
        self.clk.set_high();
        self.wait();
        self.dio.set_high();
        self.wait();
        // Data falls while clock is high
        self.dio.set_low();
        self.wait();
        self.clk.set_low();
        self.wait();
    }

    fn stop(&mut self) {
        self.clk.set_low();
        self.wait();
        self.dio.set_low();
        self.wait();
        self.clk.set_high();
        self.wait();
        // Data rises while clock is high
        self.dio.set_high();
    }

    fn write_byte(&mut self, byte: u8) {
        for bit in 0..8 {
            self.dio.set_state((byte >> bit) & 1 == 1);
            self.wait();
            self.clk.set_high();
            self.wait();
            self.clk.set_low();
            self.wait();
        }

        // Acknowledgment clock. The device pulls data low here, but the
        // line is output-only so nobody looks.
        self.clk.set_low();
        self.wait();
        self.clk.set_high();
        self.wait();
        self.clk.set_low();
        self.wait();
    }
}
