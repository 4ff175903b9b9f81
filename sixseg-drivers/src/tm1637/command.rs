//! Device commands
//!
//! Three commands make up every display update, each in its own frame
//! except the address, which shares a frame with the digit bytes:
//!
//! 1. Data command: auto-increment address, normal write mode
//! 2. Address command + digit bytes
//! 3. Display control: on, with brightness
//!
//! The device only latches digits after the data command, and display
//! control has to be re-sent after every data write.

use sixseg_core::glyph::Segment;

/// Data command: write to display, automatic address increment
pub const CMD_DATA: u8 = 0x40;

/// Address command base, OR-ed with the starting position
pub const CMD_ADDRESS: u8 = 0xC0;

/// Display-control command base
pub const CMD_DISPLAY: u8 = 0x80;

/// Display-control flag turning the display on
pub const DISPLAY_ON: u8 = 0x08;

/// Bits of the display-control command carrying brightness
pub const BRIGHTNESS_MASK: u8 = 0x07;

/// Last addressable digit position
pub const MAX_POSITION: u8 = 5;

/// Framing and byte primitives of a command transport
pub trait Transport {
    /// Emit the start condition
    fn start(&mut self);

    /// Emit the stop condition
    fn stop(&mut self);

    /// Serialize one byte, including the acknowledgment clock
    fn write_byte(&mut self, byte: u8);
}

/// Device commands composed from [`Transport`] primitives
pub trait CommandExt: Transport {
    /// Select auto-increment write mode
    fn write_data_command(&mut self) {
        self.start();
        self.write_byte(CMD_DATA);
        self.stop();
    }

    /// Turn the display on at `brightness` (low three bits used)
    fn write_display_control(&mut self, brightness: u8) {
        self.start();
        self.write_byte(display_control(brightness));
        self.stop();
    }

    /// Select the start position and stream digit bytes in one frame
    ///
    /// `pos` is clamped to [`MAX_POSITION`]. Bytes go out in the order
    /// given.
    fn write_segments(&mut self, pos: u8, segments: &[Segment]) {
        self.start();
        self.write_byte(address(pos));
        for &segment in segments {
            self.write_byte(segment);
        }
        self.stop();
    }
}

// Blanket implementation for all transports
impl<T: Transport + ?Sized> CommandExt for T {}

/// Display-control command byte for a brightness level
pub const fn display_control(brightness: u8) -> u8 {
    CMD_DISPLAY | DISPLAY_ON | (brightness & BRIGHTNESS_MASK)
}

/// Address command byte for a start position
pub const fn address(pos: u8) -> u8 {
    let pos = if pos > MAX_POSITION { MAX_POSITION } else { pos };
    CMD_ADDRESS | pos
}
