//! Display controller
//!
//! Owns the bus and the brightness level. Every update re-sends the data
//! command before and display control after the digits, so brightness and
//! on-state survive whatever happened to the module in between.

use sixseg_core::config::MAX_BRIGHTNESS;
use sixseg_core::format::{hex_text, number_text};
use sixseg_core::glyph::{encode_string, Segment, SegmentBuffer, DIGITS, SPACE};
use sixseg_hal::{DelayUs, OutputPin};

use super::bus::Bus;
use super::command::{CommandExt, BRIGHTNESS_MASK, MAX_POSITION};

/// Digits per wiring group; the module takes each group in reverse
const GROUP: usize = 3;

/// Six-digit display on a two-wire bus
pub struct Tm1637<CLK, DIO, D> {
    bus: Bus<CLK, DIO, D>,
    /// Current brightness (0-7)
    brightness: u8,
}

impl<CLK, DIO, D> Tm1637<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayUs,
{
    /// Take the lines, bring the module up and turn it on
    ///
    /// Both lines start low. `brightness` above 7 is treated as 7.
    pub fn new(clk: CLK, dio: DIO, delay: D, brightness: u8) -> Self {
        let mut display = Self {
            bus: Bus::new(clk, dio, delay),
            brightness: brightness.min(MAX_BRIGHTNESS),
        };
        display.bus.write_data_command();
        display.bus.write_display_control(display.brightness);
        display
    }

    /// Set brightness 0-7 and apply it immediately
    ///
    /// Level 0 is a 1/16 pulse width, level 7 is 14/16. Higher bits of
    /// `val` are ignored. Returns the level now in effect.
    pub fn brightness(&mut self, val: u8) -> u8 {
        self.brightness = val & BRIGHTNESS_MASK;
        self.bus.write_data_command();
        self.bus.write_display_control(self.brightness);

        #[cfg(feature = "defmt")]
        defmt::debug!("tm1637 brightness {}", self.brightness);

        self.brightness
    }

    /// Brightness level currently in effect
    pub fn current_brightness(&self) -> u8 {
        self.brightness
    }

    /// Write raw segments starting at digit `pos`
    ///
    /// `pos` above 5 is treated as 5. At most six segments are sent; see
    /// [`transmission_order`] for the order they go out in.
    pub fn write(&mut self, segments: &[Segment], pos: u8) {
        let pos = pos.min(MAX_POSITION);
        let ordered = transmission_order(segments);

        self.bus.write_data_command();
        self.bus.write_segments(pos, &ordered);
        self.bus.write_display_control(self.brightness);
    }

    /// Show `val` as lowercase hex, right-aligned
    ///
    /// Every `u16` fits in four digits, leaving the two leftmost blank.
    pub fn hex(&mut self, val: u16) {
        self.show(&hex_text(val), false);
    }

    /// Show `num` in decimal, right-aligned
    ///
    /// Six characters including the sign fit; wider values lose their
    /// rightmost digits.
    pub fn number(&mut self, num: i32) {
        self.show(&number_text(num), false);
    }

    /// Show a string from the leftmost digit
    ///
    /// `_colon` is accepted for call-site compatibility and has no effect;
    /// put a `.` after a character to light its colon/decimal point.
    pub fn show(&mut self, text: &str, _colon: bool) {
        #[cfg(feature = "defmt")]
        defmt::trace!("tm1637 show {=str}", text);

        let segments = encode_string(text);
        self.write(&segments, 0);
    }

    /// Give back the lines and delay
    ///
    /// The module keeps showing whatever it last latched.
    pub fn release(self) -> (CLK, DIO, D) {
        self.bus.release()
    }
}

/// Reorder a buffer into the order the module's digit registers expect
///
/// Digits come in groups of three and each group is sent back to front:
/// buffer slot `i` is sent at `(i / 3) * 6 + 2 - i`, so `[a b c d e f]`
/// goes out as `[c b a f e d]`.
///
/// Only the first six segments are used. A buffer that does not fill its
/// last group is padded with blanks first, so the group still reverses
/// around its right edge.
pub fn transmission_order(segments: &[Segment]) -> SegmentBuffer {
    let segments = &segments[..segments.len().min(DIGITS)];
    let slots = segments.len().div_ceil(GROUP) * GROUP;

    let mut ordered = SegmentBuffer::new();
    for i in 0..slots {
        let src = (i / GROUP) * 2 * GROUP + 2 - i;
        // slots <= DIGITS, so this always fits
        let _ = ordered.push(segments.get(src).copied().unwrap_or(SPACE));
    }
    ordered
}
