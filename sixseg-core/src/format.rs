//! Right-aligned text for numeric readouts
//!
//! Numbers are rendered into a fixed-capacity string, right-aligned to the
//! display width and padded with spaces. Values wider than the display are
//! not clipped here; the glyph encoder keeps the leftmost six glyphs.

use core::fmt::Write;

use heapless::String;

/// Longest text a formatter can produce (`i32::MIN` is 11 characters)
pub const MAX_TEXT_LEN: usize = 12;

/// Formatted readout text
pub type DisplayText = String<MAX_TEXT_LEN>;

/// Lowercase hexadecimal, width 6, space padded on the left
///
/// `0x1A2B` renders as `"  1a2b"`.
pub fn hex_text(val: u16) -> DisplayText {
    let mut text = DisplayText::new();
    // At most four digits, always within the display width
    let _ = write!(text, "{:>6x}", val);
    text
}

/// Decimal, width 6, space padded on the left
///
/// Negative values keep their sign: `-42` renders as `"   -42"`.
pub fn number_text(num: i32) -> DisplayText {
    let mut text = DisplayText::new();
    let _ = write!(text, "{:>6}", num);
    text
}
