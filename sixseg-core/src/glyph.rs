//! Glyph table and text-to-segment encoding
//!
//! A segment byte lights one digit: bits 0-6 are the LED segments a-g,
//! bit 7 lights the decimal point or colon next to that digit.
//!
//! ```text
//!      a
//!     ───
//!  f │   │ b
//!     ─g─
//!  e │   │ c
//!     ───  . (bit 7)
//!      d
//! ```

use heapless::Vec;

/// Number of digit positions on the display
pub const DIGITS: usize = 6;

/// One digit's segment bitmap
pub type Segment = u8;

/// Segments for one full refresh, left to right
pub type SegmentBuffer = Vec<Segment, DIGITS>;

/// Overlay bit lighting the decimal point / colon of a digit
pub const COLON_BIT: Segment = 0x80;

/// Table index of the blank glyph
pub const SPACE_INDEX: usize = 36;

/// Table index of the dash glyph
pub const DASH_INDEX: usize = 37;

/// Table index of the star glyph, also used for unknown characters
pub const STAR_INDEX: usize = 38;

const TABLE: [Segment; 39] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // a
    0x7C, // b
    0x39, // c
    0x5E, // d
    0x79, // e
    0x71, // f
    0x3D, // g
    0x76, // h
    0x06, // i
    0x1E, // j
    0x76, // k
    0x38, // l
    0x55, // m
    0x54, // n
    0x5C, // o
    0x73, // p
    0x67, // q
    0x50, // r
    0x6D, // s
    0x78, // t
    0x3E, // u
    0x1C, // v
    0x2A, // w
    0x76, // x
    0x6E, // y
    0x5B, // z
    0x00, // space
    0x40, // -
    0x63, // * (degree sign on the top half)
];

/// Segment patterns for 0-9, a-z, space, dash and star
pub static GLYPHS: [Segment; 39] = TABLE;

/// Blank digit
pub const SPACE: Segment = TABLE[SPACE_INDEX];

/// Middle bar only
pub const DASH: Segment = TABLE[DASH_INDEX];

/// Fallback glyph for characters the table cannot show
pub const STAR: Segment = TABLE[STAR_INDEX];

/// Encode a hex digit
///
/// Only the low nibble is used, so 10-15 show as `a`-`f`.
pub fn encode_digit(digit: u8) -> Segment {
    GLYPHS[(digit & 0x0F) as usize]
}

/// Encode a single character
///
/// Letters are case-insensitive. Anything outside `0-9`, `a-z`, `A-Z`,
/// space, `-` and `*` shows as the star glyph.
pub fn encode_char(ch: char) -> Segment {
    match ch {
        ' ' => SPACE,
        '*' => STAR,
        '-' => DASH,
        'A'..='Z' => GLYPHS[ch as usize - 55],
        'a'..='z' => GLYPHS[ch as usize - 87],
        '0'..='9' => GLYPHS[ch as usize - 48],
        _ => STAR,
    }
}

/// Encode a string into a full six-digit buffer
///
/// A `.` after at least one glyph does not take a position; it sets
/// [`COLON_BIT`] on the glyph before it. A leading `.` has nothing to
/// attach to and encodes like any other unknown character.
///
/// Glyphs past the sixth are dropped, along with any dots that follow
/// them. The result is right-padded with blanks to exactly [`DIGITS`].
pub fn encode_string(text: &str) -> SegmentBuffer {
    let mut segments = SegmentBuffer::new();
    let mut truncated = false;

    for ch in text.chars() {
        if ch == '.' && !segments.is_empty() {
            if !truncated {
                if let Some(last) = segments.last_mut() {
                    *last |= COLON_BIT;
                }
            }
            continue;
        }

        if segments.push(encode_char(ch)).is_err() {
            truncated = true;
        }
    }

    #[cfg(feature = "defmt")]
    if truncated {
        defmt::debug!("text longer than {} digits, tail dropped", DIGITS);
    }

    while segments.push(SPACE).is_ok() {}

    segments
}
