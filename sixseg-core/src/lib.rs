//! Board-agnostic core logic for sixseg displays
//!
//! This crate contains everything that does not touch a wire:
//!
//! - Glyph table and text-to-segment encoding
//! - Right-aligned text formatting for numeric readouts
//! - Display configuration types and validation

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod format;
pub mod glyph;

pub use config::{ConfigError, DisplayConfig};
pub use glyph::{encode_char, encode_digit, encode_string, Segment, SegmentBuffer, DIGITS};
