//! TM1637-class six-digit display
//!
//! The module listens on two lines, clock and data, both pulled up when
//! idle. Every command is framed by a start condition (data falls while
//! clock is high) and a stop condition (data rises while clock is high).
//! Bytes go out least-significant bit first, each followed by one clock
//! for the device's acknowledgment, which is never read back.
//!
//! Layers, bottom up:
//!
//! - [`bus`]: start/stop framing and byte serialization
//! - [`command`]: data, address and display-control commands
//! - [`display`]: brightness, raw writes and text/number readouts

pub mod bus;
pub mod command;
pub mod display;

#[cfg(test)]
mod wire_trace;

pub use bus::{Bus, BIT_DELAY_US};
pub use command::{CommandExt, Transport};
pub use display::{transmission_order, Tm1637};
