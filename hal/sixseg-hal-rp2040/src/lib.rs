//! RP2040 HAL for sixseg displays
//!
//! This crate provides RP2040 implementations of the `sixseg-hal` traits:
//!
//! - Pull-up output lines on any GPIO
//! - Busy-wait microsecond delay on the embassy time driver
//! - Pin bank for taking GPIOs by number from configuration

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod pins;

pub use delay::BusyDelay;
pub use gpio::DisplayLine;
pub use pins::{PinBank, PinError, GPIO_COUNT};
