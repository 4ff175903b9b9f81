//! Display driver implementations
//!
//! This crate drives LED display modules through the pin and delay
//! traits defined in `sixseg-hal`:
//!
//! - TM1637-class six-digit 7-segment modules (two-wire, write-only)

#![no_std]
#![deny(unsafe_code)]

pub mod tm1637;

pub use tm1637::Tm1637;
