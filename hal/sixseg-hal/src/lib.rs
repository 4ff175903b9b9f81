//! sixseg Hardware Abstraction Layer
//!
//! This crate defines the two capabilities the display driver consumes from
//! a board: digital output lines and a busy-wait microsecond delay. Board
//! crates implement them on top of their chip HAL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  sixseg-drivers (protocol + display)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sixseg-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  sixseg-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`delay::DelayUs`] - Blocking microsecond delay

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::{DelayUs, NoDelay};
pub use gpio::{Level, OutputPin};
