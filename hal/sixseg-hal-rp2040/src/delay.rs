//! Busy-wait delay on the embassy time driver

use embassy_time::{block_for, Duration};
use sixseg_hal::DelayUs;

/// Blocking delay that spins on the system timer
///
/// Holds the core for the whole wait. Meant for the few microseconds
/// between bus transitions, not for pacing an application.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusyDelay;

impl DelayUs for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}
