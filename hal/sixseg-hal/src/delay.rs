//! Blocking delay abstraction
//!
//! Protocol drivers wait between line transitions with a busy-wait. The
//! delay is injected so host tests can run without real timing.

/// Blocking microsecond delay
pub trait DelayUs {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// Any `FnMut(u32)` can stand in for a delay (logging stubs, counters).
impl<F: FnMut(u32)> DelayUs for F {
    fn delay_us(&mut self, us: u32) {
        self(us);
    }
}

/// Delay that returns immediately
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoDelay;

impl DelayUs for NoDelay {
    fn delay_us(&mut self, _us: u32) {}
}
