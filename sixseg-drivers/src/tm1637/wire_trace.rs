//! Recording pins and a protocol decoder for host tests
//!
//! Pins and delay append to a shared trace; [`decode`] replays it the way
//! a logic analyzer would and returns the bytes of every complete frame.

use core::cell::RefCell;

use heapless::Vec;
use sixseg_hal::{DelayUs, OutputPin};

/// Enough for a full display update with room to spare
const TRACE_CAPACITY: usize = 1024;

pub(crate) type FrameBytes = Vec<u8, 8>;
pub(crate) type Frames = Vec<FrameBytes, 8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Clk,
    Dio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Set(Line, bool),
    Wait(u32),
}

pub(crate) struct Trace {
    pub(crate) events: Vec<Event, TRACE_CAPACITY>,
}

impl Trace {
    pub(crate) fn new() -> RefCell<Self> {
        RefCell::new(Self { events: Vec::new() })
    }

    fn record(&mut self, event: Event) {
        self.events.push(event).expect("trace capacity exceeded");
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }

    pub(crate) fn frames(&self) -> Frames {
        decode(&self.events)
    }

    pub(crate) fn waits(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Wait(_)))
            .count()
    }
}

pub(crate) struct TracePin<'a> {
    line: Line,
    trace: &'a RefCell<Trace>,
}

impl<'a> TracePin<'a> {
    pub(crate) fn new(line: Line, trace: &'a RefCell<Trace>) -> Self {
        Self { line, trace }
    }
}

impl OutputPin for TracePin<'_> {
    fn set_high(&mut self) {
        self.trace.borrow_mut().record(Event::Set(self.line, true));
    }

    fn set_low(&mut self) {
        self.trace.borrow_mut().record(Event::Set(self.line, false));
    }
}

pub(crate) struct TraceDelay<'a> {
    trace: &'a RefCell<Trace>,
}

impl<'a> TraceDelay<'a> {
    pub(crate) fn new(trace: &'a RefCell<Trace>) -> Self {
        Self { trace }
    }
}

impl DelayUs for TraceDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        self.trace.borrow_mut().record(Event::Wait(us));
    }
}

/// Replay line transitions and collect the bytes of each frame
///
/// Bits are sampled on clock rising edges inside a frame. Each byte is
/// nine clocks (eight data bits, LSB first, then the acknowledgment
/// clock). The clock the stop condition raises is left over and ignored.
pub(crate) fn decode(events: &[Event]) -> Frames {
    let mut frames = Frames::new();
    let mut bits: Vec<bool, 128> = Vec::new();
    let mut clk = false;
    let mut dio = false;
    let mut in_frame = false;

    for event in events {
        match *event {
            Event::Set(Line::Clk, level) => {
                if in_frame && level && !clk {
                    bits.push(dio).expect("frame too long");
                }
                clk = level;
            }
            Event::Set(Line::Dio, level) => {
                if clk && dio && !level {
                    in_frame = true;
                    bits.clear();
                } else if clk && !dio && level && in_frame {
                    in_frame = false;
                    let mut bytes = FrameBytes::new();
                    for chunk in bits.chunks_exact(9) {
                        let byte = chunk[..8]
                            .iter()
                            .enumerate()
                            .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << i));
                        bytes.push(byte).expect("too many bytes in frame");
                    }
                    frames.push(bytes).expect("too many frames");
                }
                dio = level;
            }
            Event::Wait(_) => {}
        }
    }

    frames
}

/// Build the expected frame list from byte slices
pub(crate) fn frames_of(expected: &[&[u8]]) -> Frames {
    let mut frames = Frames::new();
    for frame in expected {
        frames
            .push(FrameBytes::from_slice(frame).expect("frame too long"))
            .expect("too many frames");
    }
    frames
}
