//! Demo loop
//!
//! Owns the display for the life of the firmware, so no other task can
//! interleave a transaction on its lines.

use defmt::*;
use embassy_time::{Duration, Ticker};
use sixseg_core::glyph::{encode_digit, encode_string};

use crate::Display;

/// Time each screen stays up
const SCREEN_INTERVAL_MS: u64 = 2000;

/// Counter steps per counting screen
const COUNT_STEPS: u32 = 20;

/// Screens the demo walks through, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
enum Screen {
    Greeting,
    Decimals,
    Counter,
    HexCounter,
    Brightness,
}

impl Screen {
    fn next(self) -> Self {
        match self {
            Screen::Greeting => Screen::Decimals,
            Screen::Decimals => Screen::Counter,
            Screen::Counter => Screen::HexCounter,
            Screen::HexCounter => Screen::Brightness,
            Screen::Brightness => Screen::Greeting,
        }
    }
}

#[embassy_executor::task]
pub async fn demo_task(mut display: Display) {
    info!("Demo task started");

    let resting_brightness = display.current_brightness();
    let mut ticker = Ticker::every(Duration::from_millis(SCREEN_INTERVAL_MS));
    let mut fast = Ticker::every(Duration::from_millis(SCREEN_INTERVAL_MS / COUNT_STEPS as u64));
    let mut screen = Screen::Greeting;
    let mut total: u32 = 0;
    let mut hex_total: u16 = 0;

    loop {
        debug!("Screen {}", screen);

        match screen {
            Screen::Greeting => display.show("HELLO", false),
            Screen::Decimals => display.show("1.2.3.4.5.6.", false),
            Screen::Counter => {
                fast.reset();
                for _ in 0..COUNT_STEPS {
                    display.number((total % 1000) as i32 - 500);
                    total = total.wrapping_add(37);
                    fast.next().await;
                }
            }
            Screen::HexCounter => {
                fast.reset();
                for _ in 0..COUNT_STEPS {
                    display.hex(hex_total);
                    hex_total = hex_total.wrapping_add(0x1F1);
                    fast.next().await;
                }
            }
            Screen::Brightness => {
                fast.reset();
                for level in (0..=7u8).chain((0..7u8).rev()) {
                    let applied = display.brightness(level);
                    let mut segments = encode_string("br");
                    segments[5] = encode_digit(applied);
                    display.write(&segments, 0);
                    fast.next().await;
                }
                display.brightness(resting_brightness);
            }
        }

        ticker.next().await;
        screen = screen.next();
    }
}
