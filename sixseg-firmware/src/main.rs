//! sixseg demo firmware
//!
//! Brings up a six-digit display on the GPIOs named in `display.toml` and
//! cycles through text, numeric and brightness demos.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use sixseg_core::config::DisplayConfig;
use sixseg_drivers::Tm1637;
use sixseg_hal_rp2040::{BusyDelay, DisplayLine, PinBank, PinError, GPIO_COUNT};

mod tasks;

/// The display as wired on this board
pub type Display = Tm1637<DisplayLine<'static>, DisplayLine<'static>, BusyDelay>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("sixseg firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Display config: clk=gpio{} dio=gpio{} brightness={}",
        config.clk_pin, config.dio_pin, config.brightness
    );

    let mut bank = PinBank::new(p);
    let display = match open_display(&mut bank, &config) {
        Ok(display) => display,
        Err(e) => {
            error!("Display pins unavailable: {}", e);
            return;
        }
    };
    info!("Display initialized");

    spawner.spawn(tasks::demo_task(display)).unwrap();
}

/// Display config exported by build.rs from display.toml
///
/// The build already rejected bad values; falling back to defaults only
/// guards against a stale build environment.
fn load_config() -> DisplayConfig {
    let parsed = DisplayConfig::parse(
        env!("SIXSEG_CLK_PIN"),
        env!("SIXSEG_DIO_PIN"),
        env!("SIXSEG_BRIGHTNESS"),
    )
    .and_then(|config| config.validate(GPIO_COUNT).map(|()| config));

    match parsed {
        Ok(config) => config,
        Err(e) => {
            warn!("Bad display config ({}), using defaults", e);
            DisplayConfig::default()
        }
    }
}

/// Take the configured pins and bring the display up
fn open_display(bank: &mut PinBank, config: &DisplayConfig) -> Result<Display, PinError> {
    let clk = DisplayLine::new(bank.take(config.clk_pin)?);
    let dio = DisplayLine::new(bank.take(config.dio_pin)?);
    Ok(Tm1637::new(clk, dio, BusyDelay, config.brightness))
}
