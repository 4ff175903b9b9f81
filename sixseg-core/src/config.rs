//! Display configuration
//!
//! Which two GPIO lines the module hangs off, and the brightness it comes
//! up with. Boards fill this from their own config source (the firmware
//! uses a build-validated `display.toml`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest brightness level (14/16 pulse width)
pub const MAX_BRIGHTNESS: u8 = 7;

/// Brightness used when none is configured
pub const DEFAULT_BRIGHTNESS: u8 = MAX_BRIGHTNESS;

/// Errors from validating or parsing a display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number not present on the target chip
    InvalidPin(u8),
    /// Clock and data assigned to the same pin
    SamePin(u8),
    /// Brightness above [`MAX_BRIGHTNESS`]
    BrightnessOutOfRange(u8),
    /// A field was not a decimal number
    Parse,
}

/// Wiring and startup state of one display module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// GPIO driving the clock line
    pub clk_pin: u8,
    /// GPIO driving the data line
    pub dio_pin: u8,
    /// Brightness applied at construction (0-7)
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clk_pin: 2,
            dio_pin: 3,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl DisplayConfig {
    /// Create a config with default brightness
    pub const fn new(clk_pin: u8, dio_pin: u8) -> Self {
        Self {
            clk_pin,
            dio_pin,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Builder-style brightness override
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Check the config against a chip with `gpio_count` pins
    pub fn validate(&self, gpio_count: u8) -> Result<(), ConfigError> {
        if self.clk_pin >= gpio_count {
            return Err(ConfigError::InvalidPin(self.clk_pin));
        }
        if self.dio_pin >= gpio_count {
            return Err(ConfigError::InvalidPin(self.dio_pin));
        }
        if self.clk_pin == self.dio_pin {
            return Err(ConfigError::SamePin(self.clk_pin));
        }
        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange(self.brightness));
        }
        Ok(())
    }

    /// Parse the three fields from decimal strings
    ///
    /// Used for values handed over as text, e.g. environment variables
    /// emitted by a build script. The result is not validated.
    pub fn parse(clk_pin: &str, dio_pin: &str, brightness: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            clk_pin: parse_u8(clk_pin)?,
            dio_pin: parse_u8(dio_pin)?,
            brightness: parse_u8(brightness)?,
        })
    }
}

fn parse_u8(s: &str) -> Result<u8, ConfigError> {
    s.trim().parse().map_err(|_| ConfigError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RP2040_GPIO_COUNT: u8 = 30;

    #[test]
    fn test_default_is_valid() {
        let config = DisplayConfig::default();
        assert_eq!(config.validate(RP2040_GPIO_COUNT), Ok(()));
        assert_eq!(config.brightness, 7);
    }

    #[test]
    fn test_validate_rejects_bad_pins() {
        let config = DisplayConfig::new(30, 3);
        assert_eq!(
            config.validate(RP2040_GPIO_COUNT),
            Err(ConfigError::InvalidPin(30))
        );

        let config = DisplayConfig::new(2, 40);
        assert_eq!(
            config.validate(RP2040_GPIO_COUNT),
            Err(ConfigError::InvalidPin(40))
        );

        let config = DisplayConfig::new(5, 5);
        assert_eq!(
            config.validate(RP2040_GPIO_COUNT),
            Err(ConfigError::SamePin(5))
        );
    }

    #[test]
    fn test_validate_rejects_brightness() {
        let config = DisplayConfig::new(2, 3).with_brightness(8);
        assert_eq!(
            config.validate(RP2040_GPIO_COUNT),
            Err(ConfigError::BrightnessOutOfRange(8))
        );

        let config = DisplayConfig::new(2, 3).with_brightness(0);
        assert_eq!(config.validate(RP2040_GPIO_COUNT), Ok(()));
    }

    #[test]
    fn test_parse() {
        let config = DisplayConfig::parse("16", " 17 ", "4").unwrap();
        assert_eq!(config, DisplayConfig::new(16, 17).with_brightness(4));

        assert_eq!(
            DisplayConfig::parse("gpio16", "17", "4"),
            Err(ConfigError::Parse)
        );
        assert_eq!(DisplayConfig::parse("16", "17", ""), Err(ConfigError::Parse));
        assert_eq!(
            DisplayConfig::parse("16", "17", "300"),
            Err(ConfigError::Parse)
        );
    }
}
