//! Build script for sixseg-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time and hands its values to the
//!   firmware as `SIXSEG_*` environment variables

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// User GPIOs on the RP2040
const GPIO_COUNT: i64 = 30;

/// Highest brightness level
const MAX_BRIGHTNESS: i64 = 7;

fn main() {
    setup_linker();
    export_display_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml and export it
fn export_display_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");
    if !config_path.exists() {
        fail(&[
            "display.toml not found!".to_string(),
            "Create one next to Cargo.toml with a [display] table.".to_string(),
        ]);
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(&["Failed to read display.toml".to_string(), format!("Error: {}", e)]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let mut lines = vec!["Invalid TOML syntax in display.toml".to_string()];
            lines.extend(e.to_string().lines().map(str::to_string));
            fail(&lines)
        }
    };

    let display = match config.get("display") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => fail(&["[display] must be a table".to_string()]),
        None => fail(&["Missing [display] section in display.toml".to_string()]),
    };

    let mut errors = Vec::new();

    let clk_pin = integer_field(display, "clk_pin", 0..GPIO_COUNT, &mut errors);
    let dio_pin = integer_field(display, "dio_pin", 0..GPIO_COUNT, &mut errors);
    let brightness = match display.get("brightness") {
        // Optional, defaults to full brightness
        None => Some(MAX_BRIGHTNESS),
        Some(_) => integer_field(display, "brightness", 0..MAX_BRIGHTNESS + 1, &mut errors),
    };

    if let (Some(clk), Some(dio)) = (clk_pin, dio_pin) {
        if clk == dio {
            errors.push(format!("clk_pin and dio_pin are both gpio{}", clk));
        }
    }

    if !errors.is_empty() {
        let mut lines = vec!["Invalid [display] configuration".to_string()];
        lines.extend(errors.iter().map(|e| format!("• {}", e)));
        fail(&lines);
    }

    // All three are Some once errors is empty
    let (clk_pin, dio_pin, brightness) = (
        clk_pin.unwrap_or_default(),
        dio_pin.unwrap_or_default(),
        brightness.unwrap_or(MAX_BRIGHTNESS),
    );

    println!("cargo:rustc-env=SIXSEG_CLK_PIN={}", clk_pin);
    println!("cargo:rustc-env=SIXSEG_DIO_PIN={}", dio_pin);
    println!("cargo:rustc-env=SIXSEG_BRIGHTNESS={}", brightness);
    println!(
        "cargo:warning=display.toml validated: clk=gpio{} dio=gpio{} brightness={}",
        clk_pin, dio_pin, brightness
    );
}

/// Read a required integer field within `range`
fn integer_field(
    table: &toml::Table,
    key: &str,
    range: std::ops::Range<i64>,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match table.get(key) {
        Some(toml::Value::Integer(v)) if range.contains(v) => Some(*v),
        Some(toml::Value::Integer(v)) => {
            errors.push(format!(
                "{} = {} is out of range ({}-{})",
                key,
                v,
                range.start,
                range.end - 1
            ));
            None
        }
        Some(_) => {
            errors.push(format!("{} must be an integer", key));
            None
        }
        None => {
            errors.push(format!("missing required field {}", key));
            None
        }
    }
}

/// Abort the build with a boxed error message
fn fail(lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: display.toml                                             ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        body
    );
}
