//! Config Handler.

use serde::{Deserialize, Serialize};

/// Provides TOML config file handling.
pub mod toml {

    use super::DEFAULT_CONFIG;
    use crate::module::define;
    use std::fs::File;
    use std::io::prelude::*;
    use std::path::Path;

    /// Loads a configuration file from the given directory.
    /// If not found, generates a default config file.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the configuration file is located or should be created.
    ///
    pub fn load(dir: &str) -> super::Config {
        // Check if the config file exists
        let path = Path::new(dir).join(define::path::CONF_FILE);
        let exist: bool = path.is_file();

        if !exist {
            // Create the default config if it doesn't exist
            let config: super::Config = toml::from_str(DEFAULT_CONFIG).unwrap();
            save(dir, config);
        }

        // Load the config
        let conf_str: String = std::fs::read_to_string(&path).unwrap();
        let setting: Result<super::Config, toml::de::Error> = toml::from_str(&conf_str);

        match setting {
            Ok(conf) => conf,
            Err(e) => panic!("Failed to parse TOML: {}", e),
        }
    }

    /// Saves a configuration file to the given directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the configuration file should be saved.
    /// * `conf` - The configuration data to be saved.
    ///
    pub fn save(dir: &str, conf: super::Config) {
        let toml_str = toml::to_string(&conf).unwrap();
        let path = crate::module::util::path::join(&[dir, define::path::CONF_FILE]);
        let mut file = File::create(path).unwrap();
        file.write_all(toml_str.as_bytes()).unwrap();
    }
}

/// Represents the configuration data structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub system: System,
    pub pin: Pin,
    pub camera: Camera,
    pub picture: Picture,
    pub threshold: Threshold,
}

/// Represents system-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct System {
    pub log_level: String,
}

/// Represents pin-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pin {
    pub button_pin: u8,
    pub beeper_pin: u8,
    pub mode1_pin: u8,
    pub mode2_pin: u8,
    pub mode3_pin: u8,
    pub mode4_pin: u8,
    pub mode5_pin: u8,
}

/// Represents camera-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Camera {
    pub device: String,
    pub width: u16,
    pub height: u16,
}

/// Represents picture post-processing configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Picture {
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

/// Represents classification threshold configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Threshold {
    pub blank: f32,
}

// Default configuration data in TOML format
const DEFAULT_CONFIG: &str = r#"
[system]
  log_level = 'INFO' # Log level ('INFO', 'DEBUG')

[pin]
  button_pin = 7 # Shutter button pin (active low)
  beeper_pin = 6 # Piezo beeper output pin
  mode1_pin = 21 # Rotary switch position 1 pin (camera off)
  mode2_pin = 22 # Rotary switch position 2 pin
  mode3_pin = 23 # Rotary switch position 3 pin (low light)
  mode4_pin = 24 # Rotary switch position 4 pin
  mode5_pin = 25 # Rotary switch position 5 pin (system halt)

[camera]
  device = '/dev/video0' # V4L2 capture device
  width = 1280 # Capture width
  height = 720 # Capture height

[picture]
  thumbnail_width = 144 # Thumbnail width
  thumbnail_height = 108 # Thumbnail height

[threshold]
  blank = 0.89 # Blank frame ratio (empty histogram bins / total bins)
"#;
