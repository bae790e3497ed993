//! Module for Constants and Paths Definitions
//!
//! This module defines various constants and paths used throughout the application.

/// System Constants
pub mod system {
    /// Name of the system
    pub const NAME: &str = "fieldcam";

    /// Command invoked when the rotary switch reaches the halt position.
    /// Fire-and-forget. The process keeps running until the OS signals it.
    pub const POWEROFF_CMD: [&str; 3] = ["sudo", "poweroff", "--no-wall"];
}

/// File Paths
pub mod path {

    // Persistent Data Directory
    pub const PERSISTENT_DIR: &str = "/data/";

    // Ephemeral Data Directory
    pub const EPHEMERAL_DIR: &str = "/run/user/1000/";

    // Captured Originals Directory
    pub const ORIGINAL_DIR: &str = "originals";

    // Thumbnails Directory
    pub const THUMBNAIL_DIR: &str = "thumbnails";

    // Quarantine Directory for Blank Frames
    pub const BLANK_DIR: &str = "blank";

    // Log Directory
    pub const LOG_DIR: &str = "log";

    // Configuration File
    pub const CONF_FILE: &str = "conf.toml";

    // Capture Filename Format (local time, microsecond resolution)
    pub const CAPTURE_FILENAME_FMT: &str = "%Y%m%dT%H%M%S%6f.jpg";
}

/// Timings
pub mod tick {

    // Poll loop interval while idle (ms)
    pub const LOOP_MS: u64 = 200;

    // Button release polling interval during debounce (ms)
    pub const DEBOUNCE_MS: u64 = 20;
}

/// Beep Envelopes
pub mod beep {

    // Boot acknowledgement (duration ms, repeat, inter-pulse delay ms)
    pub const BOOT: (u64, u8, u64) = (20, 5, 100);

    // Pre-capture cue
    pub const SHUTTER_PRE_MS: u64 = 5;

    // Post-capture cue: short pulse, wait, long pulse
    pub const SHUTTER_POST_MS: u64 = 5;
    pub const SHUTTER_POST_WAIT_MS: u64 = 100;
    pub const SHUTTER_POST_LONG_MS: u64 = 10;

    // Mode feedback pulse width and spacing (repeat = position)
    pub const MODE_MS: u64 = 20;
    pub const MODE_GAP_MS: u64 = 200;

    // Blank frame warning (duration ms, repeat, inter-pulse delay ms)
    pub const BLANK_WARN: (u64, u8, u64) = (5, 5, 15);
}
