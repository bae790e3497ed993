//! Camera Functions
//!

use std::fs;
use std::io::Write;

use crate::module::util::conf;

/// Named camera settings applied when entering a mode position.
///
/// Fields left as `None` keep the backend's current value. Application is
/// best-effort per field: a backend that cannot honor a field reports it
/// instead of aborting the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraProfile {
    /// Frames per second as a (numerator, denominator) pair.
    pub framerate: Option<(u32, u32)>,
    /// Shutter speed in microseconds.
    pub shutter_speed: Option<u64>,
    /// Exposure mode name (e.g. "off").
    pub exposure_mode: Option<String>,
    /// Sensor sensitivity.
    pub iso: Option<u32>,
    /// Capture size in pixels.
    pub resolution: Option<(u32, u32)>,
}

/// Build the settings profile for a rotary position.
///
/// Defaults merged with the per-position override table. Only position 3
/// overrides, to a long-exposure low-light profile.
pub fn profile_for(position: u8, conf: &conf::Camera) -> CameraProfile {
    let mut profile = CameraProfile {
        framerate: Some((30, 1)),
        shutter_speed: None,
        exposure_mode: None,
        iso: None,
        resolution: Some((conf.width as u32, conf.height as u32)),
    };
    if position == 3 {
        profile.framerate = Some((1, 6));
        profile.shutter_speed = Some(6_000_000);
        profile.exposure_mode = Some("off".to_string());
        profile.iso = Some(800);
    }
    profile
}

/// Still camera capability.
///
pub trait CameraDriver {
    /// Acquire the device. No-op when already open.
    fn open(&mut self) -> Result<(), Box<dyn std::error::Error>>;
    /// Release the device. No-op when already closed.
    fn close(&mut self);
    /// Whether a device handle is currently held.
    fn is_open(&self) -> bool;
    /// Write one still image to `path`. Fails when the camera is closed.
    fn capture(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>>;
    /// Apply a settings profile field by field.
    ///
    /// Returns the names of the fields the backend could not apply, for
    /// the caller to log.
    fn apply(&mut self, profile: &CameraProfile) -> Vec<&'static str>;
}

/// V4L2 camera backend.
///
pub struct V4l2 {
    device: String,
    cap: Option<rscam::Camera>,
    framerate: (u32, u32),
    resolution: (u32, u32),
}

impl V4l2 {
    /// Creates a new V4L2 camera backend, initially closed.
    ///
    pub fn new(conf: &conf::Camera) -> Self {
        Self {
            device: conf.device.clone(),
            cap: None,
            framerate: (30, 1),
            resolution: (conf.width as u32, conf.height as u32),
        }
    }

    /// Start the stream with the current settings.
    fn start(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut cap = rscam::Camera::new(&self.device)?;
        cap.start(&rscam::Config {
            // The V4L2 frame interval is the inverse of the frame rate
            interval: (self.framerate.1, self.framerate.0),
            resolution: self.resolution,
            format: b"MJPG",
            nbuffers: 1,
            ..Default::default()
        })?;
        self.cap = Some(cap);
        Ok(())
    }
}

impl CameraDriver for V4l2 {
    fn open(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.cap.is_some() {
            return Ok(());
        }
        self.start()
    }

    fn close(&mut self) {
        // Dropping the handle stops the stream
        self.cap = None;
    }

    fn is_open(&self) -> bool {
        self.cap.is_some()
    }

    fn capture(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let cap = self.cap.as_ref().ok_or("capture while camera closed")?;
        let _ = cap.capture(); // Grab a frame to reduce delay.
        let frame = cap.capture()?;

        let mut file = fs::File::create(path)?;
        file.write_all(&frame[..])?;
        Ok(())
    }

    fn apply(&mut self, profile: &CameraProfile) -> Vec<&'static str> {
        let mut unapplied: Vec<&'static str> = vec![];
        if let Some(rate) = profile.framerate {
            self.framerate = rate;
        }
        if let Some(size) = profile.resolution {
            self.resolution = size;
        }
        // The V4L2 streaming path has no per-shot exposure controls
        if profile.shutter_speed.is_some() {
            unapplied.push("shutter_speed");
        }
        if profile.exposure_mode.is_some() {
            unapplied.push("exposure_mode");
        }
        if profile.iso.is_some() {
            unapplied.push("iso");
        }
        if self.cap.is_some() {
            // Restart the stream so the new interval and size take effect
            self.cap = None;
            if let Err(e) = self.start() {
                log::error!("Camera restart failed: {}", e);
            }
        }
        unapplied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_conf() -> conf::Camera {
        conf::Camera {
            device: "/dev/video0".to_string(),
            width: 1280,
            height: 720,
        }
    }

    #[test]
    fn profile_defaults_test() {
        let conf = camera_conf();
        for position in [1u8, 2, 4, 5] {
            let profile = profile_for(position, &conf);
            assert_eq!(profile.framerate, Some((30, 1)));
            assert_eq!(profile.shutter_speed, None);
            assert_eq!(profile.exposure_mode, None);
            assert_eq!(profile.iso, None);
            assert_eq!(profile.resolution, Some((1280, 720)));
        }
    }

    #[test]
    fn profile_low_light_test() {
        let profile = profile_for(3, &camera_conf());
        assert_eq!(profile.framerate, Some((1, 6)));
        assert_eq!(profile.shutter_speed, Some(6_000_000));
        assert_eq!(profile.exposure_mode.as_deref(), Some("off"));
        assert_eq!(profile.iso, Some(800));
        // Resolution stays at the default
        assert_eq!(profile.resolution, Some((1280, 720)));
    }
}
