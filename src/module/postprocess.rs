//! Provide Loop for Post-Processing.
//!

use std::path::Path;
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;
use std::{fs, thread};

use crate::module::device::beeper::Beeper;
use crate::module::util::init::FieldcamProperty;
use crate::module::util::path::join;
use crate::module::vision::{detector, thumb};

/// What happened to one queued capture.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Thumbnail present, frame kept in place.
    Kept,
    /// Frame judged blank: original quarantined, thumbnail removed.
    Blank,
}

/// Start the post-processing consumer thread.
///
/// Blocks on the capture queue and ends once every sender is gone. A
/// failing item is logged and dropped; the next item is still processed.
pub fn run(property: FieldcamProperty, queue: Receiver<String>, beeper: Beeper) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(path) = queue.recv() {
            match process(&property, &beeper, &path) {
                Ok(Outcome::Kept) => log::debug!("Kept {}", path),
                Ok(Outcome::Blank) => log::warn!("Blank frame quarantined: {}", path),
                Err(e) => log::warn!("Post-processing failed for {}: {}", path, e),
            }
        }
        log::info!("Post-processing drained");
    })
}

/// Thumbnail and classify one captured file.
///
/// Thumbnail generation is skipped when the destination already exists.
/// A frame whose thumbnail histogram is emptier than the configured blank
/// ratio is announced on the beeper, its original moved to the blank
/// directory and its thumbnail deleted.
pub fn process(
    property: &FieldcamProperty,
    beeper: &Beeper,
    original: &str,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    let basename = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("No basename in {}", original))?;
    let thumbnail = join(&[&property.path.dir.thumbnail, basename]);

    let size = (
        property.conf.picture.thumbnail_width,
        property.conf.picture.thumbnail_height,
    );
    thumb::resize_image(original, &thumbnail, size)?;

    let ratio = detector::blankness(&thumbnail)?;
    log::debug!("Blankness {:.3} for {}", ratio, basename);

    if detector::is_blank(ratio, property.conf.threshold.blank) {
        beeper.blank_warning();
        fs::rename(original, join(&[&property.path.dir.blank, basename]))?;
        fs::remove_file(&thumbnail)?;
        return Ok(Outcome::Blank);
    }

    Ok(Outcome::Kept)
}
