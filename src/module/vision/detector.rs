//! Provide Blank Frame Detection
//!

use image::Pixel;
use std::path::Path;

// Per-channel histogram bins
const BINS: usize = 256;

/// Ratio of empty histogram bins over an image's color channels.
///
/// A near-uniform frame (lens cap on, pitch dark) populates only a handful
/// of bins, pushing the ratio toward 1.0. Computed over the thumbnail
/// rather than the original, which is much cheaper.
pub fn blankness(path: &str) -> Result<f32, Box<dyn std::error::Error>> {
    let img = image::open(Path::new(path))?.to_rgb8();

    let mut bins = [[0u32; BINS]; 3];
    for pixel in img.pixels() {
        let channels = pixel.channels();
        for (c, bin) in bins.iter_mut().enumerate() {
            bin[channels[c] as usize] += 1;
        }
    }

    let zero = bins.iter().flatten().filter(|&&count| count == 0).count();
    Ok(zero as f32 / (BINS * 3) as f32)
}

/// Whether a blankness ratio classifies the frame as blank.
///
pub fn is_blank(ratio: f32, threshold: f32) -> bool {
    ratio > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn blankness_uniform_test() {
        let base = "/tmp/fieldcamtest/detector_uniform";
        fs::create_dir_all(base).unwrap();
        let path = format!("{}/black.png", base);
        let img = image::ImageBuffer::from_pixel(16, 12, image::Rgb([0u8, 0, 0]));
        img.save(&path).unwrap();

        // One populated bin per channel: 765 of 768 bins empty
        let ratio = blankness(&path).unwrap();
        assert!(ratio > 0.99);
        assert!(is_blank(ratio, 0.89));
    }

    #[test]
    fn blankness_gradient_test() {
        let base = "/tmp/fieldcamtest/detector_gradient";
        fs::create_dir_all(base).unwrap();
        let path = format!("{}/gradient.png", base);
        let img = image::ImageBuffer::from_fn(256, 4, |x, _| {
            image::Rgb([x as u8, (255 - x) as u8, (x / 2) as u8])
        });
        img.save(&path).unwrap();

        let ratio = blankness(&path).unwrap();
        assert!(ratio < 0.89);
        assert!(!is_blank(ratio, 0.89));
    }

    #[test]
    fn is_blank_strict_threshold_test() {
        // Classification requires strictly exceeding the threshold
        assert!(!is_blank(0.89, 0.89));
        assert!(is_blank(0.90, 0.89));
    }

    #[test]
    fn blankness_unreadable_test() {
        assert!(blankness("/tmp/fieldcamtest/no_such_image.png").is_err());
    }
}
