//! Thumbnail Generation
//!

use image::imageops::FilterType;
use std::path::Path;

/// Generate a fit thumbnail of `orig` at `dest`.
///
/// Fit means crop-and-scale to exactly fill `size`, not a proportional
/// shrink. Generation is idempotent by destination existence: when `dest`
/// is already present nothing is written and `Ok(false)` is returned.
/// The picture gallery calls the same operation for on-demand thumbnails.
///
/// Fails when source and destination name the same file.
pub fn resize_image(
    orig: &str,
    dest: &str,
    size: (u32, u32),
) -> Result<bool, Box<dyn std::error::Error>> {
    if same_file(orig, dest) {
        return Err(format!(
            "Original and resized filename can not be the same: {}",
            orig
        )
        .into());
    }

    if Path::new(dest).exists() {
        return Ok(false);
    }

    log::debug!("Generating {}x{} image for {}", size.0, size.1, orig);
    let img = image::open(Path::new(orig))?;
    let thumb = img.resize_to_fill(size.0, size.1, FilterType::Lanczos3);
    thumb.save(dest)?;
    Ok(true)
}

/// Whether two paths resolve to the same file.
///
/// Falls back to literal comparison while either path does not exist yet.
fn same_file(a: &str, b: &str) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_test_image(path: &str, width: u32, height: u32) {
        let img = image::ImageBuffer::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn resize_idempotent_test() {
        let base = "/tmp/fieldcamtest/thumb_idempotent";
        fs::create_dir_all(base).unwrap();
        let orig = format!("{}/orig.png", base);
        let dest = format!("{}/thumb.png", base);
        let _ = fs::remove_file(&dest);
        write_test_image(&orig, 320, 240);

        // First call generates
        assert!(resize_image(&orig, &dest, (144, 108)).unwrap());
        let first = fs::read(&dest).unwrap();
        let thumb = image::open(&dest).unwrap().to_rgb8();
        assert_eq!(thumb.width(), 144);
        assert_eq!(thumb.height(), 108);

        // Second call skips and leaves the file untouched
        assert!(!resize_image(&orig, &dest, (144, 108)).unwrap());
        assert_eq!(fs::read(&dest).unwrap(), first);
    }

    #[test]
    fn resize_fit_fills_target_test() {
        let base = "/tmp/fieldcamtest/thumb_fit";
        fs::create_dir_all(base).unwrap();
        let orig = format!("{}/tall.png", base);
        let dest = format!("{}/tall_thumb.png", base);
        let _ = fs::remove_file(&dest);
        // Aspect ratio far from the target: fit must crop, not letterbox
        write_test_image(&orig, 100, 400);

        assert!(resize_image(&orig, &dest, (144, 108)).unwrap());
        let thumb = image::open(&dest).unwrap().to_rgb8();
        assert_eq!((thumb.width(), thumb.height()), (144, 108));
    }

    #[test]
    fn resize_same_path_test() {
        let base = "/tmp/fieldcamtest/thumb_same";
        fs::create_dir_all(base).unwrap();
        let orig = format!("{}/orig.png", base);
        write_test_image(&orig, 32, 32);

        assert!(resize_image(&orig, &orig, (16, 16)).is_err());
    }
}
