//! Multi-size favicon (ICO) assembly.

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};

use super::canvas::fit_to_canvas;
use super::error::IconError;
use super::target::{FAVICON_FILE, FAVICON_SIZES};
use crate::log;

/// Encode every favicon size into one ICO container.
///
/// Entries are PNG-compressed and stored smallest first.
pub fn encode_favicon(source: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut frames = Vec::with_capacity(FAVICON_SIZES.len());
    for target in &FAVICON_SIZES {
        let canvas = fit_to_canvas(source, target)?;
        let frame = IcoFrame::as_png(
            canvas.as_raw(),
            target.width,
            target.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::encode(FAVICON_FILE, e))?;
        frames.push(frame);
    }

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&frames)
        .map_err(|e| IconError::encode(FAVICON_FILE, e))?;
    Ok(bytes)
}

/// Write `favicon.ico` into `out_dir` and return its path.
pub fn write_favicon(source: &RgbaImage, out_dir: &Path) -> Result<PathBuf, IconError> {
    let bytes = encode_favicon(source)?;
    let path = out_dir.join(FAVICON_FILE);
    fs::write(&path, bytes).map_err(|e| IconError::io(&path, e))?;

    let sizes: Vec<_> = FAVICON_SIZES.iter().map(ToString::to_string).collect();
    log!("favicon"; "created {} with sizes {}", FAVICON_FILE, sizes.join(", "));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba};
    use tempfile::TempDir;

    use super::*;

    /// One ICO directory entry: (width, height, data offset, data length)
    fn ico_entries(bytes: &[u8]) -> Vec<(u32, u32, usize, usize)> {
        let u16_at = |i: usize| u16::from_le_bytes([bytes[i], bytes[i + 1]]);
        let u32_at =
            |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        // 0 in the size byte means 256
        let dim = |b: u8| if b == 0 { 256 } else { u32::from(b) };

        assert_eq!(u16_at(0), 0, "reserved");
        assert_eq!(u16_at(2), 1, "resource type icon");
        let count = usize::from(u16_at(4));

        (0..count)
            .map(|n| {
                let entry = 6 + 16 * n;
                (
                    dim(bytes[entry]),
                    dim(bytes[entry + 1]),
                    u32_at(entry + 12) as usize,
                    u32_at(entry + 8) as usize,
                )
            })
            .collect()
    }

    fn wide_source() -> RgbaImage {
        RgbaImage::from_pixel(400, 100, Rgba([0, 128, 255, 255]))
    }

    #[test]
    fn test_favicon_has_three_entries() {
        let bytes = encode_favicon(&wide_source()).unwrap();
        let sizes: Vec<_> = ico_entries(&bytes).iter().map(|e| (e.0, e.1)).collect();
        assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48)]);
    }

    #[test]
    fn test_every_entry_is_retrievable() {
        let bytes = encode_favicon(&wide_source()).unwrap();
        for (width, height, offset, len) in ico_entries(&bytes) {
            let png = &bytes[offset..offset + len];
            let img = image::load_from_memory_with_format(png, ImageFormat::Png)
                .unwrap()
                .to_rgba8();
            assert_eq!(img.dimensions(), (width, height));
            // Wide source: first row is padding
            assert_eq!(img.get_pixel(width / 2, 0)[3], 0);
        }
    }

    #[test]
    fn test_favicon_decodes_as_ico() {
        let bytes = encode_favicon(&wide_source()).unwrap();
        let img = image::load_from_memory_with_format(&bytes, ImageFormat::Ico).unwrap();
        // The decoder picks the largest entry
        assert_eq!((img.width(), img.height()), (48, 48));
    }

    #[test]
    fn test_write_favicon() {
        let dir = TempDir::new().unwrap();
        let path = write_favicon(&wide_source(), dir.path()).unwrap();

        assert_eq!(path, dir.path().join("favicon.ico"));
        let bytes = fs::read(&path).unwrap();
        assert_eq!(ico_entries(&bytes).len(), 3);
    }

    #[test]
    fn test_write_favicon_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("not-created");
        let err = write_favicon(&wide_source(), &missing).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
    }
}
