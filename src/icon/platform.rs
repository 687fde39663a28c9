//! Fixed-size platform PNG icons (touch, Android/Chrome, tile).

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use super::canvas::fit_to_canvas;
use super::error::IconError;
use super::target::{PLATFORM_ICONS, TargetSpec};
use crate::log;

/// Fit `source` to `target` and save it as `<out_dir>/<name>.png`.
pub fn write_png_icon(
    source: &RgbaImage,
    target: &TargetSpec,
    out_dir: &Path,
) -> Result<PathBuf, IconError> {
    let canvas = fit_to_canvas(source, target)?;
    let path = out_dir.join(target.file_name());
    canvas
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(err) => IconError::io(&path, err),
            other => IconError::encode(&path, other),
        })?;

    log!("icon"; "created {} ({})", target.file_name(), target);
    Ok(path)
}

/// Write every platform icon into `out_dir`.
///
/// Stops at the first failure; files written before it stay on disk.
pub fn write_platform_icons(source: &RgbaImage, out_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    PLATFORM_ICONS
        .iter()
        .map(|target| write_png_icon(source, target, out_dir))
        .collect()
}
