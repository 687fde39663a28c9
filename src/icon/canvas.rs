//! Aspect-preserving resize onto a transparent canvas.
//!
//! The source is scaled to fit entirely inside the target, centered, and the
//! leftover axis is padded with fully transparent pixels (letterboxing).

use image::{RgbaImage, imageops, imageops::FilterType};

use super::error::IconError;
use super::target::TargetSpec;

/// Where the scaled source lands on the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Scaled content width
    pub width: u32,
    /// Scaled content height
    pub height: u32,
    /// Left offset of the content
    pub x: u32,
    /// Top offset of the content
    pub y: u32,
}

impl Placement {
    /// Whether any transparent padding surrounds the content.
    pub const fn is_padded(&self, target_width: u32, target_height: u32) -> bool {
        self.width != target_width || self.height != target_height
    }
}

/// Compute the scaled size and offset of a `src` image fitted into `dst`.
///
/// The fitted axis matches the target exactly; the other axis is rounded to
/// the nearest pixel and kept at least one pixel. Offsets use integer
/// division, so an odd remainder leaves the extra pixel on the bottom/right.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_within(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<Placement, IconError> {
    if src_width == 0 || src_height == 0 {
        return Err(IconError::InvalidImage {
            width: src_width,
            height: src_height,
        });
    }
    if dst_width == 0 || dst_height == 0 {
        return Err(IconError::InvalidTarget {
            width: dst_width,
            height: dst_height,
        });
    }

    let target_ratio = f64::from(dst_width) / f64::from(dst_height);
    let source_ratio = f64::from(src_width) / f64::from(src_height);

    let (width, height) = if source_ratio > target_ratio {
        // Wider than the target: fill width, pad top/bottom
        let height = (f64::from(dst_width) / source_ratio).round() as u32;
        (dst_width, height.clamp(1, dst_height))
    } else {
        // Taller or equal: fill height, pad left/right
        let width = (f64::from(dst_height) * source_ratio).round() as u32;
        (width.clamp(1, dst_width), dst_height)
    };

    Ok(Placement {
        width,
        height,
        x: (dst_width - width) / 2,
        y: (dst_height - height) / 2,
    })
}

/// Resize `source` into a new transparent canvas of exactly the target size.
///
/// Uses Lanczos3 resampling. The scaled pixels are copied, not blended, so
/// source alpha is kept as-is.
pub fn fit_to_canvas(source: &RgbaImage, target: &TargetSpec) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = source.dimensions();
    let (dst_width, dst_height) = target.dimensions();
    let placement = fit_within(src_width, src_height, dst_width, dst_height)?;

    crate::debug!(
        "canvas";
        "{} {}x{} -> {}x{} at ({}, {}) on {}{}",
        target.name,
        src_width,
        src_height,
        placement.width,
        placement.height,
        placement.x,
        placement.y,
        target,
        if placement.is_padded(dst_width, dst_height) { " (padded)" } else { "" }
    );

    let scaled = imageops::resize(
        source,
        placement.width,
        placement.height,
        FilterType::Lanczos3,
    );

    // Zero-initialized buffer: every pixel starts at (0, 0, 0, 0)
    let mut canvas = RgbaImage::new(dst_width, dst_height);
    imageops::replace(
        &mut canvas,
        &scaled,
        i64::from(placement.x),
        i64::from(placement.y),
    );
    Ok(canvas)
}
