//! Icon set generation orchestration.
//!
//! Phases:
//! - **Decode** - open the source image and normalize it to RGBA
//! - **Prepare** - create the output directory (with parents)
//! - **Favicon** - write the multi-size `favicon.ico`
//! - **Platform** - write each fixed-size platform PNG
//!
//! Nothing is rolled back: files written before a failure stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::icon::target::all_outputs;
use crate::icon::{IconError, write_favicon, write_platform_icons};
use crate::debug;

/// Files produced by a successful run.
#[derive(Debug)]
pub struct Generated {
    pub output_dir: PathBuf,
    /// Written files in generation order
    pub files: Vec<PathBuf>,
}

/// Decode `path` into an RGBA buffer.
///
/// The file handle is released before this returns.
pub fn load_source(path: &Path) -> Result<RgbaImage, IconError> {
    let img = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(IconError::InvalidImage { width, height });
    }
    debug!("decode"; "{} ({}x{}, {:?})", path.display(), width, height, img.color());

    Ok(img.into_rgba8())
}

/// Generate the full icon set from `input` into `output`.
pub fn generate_icons(input: &Path, output: &Path) -> Result<Generated> {
    let source = load_source(input)?;

    fs::create_dir_all(output)
        .map_err(|e| IconError::io(output, e))
        .context("failed to create output directory")?;
    debug!("output"; "{}", output.display());

    let mut files = Vec::with_capacity(all_outputs().len());
    files.push(write_favicon(&source, output)?);
    files.extend(write_platform_icons(&source, output)?);

    Ok(Generated {
        output_dir: output.to_path_buf(),
        files,
    })
}
