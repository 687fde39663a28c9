//! Fixed table of generated icon targets.
//!
//! Every output file maps to one [`TargetSpec`]. The favicon container
//! embeds [`FAVICON_SIZES`]; each entry of [`PLATFORM_ICONS`] becomes its
//! own `<name>.png`.

use std::fmt;

/// Output file name of the multi-size favicon.
pub const FAVICON_FILE: &str = "favicon.ico";

/// A named output canvas with a fixed pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl TargetSpec {
    pub const fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    pub const fn square(name: &'static str, size: u32) -> Self {
        Self::new(name, size, size)
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// PNG file name for this target (`<name>.png`).
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Favicon entries, smallest first (the primary entry for single-image readers).
pub const FAVICON_SIZES: [TargetSpec; 3] = [
    TargetSpec::square("favicon-16", 16),
    TargetSpec::square("favicon-32", 32),
    TargetSpec::square("favicon-48", 48),
];

/// Standalone platform PNG icons.
pub const PLATFORM_ICONS: [TargetSpec; 4] = [
    TargetSpec::square("apple-touch-icon", 180),
    TargetSpec::square("android-chrome-192", 192),
    TargetSpec::square("android-chrome-512", 512),
    TargetSpec::square("mstile", 144),
];

/// Every file a full run writes, in generation order.
pub fn all_outputs() -> Vec<String> {
    std::iter::once(FAVICON_FILE.to_string())
        .chain(PLATFORM_ICONS.iter().map(TargetSpec::file_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_sizes_ascending() {
        let sizes: Vec<_> = FAVICON_SIZES.iter().map(|t| t.dimensions()).collect();
        assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48)]);
    }

    #[test]
    fn test_platform_table() {
        let table: Vec<_> = PLATFORM_ICONS
            .iter()
            .map(|t| (t.name, t.width, t.height))
            .collect();
        assert_eq!(
            table,
            vec![
                ("apple-touch-icon", 180, 180),
                ("android-chrome-192", 192, 192),
                ("android-chrome-512", 512, 512),
                ("mstile", 144, 144),
            ]
        );
    }

    #[test]
    fn test_all_outputs() {
        assert_eq!(
            all_outputs(),
            vec![
                "favicon.ico",
                "apple-touch-icon.png",
                "android-chrome-192.png",
                "android-chrome-512.png",
                "mstile.png",
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetSpec::new("banner", 310, 150).to_string(), "310x150");
    }
}
