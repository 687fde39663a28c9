//! Icon generation primitives.
//!
//! # Modules
//!
//! - [`target`]: static table of output names and sizes
//! - [`canvas`]: aspect-preserving resize onto a transparent canvas
//! - [`favicon`]: multi-size `favicon.ico` assembly
//! - [`platform`]: fixed-size platform PNG icons
//! - [`error`]: error taxonomy shared by the above

pub mod canvas;
pub mod error;
pub mod favicon;
pub mod platform;
pub mod target;

pub use error::IconError;
pub use favicon::write_favicon;
pub use platform::write_platform_icons;
