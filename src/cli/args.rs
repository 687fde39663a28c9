//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Default output directory (relative to the current directory)
pub const DEFAULT_OUTPUT: &str = "icons";

/// Generate a favicon and platform icons from a single source image
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the input image
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input_image: PathBuf,

    /// Output directory path
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
