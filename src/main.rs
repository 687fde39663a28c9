//! favicon-forge - Generate a favicon and platform icons from one image.

mod cli;
mod icon;
mod logger;

use clap::{ColorChoice, Parser};
use cli::{Cli, generate::generate_icons};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Single-line report for every failure kind, non-zero exit
    match generate_icons(&cli.input_image, &cli.output) {
        Ok(generated) => {
            debug!("done"; "{} files written", generated.files.len());
            log!("done"; "all icons generated successfully in: {}", generated.output_dir.display());
        }
        Err(e) => {
            log!("error"; "error generating icons: {:#}", e);
            std::process::exit(1);
        }
    }
}
