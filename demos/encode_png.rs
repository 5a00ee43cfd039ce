//! PNG to rectangle-text example.
//!
//! Decodes a PNG, encodes it and writes the text next to it.
//!
//! Usage:
//!   cargo run --example encode_png -- input.png [output.rbs] [--runs]
//!
//! Without an output path the input path is reused with an `.rbs` extension.

use rbscodec::{encode_with_summary, EncoderOptions, PngImage, Strategy, FILE_EXTENSION};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let mut strategy = Strategy::Block;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--runs" {
            strategy = Strategy::Runs;
        } else {
            paths.push(PathBuf::from(arg));
        }
    }

    let Some(input) = paths.first().cloned() else {
        eprintln!("Usage: encode_png <input.png> [output.rbs] [--runs]");
        std::process::exit(2);
    };
    let output = paths
        .get(1)
        .cloned()
        .unwrap_or_else(|| input.with_extension(FILE_EXTENSION));

    let image = PngImage::open(&input)?;
    let options = EncoderOptions::default().with_strategy(strategy);
    let (text, summary) = encode_with_summary(&image, &options)?;

    std::fs::write(&output, text)?;

    println!(
        "{} -> {}: {} colors, {} rects, {} bytes",
        input.display(),
        output.display(),
        summary.colors,
        summary.rects,
        summary.bytes
    );

    Ok(())
}
