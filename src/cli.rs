// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for frame conversion
//!
//! This module provides command-line functionality for:
//! - Converting raw YUV frame dumps to PNG images
//! - Inspecting the plane geometry of a frame shape

use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use yuv2rgba::convert::convert_frame_parallel;
use yuv2rgba::frame::{ChromaLayout, Yuv420Frame};

/// Convert a raw frame dump to a PNG image
pub fn convert_file(
    input: &Path,
    width: u32,
    height: u32,
    layout: &str,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = parse_layout(layout)?;

    let data = std::fs::read(input)?;
    let expected = layout.frame_size(width, height);
    if data.len() > expected {
        warn!(
            expected,
            actual = data.len(),
            "Input is larger than one {}x{} {} frame; ignoring trailing bytes",
            width,
            height,
            layout
        );
    }

    let frame = Yuv420Frame::from_contiguous(&data, width, height, layout)?;

    let start = Instant::now();
    let rgba = convert_frame_parallel(&frame);
    info!(
        width,
        height,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Converted frame"
    );

    let image = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or("RGBA buffer does not match the frame dimensions")?;

    let output = output.unwrap_or_else(|| default_output_path(input));
    image.save(&output)?;
    println!("Saved {}", output.display());

    Ok(())
}

/// Print plane geometry for a frame of the given shape
pub fn print_info(
    width: u32,
    height: u32,
    layout: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let layout = parse_layout(layout)?;
    let (chroma_width, chroma_height) = ChromaLayout::chroma_dimensions(width, height);

    println!("{}x{} {}", width, height, layout);
    println!();
    println!(
        "  Y plane:  offset {:>8}  stride {:>6}  {} bytes",
        0,
        width,
        width as usize * height as usize
    );
    println!(
        "  U plane:  offset {:>8}  stride {:>6}  {}x{} samples, pixel stride {}",
        layout.u_offset(width, height),
        layout.uv_row_stride(width),
        chroma_width,
        chroma_height,
        layout.uv_pixel_stride()
    );
    println!(
        "  V plane:  offset {:>8}  stride {:>6}  {}x{} samples, pixel stride {}",
        layout.v_offset(width, height),
        layout.uv_row_stride(width),
        chroma_width,
        chroma_height,
        layout.uv_pixel_stride()
    );
    println!();
    println!("  Frame buffer: {} bytes", layout.frame_size(width, height));
    println!(
        "  RGBA output:  {} bytes",
        width as usize * height as usize * 4
    );

    Ok(())
}

fn parse_layout(layout: &str) -> Result<ChromaLayout, String> {
    ChromaLayout::from_format_str(layout)
        .ok_or_else(|| format!("Unknown chroma layout '{}' (expected i420, nv12 or nv21)", layout))
}

/// Default output path: input file name plus a timestamp, PNG extension
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    input.with_file_name(format!("{}_{}.png", stem, timestamp))
}
