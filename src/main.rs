// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "yuv2rgba")]
#[command(about = "Convert raw YUV 4:2:0 frame dumps to RGBA images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw YUV 4:2:0 frame dump to a PNG image
    Convert {
        /// Input file containing one raw frame
        input: PathBuf,

        /// Frame width in pixels
        #[arg(short = 'W', long)]
        width: u32,

        /// Frame height in pixels
        #[arg(short = 'H', long)]
        height: u32,

        /// Chroma layout of the input: i420, nv12 or nv21
        #[arg(short, long, default_value = "nv12")]
        layout: String,

        /// Output file path (default: input name + timestamp, .png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print plane geometry for a frame of the given shape
    Info {
        /// Frame width in pixels
        #[arg(short = 'W', long)]
        width: u32,

        /// Frame height in pixels
        #[arg(short = 'H', long)]
        height: u32,

        /// Chroma layout: i420, nv12 or nv21
        #[arg(short, long, default_value = "nv12")]
        layout: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=yuv2rgba=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            width,
            height,
            layout,
            output,
        } => cli::convert_file(&input, width, height, &layout, output),
        Commands::Info {
            width,
            height,
            layout,
        } => cli::print_info(width, height, &layout),
    }
}
