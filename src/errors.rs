// SPDX-License-Identifier: GPL-3.0-only

//! Error types for frame validation
//!
//! All validation happens when a frame view is constructed or a conversion
//! pass is entered. The per-pixel path itself never produces errors; it is
//! total over the validated coordinate domain.

use std::fmt;

/// Result type alias using FrameError
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised while validating frame geometry against plane buffers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Width or height is zero
    InvalidDimensions { width: u32, height: u32 },
    /// Luma row stride is smaller than the frame width
    LumaStrideTooSmall { stride: usize, width: u32 },
    /// Luma plane does not cover every addressed row
    LumaPlaneTooShort { required: usize, actual: usize },
    /// A chroma plane does not cover the highest reachable sample index
    ChromaPlaneTooShort {
        plane: &'static str,
        required: usize,
        actual: usize,
    },
    /// A contiguous frame buffer is smaller than its layout requires
    BufferTooShort { required: usize, actual: usize },
    /// Caller-supplied output buffer is too small for the RGBA frame
    OutputTooSmall { required: usize, actual: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::InvalidDimensions { width, height } => {
                write!(f, "Invalid frame dimensions: {}x{}", width, height)
            }
            FrameError::LumaStrideTooSmall { stride, width } => {
                write!(
                    f,
                    "Luma row stride {} is smaller than frame width {}",
                    stride, width
                )
            }
            FrameError::LumaPlaneTooShort { required, actual } => {
                write!(
                    f,
                    "Luma plane holds {} bytes but {} are addressed",
                    actual, required
                )
            }
            FrameError::ChromaPlaneTooShort {
                plane,
                required,
                actual,
            } => {
                write!(
                    f,
                    "{} plane holds {} bytes but {} are addressed",
                    plane, actual, required
                )
            }
            FrameError::BufferTooShort { required, actual } => {
                write!(
                    f,
                    "Frame buffer holds {} bytes but the layout requires {}",
                    actual, required
                )
            }
            FrameError::OutputTooSmall { required, actual } => {
                write!(
                    f,
                    "Output buffer holds {} bytes but the RGBA frame needs {}",
                    actual, required
                )
            }
        }
    }
}

impl std::error::Error for FrameError {}
