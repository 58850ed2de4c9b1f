// SPDX-License-Identifier: GPL-3.0-only

//! YUV 4:2:0 to RGBA conversion for camera frame pipelines
//!
//! This library converts 8-bit YUV 4:2:0 frames (planar I420 or the
//! semi-planar NV12/NV21 variants, with arbitrary row padding) into packed
//! 32-bit RGBA, using the fixed-point arithmetic camera preview pipelines
//! compare against bit-for-bit.
//!
//! # Architecture
//!
//! - [`frame`]: validated read-only views over frame planes
//! - [`convert`]: sequential and parallel full-frame passes
//! - [`convert::kernel`]: the stateless per-pixel kernel
//! - [`errors`]: validation error types
//!
//! # Example
//!
//! ```
//! use yuv2rgba::{ChromaLayout, Yuv420Frame, convert_frame};
//!
//! let layout = ChromaLayout::Nv12;
//! let data = vec![128u8; layout.frame_size(4, 4)];
//! let frame = Yuv420Frame::from_contiguous(&data, 4, 4, layout)?;
//! let rgba = convert_frame(&frame);
//! assert_eq!(rgba.len(), 4 * 4 * 4);
//! # Ok::<(), yuv2rgba::FrameError>(())
//! ```

pub mod convert;
pub mod errors;
pub mod frame;

// Re-export commonly used types
pub use convert::{convert_frame, convert_frame_into, convert_frame_parallel};
pub use errors::{FrameError, FrameResult};
pub use frame::{ChromaLayout, Yuv420Frame};
