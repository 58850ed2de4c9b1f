// SPDX-License-Identifier: GPL-3.0-only

//! Full-frame YUV 4:2:0 to RGBA conversion passes
//!
//! The per-pixel kernel lives in [`kernel`]; this module owns the dispatch
//! over the `[0,width) × [0,height)` domain. Every pixel is independent —
//! inputs are read-only and each output pixel is written exactly once — so
//! the parallel pass needs no synchronization and produces output
//! bit-identical to the sequential one.
//!
//! Output packing is 4 bytes per pixel in R, G, B, A order, rows top to
//! bottom with no padding.

pub mod kernel;

use crate::errors::{FrameError, FrameResult};
use crate::frame::Yuv420Frame;
use rayon::prelude::*;
use tracing::debug;

/// Bytes per output pixel (R, G, B, A)
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Convert a frame to a freshly allocated RGBA buffer, single-threaded
pub fn convert_frame(frame: &Yuv420Frame) -> Vec<u8> {
    let mut rgba = vec![0u8; frame.rgba_len()];
    let row_bytes = frame.width() as usize * RGBA_BYTES_PER_PIXEL;

    for (y, row) in rgba.chunks_exact_mut(row_bytes).enumerate() {
        convert_row(frame, y as u32, row);
    }

    rgba
}

/// Convert a frame into a caller-owned RGBA buffer
///
/// The buffer must hold at least `width * height * 4` bytes; trailing bytes
/// are left untouched.
pub fn convert_frame_into(frame: &Yuv420Frame, rgba: &mut [u8]) -> FrameResult<()> {
    let required = frame.rgba_len();
    if rgba.len() < required {
        return Err(FrameError::OutputTooSmall {
            required,
            actual: rgba.len(),
        });
    }

    let row_bytes = frame.width() as usize * RGBA_BYTES_PER_PIXEL;
    for (y, row) in rgba[..required].chunks_exact_mut(row_bytes).enumerate() {
        convert_row(frame, y as u32, row);
    }

    Ok(())
}

/// Convert a frame to a freshly allocated RGBA buffer, one row per task
///
/// Rows are distributed across the rayon thread pool. Output is
/// bit-identical to [`convert_frame`].
pub fn convert_frame_parallel(frame: &Yuv420Frame) -> Vec<u8> {
    debug!(
        width = frame.width(),
        height = frame.height(),
        "Converting frame on the rayon pool"
    );

    let mut rgba = vec![0u8; frame.rgba_len()];
    let row_bytes = frame.width() as usize * RGBA_BYTES_PER_PIXEL;

    rgba.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| convert_row(frame, y as u32, row));

    rgba
}

/// Convert one output row
#[inline]
fn convert_row(frame: &Yuv420Frame, y: u32, row: &mut [u8]) {
    let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(row);
    for (x, pixel) in pixels.iter_mut().enumerate() {
        *pixel = frame.rgba_at(x as u32, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ChromaLayout;

    /// 8x6 NV12 frame with a deterministic pattern in every plane
    fn test_frame_data() -> Vec<u8> {
        let layout = ChromaLayout::Nv12;
        let mut data = vec![0u8; layout.frame_size(8, 6)];
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = (i * 7 % 256) as u8;
        }
        data
    }

    #[test]
    fn test_output_size() {
        let data = test_frame_data();
        let frame = Yuv420Frame::from_contiguous(&data, 8, 6, ChromaLayout::Nv12).unwrap();
        assert_eq!(convert_frame(&frame).len(), 8 * 6 * 4);
    }

    #[test]
    fn test_mid_gray_frame() {
        let layout = ChromaLayout::I420;
        let data = vec![128u8; layout.frame_size(4, 4)];
        let frame = Yuv420Frame::from_contiguous(&data, 4, 4, layout).unwrap();

        for pixel in convert_frame(&frame).chunks_exact(4) {
            assert!(pixel[0].abs_diff(128) <= 1);
            assert!(pixel[1].abs_diff(128) <= 1);
            assert!(pixel[2].abs_diff(128) <= 1);
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data = test_frame_data();
        let frame = Yuv420Frame::from_contiguous(&data, 8, 6, ChromaLayout::Nv12).unwrap();

        assert_eq!(convert_frame(&frame), convert_frame_parallel(&frame));
    }

    #[test]
    fn test_deterministic() {
        let data = test_frame_data();
        let frame = Yuv420Frame::from_contiguous(&data, 8, 6, ChromaLayout::Nv12).unwrap();

        assert_eq!(convert_frame(&frame), convert_frame(&frame));
        assert_eq!(convert_frame_parallel(&frame), convert_frame_parallel(&frame));
    }

    #[test]
    fn test_convert_into_matches_allocating() {
        let data = test_frame_data();
        let frame = Yuv420Frame::from_contiguous(&data, 8, 6, ChromaLayout::Nv12).unwrap();

        let mut rgba = vec![0u8; frame.rgba_len()];
        convert_frame_into(&frame, &mut rgba).unwrap();
        assert_eq!(rgba, convert_frame(&frame));
    }

    #[test]
    fn test_convert_into_rejects_short_buffer() {
        let data = test_frame_data();
        let frame = Yuv420Frame::from_contiguous(&data, 8, 6, ChromaLayout::Nv12).unwrap();

        let mut rgba = vec![0u8; frame.rgba_len() - 1];
        assert_eq!(
            convert_frame_into(&frame, &mut rgba).unwrap_err(),
            FrameError::OutputTooSmall {
                required: 8 * 6 * 4,
                actual: 8 * 6 * 4 - 1,
            }
        );
    }

    #[test]
    fn test_convert_into_leaves_trailing_bytes() {
        let data = test_frame_data();
        let frame = Yuv420Frame::from_contiguous(&data, 8, 6, ChromaLayout::Nv12).unwrap();

        let mut rgba = vec![0xABu8; frame.rgba_len() + 8];
        convert_frame_into(&frame, &mut rgba).unwrap();
        assert!(rgba[frame.rgba_len()..].iter().all(|&b| b == 0xAB));
    }
}
