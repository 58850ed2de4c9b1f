// SPDX-License-Identifier: GPL-3.0-only

//! Borrowed views over YUV 4:2:0 frame planes
//!
//! A [`Yuv420Frame`] is a read-only view over the three logical planes of a
//! 4:2:0 frame: a full-resolution luma plane and two quarter-resolution
//! chroma planes. The chroma planes may be fully planar (one byte per
//! sample) or interleaved in a shared buffer (semi-planar, two bytes per
//! sample with U and V offset by one byte) — the distinction is carried by
//! `uv_pixel_stride` and never branches inside the per-pixel path.
//!
//! All geometry invariants are checked at construction so the conversion
//! passes can treat the view as total over `[0,width) × [0,height)`.

use crate::convert::kernel::{chroma_index, yuv_to_rgba};
use crate::errors::{FrameError, FrameResult};

/// Chroma plane arrangement within a contiguous 4:2:0 buffer
///
/// All three layouts carry the same sample count; they differ only in where
/// the chroma bytes sit relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromaLayout {
    /// Fully planar: Y plane, then U plane, then V plane
    I420,
    /// Semi-planar: Y plane, then one interleaved UV plane
    Nv12,
    /// Semi-planar: Y plane, then one interleaved VU plane
    Nv21,
}

impl ChromaLayout {
    /// Parse a layout from a format string (as used by the CLI)
    pub fn from_format_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i420" | "yu12" => Some(Self::I420),
            "nv12" => Some(Self::Nv12),
            "nv21" => Some(Self::Nv21),
            _ => None,
        }
    }

    /// Byte distance between horizontally adjacent chroma samples
    pub fn uv_pixel_stride(&self) -> usize {
        match self {
            Self::I420 => 1,
            Self::Nv12 | Self::Nv21 => 2,
        }
    }

    /// Chroma plane dimensions in samples for a frame of the given size
    ///
    /// 4:2:0 chroma covers the luma plane in 2×2 blocks, so odd dimensions
    /// round up (the last column/row of blocks is partially covered).
    pub fn chroma_dimensions(width: u32, height: u32) -> (usize, usize) {
        ((width as usize).div_ceil(2), (height as usize).div_ceil(2))
    }

    /// Byte distance between successive chroma rows in a tight buffer
    pub fn uv_row_stride(&self, width: u32) -> usize {
        let (chroma_width, _) = Self::chroma_dimensions(width, 1);
        chroma_width * self.uv_pixel_stride()
    }

    /// Byte offset of the U plane within a tight contiguous buffer
    pub fn u_offset(&self, width: u32, height: u32) -> usize {
        let luma_size = width as usize * height as usize;
        match self {
            Self::I420 | Self::Nv12 => luma_size,
            Self::Nv21 => luma_size + 1,
        }
    }

    /// Byte offset of the V plane within a tight contiguous buffer
    pub fn v_offset(&self, width: u32, height: u32) -> usize {
        let luma_size = width as usize * height as usize;
        let (chroma_width, chroma_height) = Self::chroma_dimensions(width, height);
        match self {
            Self::I420 => luma_size + chroma_width * chroma_height,
            Self::Nv12 => luma_size + 1,
            Self::Nv21 => luma_size,
        }
    }

    /// Total byte size of a tight contiguous buffer in this layout
    ///
    /// Identical for all layouts: luma plane plus two chroma planes at a
    /// quarter resolution each (width * height * 3 / 2 for even dimensions).
    pub fn frame_size(&self, width: u32, height: u32) -> usize {
        let (chroma_width, chroma_height) = Self::chroma_dimensions(width, height);
        width as usize * height as usize + 2 * chroma_width * chroma_height
    }
}

impl std::fmt::Display for ChromaLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChromaLayout::I420 => write!(f, "I420"),
            ChromaLayout::Nv12 => write!(f, "NV12"),
            ChromaLayout::Nv21 => write!(f, "NV21"),
        }
    }
}

/// Read-only view over the planes of one YUV 4:2:0 frame
///
/// Holds no pixel data of its own; conversion reads the borrowed planes and
/// is free of side effects, so a frame may be shared across any number of
/// worker threads.
#[derive(Clone, Copy)]
pub struct Yuv420Frame<'a> {
    width: u32,
    height: u32,
    y_plane: &'a [u8],
    y_row_stride: usize,
    u_plane: &'a [u8],
    v_plane: &'a [u8],
    uv_pixel_stride: usize,
    uv_row_stride: usize,
}

impl std::fmt::Debug for Yuv420Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Yuv420Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("y_row_stride", &self.y_row_stride)
            .field("uv_pixel_stride", &self.uv_pixel_stride)
            .field("uv_row_stride", &self.uv_row_stride)
            .finish()
    }
}

impl<'a> Yuv420Frame<'a> {
    /// Create a frame view from individual plane references
    ///
    /// For interleaved (semi-planar) chroma, pass the shared buffer as
    /// `u_plane` and the same buffer offset by one byte as `v_plane` (or
    /// swapped, for VU order) with `uv_pixel_stride == 2`.
    ///
    /// Validates every invariant the conversion passes rely on:
    /// - `width` and `height` are positive
    /// - `y_row_stride >= width`, and the luma plane covers all addressed
    ///   rows (the final row needs no padding past `width`)
    /// - both chroma planes cover the highest chroma index reachable from
    ///   the coordinate domain
    #[allow(clippy::too_many_arguments)]
    pub fn from_planes(
        width: u32,
        height: u32,
        y_plane: &'a [u8],
        y_row_stride: usize,
        u_plane: &'a [u8],
        v_plane: &'a [u8],
        uv_pixel_stride: usize,
        uv_row_stride: usize,
    ) -> FrameResult<Self> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        if y_row_stride < width as usize {
            return Err(FrameError::LumaStrideTooSmall {
                stride: y_row_stride,
                width,
            });
        }

        let luma_required = (height as usize - 1) * y_row_stride + width as usize;
        if y_plane.len() < luma_required {
            return Err(FrameError::LumaPlaneTooShort {
                required: luma_required,
                actual: y_plane.len(),
            });
        }

        let chroma_required = chroma_index(width - 1, height - 1, uv_pixel_stride, uv_row_stride) + 1;
        if u_plane.len() < chroma_required {
            return Err(FrameError::ChromaPlaneTooShort {
                plane: "U",
                required: chroma_required,
                actual: u_plane.len(),
            });
        }
        if v_plane.len() < chroma_required {
            return Err(FrameError::ChromaPlaneTooShort {
                plane: "V",
                required: chroma_required,
                actual: v_plane.len(),
            });
        }

        Ok(Self {
            width,
            height,
            y_plane,
            y_row_stride,
            u_plane,
            v_plane,
            uv_pixel_stride,
            uv_row_stride,
        })
    }

    /// Create a frame view over one tightly-packed contiguous buffer
    ///
    /// Slices the buffer into plane views according to `layout`. Trailing
    /// bytes past the frame are ignored.
    pub fn from_contiguous(
        data: &'a [u8],
        width: u32,
        height: u32,
        layout: ChromaLayout,
    ) -> FrameResult<Self> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }

        let required = layout.frame_size(width, height);
        if data.len() < required {
            return Err(FrameError::BufferTooShort {
                required,
                actual: data.len(),
            });
        }

        Self::from_planes(
            width,
            height,
            data,
            width as usize,
            &data[layout.u_offset(width, height)..],
            &data[layout.v_offset(width, height)..],
            layout.uv_pixel_stride(),
            layout.uv_row_stride(width),
        )
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte size of the RGBA8 rendition of this frame
    pub fn rgba_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    /// Convert the pixel at (x, y) to RGBA
    ///
    /// Coordinates must lie in `[0,width) × [0,height)`; anything else is a
    /// caller error. Indexing stays bounds-checked, so a violated contract
    /// panics instead of reading out of bounds.
    #[inline]
    pub fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);

        let uv_index = chroma_index(x, y, self.uv_pixel_stride, self.uv_row_stride);
        let luma = self.y_plane[y as usize * self.y_row_stride + x as usize];

        yuv_to_rgba(luma, self.u_plane[uv_index], self.v_plane[uv_index])
    }

    /// Copy the logical frame into a tight contiguous buffer
    ///
    /// Drops any luma row padding and rewrites the chroma samples in the
    /// requested layout. The result round-trips through
    /// [`Yuv420Frame::from_contiguous`] with identical conversion output.
    pub fn repack(&self, layout: ChromaLayout) -> Vec<u8> {
        let width = self.width as usize;
        let (chroma_width, chroma_height) = ChromaLayout::chroma_dimensions(self.width, self.height);
        let mut out = vec![0u8; layout.frame_size(self.width, self.height)];

        for row in 0..self.height as usize {
            let src = row * self.y_row_stride;
            out[row * width..(row + 1) * width].copy_from_slice(&self.y_plane[src..src + width]);
        }

        let u_offset = layout.u_offset(self.width, self.height);
        let v_offset = layout.v_offset(self.width, self.height);
        let out_pixel_stride = layout.uv_pixel_stride();
        let out_row_stride = layout.uv_row_stride(self.width);

        for sample_y in 0..chroma_height {
            for sample_x in 0..chroma_width {
                let src = sample_x * self.uv_pixel_stride + sample_y * self.uv_row_stride;
                let dst = sample_x * out_pixel_stride + sample_y * out_row_stride;
                out[u_offset + dst] = self.u_plane[src];
                out[v_offset + dst] = self.v_plane[src];
            }
        }

        out
    }
}
