//! Spatial patch transform (im2col / col2im)
//!
//! Converts between a multi-channel 2D image and its "unfolded" column
//! representation, so a convolution becomes one dense matrix multiply
//! against the column buffer. [`col2im()`] is the adjoint: it scatters
//! column entries back to the spatial locations they were read from,
//! accumulating by summation, which is exactly the gradient of
//! [`im2col()`].
//!
//! # Layouts
//!
//! [`Layout::ChannelMajor`] stores the image as (channel, row, column) and
//! the column buffer as (channel, kernel row, kernel column, output row,
//! output column). [`Layout::ChannelMinor`] stores the image as (row,
//! column, channel) and the column buffer with the kernel footprint per
//! output position, channels fastest.
//!
//! # Padding semantics
//!
//! Kernel taps that land in the implicit zero-padding read as zero in the
//! forward direction and are discarded by the inverse. The column buffer
//! is always consumed in raster order either way; only the image-side
//! access is skipped.

mod col2im;
mod im2col;

pub use col2im::col2im;
pub use im2col::im2col;

use crate::error::{Error, Result};

/// Memory layout of the spatial image buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Channel, then row, then column (NCHW per image)
    ChannelMajor,
    /// Row, then column, then channel (NHWC per image)
    ChannelMinor,
}

/// Geometry of a patch transform
///
/// Padding is specified independently per side; the symmetric-padding fast
/// path engages when top equals bottom and left equals right. Output
/// extents are derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchGeometry {
    /// Number of channels
    pub channels: usize,
    /// Input height
    pub height: usize,
    /// Input width
    pub width: usize,
    /// Kernel height
    pub kernel_h: usize,
    /// Kernel width
    pub kernel_w: usize,
    /// Dilation along the height axis
    pub dilation_h: usize,
    /// Dilation along the width axis
    pub dilation_w: usize,
    /// Padding above the first input row
    pub pad_top: usize,
    /// Padding left of the first input column
    pub pad_left: usize,
    /// Padding below the last input row
    pub pad_bottom: usize,
    /// Padding right of the last input column
    pub pad_right: usize,
    /// Stride along the height axis
    pub stride_h: usize,
    /// Stride along the width axis
    pub stride_w: usize,
}

/// Output extent of one spatial axis:
/// `(input + pad_before + pad_after - (dilation * (kernel - 1) + 1)) / stride + 1`
/// with floor division, or 0 when the dilated kernel exceeds the padded input.
#[inline]
pub fn output_size(
    input: usize,
    kernel: usize,
    stride: usize,
    dilation: usize,
    pad_before: usize,
    pad_after: usize,
) -> usize {
    let dilated_kernel = dilation * (kernel - 1) + 1;
    let padded = input + pad_before + pad_after;
    if padded < dilated_kernel {
        0
    } else {
        (padded - dilated_kernel) / stride + 1
    }
}

impl PatchGeometry {
    /// Geometry with unit stride/dilation and no padding
    pub fn unpadded(
        channels: usize,
        height: usize,
        width: usize,
        kernel_h: usize,
        kernel_w: usize,
    ) -> Self {
        Self {
            channels,
            height,
            width,
            kernel_h,
            kernel_w,
            dilation_h: 1,
            dilation_w: 1,
            pad_top: 0,
            pad_left: 0,
            pad_bottom: 0,
            pad_right: 0,
            stride_h: 1,
            stride_w: 1,
        }
    }

    /// Returns the geometry with the given strides
    pub fn with_stride(mut self, stride_h: usize, stride_w: usize) -> Self {
        self.stride_h = stride_h;
        self.stride_w = stride_w;
        self
    }

    /// Returns the geometry with the given dilations
    pub fn with_dilation(mut self, dilation_h: usize, dilation_w: usize) -> Self {
        self.dilation_h = dilation_h;
        self.dilation_w = dilation_w;
        self
    }

    /// Returns the geometry with symmetric padding per axis
    pub fn with_padding(mut self, pad_h: usize, pad_w: usize) -> Self {
        self.pad_top = pad_h;
        self.pad_bottom = pad_h;
        self.pad_left = pad_w;
        self.pad_right = pad_w;
        self
    }

    /// Returns the geometry with independently specified padding
    /// (top, left, bottom, right)
    pub fn with_padding_tlbr(mut self, top: usize, left: usize, bottom: usize, right: usize) -> Self {
        self.pad_top = top;
        self.pad_left = left;
        self.pad_bottom = bottom;
        self.pad_right = right;
        self
    }

    /// Derived output height
    #[inline]
    pub fn output_h(&self) -> usize {
        output_size(
            self.height,
            self.kernel_h,
            self.stride_h,
            self.dilation_h,
            self.pad_top,
            self.pad_bottom,
        )
    }

    /// Derived output width
    #[inline]
    pub fn output_w(&self) -> usize {
        output_size(
            self.width,
            self.kernel_w,
            self.stride_w,
            self.dilation_w,
            self.pad_left,
            self.pad_right,
        )
    }

    /// Number of elements in the image buffer
    #[inline]
    pub fn image_len(&self) -> usize {
        self.channels * self.height * self.width
    }

    /// Number of elements in the column buffer
    #[inline]
    pub fn col_len(&self) -> usize {
        self.channels * self.kernel_h * self.kernel_w * self.output_h() * self.output_w()
    }

    /// True when both paddings are zero and both dilations are one
    #[inline]
    pub(crate) fn is_unpadded_unit_dilation(&self) -> bool {
        self.dilation_h == 1
            && self.dilation_w == 1
            && self.pad_top == 0
            && self.pad_bottom == 0
            && self.pad_left == 0
            && self.pad_right == 0
    }

    /// True when padding is symmetric on both axes
    #[inline]
    pub(crate) fn is_symmetric_padding(&self) -> bool {
        self.pad_top == self.pad_bottom && self.pad_left == self.pad_right
    }

    /// Rejects geometry the transform cannot run over
    ///
    /// Zero channels, extents, kernel, stride, or dilation, and geometry
    /// whose derived output extent is zero (dilated kernel larger than the
    /// padded input) are all rejected here, before any fast path is
    /// selected.
    pub fn validate(&self) -> Result<()> {
        for (value, arg) in [
            (self.channels, "channels"),
            (self.height, "height"),
            (self.width, "width"),
            (self.kernel_h, "kernel_h"),
            (self.kernel_w, "kernel_w"),
            (self.dilation_h, "dilation_h"),
            (self.dilation_w, "dilation_w"),
            (self.stride_h, "stride_h"),
            (self.stride_w, "stride_w"),
        ] {
            if value == 0 {
                return Err(Error::invalid_argument(arg, "must be positive"));
            }
        }
        if self.output_h() == 0 || self.output_w() == 0 {
            return Err(Error::invalid_argument(
                "kernel",
                format!(
                    "dilated kernel ({}x{}) exceeds padded input ({}x{})",
                    self.dilation_h * (self.kernel_h - 1) + 1,
                    self.dilation_w * (self.kernel_w - 1) + 1,
                    self.height + self.pad_top + self.pad_bottom,
                    self.width + self.pad_left + self.pad_right,
                ),
            ));
        }
        Ok(())
    }

    /// Validates geometry and both buffer lengths for one transform call
    pub(crate) fn check_buffers(&self, image_len: usize, col_len: usize) -> Result<()> {
        self.validate()?;
        if image_len != self.image_len() {
            return Err(Error::LengthMismatch {
                lhs: image_len,
                rhs: self.image_len(),
            });
        }
        if col_len != self.col_len() {
            return Err(Error::LengthMismatch {
                lhs: col_len,
                rhs: self.col_len(),
            });
        }
        Ok(())
    }
}

/// Bounds test `0 <= a < b` as a single comparison
///
/// Casting a negative `a` to `usize` yields a value far above any valid
/// extent, so one unsigned comparison covers both ends of the range.
#[inline]
pub(crate) fn in_bounds(a: isize, b: usize) -> bool {
    (a as usize) < b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_size() {
        // 5 input, 3 kernel, stride 1, no padding
        assert_eq!(output_size(5, 3, 1, 1, 0, 0), 3);
        // with padding
        assert_eq!(output_size(5, 3, 1, 1, 1, 1), 5);
        // with stride
        assert_eq!(output_size(7, 3, 2, 1, 0, 0), 3);
        // with dilation: effective kernel = 5
        assert_eq!(output_size(7, 3, 1, 2, 0, 0), 3);
        // dilated kernel exceeds input
        assert_eq!(output_size(3, 3, 1, 2, 0, 0), 0);
    }

    #[test]
    fn test_geometry_lengths() {
        let g = PatchGeometry::unpadded(3, 8, 8, 3, 3);
        assert_eq!(g.output_h(), 6);
        assert_eq!(g.output_w(), 6);
        assert_eq!(g.image_len(), 3 * 64);
        assert_eq!(g.col_len(), 3 * 9 * 36);
    }

    #[test]
    fn test_validate_rejects_oversized_kernel() {
        let g = PatchGeometry::unpadded(1, 3, 3, 3, 3).with_dilation(2, 2);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_stride() {
        let g = PatchGeometry::unpadded(1, 4, 4, 2, 2).with_stride(0, 1);
        assert!(g.validate().is_err());
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0, 4));
        assert!(in_bounds(3, 4));
        assert!(!in_bounds(4, 4));
        assert!(!in_bounds(-1, 4));
    }

    #[test]
    fn test_asymmetric_padding_output() {
        let g = PatchGeometry::unpadded(1, 4, 4, 3, 3).with_padding_tlbr(1, 0, 0, 2);
        assert_eq!(g.output_h(), 3);
        assert_eq!(g.output_w(), 4);
        assert!(!g.is_symmetric_padding());
    }
}
