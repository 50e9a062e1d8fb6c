//! Inverse patch transform: column buffer to image, accumulating

use super::{in_bounds, Layout, PatchGeometry};
use crate::element::Element;
use crate::error::Result;
use crate::kernels;

/// Folds a column buffer back into a spatial image by summation
///
/// The destination is zero-filled by this call before accumulation, so
/// pre-existing contents never survive; each column entry is then added to
/// the spatial location it was read from by [`super::im2col()`]. Entries
/// addressing the implicit padding are discarded, but the column buffer is
/// still consumed in full raster order, so source indexing never skips.
///
/// When kernel taps overlap (stride smaller than the kernel extent) this
/// is not the inverse of the forward transform: overlapping contributions
/// sum, which is exactly the adjoint behavior a convolution gradient
/// needs.
pub fn col2im<T: Element>(
    geometry: &PatchGeometry,
    layout: Layout,
    col: &[T],
    image: &mut [T],
) -> Result<()> {
    geometry.check_buffers(image.len(), col.len())?;
    kernels::set(T::zero(), image);
    match layout {
        Layout::ChannelMajor => {
            if geometry.is_unpadded_unit_dilation() {
                fold_contiguous(geometry, col, image);
            } else if geometry.is_symmetric_padding() {
                fold_symmetric(geometry, col, image);
            } else {
                fold_general(geometry, col, image);
            }
        }
        Layout::ChannelMinor => fold_channel_minor(geometry, col, image),
    }
    Ok(())
}

/// Accumulating mirror of the contiguous forward strategy
fn fold_contiguous<T: Element>(g: &PatchGeometry, col: &[T], image: &mut [T]) {
    let out_h = g.output_h();
    let out_w = g.output_w();
    let kernel_size = g.kernel_h * g.kernel_w;
    let patch = out_h * out_w;

    for k in 0..g.channels * kernel_size {
        let c = k / kernel_size;
        let rest = k % kernel_size;
        let kh = rest / g.kernel_w;
        let kw = rest % g.kernel_w;
        let src_base = k * patch;
        let dst_base = c * g.height * g.width;

        for oh in 0..out_h {
            let ih = oh * g.stride_h + kh;
            let dst_row = dst_base + ih * g.width + kw;
            let src_row = src_base + oh * out_w;
            if g.stride_w == 1 {
                for (dst, &src) in image[dst_row..dst_row + out_w]
                    .iter_mut()
                    .zip(col[src_row..src_row + out_w].iter())
                {
                    *dst += src;
                }
            } else {
                for ow in 0..out_w {
                    image[dst_row + ow * g.stride_w] += col[src_row + ow];
                }
            }
        }
    }
}

/// Accumulating mirror of the symmetric-padding strategy: writes for
/// out-of-range destinations are skipped while the column cursor still
/// advances past the discarded run.
fn fold_symmetric<T: Element>(g: &PatchGeometry, col: &[T], image: &mut [T]) {
    let out_h = g.output_h();
    let out_w = g.output_w();
    let pad_h = g.pad_top as isize;
    let pad_w = g.pad_left as isize;
    let channel_size = g.height * g.width;

    let mut col_idx = 0;
    for c in 0..g.channels {
        let img = &mut image[c * channel_size..(c + 1) * channel_size];
        for kh in 0..g.kernel_h {
            for kw in 0..g.kernel_w {
                let mut input_row = (kh * g.dilation_h) as isize - pad_h;
                for _ in 0..out_h {
                    if !in_bounds(input_row, g.height) {
                        col_idx += out_w;
                    } else {
                        let row = &mut img[input_row as usize * g.width..][..g.width];
                        let mut input_col = (kw * g.dilation_w) as isize - pad_w;
                        for _ in 0..out_w {
                            if in_bounds(input_col, g.width) {
                                row[input_col as usize] += col[col_idx];
                            }
                            col_idx += 1;
                            input_col += g.stride_w as isize;
                        }
                    }
                    input_row += g.stride_h as isize;
                }
            }
        }
    }
}

/// Accumulating mirror of the general strategy; correctness reference
fn fold_general<T: Element>(g: &PatchGeometry, col: &[T], image: &mut [T]) {
    let out_h = g.output_h();
    let out_w = g.output_w();
    let col_channels = g.channels * g.kernel_h * g.kernel_w;

    for k in 0..col_channels {
        let kw = k % g.kernel_w;
        let kh = (k / g.kernel_w) % g.kernel_h;
        let c = k / g.kernel_w / g.kernel_h;
        for oh in 0..out_h {
            for ow in 0..out_w {
                let ih = (oh * g.stride_h + kh * g.dilation_h) as isize - g.pad_top as isize;
                let iw = (ow * g.stride_w + kw * g.dilation_w) as isize - g.pad_left as isize;
                if in_bounds(ih, g.height) && in_bounds(iw, g.width) {
                    image[(c * g.height + ih as usize) * g.width + iw as usize] +=
                        col[(k * out_h + oh) * out_w + ow];
                }
            }
        }
    }
}

/// Channel-minor accumulation: whole channel-vector adds for in-range
/// taps, advancing past the source data for padded taps.
fn fold_channel_minor<T: Element>(g: &PatchGeometry, col: &[T], image: &mut [T]) {
    let out_h = g.output_h();
    let out_w = g.output_w();
    let ch = g.channels;
    let dkernel_h = (g.dilation_h * (g.kernel_h - 1) + 1) as isize;
    let dkernel_w = (g.dilation_w * (g.kernel_w - 1) + 1) as isize;

    let mut col_idx = 0;
    let mut ih0 = -(g.pad_top as isize);
    for _ in 0..out_h {
        let mut iw0 = -(g.pad_left as isize);
        for _ in 0..out_w {
            let mut ih = ih0;
            while ih < ih0 + dkernel_h {
                let mut iw = iw0;
                while iw < iw0 + dkernel_w {
                    if in_bounds(ih, g.height) && in_bounds(iw, g.width) {
                        let dst = (ih as usize * g.width + iw as usize) * ch;
                        for (img, &src) in image[dst..dst + ch]
                            .iter_mut()
                            .zip(col[col_idx..col_idx + ch].iter())
                        {
                            *img += src;
                        }
                    }
                    col_idx += ch;
                    iw += g.dilation_w as isize;
                }
                ih += g.dilation_h as isize;
            }
            iw0 += g.stride_w as isize;
        }
        ih0 += g.stride_h as isize;
    }
}
