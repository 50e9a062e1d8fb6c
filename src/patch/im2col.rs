//! Forward patch transform: image to column buffer

use super::{in_bounds, Layout, PatchGeometry};
use crate::element::Element;
use crate::error::Result;

/// Unfolds a spatial image into its column representation
///
/// Column entry `[c, kh, kw, oh, ow]` (channel-major) receives the input
/// value addressed by kernel tap `(kh, kw)` at output position `(oh, ow)`,
/// or zero when that address falls in the implicit padding.
///
/// Three strategies are selected by geometry for the channel-major layout;
/// all produce bit-identical column buffers. Channel-minor uses its own
/// traversal with whole channel-vector copies. Returns an error for
/// invalid geometry or buffer lengths that do not match it.
pub fn im2col<T: Element>(
    geometry: &PatchGeometry,
    layout: Layout,
    image: &[T],
    col: &mut [T],
) -> Result<()> {
    geometry.check_buffers(image.len(), col.len())?;
    match layout {
        Layout::ChannelMajor => {
            if geometry.is_unpadded_unit_dilation() {
                unfold_contiguous(geometry, image, col);
            } else if geometry.is_symmetric_padding() {
                unfold_symmetric(geometry, image, col);
            } else {
                unfold_general(geometry, image, col);
            }
        }
        Layout::ChannelMinor => unfold_channel_minor(geometry, image, col),
    }
    Ok(())
}

/// Unit dilation, zero padding: every kernel row maps to a contiguous run
/// of input elements, so rows move as block copies (bulk under unit
/// stride, strided gather otherwise). Throughput path only; output must
/// match [`unfold_general`] exactly.
fn unfold_contiguous<T: Element>(g: &PatchGeometry, image: &[T], col: &mut [T]) {
    let out_h = g.output_h();
    let out_w = g.output_w();
    let kernel_size = g.kernel_h * g.kernel_w;
    let patch = out_h * out_w;

    for k in 0..g.channels * kernel_size {
        let c = k / kernel_size;
        let rest = k % kernel_size;
        let kh = rest / g.kernel_w;
        let kw = rest % g.kernel_w;
        let dst_base = k * patch;
        let src_base = c * g.height * g.width;

        for oh in 0..out_h {
            let ih = oh * g.stride_h + kh;
            let src_row = src_base + ih * g.width + kw;
            let dst_row = dst_base + oh * out_w;
            if g.stride_w == 1 {
                col[dst_row..dst_row + out_w].copy_from_slice(&image[src_row..src_row + out_w]);
            } else {
                for ow in 0..out_w {
                    col[dst_row + ow] = image[src_row + ow * g.stride_w];
                }
            }
        }
    }
}

/// Symmetric padding (top == bottom, left == right), arbitrary stride and
/// dilation: out-of-range rows become a zero run without touching the
/// source; in-range rows take one unsigned bounds test per element.
fn unfold_symmetric<T: Element>(g: &PatchGeometry, image: &[T], col: &mut [T]) {
    let out_h = g.output_h();
    let out_w = g.output_w();
    let pad_h = g.pad_top as isize;
    let pad_w = g.pad_left as isize;
    let channel_size = g.height * g.width;

    let mut col_idx = 0;
    for c in 0..g.channels {
        let img = &image[c * channel_size..(c + 1) * channel_size];
        for kh in 0..g.kernel_h {
            for kw in 0..g.kernel_w {
                let mut input_row = (kh * g.dilation_h) as isize - pad_h;
                for _ in 0..out_h {
                    if !in_bounds(input_row, g.height) {
                        col[col_idx..col_idx + out_w].fill(T::zero());
                        col_idx += out_w;
                    } else {
                        let row = &img[input_row as usize * g.width..][..g.width];
                        let mut input_col = (kw * g.dilation_w) as isize - pad_w;
                        for _ in 0..out_w {
                            col[col_idx] = if in_bounds(input_col, g.width) {
                                row[input_col as usize]
                            } else {
                                T::zero()
                            };
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

/// Arbitrary independent per-side padding. No fast-path assumptions;
/// correctness reference for the other strategies.
fn unfold_general<T: Element>(g: &PatchGeometry, image: &[T], col: &mut [T]) {
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
                col[(k * out_h + oh) * out_w + ow] =
                    if in_bounds(ih, g.height) && in_bounds(iw, g.width) {
                        image[(c * g.height + ih as usize) * g.width + iw as usize]
                    } else {
                        T::zero()
                    };
            }
        }
    }
}

/// Channel-minor traversal: channels vary fastest, so every in-range kernel
/// tap is one whole channel-vector copy and every padded tap one zero fill.
fn unfold_channel_minor<T: Element>(g: &PatchGeometry, image: &[T], col: &mut [T]) {
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
                    let dst = &mut col[col_idx..col_idx + ch];
                    if in_bounds(ih, g.height) && in_bounds(iw, g.width) {
                        let src = (ih as usize * g.width + iw as usize) * ch;
                        dst.copy_from_slice(&image[src..src + ch]);
                    } else {
                        dst.fill(T::zero());
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|v| v as f32).collect()
    }

    #[test]
    fn test_contiguous_matches_general() {
        // Tier-1 eligible geometries, forced through both strategies.
        for (h, w, kh, kw, sh, sw) in [
            (4, 4, 2, 2, 1, 1),
            (4, 4, 2, 2, 2, 2),
            (5, 7, 3, 2, 1, 2),
            (6, 6, 3, 3, 3, 3),
        ] {
            let g = PatchGeometry::unpadded(2, h, w, kh, kw).with_stride(sh, sw);
            g.validate().unwrap();
            let image = ramp(g.image_len());
            let mut fast = vec![-1.0f32; g.col_len()];
            let mut reference = vec![-2.0f32; g.col_len()];
            unfold_contiguous(&g, &image, &mut fast);
            unfold_general(&g, &image, &mut reference);
            assert_eq!(fast, reference, "geometry {:?}", g);
        }
    }

    #[test]
    fn test_symmetric_matches_general() {
        for (pad_h, pad_w, dil_h, dil_w, sh, sw) in [
            (1, 1, 1, 1, 1, 1),
            (2, 1, 1, 1, 2, 1),
            (1, 2, 2, 2, 1, 2),
            (0, 2, 1, 3, 2, 2),
            (3, 3, 2, 1, 3, 1),
        ] {
            let g = PatchGeometry::unpadded(3, 7, 8, 3, 3)
                .with_padding(pad_h, pad_w)
                .with_dilation(dil_h, dil_w)
                .with_stride(sh, sw);
            g.validate().unwrap();
            let image = ramp(g.image_len());
            let mut fast = vec![-1.0f32; g.col_len()];
            let mut reference = vec![-2.0f32; g.col_len()];
            unfold_symmetric(&g, &image, &mut fast);
            unfold_general(&g, &image, &mut reference);
            assert_eq!(fast, reference, "geometry {:?}", g);
        }
    }

    #[test]
    fn test_pinned_4x4_stride2() {
        // 4x4 ramp, 2x2 kernel, stride 2: four non-overlapping blocks,
        // laid out (kh, kw, oh, ow).
        let g = PatchGeometry::unpadded(1, 4, 4, 2, 2).with_stride(2, 2);
        let image = ramp(16);
        let mut col = vec![0.0f32; g.col_len()];
        im2col(&g, Layout::ChannelMajor, &image, &mut col).unwrap();
        #[rustfmt::skip]
        let expected = [
            0.0, 2.0, 8.0, 10.0,
            1.0, 3.0, 9.0, 11.0,
            4.0, 6.0, 12.0, 14.0,
            5.0, 7.0, 13.0, 15.0,
        ];
        assert_eq!(col, expected);
    }

    #[test]
    fn test_channel_minor_single_channel_matches_major_per_position() {
        // With one channel, channel-minor column entries are the same taps
        // in (oh, ow, kh, kw) order instead of (kh, kw, oh, ow).
        let g = PatchGeometry::unpadded(1, 4, 4, 2, 2).with_stride(2, 2);
        let image = ramp(16);
        let mut minor = vec![0.0f32; g.col_len()];
        im2col(&g, Layout::ChannelMinor, &image, &mut minor).unwrap();
        #[rustfmt::skip]
        let expected = [
            0.0, 1.0, 4.0, 5.0,
            2.0, 3.0, 6.0, 7.0,
            8.0, 9.0, 12.0, 13.0,
            10.0, 11.0, 14.0, 15.0,
        ];
        assert_eq!(minor, expected);
    }

    #[test]
    fn test_rejects_wrong_buffer_lengths() {
        let g = PatchGeometry::unpadded(1, 4, 4, 2, 2);
        let image = ramp(16);
        let mut col = vec![0.0f32; g.col_len() - 1];
        assert!(im2col(&g, Layout::ChannelMajor, &image, &mut col).is_err());
    }
}
