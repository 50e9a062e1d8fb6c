//! Index-selection kernel

use crate::element::Element;

/// Per-row gather: `y[i] = x[i * d + idx[i]]`
///
/// `x` is an `n x d` row-major matrix and `idx` picks one column per row.
///
/// # Panics
/// Panics when `idx[i] >= d` or on length mismatch. An out-of-range index
/// is a programmer error; it is checked unconditionally so a bad index can
/// never read a neighboring row.
pub fn select<T: Element>(n: usize, d: usize, x: &[T], idx: &[usize], y: &mut [T]) {
    assert_eq!(x.len(), n * d, "select: matrix length mismatch");
    assert_eq!(idx.len(), n, "select: index length mismatch");
    assert_eq!(y.len(), n, "select: output length mismatch");
    for (i, (yi, &ix)) in y.iter_mut().zip(idx.iter()).enumerate() {
        assert!(ix < d, "select: index {ix} out of bounds for row width {d}");
        *yi = x[i * d + ix];
    }
}
