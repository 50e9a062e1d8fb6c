//! Row and column reductions over row-major matrices

use crate::element::Element;

/// Maximum of each row of an `m x n` row-major matrix, written to `y` of
/// length `m`
///
/// # Panics
/// Panics when `n == 0` (a row has no maximum) or on length mismatch.
pub fn rowwise_max<T: Element>(m: usize, n: usize, x: &[T], y: &mut [T]) {
    assert!(n > 0, "rowwise_max: empty rows");
    assert_eq!(x.len(), m * n, "rowwise_max: matrix length mismatch");
    assert_eq!(y.len(), m, "rowwise_max: output length mismatch");
    for (yi, row) in y.iter_mut().zip(x.chunks(n)) {
        let mut best = row[0];
        for &v in &row[1..] {
            if v > best {
                best = v;
            }
        }
        *yi = best;
    }
}

/// Maximum of each column of an `m x n` row-major matrix, written to `y` of
/// length `n`
///
/// # Panics
/// Panics when `m == 0` or on length mismatch.
pub fn colwise_max<T: Element>(m: usize, n: usize, x: &[T], y: &mut [T]) {
    assert!(m > 0, "colwise_max: empty columns");
    assert_eq!(x.len(), m * n, "colwise_max: matrix length mismatch");
    assert_eq!(y.len(), n, "colwise_max: output length mismatch");
    y.copy_from_slice(&x[..n]);
    for row in x.chunks(n).skip(1) {
        for (yj, &v) in y.iter_mut().zip(row.iter()) {
            if v > *yj {
                *yj = v;
            }
        }
    }
}
