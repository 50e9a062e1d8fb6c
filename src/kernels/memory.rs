//! Strided matrix block copy

use crate::element::Element;

/// Copies an `m x n` block between two row-major buffers with independent
/// leading dimensions
///
/// Row `i` of the block starts at `a[i * lda]` in the source and
/// `b[i * ldb]` in the destination. Leading dimensions must be at least `n`.
pub fn copy_matrix<T: Element>(m: usize, n: usize, a: &[T], lda: usize, b: &mut [T], ldb: usize) {
    assert!(lda >= n, "copy_matrix: lda shorter than a row");
    assert!(ldb >= n, "copy_matrix: ldb shorter than a row");
    if m == 0 || n == 0 {
        return;
    }
    assert!(
        (m - 1) * lda + n <= a.len(),
        "copy_matrix: source length mismatch"
    );
    assert!(
        (m - 1) * ldb + n <= b.len(),
        "copy_matrix: destination length mismatch"
    );
    for i in 0..m {
        b[i * ldb..i * ldb + n].copy_from_slice(&a[i * lda..i * lda + n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_matrix_strided() {
        // Copy the left 2x2 block of a 2x3 matrix into a 2x2 buffer
        let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut b = [0.0f32; 4];
        copy_matrix(2, 2, &a, 3, &mut b, 2);
        assert_eq!(b, [1.0, 2.0, 4.0, 5.0]);
    }
}
