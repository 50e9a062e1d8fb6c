//! Matrix multiplication kernels
//!
//! Row-major contiguous GEMM/GEMV with explicit transpose flags. With the
//! `rayon` feature, GEMM parallelizes over output rows.

use crate::backend::Transpose;
use crate::element::Float;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Minimum number of output elements before GEMM goes parallel
#[cfg(feature = "rayon")]
const PAR_MIN_OUT: usize = 4096;

/// General matrix multiply: `C = alpha * op(A) * op(B) + beta * C`
///
/// `op(A)` is `M x K`, `op(B)` is `K x N`, `C` is `M x N`, all row-major
/// contiguous. When `beta` is zero, `C` is overwritten without being read,
/// so it may start uninitialized-by-value (e.g. freshly zeroed or stale).
///
/// # Panics
/// Panics when a slice length does not match the dimensions implied by
/// `m`, `n`, `k` and the transpose flags.
#[allow(clippy::too_many_arguments)]
pub fn gemm<T: Float>(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    b: &[T],
    beta: T,
    c: &mut [T],
) {
    assert_eq!(a.len(), m * k, "gemm: A length mismatch");
    assert_eq!(b.len(), k * n, "gemm: B length mismatch");
    assert_eq!(c.len(), m * n, "gemm: C length mismatch");

    #[cfg(feature = "rayon")]
    if m * n >= PAR_MIN_OUT && m > 1 {
        c.par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row)| gemm_row(trans_a, trans_b, i, n, k, m, alpha, a, b, beta, row));
        return;
    }

    for (i, row) in c.chunks_mut(n).enumerate() {
        gemm_row(trans_a, trans_b, i, n, k, m, alpha, a, b, beta, row);
    }
}

/// Computes one output row of GEMM: `C[i, :] = alpha * op(A)[i, :] * op(B) + beta * C[i, :]`
#[allow(clippy::too_many_arguments)]
fn gemm_row<T: Float>(
    trans_a: Transpose,
    trans_b: Transpose,
    i: usize,
    n: usize,
    k: usize,
    m: usize,
    alpha: T,
    a: &[T],
    b: &[T],
    beta: T,
    row: &mut [T],
) {
    if beta == T::zero() {
        row.fill(T::zero());
    } else {
        for cij in row.iter_mut() {
            *cij = beta * *cij;
        }
    }

    for p in 0..k {
        let aip = match trans_a {
            Transpose::NoTrans => a[i * k + p],
            Transpose::Trans => a[p * m + i],
        };
        let scaled = alpha * aip;
        match trans_b {
            Transpose::NoTrans => {
                let brow = &b[p * n..(p + 1) * n];
                for (cij, &bpj) in row.iter_mut().zip(brow.iter()) {
                    *cij = *cij + scaled * bpj;
                }
            }
            Transpose::Trans => {
                for (j, cij) in row.iter_mut().enumerate() {
                    *cij = *cij + scaled * b[j * k + p];
                }
            }
        }
    }
}

/// General matrix-vector multiply: `y = alpha * op(A) * x + beta * y`
///
/// `A` is `M x N` row-major. With `NoTrans`, `x` has length `N` and `y`
/// length `M`; with `Trans` the roles swap. The `beta == 0` contract matches
/// [`gemm`]: `y` is overwritten without being read.
#[allow(clippy::too_many_arguments)]
pub fn gemv<T: Float>(
    trans_a: Transpose,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    x: &[T],
    beta: T,
    y: &mut [T],
) {
    assert_eq!(a.len(), m * n, "gemv: A length mismatch");
    let (x_len, y_len) = match trans_a {
        Transpose::NoTrans => (n, m),
        Transpose::Trans => (m, n),
    };
    assert_eq!(x.len(), x_len, "gemv: x length mismatch");
    assert_eq!(y.len(), y_len, "gemv: y length mismatch");

    if beta == T::zero() {
        y.fill(T::zero());
    } else {
        for yi in y.iter_mut() {
            *yi = beta * *yi;
        }
    }

    match trans_a {
        Transpose::NoTrans => {
            for (yi, arow) in y.iter_mut().zip(a.chunks(n)) {
                let mut acc = T::zero();
                for (&aij, &xj) in arow.iter().zip(x.iter()) {
                    acc = acc + aij * xj;
                }
                *yi = *yi + alpha * acc;
            }
        }
        Transpose::Trans => {
            for (arow, &xi) in a.chunks(n).zip(x.iter()) {
                let scaled = alpha * xi;
                for (yj, &aij) in y.iter_mut().zip(arow.iter()) {
                    *yj = *yj + scaled * aij;
                }
            }
        }
    }
}
