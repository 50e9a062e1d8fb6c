//! Linear-algebra capability trait and providers
//!
//! BLAS-shaped operations go through the [`Backend`] trait instead of being
//! called as free functions, so the provider is an injection point: the
//! execution engine holds a `&B where B: Backend` and never names the
//! implementation. [`Portable`] is the loop-based provider shipped with
//! this crate; a vendor-BLAS provider would implement the same trait.
//!
//! # Contracts
//!
//! All matrices are row-major contiguous slices. For `gemm` and `gemv`,
//! `beta == 0` means the output is overwritten without being read, so it
//! may hold stale or uninitialized-by-value data. Dimension mismatches
//! between the integer arguments and slice lengths are programmer errors
//! and panic.

mod portable;

pub use portable::Portable;

use crate::element::{Element, Float};

/// Transpose flag for [`Backend::gemm`] and [`Backend::gemv`]
///
/// An invalid dispatch value is unrepresentable: every consumer matches
/// exhaustively on the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    /// Use the matrix as stored
    NoTrans,
    /// Use the transpose of the stored matrix
    Trans,
}

/// Capability interface for dense linear algebra and vector math
///
/// Methods are generic over the scalar so a single provider instance
/// serves every float width. Providers must produce results elementwise
/// equal to the portable reference for the same inputs, up to the usual
/// floating-point reassociation caveats of their underlying library.
pub trait Backend: Send + Sync {
    /// General matrix multiply: `C = alpha * op(A) * op(B) + beta * C`
    ///
    /// `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`.
    #[allow(clippy::too_many_arguments)]
    fn gemm<T: Float>(
        &self,
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
    );

    /// General matrix-vector multiply: `y = alpha * op(A) * x + beta * y`
    ///
    /// `A` is `m x n` row-major; `op` selects whether `x` has length `n`
    /// (no transpose) or `m` (transpose).
    #[allow(clippy::too_many_arguments)]
    fn gemv<T: Float>(
        &self,
        trans_a: Transpose,
        m: usize,
        n: usize,
        alpha: T,
        a: &[T],
        x: &[T],
        beta: T,
        y: &mut [T],
    );

    /// `y = alpha * x`
    fn scale<T: Float>(&self, alpha: T, x: &[T], y: &mut [T]);

    /// `y += alpha * x`
    fn axpy<T: Float>(&self, alpha: T, x: &[T], y: &mut [T]);

    /// `y = alpha * x + beta * y`
    fn axpby<T: Float>(&self, alpha: T, x: &[T], beta: T, y: &mut [T]);

    /// Dot product of two equal-length vectors
    fn dot<T: Float>(&self, a: &[T], b: &[T]) -> T;

    /// Sum of all elements
    fn sum<T: Float>(&self, x: &[T]) -> T;

    /// Elementwise `y = e^x`
    fn exp<T: Float>(&self, x: &[T], y: &mut [T]);

    /// Elementwise natural logarithm
    fn ln<T: Float>(&self, x: &[T], y: &mut [T]);

    /// Elementwise square
    fn sqr<T: Float>(&self, x: &[T], y: &mut [T]);

    /// Elementwise `y = x^b` for a fixed exponent
    fn powx<T: Float>(&self, x: &[T], b: T, y: &mut [T]);

    /// Elementwise `y = a + b`
    fn add<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]);

    /// Elementwise `y = a - b`
    fn sub<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]);

    /// Elementwise `y = a * b`
    fn mul<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]);

    /// Elementwise `y = a / b`
    fn div<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]);
}
