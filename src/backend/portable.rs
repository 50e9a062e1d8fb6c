//! Loop-based portable backend

use super::{Backend, Transpose};
use crate::element::{Element, Float};
use crate::kernels;

/// The portable [`Backend`] provider
///
/// Delegates every operation to the scalar kernels in [`crate::kernels`].
/// With the `rayon` feature, large GEMMs run parallel over output rows.
/// This is the correctness reference other providers are measured against.
#[derive(Debug, Default, Clone, Copy)]
pub struct Portable;

impl Portable {
    /// Create a portable backend
    pub fn new() -> Self {
        Self
    }
}

impl Backend for Portable {
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
    ) {
        kernels::gemm(trans_a, trans_b, m, n, k, alpha, a, b, beta, c);
    }

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
    ) {
        kernels::gemv(trans_a, m, n, alpha, a, x, beta, y);
    }

    fn scale<T: Float>(&self, alpha: T, x: &[T], y: &mut [T]) {
        kernels::scale(alpha, x, y);
    }

    fn axpy<T: Float>(&self, alpha: T, x: &[T], y: &mut [T]) {
        kernels::axpy(alpha, x, y);
    }

    fn axpby<T: Float>(&self, alpha: T, x: &[T], beta: T, y: &mut [T]) {
        kernels::axpby(alpha, x, beta, y);
    }

    fn dot<T: Float>(&self, a: &[T], b: &[T]) -> T {
        kernels::dot(a, b)
    }

    fn sum<T: Float>(&self, x: &[T]) -> T {
        kernels::sum(x)
    }

    fn exp<T: Float>(&self, x: &[T], y: &mut [T]) {
        kernels::exp(x, y);
    }

    fn ln<T: Float>(&self, x: &[T], y: &mut [T]) {
        kernels::ln(x, y);
    }

    fn sqr<T: Float>(&self, x: &[T], y: &mut [T]) {
        kernels::sqr(x, y);
    }

    fn powx<T: Float>(&self, x: &[T], b: T, y: &mut [T]) {
        kernels::powx(x, b, y);
    }

    fn add<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]) {
        kernels::add(a, b, y);
    }

    fn sub<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]) {
        kernels::sub(a, b, y);
    }

    fn mul<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]) {
        kernels::mul(a, b, y);
    }

    fn div<T: Element>(&self, a: &[T], b: &[T], y: &mut [T]) {
        kernels::div(a, b, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The portable backend should be usable through a generic seam the way
    // an execution engine would hold it.
    fn run_gemm<B: Backend>(backend: &B) -> Vec<f32> {
        let a = [1.0f32, 2.0, 3.0, 4.0];
        let b = [1.0f32, 0.0, 0.0, 1.0];
        let mut c = vec![0.0f32; 4];
        backend.gemm(
            Transpose::NoTrans,
            Transpose::NoTrans,
            2,
            2,
            2,
            1.0,
            &a,
            &b,
            0.0,
            &mut c,
        );
        c
    }

    #[test]
    fn test_injected_backend() {
        let backend = Portable::new();
        assert_eq!(run_gemm(&backend), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
