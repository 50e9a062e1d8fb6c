//! BLAS level-1 style vector kernels

use crate::element::{Element, Float};

/// Fill `y` with the constant `alpha`
pub fn set<T: Element>(alpha: T, y: &mut [T]) {
    y.fill(alpha);
}

/// `y = alpha * x`
pub fn scale<T: Float>(alpha: T, x: &[T], y: &mut [T]) {
    assert_eq!(x.len(), y.len(), "scale: length mismatch");
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = alpha * xi;
    }
}

/// `y += alpha * x`
pub fn axpy<T: Float>(alpha: T, x: &[T], y: &mut [T]) {
    assert_eq!(x.len(), y.len(), "axpy: length mismatch");
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = *yi + alpha * xi;
    }
}

/// `y = alpha * x + beta * y`
pub fn axpby<T: Float>(alpha: T, x: &[T], beta: T, y: &mut [T]) {
    assert_eq!(x.len(), y.len(), "axpby: length mismatch");
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = alpha * xi + beta * *yi;
    }
}

/// Dot product of two equal-length vectors
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "dot: length mismatch");
    let mut acc = T::zero();
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        acc = acc + ai * bi;
    }
    acc
}

/// Sum of all elements
pub fn sum<T: Float>(x: &[T]) -> T {
    let mut acc = T::zero();
    for &xi in x {
        acc = acc + xi;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axpby() {
        let x = [1.0f32, 2.0, 3.0];
        let mut y = [10.0f32, 20.0, 30.0];
        axpby(2.0, &x, 0.5, &mut y);
        assert_eq!(y, [7.0, 14.0, 21.0]);
    }

    #[test]
    fn test_dot_sum() {
        let a = [1.0f64, 2.0, 3.0];
        let b = [4.0f64, 5.0, 6.0];
        assert_eq!(dot(&a, &b), 32.0);
        assert_eq!(sum(&a), 6.0);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_axpy_length_mismatch() {
        let x = [1.0f32; 3];
        let mut y = [0.0f32; 4];
        axpy(1.0, &x, &mut y);
    }
}
