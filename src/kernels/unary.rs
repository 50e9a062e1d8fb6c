//! Elementwise transcendental kernels
//!
//! Out-of-place unary maps over float slices. These are the operations a
//! vector-math library would otherwise cover.

use crate::element::Float;

macro_rules! unary_fn {
    ($name:ident, $method:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<T: Float>(x: &[T], y: &mut [T]) {
            assert_eq!(x.len(), y.len(), concat!(stringify!($name), ": length mismatch"));
            for (yi, &xi) in y.iter_mut().zip(x.iter()) {
                *yi = xi.$method();
            }
        }
    };
}

unary_fn!(exp, exp, "Elementwise `y = e^x`");
unary_fn!(ln, ln, "Elementwise natural logarithm");

/// Elementwise square: `y = x * x`
pub fn sqr<T: Float>(x: &[T], y: &mut [T]) {
    assert_eq!(x.len(), y.len(), "sqr: length mismatch");
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = xi * xi;
    }
}

/// Elementwise power with a fixed exponent: `y = x^b`
pub fn powx<T: Float>(x: &[T], b: T, y: &mut [T]) {
    assert_eq!(x.len(), y.len(), "powx: length mismatch");
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = xi.powf(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_ln_roundtrip() {
        let x = [0.5f64, 1.0, 2.0];
        let mut e = [0.0f64; 3];
        let mut back = [0.0f64; 3];
        exp(&x, &mut e);
        ln(&e, &mut back);
        for (&orig, &b) in x.iter().zip(back.iter()) {
            assert!((orig - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sqr_powx() {
        let x = [3.0f32, 4.0];
        let mut y = [0.0f32; 2];
        sqr(&x, &mut y);
        assert_eq!(y, [9.0, 16.0]);
        powx(&x, 0.5, &mut y);
        assert!((y[0] - 3.0f32.sqrt()).abs() < 1e-6);
        assert_eq!(y[1], 2.0);
    }
}
