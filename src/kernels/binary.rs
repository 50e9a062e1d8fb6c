//! Elementwise and broadcast binary kernels
//!
//! The `*_to_row` functions apply a length-`N` row vector across every row
//! of an `M x N` row-major matrix; the `*_to_col` functions apply a
//! length-`M` column vector down every column. Both mutate in place, the
//! way a bias add or per-row normalization runs in a training loop.

use crate::element::Element;

macro_rules! elementwise_binary {
    ($name:ident, $op:tt, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<T: Element>(a: &[T], b: &[T], y: &mut [T]) {
            assert_eq!(a.len(), b.len(), concat!(stringify!($name), ": length mismatch"));
            assert_eq!(a.len(), y.len(), concat!(stringify!($name), ": length mismatch"));
            for ((yi, &ai), &bi) in y.iter_mut().zip(a.iter()).zip(b.iter()) {
                *yi = ai $op bi;
            }
        }
    };
}

elementwise_binary!(add, +, "Elementwise `y = a + b`");
elementwise_binary!(sub, -, "Elementwise `y = a - b`");
elementwise_binary!(mul, *, "Elementwise `y = a * b`");
elementwise_binary!(div, /, "Elementwise `y = a / b`");

macro_rules! broadcast_to_row {
    ($name:ident, $op:tt, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<T: Element>(m: usize, n: usize, x: &[T], y: &mut [T]) {
            assert_eq!(x.len(), n, concat!(stringify!($name), ": row vector length mismatch"));
            assert_eq!(y.len(), m * n, concat!(stringify!($name), ": matrix length mismatch"));
            for row in y.chunks_mut(n) {
                for (yij, &xj) in row.iter_mut().zip(x.iter()) {
                    *yij = *yij $op xj;
                }
            }
        }
    };
}

broadcast_to_row!(add_to_row, +, "Adds the row vector `x` to every row of the `m x n` matrix `y`");
broadcast_to_row!(sub_to_row, -, "Subtracts the row vector `x` from every row of the `m x n` matrix `y`");
broadcast_to_row!(mul_to_row, *, "Multiplies every row of the `m x n` matrix `y` by the row vector `x`");
broadcast_to_row!(div_to_row, /, "Divides every row of the `m x n` matrix `y` by the row vector `x`");

macro_rules! broadcast_to_col {
    ($name:ident, $op:tt, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<T: Element>(m: usize, n: usize, x: &[T], y: &mut [T]) {
            assert_eq!(x.len(), m, concat!(stringify!($name), ": column vector length mismatch"));
            assert_eq!(y.len(), m * n, concat!(stringify!($name), ": matrix length mismatch"));
            for (row, &xi) in y.chunks_mut(n).zip(x.iter()) {
                for yij in row.iter_mut() {
                    *yij = *yij $op xi;
                }
            }
        }
    };
}

broadcast_to_col!(add_to_col, +, "Adds the column vector `x` to every column of the `m x n` matrix `y`");
broadcast_to_col!(sub_to_col, -, "Subtracts the column vector `x` from every column of the `m x n` matrix `y`");
broadcast_to_col!(mul_to_col, *, "Multiplies every column of the `m x n` matrix `y` by the column vector `x`");
broadcast_to_col!(div_to_col, /, "Divides every column of the `m x n` matrix `y` by the column vector `x`");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementwise() {
        let a = [4.0f32, 9.0, 16.0];
        let b = [2.0f32, 3.0, 4.0];
        let mut y = [0.0f32; 3];
        div(&a, &b, &mut y);
        assert_eq!(y, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_add_to_row() {
        // 2x3 matrix, row vector [10, 20, 30]
        let mut y = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        add_to_row(2, 3, &[10.0, 20.0, 30.0], &mut y);
        assert_eq!(y, [11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
    }

    #[test]
    fn test_mul_to_col() {
        // 2x2 matrix, column vector [2, 3]
        let mut y = [1.0f64, 2.0, 3.0, 4.0];
        mul_to_col(2, 2, &[2.0, 3.0], &mut y);
        assert_eq!(y, [2.0, 4.0, 9.0, 12.0]);
    }

    #[test]
    fn test_integer_elements() {
        let a = [1i64, 2, 3];
        let b = [10i64, 20, 30];
        let mut y = [0i64; 3];
        add(&a, &b, &mut y);
        assert_eq!(y, [11, 22, 33]);
    }
}
