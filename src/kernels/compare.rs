//! Comparison and logical kernels
//!
//! Comparisons produce `bool` masks. The `*_to_row` variants compare an
//! `m x n` row-major matrix against a length-`n` row vector, matching the
//! broadcast shape of the binary kernels.

use crate::element::Element;

macro_rules! compare_fn {
    ($name:ident, $row_name:ident, $op:tt, $doc:literal, $row_doc:literal) => {
        #[doc = $doc]
        pub fn $name<T: Element>(a: &[T], b: &[T], y: &mut [bool]) {
            assert_eq!(a.len(), b.len(), concat!(stringify!($name), ": length mismatch"));
            assert_eq!(a.len(), y.len(), concat!(stringify!($name), ": length mismatch"));
            for ((yi, &ai), &bi) in y.iter_mut().zip(a.iter()).zip(b.iter()) {
                *yi = ai $op bi;
            }
        }

        #[doc = $row_doc]
        pub fn $row_name<T: Element>(m: usize, n: usize, a: &[T], b: &[T], y: &mut [bool]) {
            assert_eq!(a.len(), m * n, concat!(stringify!($row_name), ": matrix length mismatch"));
            assert_eq!(b.len(), n, concat!(stringify!($row_name), ": row vector length mismatch"));
            assert_eq!(y.len(), m * n, concat!(stringify!($row_name), ": output length mismatch"));
            for (i, (yi, &ai)) in y.iter_mut().zip(a.iter()).enumerate() {
                *yi = ai $op b[i % n];
            }
        }
    };
}

compare_fn!(
    lt,
    lt_to_row,
    <,
    "Elementwise `y = a < b`",
    "Row-broadcast `y[i] = a[i] < b[i % n]` over an `m x n` matrix"
);
compare_fn!(
    le,
    le_to_row,
    <=,
    "Elementwise `y = a <= b`",
    "Row-broadcast `y[i] = a[i] <= b[i % n]` over an `m x n` matrix"
);
compare_fn!(
    gt,
    gt_to_row,
    >,
    "Elementwise `y = a > b`",
    "Row-broadcast `y[i] = a[i] > b[i % n]` over an `m x n` matrix"
);
compare_fn!(
    ge,
    ge_to_row,
    >=,
    "Elementwise `y = a >= b`",
    "Row-broadcast `y[i] = a[i] >= b[i % n]` over an `m x n` matrix"
);

macro_rules! logical_fn {
    ($name:ident, $op:tt, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(a: &[bool], b: &[bool], y: &mut [bool]) {
            assert_eq!(a.len(), b.len(), concat!(stringify!($name), ": length mismatch"));
            assert_eq!(a.len(), y.len(), concat!(stringify!($name), ": length mismatch"));
            for ((yi, &ai), &bi) in y.iter_mut().zip(a.iter()).zip(b.iter()) {
                *yi = ai $op bi;
            }
        }
    };
}

logical_fn!(and, &, "Elementwise logical and");
logical_fn!(or, |, "Elementwise logical or");
logical_fn!(xor, ^, "Elementwise logical xor");

/// Elementwise logical not
pub fn not(x: &[bool], y: &mut [bool]) {
    assert_eq!(x.len(), y.len(), "not: length mismatch");
    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = !xi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lt() {
        let a = [1.0f32, 5.0, 3.0];
        let b = [2.0f32, 4.0, 3.0];
        let mut y = [false; 3];
        lt(&a, &b, &mut y);
        assert_eq!(y, [true, false, false]);
        le(&a, &b, &mut y);
        assert_eq!(y, [true, false, true]);
    }

    #[test]
    fn test_ge_to_row() {
        // 2x2 matrix vs row [2, 3]
        let a = [1i32, 3, 2, 4];
        let mut y = [false; 4];
        ge_to_row(2, 2, &a, &[2, 3], &mut y);
        assert_eq!(y, [false, true, true, true]);
    }

    #[test]
    fn test_logical() {
        let a = [true, true, false];
        let b = [true, false, false];
        let mut y = [false; 3];
        xor(&a, &b, &mut y);
        assert_eq!(y, [false, true, false]);
        not(&a, &mut y);
        assert_eq!(y, [false, false, true]);
    }
}
