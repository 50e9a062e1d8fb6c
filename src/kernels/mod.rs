//! Loop-based compute kernels
//!
//! Free functions over caller-owned slices. These are the primitives the
//! [`Portable`](crate::backend::Portable) backend delegates to, plus the
//! operations with no BLAS equivalent (broadcast binary ops, comparisons,
//! row/column reductions, index select, matrix block copy).
//!
//! Every kernel asserts the slice lengths its arguments imply. A length
//! mismatch is a caller bug, not a runtime condition, so the kernels panic
//! rather than return an error.

mod binary;
mod compare;
mod index;
mod matmul;
mod memory;
mod reduce;
mod unary;
mod vector;

pub use binary::{
    add, add_to_col, add_to_row, div, div_to_col, div_to_row, mul, mul_to_col, mul_to_row, sub,
    sub_to_col, sub_to_row,
};
pub use compare::{and, ge, ge_to_row, gt, gt_to_row, le, le_to_row, lt, lt_to_row, not, or, xor};
pub use index::select;
pub use matmul::{gemm, gemv};
pub use memory::copy_matrix;
pub use reduce::{colwise_max, rowwise_max};
pub use unary::{exp, ln, powx, sqr};
pub use vector::{axpby, axpy, dot, scale, set, sum};
