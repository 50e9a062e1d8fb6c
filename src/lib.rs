//! # tensormath
//!
//! **CPU math primitives for dense-tensor frameworks.**
//!
//! tensormath is the numeric kernel layer a tensor-execution engine sits on:
//! matrix multiplication and BLAS-level vector operations, elementwise and
//! broadcast kernels, the im2col/col2im patch transform that turns
//! convolution into a dense matrix multiply, and random-sample fills.
//!
//! ## Design
//!
//! - **Slice-based**: every operation works on caller-owned flat slices.
//!   Nothing here allocates; output buffers are provided pre-sized.
//! - **Pluggable linear algebra**: BLAS-shaped operations (`gemm`, `gemv`,
//!   `axpy`, ...) live behind the [`backend::Backend`] trait so an
//!   alternative provider can be injected without touching call sites.
//!   [`backend::Portable`] is the loop-based implementation shipped here.
//! - **Generic over scalars**: kernels are generic over
//!   [`element::Element`] (any fixed-width numeric scalar) or
//!   [`element::Float`] where transcendentals are involved.
//! - **Fail fast**: malformed geometry is rejected up front; mismatched
//!   buffer lengths and out-of-range indices are programmer errors and
//!   panic rather than limp along.
//!
//! ## Quick start
//!
//! ```
//! use tensormath::prelude::*;
//!
//! let geom = PatchGeometry::unpadded(1, 4, 4, 2, 2).with_stride(2, 2);
//! let image: Vec<f32> = (0..16).map(|v| v as f32).collect();
//! let mut col = vec![0.0f32; geom.col_len()];
//! im2col(&geom, Layout::ChannelMajor, &image, &mut col).unwrap();
//! ```
//!
//! ## Feature flags
//!
//! - `rayon` (default): multi-threaded `gemm` in the portable backend
//! - `f16`: half-precision scalars (`half::f16`, `half::bf16`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod element;
pub mod error;
pub mod kernels;
pub mod patch;
pub mod random;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::{Backend, Portable, Transpose};
    pub use crate::element::{Element, Float};
    pub use crate::error::{Error, Result};
    pub use crate::patch::{col2im, im2col, Layout, PatchGeometry};
}
