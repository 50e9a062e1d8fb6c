//! Scalar traits connecting Rust numeric types to the generic kernels

use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Trait for types that can be elements of a dense buffer
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `Add + AddAssign + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison for min/max and compare kernels
///
/// Note: `Neg` is NOT required since unsigned types don't support it.
/// Operations needing it go through `to_f64`/`from_f64`.
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
{
    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;
}

/// Floating-point elements with native transcendental functions
///
/// Required by the unary kernels (`exp`, `ln`, ...) and the BLAS-shaped
/// backend operations, which are only defined over floats.
pub trait Float: Element {
    /// e^self
    fn exp(self) -> Self;

    /// Natural logarithm
    fn ln(self) -> Self;

    /// Square root
    fn sqrt(self) -> Self;

    /// self^b
    fn powf(self, b: Self) -> Self;
}

macro_rules! impl_element_float {
    ($T:ty) => {
        impl Element for $T {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $T
            }

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Float for $T {
            #[inline]
            fn exp(self) -> Self {
                self.exp()
            }

            #[inline]
            fn ln(self) -> Self {
                self.ln()
            }

            #[inline]
            fn sqrt(self) -> Self {
                self.sqrt()
            }

            #[inline]
            fn powf(self, b: Self) -> Self {
                self.powf(b)
            }
        }
    };
}

impl_element_float!(f32);
impl_element_float!(f64);

macro_rules! impl_element_int {
    ($T:ty) => {
        impl Element for $T {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $T
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }
        }
    };
}

impl_element_int!(i8);
impl_element_int!(i16);
impl_element_int!(i32);
impl_element_int!(i64);
impl_element_int!(u8);
impl_element_int!(u16);
impl_element_int!(u32);
impl_element_int!(u64);

#[cfg(feature = "f16")]
macro_rules! impl_element_half {
    ($T:ty) => {
        impl Element for $T {
            #[inline]
            fn to_f64(self) -> f64 {
                self.to_f64()
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                <$T>::from_f64(v)
            }

            #[inline]
            fn zero() -> Self {
                <$T>::ZERO
            }

            #[inline]
            fn one() -> Self {
                <$T>::ONE
            }
        }
    };
}

#[cfg(feature = "f16")]
impl_element_half!(half::f16);
#[cfg(feature = "f16")]
impl_element_half!(half::bf16);
