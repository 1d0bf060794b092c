// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-size vectors and square matrices for 2D, 3D and 4D transform pipelines.
//!
//! Matrices are column-major: indexing a [`Matrix`] with a single index yields one of its
//! columns, and multiplying a matrix by a vector forms the linear combination of those columns
//! weighted by the vector's components. Matrix literals are still written the way they are on
//! paper, one row at a time:
//!
//! ```
//! use lintrans::{matrix::Matrix2, vector::Vector2};
//!
//! // [ 2 0 ]
//! // [ 0 1 ]
//! let m = Matrix2::new([
//!     [2.0_f64, 0.0],
//!     [0.0, 1.0],
//! ]);
//! let x = Vector2::new([3.0_f64, 4.0]);
//!
//! assert_eq!(m * x, Vector2::new([6.0, 4.0]));
//! assert_eq!(m * x, x.x * m[0] + x.y * m[1]);
//! ```
//!
//! Equality on vectors and matrices is exact. Enable the `approx` feature for tolerant
//! comparisons.
//!
//! [`Matrix`]: crate::matrix::Matrix

#![cfg_attr(not(any(test, feature = "std")), no_std)]

macro_rules! impl_coerce_to_fields {
    (
        $( $type:ident<{ $generic:ident, $const:expr }>  => $fields_type:ident ),+ $(,)?
    ) => {
        $(
            impl<$generic> core::ops::Deref for $type<$generic, $const> {
                type Target = crate::fields:: $fields_type<$generic>;
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<$type<f32, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f64, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f64>>()
                    );

                    unsafe { &*(self as *const _ as *const crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> core::ops::DerefMut for $type<$generic, $const> {
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut _ as *mut crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> From<$type<$generic, $const>> for crate::fields:: $fields_type<$generic> {
                #[inline]
                fn from(value: $type<$generic, $const>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }

            impl<$generic> From<crate::fields:: $fields_type<$generic>> for $type<$generic, $const> {
                #[inline]
                fn from(value: crate::fields:: $fields_type<$generic>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }
        )+
    };
}

/// Implements `scalar * value` for the built-in numeric types, mirroring the `value * scalar`
/// impls. Coherence rules forbid a blanket `impl<T> Mul<Vector<T, N>> for T`.
macro_rules! impl_scalar_lhs_mul {
    ( $type:ident => [ $( $scalar:ty ),* $(,)? ] ) => {
        $(
            impl<const N: usize> core::ops::Mul<$type<$scalar, N>> for $scalar {
                type Output = $type<$scalar, N>;
                #[inline]
                fn mul(self, rhs: $type<$scalar, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

pub mod fields;
pub mod matrix;
pub mod utils;
pub mod vector;

pub use self::{
    matrix::{Matrix, Matrix2, Matrix3, Matrix4, transpose},
    vector::{Vector, Vector2, Vector3, Vector4},
};
