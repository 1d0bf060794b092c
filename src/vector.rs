// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    const_assert_larger,
    utils::{
        array_assume_init, array_get_checked, array_get_mut_checked,
        num::{ClosedAdd, ClosedDiv, ClosedMul, ClosedSub, One, Sqrt, Zero},
        sum, zip_map,
    },
};
#[cfg(feature = "serde")]
use crate::utils::ArrayBuilder;
#[cfg(feature = "serde")]
use core::marker::PhantomData;
use core::{
    array::{self, IntoIter},
    borrow::{Borrow, BorrowMut},
    fmt,
    mem::MaybeUninit,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice::{Iter, IterMut},
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{self, Deserialize, Deserializer, Error, SeqAccess},
    ser::{Serialize, SerializeTupleStruct, Serializer},
};

/// An ordered tuple of `N` scalar components.
///
/// The length is part of the type, so adding a [`Vector2`] to a [`Vector3`] is a compile
/// error rather than a runtime failure. Vectors of length 2 to 4 dereference to a
/// named-field view, which gives access to the `x`, `y`, `z` and `w` components.
///
/// Equality is exact: two vectors are equal when every pair of components compares equal
/// with `==`. Floating point special values follow IEEE-754, so a vector containing `NaN` is
/// never equal to itself.
#[repr(C)]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Vector<T = f32, const N: usize = 3> {
    pub(crate) data: [T; N],
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Vector ")?;
        let mut debug_list = fmtr.debug_list();
        debug_list.entries(self.data.iter());
        debug_list.finish()
    }
}

/// Renders the vector as a parenthesised tuple, e.g. `(3, 4)`.
///
/// Formatting options such as precision are forwarded to every component:
///
/// ```
/// # use lintrans::vector::Vector2;
/// let v = Vector2::new([1.0, 2.5]);
/// assert_eq!(format!("{v}"), "(1, 2.5)");
/// assert_eq!(format!("{v:.2}"), "(1.00, 2.50)");
/// ```
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("(")?;
        for (i, elem) in self.data.iter().enumerate() {
            if i != 0 {
                fmtr.write_str(", ")?;
            }
            fmt::Display::fmt(elem, fmtr)?;
        }
        fmtr.write_str(")")
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self {
            data: array::from_fn(|_| Default::default()),
        }
    }
}

pub type Vector2<T = f32> = Vector<T, 2>;
pub type Vector3<T = f32> = Vector<T, 3>;
pub type Vector4<T = f32> = Vector<T, 4>;

impl_coerce_to_fields! {
    Vector<{T, 2}> => Xy,
    Vector<{T, 3}> => Xyz,
    Vector<{T, 4}> => Xyzw,
}

impl<T: One + Zero + Copy, const N: usize> Vector<T, N> {
    /// A constant representing a vector where the X-axis is set to `1`, and other
    /// elements are set to `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::vector::Vector3;
    /// let vector = Vector3::<i32>::X;
    /// assert_eq!(vector.to_array(), [1, 0, 0]);
    /// ```
    pub const X: Self = Vector::unit_n::<0>();

    /// A constant representing a vector where the Y-axis is set to `1`, and other
    /// elements are set to `0`.
    ///
    /// This constant is not defined when the length of the vector is less than 2.
    pub const Y: Self = Vector::unit_n::<1>();

    /// A constant representing a vector where the Z-axis is set to `1`, and other
    /// elements are set to `0`.
    ///
    /// This constant is not defined when the length of the vector is less than 3.
    ///
    /// ```compile_fail
    /// # use lintrans::vector::Vector2;
    /// let _ = Vector2::<f32>::Z;
    /// ```
    pub const Z: Self = Vector::unit_n::<2>();

    /// A constant representing a vector where the W-axis is set to `1`, and other
    /// elements are set to `0`.
    ///
    /// This constant is not defined when the length of the vector is less than 4.
    pub const W: Self = Vector::unit_n::<3>();

    /// Returns a new vector facing towards the given dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::vector::Vector4;
    /// let vector = Vector4::<i32>::unit_n::<2>();
    /// assert_eq!(vector.to_array(), [0, 0, 1, 0]);
    /// ```
    ///
    /// This method will fail to compile if the given `DIM` is not smaller than the length
    /// of the vector.
    ///
    /// ```compile_fail
    /// use lintrans::vector::Vector3;
    ///
    /// let _ = Vector3::<i32>::unit_n::<3>();
    /// ```
    #[must_use]
    #[inline]
    pub const fn unit_n<const DIM: usize>() -> Self {
        const_assert_larger!(N, DIM);

        let mut data = [T::ZERO; N];
        data[DIM] = T::ONE;
        Vector { data }
    }
}

impl<T, const N: usize> Vector<T, N> {
    pub const LENGTH: usize = N;

    /// Returns a new vector, initializing every component from the given `array`.
    ///
    /// Passing the wrong number of components is a compile error.
    ///
    /// # Example
    ///
    /// ```
    /// # use lintrans::vector::Vector3;
    /// let vector = Vector3::new([1.0, 2.0, 3.0]);
    /// assert_eq!(vector.z, 3.0);
    /// ```
    ///
    /// ```compile_fail
    /// # use lintrans::vector::Vector3;
    /// let vector = Vector3::new([1.0, 2.0]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(array: [T; N]) -> Self {
        Self { data: array }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(array::from_fn(f))
    }

    #[must_use]
    #[inline]
    pub const fn uninit() -> Vector<MaybeUninit<T>, N> {
        Vector {
            data: [const { MaybeUninit::uninit() }; N],
        }
    }

    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }

    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(self, rhs: Vector<U, N>, f: F) -> Vector<Ret, N> {
        Vector {
            data: zip_map(self.data, rhs.data, f),
        }
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::vector::Vector3;
    /// let a = Vector3::new([1, 2, 3]);
    /// let b = Vector3::new([7, 8, 9]);
    /// assert_eq!(a.dot(b), 50);
    /// ```
    #[must_use]
    #[inline]
    pub fn dot<U>(self, rhs: Vector<U, N>) -> T::Output
    where
        T: Mul<U>,
        T::Output: Zero + ClosedAdd,
    {
        sum(self.into_iter().zip(rhs).map(|(x, y)| x * y))
    }

    #[must_use]
    #[inline]
    pub fn elementwise_mul<U>(self, rhs: Vector<U, N>) -> Vector<T::Output, N>
    where
        T: Mul<U>,
    {
        self.zip_map(rhs, Mul::mul)
    }

    #[must_use]
    #[inline]
    pub fn elementwise_div<U>(self, rhs: Vector<U, N>) -> Vector<T::Output, N>
    where
        T: Div<U>,
    {
        self.zip_map(rhs, Div::div)
    }

    #[must_use]
    #[inline]
    pub const fn get(&self, index: usize) -> Option<&T> {
        array_get_checked(&self.data, index)
    }

    #[must_use]
    #[inline]
    pub const fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        array_get_mut_checked(&mut self.data, index)
    }

    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T, const N: usize> Vector<MaybeUninit<T>, N> {
    /// # Safety
    ///
    /// Every component of the vector must have been initialized.
    #[must_use]
    #[inline]
    pub const unsafe fn assume_init(self) -> Vector<T, N> {
        Vector {
            data: unsafe { array_assume_init(self.data) },
        }
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Create a new `Vector` with each element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::vector::Vector4;
    /// let vector = Vector4::splat(21);
    /// vector.into_iter().for_each(|elem| assert_eq!(elem, 21));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Vector { data: [value; N] }
    }
}

impl<T: ClosedMul + Copy + Zero + ClosedAdd, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn len_squared(self) -> T {
        Self::dot(self, self)
    }
}

impl<T: ClosedMul + Copy + ClosedAdd + Zero + Sqrt, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn len(self) -> T {
        self.len_squared().sqrt()
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: ClosedMul + Copy + ClosedAdd + ClosedDiv + Zero + Sqrt + PartialEq,
{
    /// Returns the vector scaled to unit length, or `None` if the vector has a length of zero.
    #[must_use]
    #[inline]
    pub fn normalized(self) -> Option<Vector<T, N>> {
        let len = self.len();
        if len == T::ZERO {
            None
        } else {
            Some(self / len)
        }
    }
}

impl<T: Copy + ClosedMul + ClosedSub> Vector3<T> {
    #[must_use]
    #[inline]
    pub fn cross(self, rhs: Self) -> Vector3<T> {
        let [x0, y0, z0] = self.to_array();
        let [x1, y1, z1] = rhs.to_array();

        Vector3::new([
            (y0 * z1) - (z0 * y1),
            (z0 * x1) - (x0 * z1),
            (x0 * y1) - (y0 * x1),
        ])
    }
}

impl<T: Zero, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Self::new(Zero::ZERO);
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|elem| elem.neg())
    }
}

impl<T: Mul + Copy, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl_scalar_lhs_mul! {
    Vector => [f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
}

impl<T: MulAssign<U>, U: Copy, const N: usize> MulAssign<U> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: U) {
        for elem in &mut self.data {
            elem.mul_assign(rhs);
        }
    }
}

impl<T: Div<U>, U: Copy, const N: usize> Div<U> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn div(self, rhs: U) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: DivAssign<U>, U: Copy, const N: usize> DivAssign<U> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: U) {
        for elem in self {
            elem.div_assign(rhs);
        }
    }
}

impl<T: Add<U>, U, const N: usize> Add<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: AddAssign<U>, U, const N: usize> AddAssign<Vector<U, N>> for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector<U, N>) {
        for (l, r) in self.data.iter_mut().zip(rhs) {
            l.add_assign(r);
        }
    }
}

impl<T: Sub<U>, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: SubAssign<U>, U, const N: usize> SubAssign<Vector<U, N>> for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<U, N>) {
        for (l, r) in self.data.iter_mut().zip(rhs) {
            l.sub_assign(r);
        }
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        Index::index(&self.data, index)
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        IndexMut::index_mut(&mut self.data, index)
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data[..]
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data[..]
    }
}

impl<T, const N: usize> Borrow<[T]> for Vector<T, N> {
    #[inline]
    fn borrow(&self) -> &[T] {
        &self.data[..]
    }
}

impl<T, const N: usize> BorrowMut<[T]> for Vector<T, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.data[..]
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self { data: value }
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type IntoIter = IntoIter<T, N>;
    type Item = T;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

macro_rules! impl_mint_vector {
    ( $( $mint_type:ident <{ $dim:literal }> { $( $field:ident ),+ } ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_type<T>> for Vector<T, $dim> {
                #[inline]
                fn from(mint::$mint_type { $( $field ),+ }: mint::$mint_type<T>) -> Self {
                    Self::new([ $( $field ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Vector<T, $dim>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Vector<T, $dim>) -> Self {
                    let [ $( $field ),+ ] = value.to_array();
                    mint::$mint_type { $( $field ),+ }
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Vector<T, $dim> {
                type MintType = mint::$mint_type<T>;
            }

            #[cfg(feature = "mint")]
            impl<T: PartialEq> PartialEq<mint::$mint_type<T>> for Vector<T, $dim> {
                #[inline]
                fn eq(&self, other: &mint::$mint_type<T>) -> bool {
                    let rhs: &[T; $dim] = other.as_ref();
                    PartialEq::eq(&self.data, rhs)
                }
            }

            #[cfg(feature = "mint")]
            impl<T: PartialEq> PartialEq<Vector<T, $dim>> for mint::$mint_type<T> {
                #[inline]
                fn eq(&self, other: &Vector<T, $dim>) -> bool {
                    PartialEq::eq(other, self)
                }
            }
        )*
    };
}

impl_mint_vector! {
    Vector2<{ 2 }> { x, y },
    Vector3<{ 3 }> { x, y, z },
    Vector4<{ 4 }> { x, y, z, w },
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {
    #[inline]
    fn zeroed() -> Self {
        Vector::from_fn(|_| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut struct_serializer = serializer.serialize_tuple_struct("Vector", N)?;
            for elem in self.as_slice() {
                struct_serializer.serialize_field(elem)?;
            }
            struct_serializer.end()
        } else {
            serializer.collect_seq(self.iter())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpectedVectorData<const N: usize>;

        impl<const N: usize> de::Expected for ExpectedVectorData<N> {
            #[inline]
            fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an array of {} elements", N)
            }
        }

        struct Visitor<T, const N: usize>(PhantomData<Vector<T, N>>);

        impl<'de, T: Deserialize<'de>, const N: usize> de::Visitor<'de> for Visitor<T, N> {
            type Value = Vector<T, N>;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                de::Expected::fmt(&ExpectedVectorData::<N>, formatter)
            }

            #[inline]
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut elems = ArrayBuilder::<T, N>::new();

                while let Some(item) = seq.next_element::<T>()? {
                    if elems.push(item).is_err() {
                        return Err(A::Error::invalid_length(N + 1, &ExpectedVectorData::<N>));
                    }
                }

                match elems.finish() {
                    Ok(elems) => Ok(Vector::new(elems)),
                    Err(elems) => Err(A::Error::invalid_length(elems.len(), &ExpectedVectorData::<N>)),
                }
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_tuple_struct("Vector", N, Visitor::<T, N>(PhantomData))
        } else {
            deserializer.deserialize_seq(Visitor::<T, N>(PhantomData))
        }
    }
}
