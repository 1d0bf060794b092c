// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    utils::{
        array_get_checked, array_get_mut_checked,
        num::{ClosedDiv, ClosedSub, One, Scalar, Zero},
        sum, zip_map,
    },
    vector::Vector,
};
#[cfg(feature = "serde")]
use crate::utils::ArrayBuilder;
#[cfg(feature = "serde")]
use core::marker::PhantomData;
use core::{
    array, fmt,
    mem::{ManuallyDrop, MaybeUninit},
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    ptr, slice,
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{self, Deserialize, Deserializer, Error, SeqAccess},
    ser::{Serialize, SerializeTupleStruct, Serializer},
};

#[cfg(test)]
mod tests;

/// A square, column-major matrix of `N` by `N` scalars.
///
/// The matrix is stored as `N` column vectors. Indexing with a single index returns a
/// reference to a column, and indexing with a `(row, col)` pair returns a single entry:
///
/// ```
/// # use lintrans::{matrix::Matrix2, vector::Vector2};
/// let m = Matrix2::new([
///     [1, 2],
///     [3, 4],
/// ]);
///
/// assert_eq!(m[(0, 1)], 2);
/// assert_eq!(m[1], Vector2::new([2, 4]));
/// assert_eq!(m.row(1), Vector2::new([3, 4]));
/// ```
///
/// Multiplying a matrix by a vector (`m * v`) treats the vector as a column vector, and
/// produces the linear combination of the matrix's columns weighted by the vector's components.
/// Multiplying a vector by a matrix (`v * m`) treats the vector as a row vector instead. The
/// two products are different in general: `v * m` is equal to `transpose(m) * v`.
///
/// The default value is the zero matrix. Use [`Matrix::identity()`] for the identity.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct Matrix<T = f32, const N: usize = 4> {
    cols: [Vector<T, N>; N],
}

pub type Matrix2<T = f32> = Matrix<T, 2>;
pub type Matrix3<T = f32> = Matrix<T, 3>;
pub type Matrix4<T = f32> = Matrix<T, 4>;

/// Returns the transpose of `matrix`, where the entry at `(i, j)` is the entry of `matrix`
/// at `(j, i)`.
///
/// For any two matrices `a` and `b`, `transpose(a * b) == transpose(b) * transpose(a)`.
///
/// # Examples
///
/// ```
/// # use lintrans::matrix::{Matrix2, transpose};
/// let m = Matrix2::new([
///     [1, 2],
///     [3, 4],
/// ]);
///
/// assert_eq!(transpose(m), Matrix2::new([
///     [1, 3],
///     [2, 4],
/// ]));
/// ```
#[must_use]
#[inline]
pub fn transpose<T, const N: usize>(matrix: Matrix<T, N>) -> Matrix<T, N> {
    matrix.transpose()
}

impl<T: Default, const N: usize> Default for Matrix<T, N> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| Default::default())
    }
}

impl<T, const N: usize> Matrix<T, N> {
    pub const NUM_ELEMENTS: usize = N * N;

    /// Create a new `Matrix` from rows written in reading order.
    ///
    /// The first inner array is the top row of the matrix. The entries are stored so that
    /// `matrix[(row, col)]` returns `rows[row][col]`, and `matrix[col]` returns the
    /// column made of `rows[0][col]`, `rows[1][col]`, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::{matrix::Matrix3, vector::Vector3};
    /// let matrix = Matrix3::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    ///
    /// assert_eq!(matrix[(2, 0)], 7);
    /// assert_eq!(matrix[2], Vector3::new([3, 6, 9]));
    /// ```
    ///
    /// A literal with the wrong number of entries does not compile:
    ///
    /// ```compile_fail
    /// # use lintrans::matrix::Matrix2;
    /// let matrix = Matrix2::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// ```
    #[must_use]
    #[inline]
    pub fn new(rows: [[T; N]; N]) -> Self {
        Matrix::from_rows(rows.map(Vector::new))
    }

    /// Create a new `Matrix` from its column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::{matrix::Matrix2, vector::Vector2};
    /// let matrix = Matrix2::from_columns([
    ///     Vector2::new([1, 3]),
    ///     Vector2::new([2, 4]),
    /// ]);
    ///
    /// assert_eq!(matrix, Matrix2::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn from_columns(cols: [Vector<T, N>; N]) -> Self {
        Self { cols }
    }

    /// Create a new `Matrix` from its row vectors.
    #[must_use]
    #[inline]
    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Matrix::from_columns(rows).transpose()
    }

    /// Create a new `Matrix` by calling `f` with the `(row, col)` position of every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix2;
    /// let matrix = Matrix2::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(matrix, Matrix2::new([
    ///     [0, 1],
    ///     [10, 11],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            cols: array::from_fn(|col| Vector::from_fn(|row| f(row, col))),
        }
    }

    /// Creates a new `Matrix`, where every element is uninitialized.
    #[must_use]
    #[inline]
    pub const fn uninit() -> Matrix<MaybeUninit<T>, N> {
        Matrix {
            cols: [const { Vector::uninit() }; N],
        }
    }

    /// Returns the columns of the matrix, leftmost first.
    #[must_use]
    #[inline]
    pub const fn as_columns(&self) -> &[Vector<T, N>; N] {
        &self.cols
    }

    #[must_use]
    #[inline]
    pub fn to_columns(self) -> [Vector<T, N>; N] {
        self.cols
    }

    /// Returns the entries of the matrix as a nested array of rows, in the same layout
    /// accepted by [`Matrix::new()`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix2;
    /// let rows = [[1, 2], [3, 4]];
    /// assert_eq!(Matrix2::new(rows).to_array(), rows);
    /// ```
    #[must_use]
    #[inline]
    pub fn to_array(self) -> [[T; N]; N] {
        self.transpose().cols.map(Vector::to_array)
    }

    /// Returns the entries of the matrix as a flat slice, one column after another.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix2;
    /// let matrix = Matrix2::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.as_slice(), &[1, 3, 2, 4]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.cols.as_ptr().cast::<T>(), N * N) }
    }

    #[must_use]
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.cols.as_mut_ptr().cast::<T>(), N * N) }
    }

    /// Attempt to get a reference to the entry at `row` and `col`.
    ///
    /// This method returns `None` if either of the given indices are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix2;
    /// let matrix = Matrix2::new([
    ///     [5.0, 6.0],
    ///     [1.0, 3.0],
    /// ]);
    ///
    /// assert_eq!(matrix.get(0, 1), Some(&6.0));
    /// assert_eq!(matrix.get(2, 0), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> Option<&T> {
        match array_get_checked(&self.cols, col) {
            Some(col) => array_get_checked(&col.data, row),
            None => None,
        }
    }

    #[must_use]
    #[inline]
    pub const fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        match array_get_mut_checked(&mut self.cols, col) {
            Some(col) => array_get_mut_checked(&mut col.data, row),
            None => None,
        }
    }

    /// Replaces the column at `col_idx`.
    ///
    /// # Panics
    ///
    /// This method will panic if `col_idx` is equal or greater to `N`.
    #[track_caller]
    #[inline]
    pub fn set_col(&mut self, col_idx: usize, col: Vector<T, N>) {
        assert!(col_idx < N, "column index out of bounds");
        self.cols[col_idx] = col;
    }

    /// Replaces the row at `row_idx`.
    ///
    /// # Panics
    ///
    /// This method will panic if `row_idx` is equal or greater to `N`.
    #[track_caller]
    #[inline]
    pub fn set_row(&mut self, row_idx: usize, row: Vector<T, N>) {
        assert!(row_idx < N, "row index out of bounds");
        for (col, elem) in self.cols.iter_mut().zip(row) {
            col[row_idx] = elem;
        }
    }

    #[inline]
    pub fn columns(&self) -> slice::Iter<'_, Vector<T, N>> {
        self.cols.iter()
    }

    #[inline]
    pub fn columns_mut(&mut self) -> slice::IterMut<'_, Vector<T, N>> {
        self.cols.iter_mut()
    }

    /// Applies the given function `f` to every entry of the `Matrix`, returning a new matrix.
    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, N> {
        Matrix {
            cols: self.cols.map(|col| col.map(&mut f)),
        }
    }

    #[must_use]
    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(self, rhs: Matrix<U, N>, mut f: F) -> Matrix<Ret, N> {
        Matrix {
            cols: zip_map(self.cols, rhs.cols, |lhs, rhs| lhs.zip_map(rhs, &mut f)),
        }
    }

    /// Computes the transpose of the matrix, returning a copy of the transpose.
    ///
    /// See the [`transpose_in_place()`] method as an alternative for transposing a matrix
    /// without moving it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix3;
    /// let matrix = Matrix3::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix3::new([
    ///     [1, 4, 7],
    ///     [2, 5, 8],
    ///     [3, 6, 9],
    /// ]));
    /// ```
    ///
    /// [`transpose_in_place()`]: Matrix::transpose_in_place
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, N> {
        let this = ManuallyDrop::new(self);
        let mut transposed = Matrix::uninit();

        for col in 0..N {
            for row in 0..N {
                unsafe {
                    transposed.cols[row][col].write(ptr::read(&this.cols[col][row]));
                }
            }
        }

        unsafe { Matrix::assume_init(transposed) }
    }

    /// Transposes the matrix by swapping entries around the diagonal, without creating
    /// a new intermediate matrix.
    #[inline]
    pub fn transpose_in_place(&mut self) {
        let slice: &mut [T] = self.as_mut_slice();
        for col in 0..N {
            for row in (col + 1)..N {
                slice.swap(col * N + row, row * N + col);
            }
        }
    }
}

impl<T, const N: usize> Matrix<MaybeUninit<T>, N> {
    /// # Safety
    ///
    /// Every entry of the matrix must have been initialized.
    #[must_use]
    #[inline]
    pub unsafe fn assume_init(self) -> Matrix<T, N> {
        Matrix {
            cols: self.cols.map(|col| unsafe { col.assume_init() }),
        }
    }
}

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Creates a new matrix, where every entry is set to `value`.
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            cols: [Vector::splat(value); N],
        }
    }

    /// Returns a copy of the column at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `N`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn col(&self, n: usize) -> Vector<T, N> {
        assert!(n < N, "given column index is out of bounds");
        self.cols[n]
    }

    /// Returns a copy of the row at `n`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::{matrix::Matrix3, vector::Vector3};
    /// let matrix = Matrix3::new([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    ///     [6, 7, 8],
    /// ]);
    ///
    /// assert_eq!(matrix.row(1), Vector3::new([3, 4, 5]));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row(&self, n: usize) -> Vector<T, N> {
        assert!(n < N, "given row index is out of bounds");
        Vector::new(self.cols.map(|col| col[n]))
    }

    /// Returns the entries on the main diagonal, from the top-left to the bottom-right.
    #[must_use]
    #[inline]
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.cols[i][i])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    #[must_use]
    #[inline]
    pub fn trace(&self) -> T {
        sum(self.diagonal())
    }
}

impl<T: Zero, const N: usize> Zero for Matrix<T, N> {
    const ZERO: Self = Matrix {
        cols: [const { Vector::ZERO }; N],
    };
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N> {
    pub const IDENTITY: Self = Matrix::identity();

    /// Constructs an instance of the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix3;
    /// let matrix = Matrix3::<f64>::identity();
    ///
    /// assert_eq!(matrix, Matrix3::new([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        let mut cols = [Vector::ZERO; N];

        let mut i = 0;
        while i < N {
            cols[i].data[i] = T::ONE;
            i += 1;
        }

        Matrix { cols }
    }
}

/// Computes the determinant of the top-left `n` by `n` block of `rows` by expanding along
/// the top row.
fn block_determinant<T, const N: usize>(rows: &[[T; N]; N], n: usize) -> T
where
    T: Scalar + ClosedSub + One,
{
    match n {
        0 => T::ONE,
        1 => rows[0][0],
        2 => (rows[0][0] * rows[1][1]) - (rows[0][1] * rows[1][0]),
        _ => {
            let mut result = T::ZERO;

            for col in 0..n {
                let minor = minor_block(rows, n, 0, col);
                let value = rows[0][col] * block_determinant(&minor, n - 1);

                result = if col % 2 == 0 {
                    result + value
                } else {
                    result - value
                };
            }

            result
        }
    }
}

/// Copies the top-left `n` by `n` block of `rows` without `removed_row` and `removed_col`
/// into the top-left corner of a zero-filled array.
fn minor_block<T: Copy + Zero, const N: usize>(
    rows: &[[T; N]; N],
    n: usize,
    removed_row: usize,
    removed_col: usize,
) -> [[T; N]; N] {
    let mut minor = [[T::ZERO; N]; N];

    let src_rows = (0..n).filter(|&row| row != removed_row);
    for (dst_row, src_row) in src_rows.enumerate() {
        let src_cols = (0..n).filter(|&col| col != removed_col);
        for (dst_col, src_col) in src_cols.enumerate() {
            minor[dst_row][dst_col] = rows[src_row][src_col];
        }
    }

    minor
}

impl<T, const N: usize> Matrix<T, N>
where
    T: Scalar + ClosedSub + One,
{
    /// Calculates the scalar determinant of the matrix by cofactor expansion.
    ///
    /// If this value is `0`, then the matrix is not invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix3;
    /// let matrix = Matrix3::new([
    ///     [2, 0, 1],
    ///     [1, 3, 2],
    ///     [1, 1, 2],
    /// ]);
    ///
    /// assert_eq!(matrix.determinant(), 6);
    /// ```
    #[must_use]
    #[inline]
    pub fn determinant(self) -> T {
        block_determinant(&self.to_array(), N)
    }

    /// Returns the signed minor of the entry at `row` and `col`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn cofactor(self, row: usize, col: usize) -> T {
        assert!(row < N && col < N, "cofactor position out of bounds");

        let minor = minor_block(&self.to_array(), N, row, col);
        let minor_det = block_determinant(&minor, N - 1);
        if (row + col) % 2 == 0 {
            minor_det
        } else {
            T::ZERO - minor_det
        }
    }

    /// Calculates the adjugate matrix, the transpose of the matrix of cofactors.
    ///
    /// This is used to find the inverse of the matrix in [`Matrix::inverse()`].
    #[doc(alias = "adjoint")]
    #[must_use]
    #[inline]
    pub fn adjugate(self) -> Matrix<T, N> {
        Matrix::from_fn(|row, col| self.cofactor(col, row))
    }
}

impl<T, const N: usize> Matrix<T, N>
where
    T: Scalar + ClosedSub + ClosedDiv + One + PartialEq,
{
    /// Returns whether the matrix is invertible.
    ///
    /// If this is `false`, then [`Matrix::inverse()`] returns `None`.
    #[must_use]
    #[inline]
    pub fn is_invertible(self) -> bool {
        self.determinant() != T::ZERO
    }

    /// Calculates the inverse of the matrix, or returns `None` if the determinant is zero.
    ///
    /// The inverse is the adjugate divided by the determinant. No pivoting is performed, so
    /// the result of nearly singular matrices is only as accurate as the determinant.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lintrans::matrix::Matrix2;
    /// let matrix = Matrix2::new([
    ///     [4.0, 7.0],
    ///     [2.0, 6.0],
    /// ]);
    ///
    /// let inverse = matrix.inverse().unwrap();
    /// assert_eq!(inverse, Matrix2::new([
    ///     [0.6, -0.7],
    ///     [-0.2, 0.4],
    /// ]));
    ///
    /// assert_eq!(Matrix2::splat(1.0).inverse(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn inverse(self) -> Option<Self> {
        let determinant = self.determinant();
        if determinant == T::ZERO {
            return None;
        }

        Some(self.adjugate() / determinant)
    }
}

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = Vector<T, N>;

    /// Returns a reference to the column at `index`.
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    /// Returns a reference to the entry at `(row, col)`.
    #[track_caller]
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cols[col][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cols[col][row]
    }
}

/// Column-vector product: the linear combination of the matrix's columns, weighted by the
/// components of `rhs`.
///
/// ```
/// # use lintrans::{matrix::Matrix2, vector::Vector2};
/// let a = Matrix2::new([
///     [1.0_f32, 2.0],
///     [3.0, 4.0],
/// ]);
/// let x = Vector2::new([5.0_f32, 6.0]);
///
/// assert_eq!(a * x, x.x * a[0] + x.y * a[1]);
/// assert_eq!(a * x, Vector2::new([17.0, 39.0]));
/// ```
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        sum(self.cols.into_iter().zip(rhs).map(|(col, weight)| col * weight))
    }
}

/// Row-vector product: component `j` of the result is the dot product of `self` with
/// column `j` of `rhs`.
///
/// ```
/// # use lintrans::{matrix::{Matrix2, transpose}, vector::Vector2};
/// let a = Matrix2::new([
///     [1.0_f64, 2.0],
///     [3.0, 4.0],
/// ]);
/// let x = Vector2::new([1.0_f64, 0.0]);
///
/// assert_eq!(x * a, Vector2::new([1.0, 2.0]));
/// assert_eq!(a * x, Vector2::new([1.0, 3.0]));
/// assert_eq!(x * a, transpose(a) * x);
/// ```
impl<T: Scalar, const N: usize> Mul<Matrix<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;
    #[inline]
    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Vector::new(rhs.cols.map(|col| self.dot(col)))
    }
}

/// Matrix product: column `j` of the result is `self * rhs[j]`.
impl<T: Scalar, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N> {
    type Output = Matrix<T, N>;
    #[inline]
    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix {
            cols: rhs.cols.map(|col| self * col),
        }
    }
}

impl<T: Scalar, const N: usize> MulAssign<Matrix<T, N>> for Matrix<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, N>) {
        *self = *self * rhs;
    }
}

impl<T: Copy + Mul, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Matrix<T::Output, N>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl_scalar_lhs_mul! {
    Matrix => [f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
}

impl<T: MulAssign<T> + Copy, const N: usize> MulAssign<T> for Matrix<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for elem in self.as_mut_slice() {
            elem.mul_assign(rhs);
        }
    }
}

impl<T: Div<U>, U: Copy, const N: usize> Div<U> for Matrix<T, N> {
    type Output = Matrix<T::Output, N>;
    #[inline]
    fn div(self, rhs: U) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: DivAssign<U>, U: Copy, const N: usize> DivAssign<U> for Matrix<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: U) {
        for elem in self.as_mut_slice() {
            elem.div_assign(rhs);
        }
    }
}

impl<T: Add<U>, U, const N: usize> Add<Matrix<U, N>> for Matrix<T, N> {
    type Output = Matrix<T::Output, N>;
    #[inline]
    fn add(self, rhs: Matrix<U, N>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: AddAssign<U>, U, const N: usize> AddAssign<Matrix<U, N>> for Matrix<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Matrix<U, N>) {
        for (l, r) in self.cols.iter_mut().zip(rhs.cols) {
            l.add_assign(r);
        }
    }
}

impl<T: Sub<U>, U, const N: usize> Sub<Matrix<U, N>> for Matrix<T, N> {
    type Output = Matrix<T::Output, N>;
    #[inline]
    fn sub(self, rhs: Matrix<U, N>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: SubAssign<U>, U, const N: usize> SubAssign<Matrix<U, N>> for Matrix<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Matrix<U, N>) {
        for (l, r) in self.cols.iter_mut().zip(rhs.cols) {
            l.sub_assign(r);
        }
    }
}

impl<T: Neg, const N: usize> Neg for Matrix<T, N> {
    type Output = Matrix<T::Output, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    #[inline]
    fn from(rows: [[T; N]; N]) -> Self {
        Self::new(rows)
    }
}

impl<T, const N: usize> From<Matrix<T, N>> for [[T; N]; N] {
    #[inline]
    fn from(value: Matrix<T, N>) -> Self {
        value.to_array()
    }
}

impl<T, const N: usize> From<[Vector<T, N>; N]> for Matrix<T, N> {
    #[inline]
    fn from(cols: [Vector<T, N>; N]) -> Self {
        Self::from_columns(cols)
    }
}

impl<T, const N: usize> AsRef<[T]> for Matrix<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for Matrix<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[Vector<T, N>; N]> for Matrix<T, N> {
    #[inline]
    fn as_ref(&self) -> &[Vector<T, N>; N] {
        &self.cols
    }
}

struct DebugRow<'a, T, const N: usize> {
    matrix: &'a Matrix<T, N>,
    row: usize,
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for DebugRow<'_, T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.debug_list()
            .entries(self.matrix.cols.iter().map(|col| &col[self.row]))
            .finish()
    }
}

/// Lists the rows of the matrix from top to bottom, e.g. `Matrix [[1, 2], [3, 4]]`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Matrix ")?;
        fmtr.debug_list()
            .entries((0..N).map(|row| DebugRow { matrix: self, row }))
            .finish()
    }
}

/// Renders the matrix as a grid with one line per row:
///
/// ```
/// # use lintrans::matrix::Matrix2;
/// let m = Matrix2::new([
///     [2.0, 0.0],
///     [0.0, 1.0],
/// ]);
///
/// assert_eq!(m.to_string(), "[ 2, 0 ]\n[ 0, 1 ]\n");
/// ```
impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            fmtr.write_str("[ ")?;
            for (i, col) in self.cols.iter().enumerate() {
                if i != 0 {
                    fmtr.write_str(", ")?;
                }
                fmt::Display::fmt(&col[row], fmtr)?;
            }
            fmtr.write_str(" ]\n")?;
        }

        Ok(())
    }
}

macro_rules! impl_mint_matrix {
    (
        $( ($column_type:ident, $row_type:ident) <{ $dim:literal }> { $( $vec:ident ),+ } ),* $(,)?
    ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$column_type<T>> for Matrix<T, $dim> {
                #[inline]
                fn from(value: mint::$column_type<T>) -> Self {
                    Matrix::from_columns([ $( value.$vec.into() ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Matrix<T, $dim>> for mint::$column_type<T> {
                #[inline]
                fn from(value: Matrix<T, $dim>) -> Self {
                    let [ $( $vec ),+ ] = value.to_columns();
                    mint::$column_type { $( $vec: $vec.into() ),+ }
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<mint::$row_type<T>> for Matrix<T, $dim> {
                #[inline]
                fn from(value: mint::$row_type<T>) -> Self {
                    Matrix::from_rows([ $( value.$vec.into() ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Matrix<T, $dim>> for mint::$row_type<T> {
                #[inline]
                fn from(value: Matrix<T, $dim>) -> Self {
                    let [ $( $vec ),+ ] = value.transpose().to_columns();
                    mint::$row_type { $( $vec: $vec.into() ),+ }
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Matrix<T, $dim> {
                type MintType = mint::$column_type<T>;
            }

            #[cfg(feature = "mint")]
            impl<T: PartialEq> PartialEq<mint::$column_type<T>> for Matrix<T, $dim> {
                #[inline]
                fn eq(&self, other: &mint::$column_type<T>) -> bool {
                    let [ $( $vec ),+ ] = &self.cols;
                    true $( && PartialEq::eq($vec, &other.$vec) )+
                }
            }
        )*
    };
}

impl_mint_matrix! {
    (ColumnMatrix2, RowMatrix2) <{ 2 }> { x, y },
    (ColumnMatrix3, RowMatrix3) <{ 3 }> { x, y, z },
    (ColumnMatrix4, RowMatrix4) <{ 4 }> { x, y, z, w },
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {
    #[inline]
    fn zeroed() -> Self {
        Matrix::from_fn(|_, _| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

#[cfg(feature = "matrixcompare")]
impl<T: Copy, const N: usize> matrixcompare_core::Matrix<T> for Matrix<T, N> {
    #[inline]
    fn rows(&self) -> usize {
        N
    }

    #[inline]
    fn cols(&self) -> usize {
        N
    }

    #[inline]
    fn access(&self) -> matrixcompare_core::Access<'_, T> {
        matrixcompare_core::Access::Dense(self)
    }
}

#[cfg(feature = "matrixcompare")]
impl<T: Copy, const N: usize> matrixcompare_core::DenseAccess<T> for Matrix<T, N> {
    #[inline]
    fn fetch_single(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const N: usize> approx::AbsDiffEq for Matrix<T, N>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const N: usize> approx::RelativeEq for Matrix<T, N>
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
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const N: usize> approx::UlpsEq for Matrix<T, N>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

/// Matrices serialize as their `N` column vectors, leftmost first.
#[cfg(feature = "serde")]
impl<T: Serialize, const N: usize> Serialize for Matrix<T, N> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut struct_serializer = serializer.serialize_tuple_struct("Matrix", N)?;
            for col in &self.cols {
                struct_serializer.serialize_field(col)?;
            }
            struct_serializer.end()
        } else {
            serializer.collect_seq(self.cols.iter())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Matrix<T, N> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpectedMatrixData<const N: usize>;

        impl<const N: usize> de::Expected for ExpectedMatrixData<N> {
            #[inline]
            fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an array of {N} columns of {N} elements")
            }
        }

        struct Visitor<T, const N: usize>(PhantomData<Matrix<T, N>>);

        impl<'de, T: Deserialize<'de>, const N: usize> de::Visitor<'de> for Visitor<T, N> {
            type Value = Matrix<T, N>;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                de::Expected::fmt(&ExpectedMatrixData::<N>, formatter)
            }

            #[inline]
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut cols = ArrayBuilder::<Vector<T, N>, N>::new();

                while let Some(col) = seq.next_element::<Vector<T, N>>()? {
                    if cols.push(col).is_err() {
                        return Err(A::Error::invalid_length(N + 1, &ExpectedMatrixData::<N>));
                    }
                }

                match cols.finish() {
                    Ok(cols) => Ok(Matrix::from_columns(cols)),
                    Err(cols) => Err(A::Error::invalid_length(cols.len(), &ExpectedMatrixData::<N>)),
                }
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_tuple_struct("Matrix", N, Visitor::<T, N>(PhantomData))
        } else {
            deserializer.deserialize_seq(Visitor::<T, N>(PhantomData))
        }
    }
}
