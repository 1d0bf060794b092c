// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Matrix, Matrix2, Matrix3, Matrix4, transpose},
    utils::num::Zero,
    vector::{Vector2, Vector3, Vector4},
};

#[test]
fn test_matrix_access() {
    #[rustfmt::skip]
    let mut matrix = Matrix3::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    assert_eq!(matrix.row(1), Vector3::new([4, 5, 6]));
    assert_eq!(matrix.col(2), Vector3::new([3, 6, 9]));
    assert_eq!(matrix.diagonal(), Vector3::new([1, 5, 9]));
    assert_eq!(matrix.trace(), 15);

    assert_eq!(matrix.get(0, 2), Some(&3));
    assert_eq!(matrix.get(3, 0), None);
    assert_eq!(matrix.get(0, 3), None);

    matrix[(2, 0)] = 99;
    assert_eq!(matrix[0][2], 99);
    assert_eq!(matrix.row(2), Vector3::new([99, 8, 9]));

    if let Some(elem) = matrix.get_mut(1, 1) {
        *elem = -5;
    }
    assert_eq!(matrix[(1, 1)], -5);

    matrix.set_col(0, Vector3::new([10, 20, 30]));
    assert_eq!(matrix.row(0), Vector3::new([10, 2, 3]));

    matrix.set_row(2, Vector3::new([0, 0, 0]));
    assert_eq!(matrix.col(1), Vector3::new([2, -5, 0]));

    let columns: Vec<_> = matrix.columns().copied().collect();
    assert_eq!(columns, matrix.to_columns().to_vec());
}

#[test]
fn test_constructor_reads_rows() {
    #[rustfmt::skip]
    let m = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);

    assert_eq!(m[(0, 1)], 2);
    assert_eq!(m[(1, 0)], 3);
    assert_eq!(m[0], Vector2::new([1, 3]));
    assert_eq!(m[1], Vector2::new([2, 4]));
    assert_eq!(m.row(1), Vector2::new([3, 4]));

    assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
    assert_eq!(m.to_array(), [[1, 2], [3, 4]]);
    assert_eq!(Matrix2::from([[1, 2], [3, 4]]), m);

    let from_columns = Matrix2::from_columns([Vector2::new([1, 3]), Vector2::new([2, 4])]);
    let from_rows = Matrix2::from_rows([Vector2::new([1, 2]), Vector2::new([3, 4])]);
    assert_eq!(from_columns, m);
    assert_eq!(from_rows, m);
    assert_eq!(Matrix2::from_fn(|row, col| 2 * row + col + 1), m);
}

#[test]
fn test_matrix_vector_multiply() {
    #[rustfmt::skip]
    let m = Matrix2::new([
        [2.0_f64, 0.0],
        [0.0, 1.0],
    ]);
    assert_eq!(m * Vector2::new([3.0, 4.0]), Vector2::new([6.0, 4.0]));

    #[rustfmt::skip]
    let a = Matrix2::new([
        [1.0_f64, 2.0],
        [3.0, 4.0],
    ]);
    let e1 = Vector2::new([1.0_f64, 0.0]);

    assert_eq!(a * e1, Vector2::new([1.0, 3.0]));
    assert_eq!(e1 * a, Vector2::new([1.0, 2.0]));
    assert_ne!(a * e1, e1 * a);

    #[rustfmt::skip]
    let m = Matrix3::new([
        [1_i32, 2, 3],
        [4, 5, 6],
        [7, 8, 10],
    ]);
    let v = Vector3::new([1_i32, -1, 2]);

    assert_eq!(m * v, Vector3::new([5, 11, 19]));
    assert_eq!(m * v, v.x * m[0] + v.y * m[1] + v.z * m[2]);
    assert_eq!(v * m, Vector3::new([11, 13, 17]));
    assert_eq!(v * m, transpose(m) * v);
}

#[test]
fn test_matrix_multiply() {
    #[rustfmt::skip]
    let m1 = Matrix4::new([
        [15, 07, 09, 10],
        [02, 03, 03, 08],
        [08, 10, 02, 03],
        [03, 03, 04, 08],
    ]);

    #[rustfmt::skip]
    let m2 = Matrix4::new([
        [03, 10, 12, 18],
        [12, 01, 04, 09],
        [09, 10, 12, 02],
        [03, 12, 04, 10],
    ]);

    #[rustfmt::skip]
    let result = Matrix4::new([
        [240, 367, 356, 451],
        [093, 149, 104, 149],
        [171, 146, 172, 268],
        [105, 169, 128, 169],
    ]);

    assert_eq!(m1 * m2, result);
    for j in 0..4 {
        assert_eq!((m1 * m2)[j], m1 * m2[j]);
    }

    let mut m3 = m1;
    m3 *= m2;
    assert_eq!(m3, result);

    assert_eq!(
        Matrix4::<f32>::identity() * Matrix4::identity(),
        Matrix4::identity()
    );
    assert_eq!(m1 * Matrix4::<i32>::identity(), m1);
    assert_eq!(Matrix4::<i32>::identity() * m1, m1);

    #[rustfmt::skip]
    let a = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);
    #[rustfmt::skip]
    let swap = Matrix2::new([
        [0, 1],
        [1, 0],
    ]);

    assert_eq!(a * swap, Matrix2::new([[2, 1], [4, 3]]));
    assert_eq!(swap * a, Matrix2::new([[3, 4], [1, 2]]));
}

#[test]
fn test_matrix_add() {
    #[rustfmt::skip]
    let m1 = Matrix3::new([
        [1_i32, 3, 0],
        [1, 0, 2],
        [1, 2, 1],
    ]);

    #[rustfmt::skip]
    let m2 = Matrix3::new([
        [0, 0, 1],
        [7, 5, 0],
        [2, 1, 1],
    ]);

    #[rustfmt::skip]
    let expected_add_result = Matrix3::new([
        [1, 3, 1],
        [8, 5, 2],
        [3, 3, 2],
    ]);

    #[rustfmt::skip]
    let expected_sub_result = Matrix3::new([
        [01, 03, -1],
        [-6, -5, 02],
        [-1, 01, 00],
    ]);

    assert_eq!(m1 + m2, expected_add_result);
    assert_eq!(m1 - m2, expected_sub_result);
    assert_eq!(-m2 + m1, expected_sub_result);

    let mut m = m1;
    m += m2;
    assert_eq!(m, expected_add_result);
    m -= m2;
    assert_eq!(m, m1);
}

#[test]
fn test_scalar_operations() {
    #[rustfmt::skip]
    let m = Matrix2::new([
        [1_i32, -2],
        [3, 4],
    ]);
    let doubled = Matrix2::new([[2, -4], [6, 8]]);

    assert_eq!(m * 2, doubled);
    assert_eq!(2_i32 * m, doubled);
    assert_eq!(doubled / 2, m);

    let mut n = m;
    n *= 2;
    assert_eq!(n, doubled);
    n /= 2;
    assert_eq!(n, m);

    assert_eq!(m.map(|elem| elem * 2), doubled);
    assert_eq!(m.zip_map(m, |l, r| l + r), doubled);
    assert_eq!(Matrix2::splat(7).as_slice(), &[7, 7, 7, 7]);
}

#[test]
fn test_transpose() {
    #[rustfmt::skip]
    let mut mat = Matrix3::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    let transposed = Matrix3::new([
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
    ]);

    assert_eq!(mat.transpose(), transposed);
    assert_eq!(transpose(mat), transposed);
    assert_eq!(mat.transpose().transpose(), mat);

    mat.transpose_in_place();
    assert_eq!(mat, transposed);

    let mut mat = Matrix::new([[1]]);
    mat.transpose_in_place();
    assert_eq!(mat[(0, 0)], 1);

    #[rustfmt::skip]
    let a = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);
    #[rustfmt::skip]
    let b = Matrix2::new([
        [0, 5],
        [6, 7],
    ]);

    assert_eq!(transpose(a * b), transpose(b) * transpose(a));
    assert_ne!(transpose(a * b), transpose(a) * transpose(b));
}

#[test]
fn test_transpose_moves_owned_values() {
    let mat = Matrix2::from_fn(|row, col| format!("{row}{col}"));
    let transposed = mat.clone().transpose();

    assert_eq!(transposed[(0, 1)], "10");
    assert_eq!(transposed[(1, 0)], "01");
    assert_eq!(transposed.transpose(), mat);
}

#[test]
fn test_identity_and_zero() {
    #[rustfmt::skip]
    let identity = Matrix3::new([
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 1],
    ]);

    assert_eq!(Matrix3::<i32>::identity(), identity);
    assert_eq!(Matrix3::<i32>::IDENTITY, identity);

    let v = Vector3::new([4, -2, 9]);
    assert_eq!(identity * v, v);
    assert_eq!(v * identity, v);

    assert_eq!(Matrix3::<i32>::default(), Matrix3::ZERO);
    assert_eq!(Matrix3::<i32>::ZERO * v, Vector3::ZERO);
    assert_eq!(Matrix4::<f32>::default().as_slice(), &[0.0; 16]);
}

#[test]
fn test_equality_is_exact() {
    let m = Matrix2::new([[0.1_f64 + 0.2, 1.0], [0.0, 1.0]]);
    assert_ne!(m, Matrix2::new([[0.3, 1.0], [0.0, 1.0]]));
    assert_eq!(m, m);

    let nan = Matrix2::splat(f64::NAN);
    assert_ne!(nan, nan);

    let inf = Matrix2::new([[f64::INFINITY, 0.0], [0.0, 1.0]]);
    assert_eq!(inf * Vector2::new([1.0, 0.0]), Vector2::new([f64::INFINITY, 0.0]));
}

#[test]
fn test_determinant() {
    let mat = Matrix::new([[25]]);
    assert_eq!(mat.determinant(), 25);

    #[rustfmt::skip]
    let mat = Matrix2::new([
        [3, 8],
        [4, 6],
    ]);

    assert_eq!(mat.determinant(), -14);

    #[rustfmt::skip]
    let mat = Matrix3::new([
        [1, 2, 1],
        [0, 3, 0],
        [4, 1, 2],
    ]);

    assert_eq!(mat.determinant(), -6);

    #[rustfmt::skip]
    let mat = Matrix3::new([
        [3, 1, 2],
        [0, 2, 5],
        [2, 0, 4],
    ]);

    assert_eq!(mat.determinant(), 26);

    #[rustfmt::skip]
    let mat = Matrix3::new([
        [00, -1, 2],
        [03, 02, 0],
        [-1, 03, 2],
    ]);

    assert_eq!(mat.determinant(), 28);

    #[rustfmt::skip]
    let mat = Matrix4::new([
        [02, 01, 3, 4],
        [00, -1, 2, 1],
        [03, 02, 0, 5],
        [-1, 03, 2, 1],
    ]);

    assert_eq!(mat.determinant(), 35);

    #[rustfmt::skip]
    let mat = Matrix4::new([
        [02, 01, 00, 3],
        [04, -1, 02, 0],
        [-3, 02, 01, 5],
        [01, 00, -2, 3],
    ]);

    assert_eq!(mat.determinant(), -85);
    assert_eq!(mat.transpose().determinant(), -85);

    assert_eq!(Matrix4::<i32>::identity().determinant(), 1);
}

#[test]
fn test_cofactor() {
    #[rustfmt::skip]
    let mat = Matrix2::new([
        [1, 2],
        [3, 4],
    ]);

    assert_eq!(mat.cofactor(0, 0), 4);
    assert_eq!(mat.cofactor(0, 1), -3);
    assert_eq!(mat.cofactor(1, 0), -2);
    assert_eq!(mat.cofactor(1, 1), 1);
}

#[test]
fn test_adjugate() {
    #[rustfmt::skip]
    let mat = Matrix2::new([
        [03, 6],
        [-4, 8],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix2::new([
        [8, -6],
        [4, 03],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);

    #[rustfmt::skip]
    let mat = Matrix3::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix3::new([
        [-3, 006, -3],
        [06, -12, 06],
        [-3, 006, -3],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);

    #[rustfmt::skip]
    let mat = Matrix4::new([
        [05, -2, 02, 7],
        [01, 00, 00, 3],
        [-3, 01, 05, 0],
        [03, -1, -9, 4],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix4::new([
        [-12, 076, -60, -36],
        [-56, 208, -82, -58],
        [004, 004, -02, -10],
        [004, 004, 020, 012],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);
}

#[test]
fn test_inverse() {
    #[rustfmt::skip]
    let mat = Matrix2::new([
        [2, 1],
        [1, 1],
    ]);

    assert!(mat.is_invertible());
    assert_eq!(mat.inverse(), Some(Matrix2::new([[1, -1], [-1, 2]])));
    assert_eq!(mat.inverse().map(|inverse| mat * inverse), Some(Matrix2::IDENTITY));

    let scale = Matrix3::new([[2.0_f64, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
    let inverse_scale = Matrix3::new([[0.5, 0.0, 0.0], [0.0, 0.25, 0.0], [0.0, 0.0, 0.125]]);
    assert_eq!(scale.inverse(), Some(inverse_scale));

    #[rustfmt::skip]
    let mat = Matrix2::new([
        [4.0_f64, 7.0],
        [2.0, 6.0],
    ]);

    let Some(inverse) = mat.inverse() else {
        panic!("matrix should be invertible");
    };

    let product = mat * inverse;
    for (actual, expected) in product.as_slice().iter().zip(Matrix2::<f64>::IDENTITY.as_slice()) {
        approx::assert_relative_eq!(*actual, *expected, epsilon = 1e-12);
    }

    #[rustfmt::skip]
    let singular = Matrix2::new([
        [1, 2],
        [2, 4],
    ]);

    assert!(!singular.is_invertible());
    assert_eq!(singular.inverse(), None);
    assert_eq!(Matrix4::<f64>::ZERO.inverse(), None);
}

#[test]
fn test_display() {
    #[rustfmt::skip]
    let m = Matrix2::new([
        [2.0_f64, 0.0],
        [0.0, 1.0],
    ]);
    assert_eq!(m.to_string(), "[ 2, 0 ]\n[ 0, 1 ]\n");

    #[rustfmt::skip]
    let m = Matrix3::new([
        [1, -2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);
    assert_eq!(m.to_string(), "[ 1, -2, 3 ]\n[ 4, 5, 6 ]\n[ 7, 8, 9 ]\n");

    assert_eq!(
        format!("{:?}", Matrix2::new([[1, 2], [3, 4]])),
        "Matrix [[1, 2], [3, 4]]"
    );
}

#[test]
#[should_panic]
fn test_column_index_out_of_bounds_panics() {
    let m = Matrix2::<i32>::identity();
    let _ = m[2];
}

#[test]
#[should_panic]
fn test_element_index_out_of_bounds_panics() {
    let m = Matrix2::<i32>::identity();
    let _ = m[(0, 2)];
}

#[test]
#[should_panic(expected = "given row index is out of bounds")]
fn test_row_out_of_bounds_panics() {
    let m = Matrix4::<i32>::identity();
    let _ = m.row(4);
}

#[cfg(feature = "mint")]
#[test]
fn test_mint_conversions() {
    use mint::{ColumnMatrix2, RowMatrix2};

    let mint_matrix = ColumnMatrix2 {
        x: [1.0, 3.0].into(),
        y: [2.0, 4.0].into(),
    };

    let matrix: Matrix2<f64> = mint_matrix.into();

    assert_eq!(matrix, Matrix2::new([[1.0, 2.0], [3.0, 4.0]]));
    assert_eq!(matrix, mint_matrix);

    let row_matrix = RowMatrix2 {
        x: [1.0, 2.0].into(),
        y: [3.0, 4.0].into(),
    };

    assert_eq!(Matrix2::from(row_matrix), matrix);

    let back: RowMatrix2<f64> = matrix.into();
    assert_eq!(back, row_matrix);
}

#[cfg(feature = "bytemuck")]
#[test]
fn test_bytemuck_layout() {
    let matrix = Matrix2::new([[1.0_f32, 2.0], [3.0, 4.0]]);
    let flat: [f32; 4] = bytemuck::cast(matrix);
    assert_eq!(flat, [1.0, 3.0, 2.0, 4.0]);
}

#[cfg(feature = "matrixcompare")]
#[test]
fn test_matrixcompare_reads_rows_and_columns() {
    use matrixcompare_core::{Access, DenseAccess as _, Matrix as _};

    let matrix = Matrix3::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    assert_eq!((matrix.rows(), matrix.cols()), (3, 3));

    let Access::Dense(dense) = matrix.access() else {
        panic!("matrix access should be dense");
    };
    assert_eq!(dense.fetch_single(0, 2), 3);
    assert_eq!(dense.fetch_single(2, 0), 7);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let matrix = Matrix2::new([[1.0_f64, 2.0], [3.0, 4.0]]);

    let json = serde_json::to_string(&matrix).unwrap();
    assert_eq!(json, "[[1.0,3.0],[2.0,4.0]]");

    let parsed: Matrix2<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, matrix);

    assert!(serde_json::from_str::<Matrix2<f64>>("[[1.0,3.0]]").is_err());
    assert!(serde_json::from_str::<Matrix2<f64>>("[[1.0,3.0],[2.0,4.0],[5.0,6.0]]").is_err());

    let owned: Matrix2<String> = serde_json::from_str(r#"[["a","c"],["b","d"]]"#).unwrap();
    assert_eq!(owned[(0, 1)], "b");
    assert!(serde_json::from_str::<Matrix2<String>>(r#"[["a","c"]]"#).is_err());
    assert!(serde_json::from_str::<Matrix2<String>>(r#"[["a","c"],["b","d"],["e","f"]]"#).is_err());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Small integers keep every product and sum exactly representable.
    fn exact_scalar() -> impl Strategy<Value = f64> {
        (-10_i32..10).prop_map(f64::from)
    }

    fn exact_vector2() -> impl Strategy<Value = Vector2<f64>> {
        proptest::array::uniform2(-10_i32..10).prop_map(|elems| Vector2::new(elems.map(f64::from)))
    }

    fn exact_matrix2() -> impl Strategy<Value = Matrix2<f64>> {
        proptest::array::uniform4(-10_i32..10)
            .prop_map(|elems| Matrix2::from_fn(|row, col| f64::from(elems[row * 2 + col])))
    }

    fn exact_vector3() -> impl Strategy<Value = Vector3<f64>> {
        proptest::array::uniform3(-10_i32..10).prop_map(|elems| Vector3::new(elems.map(f64::from)))
    }

    fn exact_vector4() -> impl Strategy<Value = Vector4<f64>> {
        proptest::array::uniform4(-10_i32..10).prop_map(|elems| Vector4::new(elems.map(f64::from)))
    }

    fn exact_matrix3() -> impl Strategy<Value = Matrix3<f64>> {
        proptest::array::uniform9(-10_i32..10)
            .prop_map(|elems| Matrix3::from_fn(|row, col| f64::from(elems[row * 3 + col])))
    }

    fn exact_matrix4() -> impl Strategy<Value = Matrix4<f64>> {
        proptest::array::uniform16(-10_i32..10)
            .prop_map(|elems| Matrix4::from_fn(|row, col| f64::from(elems[row * 4 + col])))
    }

    fn float_vector4() -> impl Strategy<Value = Vector4<f64>> {
        proptest::array::uniform4(-10.0_f64..10.0).prop_map(Vector4::new)
    }

    fn float_matrix4() -> impl Strategy<Value = Matrix4<f64>> {
        proptest::array::uniform16(-10.0_f64..10.0)
            .prop_map(|elems| Matrix4::from_fn(|row, col| elems[row * 4 + col]))
    }

    proptest! {
        #[test]
        fn prop_product_is_linear(
            m in exact_matrix3(),
            x in exact_vector3(),
            y in exact_vector3(),
            a in exact_scalar(),
            b in exact_scalar()
        ) {
            prop_assert_eq!(m * (a * x + b * y), a * (m * x) + b * (m * y));
        }

        #[test]
        fn prop_product_combines_columns_2d(m in exact_matrix2(), x in exact_vector2()) {
            prop_assert_eq!(m * x, x.x * m[0] + x.y * m[1]);
        }

        #[test]
        fn prop_row_product_is_transposed_product_2d(m in exact_matrix2(), x in exact_vector2()) {
            prop_assert_eq!(x * m, transpose(m) * x);
            prop_assert_eq!(m * x, x * transpose(m));
        }

        #[test]
        fn prop_product_combines_columns(m in exact_matrix3(), x in exact_vector3()) {
            prop_assert_eq!(m * x, x.x * m[0] + x.y * m[1] + x.z * m[2]);
        }

        #[test]
        fn prop_row_product_is_transposed_product(m in exact_matrix4(), x in exact_vector4()) {
            prop_assert_eq!(x * m, transpose(m) * x);
            prop_assert_eq!(m * x, x * transpose(m));
        }

        #[test]
        fn prop_matrix_product_by_columns(a in exact_matrix3(), b in exact_matrix3()) {
            let product = a * b;
            for j in 0..3 {
                prop_assert_eq!(product[j], a * b[j]);
            }
        }

        #[test]
        fn prop_transpose_of_product(a in exact_matrix3(), b in exact_matrix3()) {
            prop_assert_eq!(transpose(a * b), transpose(b) * transpose(a));
        }

        #[test]
        fn prop_transpose_is_involution(m in exact_matrix4()) {
            prop_assert_eq!(transpose(transpose(m)), m);

            let mut in_place = m;
            in_place.transpose_in_place();
            prop_assert_eq!(in_place, m.transpose());
        }

        #[test]
        fn prop_equality_is_reflexive(m in float_matrix4(), x in float_vector4()) {
            let copy = m;
            prop_assert_eq!(m, copy);
            prop_assert_eq!(x, x);
        }

        #[test]
        fn prop_linearity_within_tolerance(
            m in float_matrix4(),
            x in float_vector4(),
            y in float_vector4(),
            a in -10.0_f64..10.0,
            b in -10.0_f64..10.0
        ) {
            let lhs = m * (a * x + b * y);
            let rhs = a * (m * x) + b * (m * y);
            for (l, r) in lhs.into_iter().zip(rhs) {
                prop_assert!(approx::abs_diff_eq!(l, r, epsilon = 1e-9));
            }
        }
    }
}
