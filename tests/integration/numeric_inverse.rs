use symaffine::numerics::affine::{inverse_orthographic, orthographic};
use symaffine::numerics::types::point::Point3;
use symaffine::{affine_inverse, affine_matrix, DiagonalAffine, Matrix4x4, MatrixError};

fn assert_close(a: &Matrix4x4<f64>, b: &Matrix4x4<f64>, tolerance: f64) {
    for i in 0..4 {
        for j in 0..4 {
            let (x, y) = (a.data[i][j], b.data[i][j]);
            assert!((x - y).abs() < tolerance, "({}, {}): {} vs {}", i, j, x, y);
        }
    }
}

#[test]
fn test_closed_form_agrees_with_gauss_jordan() {
    let cases = [
        [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        [2.0, 3.0, 5.0, 7.0, -11.0, 13.0],
        [-0.25, 1e3, 3.5, 0.1, 0.2, -0.3],
        [1e-3, -7.0, 9.0, 100.0, 0.0, 42.0],
    ];
    for [a, b, c, d, e, f] in cases {
        let m = affine_matrix(a, b, c, d, e, f);
        let closed = affine_inverse(a, b, c, d, e, f).unwrap();
        let generic = m.inverse().unwrap();
        assert_close(&closed, &generic, 1e-9);
        assert_close(&(m * closed), &Matrix4x4::identity(), 1e-12);
    }
}

#[test]
fn test_f32_inverse() {
    let m = affine_matrix(2.0f32, 4.0, 8.0, 1.0, 1.0, 1.0);
    let inverse = m.inverse().unwrap();
    assert_eq!(inverse.row(0), [0.5, 0.0, 0.0, -0.5]);
    assert_eq!(inverse.row(2), [0.0, 0.0, 0.125, -0.125]);
}

#[test]
fn test_each_zero_scale_is_reported() {
    for column in 0..3 {
        let mut scales = [1.0f64; 3];
        scales[column] = 0.0;
        let [a, b, c] = scales;
        assert_eq!(
            affine_inverse(a, b, c, 1.0, 2.0, 3.0),
            Err(MatrixError::Singular { column })
        );
        assert_eq!(
            affine_matrix(a, b, c, 1.0, 2.0, 3.0).inverse(),
            Err(MatrixError::Singular { column })
        );
    }
}

#[test]
fn test_orthographic_roundtrip() {
    let projection = orthographic(-4.0f64, 4.0, -2.0, 2.0, 0.5, 8.5)
        .unwrap()
        .to_matrix();
    let inverse = inverse_orthographic(&projection).unwrap();
    assert_close(&(projection * inverse), &Matrix4x4::identity(), 1e-12);

    let ndc = Point3::new(0.5, -0.5, 0.0);
    let view = inverse.transform_point(&ndc).unwrap();
    let back = projection.transform_point(&view).unwrap();
    assert!((back - ndc).length() < 1e-12);
}

#[test]
fn test_affine_from_general_matrix_rejected() {
    let mut m = affine_matrix(1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0);
    m.data[2][0] = 1.0;
    assert_eq!(
        DiagonalAffine::try_from_matrix(&m),
        Err(MatrixError::NotDiagonalAffine { row: 2, column: 0 })
    );
    assert!(inverse_orthographic(&m).is_err());
    // The generic path still inverts it.
    assert!(m.inverse().is_ok());
}
