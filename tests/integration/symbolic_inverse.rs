use std::collections::HashMap;

use symaffine::config::{DisplayConfig, MatrixFormat};
use symaffine::numerics::affine::inverse_orthographic;
use symaffine::{affine_inverse, affine_matrix, symbols, Expr, Matrix4x4, MatrixError, Symbol};

fn matrix_and_symbols() -> (Matrix4x4<Expr>, Vec<Expr>) {
    let s = symbols("a b c d e f").unwrap();
    let m = affine_matrix(
        s[0].clone(),
        s[1].clone(),
        s[2].clone(),
        s[3].clone(),
        s[4].clone(),
        s[5].clone(),
    );
    (m, s)
}

#[test]
fn test_gauss_jordan_matches_closed_form() {
    let (m, s) = matrix_and_symbols();
    let generic = m.inverse().unwrap();
    let closed = affine_inverse(
        s[0].clone(),
        s[1].clone(),
        s[2].clone(),
        s[3].clone(),
        s[4].clone(),
        s[5].clone(),
    )
    .unwrap();
    assert_eq!(generic, closed);
    assert_eq!(generic.to_string(), closed.to_string());
}

#[test]
fn test_product_with_inverse_is_identity() {
    let (m, _) = matrix_and_symbols();
    let inverse = m.inverse().unwrap();
    assert!((m.clone() * inverse.clone()).is_identity());
    assert!((inverse * m).is_identity());
}

#[test]
fn test_depth_translation_is_not_dropped() {
    let (m, s) = matrix_and_symbols();
    let inverse = m.inverse().unwrap();
    let expected = (-s[5].clone()).checked_div(&s[2]).unwrap();
    assert_eq!(*inverse.get(2, 3), expected);
    assert!(!inverse.get(2, 3).is_zero());
    assert_eq!(inverse.get(2, 3).to_string(), "-f/c");
}

#[test]
fn test_reinverting_yields_original() {
    let (m, _) = matrix_and_symbols();
    let twice = m.inverse().unwrap().inverse().unwrap();
    assert_eq!(twice, m);
    assert_eq!(twice.to_string(), m.to_string());
}

#[test]
fn test_unit_substitution_gives_identity() {
    let (m, _) = matrix_and_symbols();
    let inverse = m.inverse().unwrap();

    let mut bindings = HashMap::new();
    for name in ["a", "b", "c"] {
        bindings.insert(Symbol::new(name).unwrap(), Expr::one());
    }
    for name in ["d", "e", "f"] {
        bindings.insert(Symbol::new(name).unwrap(), Expr::zero());
    }

    let m1 = m.try_map(|x| x.subs(&bindings)).unwrap();
    let inv1 = inverse.try_map(|x| x.subs(&bindings)).unwrap();
    assert!(m1.is_identity());
    assert!(inv1.is_identity());
    assert_eq!(inv1.to_string(), "[[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]");
}

#[test]
fn test_numeric_evaluation_of_symbolic_inverse() {
    let (m, _) = matrix_and_symbols();
    let inverse = m.inverse().unwrap();

    let values: HashMap<Symbol, f64> = [("a", 2.0), ("b", 4.0), ("c", -8.0), ("d", 1.0), ("e", 2.0), ("f", 3.0)]
        .into_iter()
        .map(|(name, v)| (Symbol::new(name).unwrap(), v))
        .collect();
    let numeric = inverse.try_map(|x| x.evaluate(&values)).unwrap();
    let expected = affine_inverse(2.0f64, 4.0, -8.0, 1.0, 2.0, 3.0).unwrap();
    assert_eq!(numeric, expected);
}

#[test]
fn test_zero_scale_substitution_fails() {
    let (m, _) = matrix_and_symbols();
    let inverse = m.inverse().unwrap();

    let mut bindings = HashMap::new();
    bindings.insert(Symbol::new("b").unwrap(), Expr::zero());
    let substituted = m.try_map(|x| x.subs(&bindings)).unwrap();
    assert_eq!(substituted.inverse(), Err(MatrixError::Singular { column: 1 }));
    assert!(inverse.try_map(|x| x.subs(&bindings)).is_err());
}

#[test]
fn test_sympy_rendering() {
    let (m, _) = matrix_and_symbols();
    let config = DisplayConfig::from_parameters("format=sympy").unwrap();
    assert_eq!(config.format, MatrixFormat::Sympy);
    assert_eq!(
        m.inverse().unwrap().render(&config),
        "Matrix([[1/a, 0, 0, -d/a], [0, 1/b, 0, -e/b], [0, 0, 1/c, -f/c], [0, 0, 0, 1]])"
    );
}

#[test]
fn test_inverse_orthographic_on_symbolic_affine() {
    let (m, _) = matrix_and_symbols();
    assert_eq!(inverse_orthographic(&m).unwrap(), m.inverse().unwrap());
}

#[test]
fn test_bincode_roundtrip_of_symbolic_matrix() {
    let (m, _) = matrix_and_symbols();
    let inverse = m.inverse().unwrap();
    let config = bincode::config::standard();
    let encoded = bincode::serde::encode_to_vec(&inverse, config).unwrap();
    let (decoded, _): (Matrix4x4<Expr>, usize) =
        bincode::serde::decode_from_slice(&encoded, config).unwrap();
    assert_eq!(decoded, inverse);
    assert_eq!(decoded.to_string(), inverse.to_string());
}
