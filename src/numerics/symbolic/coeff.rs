// src/numerics/symbolic/coeff.rs
//! Exact coefficients for symbolic terms.
//!
//! Coefficients are reduced rationals over `i64`. When an operation would
//! overflow, the result degrades to an `f64` approximation instead of
//! wrapping.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::warn;

// Works on magnitudes so `i64::MIN` is a valid operand.
fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Common factor of `n` and a positive `d`; always fits in `i64`.
fn common_factor(n: i64, d: i64) -> i64 {
    i64::try_from(gcd(n, d)).unwrap_or(1).max(1)
}

/// Numeric factor of a single polynomial term.
///
/// Float coefficients compare exactly, like the zero test, so equality
/// stays transitive.
#[derive(Debug, Clone, Serialize)]
pub enum Coefficient {
    /// Invariant: denominator > 0 and gcd(numerator, denominator) == 1.
    Rational(i64, i64),
    Float(f64),
}

#[derive(Deserialize)]
#[serde(rename = "Coefficient")]
enum CoefficientRepr {
    Rational(i64, i64),
    Float(f64),
}

// Rationals are re-reduced on the way in; a zero denominator is rejected.
impl<'de> Deserialize<'de> for Coefficient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match CoefficientRepr::deserialize(deserializer)? {
            CoefficientRepr::Rational(num, den) => Coefficient::rational(num, den)
                .ok_or_else(|| D::Error::custom(format!("zero denominator in {}/{}", num, den))),
            CoefficientRepr::Float(value) => Ok(Coefficient::Float(value)),
        }
    }
}

impl Coefficient {
    pub fn int(n: i64) -> Self {
        Coefficient::Rational(n, 1)
    }

    /// Build a reduced rational. Returns `None` for a zero denominator.
    pub fn rational(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let (num, den) = if den < 0 {
            match (num.checked_neg(), den.checked_neg()) {
                (Some(n), Some(d)) => (n, d),
                _ => return Some(Coefficient::Float(num as f64 / den as f64)),
            }
        } else {
            (num, den)
        };
        let g = common_factor(num, den);
        Some(Coefficient::Rational(num / g, den / g))
    }

    pub fn float(value: f64) -> Self {
        Coefficient::Float(value)
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Coefficient::Rational(n, _) => *n == 0,
            Coefficient::Float(f) => *f == 0.0,
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Coefficient::Rational(n, d) => *n == 1 && *d == 1,
            Coefficient::Float(f) => *f == 1.0,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Coefficient::Rational(n, _) => *n < 0,
            Coefficient::Float(f) => *f < 0.0,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Coefficient::Rational(n, d) => *n as f64 / *d as f64,
            Coefficient::Float(f) => *f,
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Coefficient::Rational(n, d) => match n.checked_abs() {
                Some(n) => Coefficient::Rational(n, *d),
                None => Coefficient::Float(self.to_f64().abs()),
            },
            Coefficient::Float(f) => Coefficient::Float(f.abs()),
        }
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        match self {
            Coefficient::Rational(n, d) => Coefficient::rational(*d, *n),
            Coefficient::Float(f) => Some(Coefficient::Float(1.0 / f)),
        }
    }

    pub fn checked_div(&self, rhs: &Coefficient) -> Option<Self> {
        rhs.recip().map(|r| self.clone() * r)
    }

    fn overflowed(value: f64) -> Self {
        warn!(value, "rational coefficient overflowed i64, falling back to f64");
        Coefficient::Float(value)
    }
}

impl PartialEq for Coefficient {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Coefficient::Rational(n1, d1), Coefficient::Rational(n2, d2)) => n1 == n2 && d1 == d2,
            (Coefficient::Float(f1), Coefficient::Float(f2)) => f1 == f2,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Coefficient::int(0)
    }
}

impl From<i64> for Coefficient {
    fn from(n: i64) -> Self {
        Coefficient::int(n)
    }
}

impl From<i32> for Coefficient {
    fn from(n: i32) -> Self {
        Coefficient::int(n as i64)
    }
}

impl Neg for Coefficient {
    type Output = Coefficient;

    fn neg(self) -> Self::Output {
        match self {
            Coefficient::Rational(n, d) => match n.checked_neg() {
                Some(n) => Coefficient::Rational(n, d),
                None => Coefficient::overflowed(-(n as f64) / d as f64),
            },
            Coefficient::Float(f) => Coefficient::Float(-f),
        }
    }
}

impl Add for Coefficient {
    type Output = Coefficient;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Coefficient::Rational(n1, d1), Coefficient::Rational(n2, d2)) => {
                // n1/d1 + n2/d2 = (n1*d2 + n2*d1) / (d1*d2)
                let exact = n1
                    .checked_mul(d2)
                    .zip(n2.checked_mul(d1))
                    .and_then(|(a, b)| a.checked_add(b))
                    .zip(d1.checked_mul(d2))
                    .and_then(|(num, den)| Coefficient::rational(num, den));
                exact.unwrap_or_else(|| {
                    Coefficient::overflowed(n1 as f64 / d1 as f64 + n2 as f64 / d2 as f64)
                })
            }
            (a, b) => Coefficient::Float(a.to_f64() + b.to_f64()),
        }
    }
}

impl Sub for Coefficient {
    type Output = Coefficient;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Coefficient {
    type Output = Coefficient;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Coefficient::Rational(n1, d1), Coefficient::Rational(n2, d2)) => {
                // Cross-reduce first to keep intermediates small.
                let g1 = common_factor(n1, d2);
                let g2 = common_factor(n2, d1);
                let (n1, d2) = (n1 / g1, d2 / g1);
                let (n2, d1) = (n2 / g2, d1 / g2);

                n1.checked_mul(n2)
                    .zip(d1.checked_mul(d2))
                    .and_then(|(num, den)| Coefficient::rational(num, den))
                    .unwrap_or_else(|| {
                        Coefficient::overflowed(n1 as f64 * n2 as f64 / (d1 as f64 * d2 as f64))
                    })
            }
            (a, b) => Coefficient::Float(a.to_f64() * b.to_f64()),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Rational(n, 1) => write!(f, "{}", n),
            Coefficient::Rational(n, d) => write!(f, "{}/{}", n, d),
            Coefficient::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Coefficient {
        Coefficient::rational(n, d).unwrap()
    }

    #[test]
    fn test_rational_arithmetic() {
        let a = q(1, 2);
        let b = q(1, 3);

        assert_eq!(a.clone() + b.clone(), q(5, 6));
        assert_eq!(a.clone() - b.clone(), q(1, 6));
        assert_eq!(a.clone() * b.clone(), q(1, 6));
        assert_eq!(a.checked_div(&b), Some(q(3, 2)));
    }

    #[test]
    fn test_reduction_and_sign() {
        assert_eq!(q(4, 6), q(2, 3));
        assert_eq!(q(3, -6), Coefficient::Rational(-1, 2));
        assert!(Coefficient::rational(1, 0).is_none());
    }

    #[test]
    fn test_recip() {
        assert_eq!(q(-2, 3).recip(), Some(q(-3, 2)));
        assert_eq!(Coefficient::int(0).recip(), None);
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let big = Coefficient::int(i64::MAX);
        let sum = big.clone() + big;
        assert!(matches!(sum, Coefficient::Float(_)));
        assert!((sum.to_f64() - 2.0 * i64::MAX as f64).abs() < 1e6);
    }

    #[test]
    fn test_i64_min_is_handled_without_panicking() {
        let half = Coefficient::int(-(1 << 62));
        let sum = half.clone() + half;
        assert_eq!(sum, Coefficient::Rational(i64::MIN, 1));

        let product = Coefficient::int(i64::MIN) * Coefficient::int(3);
        assert!(matches!(product, Coefficient::Float(_)));
        assert_eq!(product.to_f64(), 3.0 * i64::MIN as f64);

        let halved = Coefficient::int(i64::MIN) * q(1, 2);
        assert_eq!(halved, Coefficient::int(i64::MIN / 2));
        assert!(matches!(Coefficient::int(i64::MIN).recip(), Some(Coefficient::Float(_))));
    }

    #[test]
    fn test_float_comparison_is_exact() {
        let one = Coefficient::float(1.0);
        assert!(one.is_one());
        assert_eq!(one, Coefficient::int(1));
        assert!(!Coefficient::float(1.0 + f64::EPSILON).is_one());
        assert_ne!(Coefficient::float(1e-16), Coefficient::float(0.0));
        assert!(!Coefficient::float(1e-16).is_zero());
    }

    #[test]
    fn test_deserialize_reduces_and_rejects_zero_denominator() {
        let config = bincode::config::standard();

        let encoded = bincode::serde::encode_to_vec(Coefficient::Rational(4, -6), config).unwrap();
        let (decoded, _): (Coefficient, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert!(matches!(decoded, Coefficient::Rational(-2, 3)));

        let encoded = bincode::serde::encode_to_vec(Coefficient::Rational(1, 0), config).unwrap();
        let decoded: Result<(Coefficient, usize), _> =
            bincode::serde::decode_from_slice(&encoded, config);
        assert!(decoded.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(q(-3, 4).to_string(), "-3/4");
        assert_eq!(Coefficient::int(7).to_string(), "7");
    }
}
