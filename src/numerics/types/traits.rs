// src/numerics/types/traits.rs
// Scalar field abstraction shared by floats and symbolic expressions.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use crate::config::PowerStyle;
use crate::numerics::symbolic::Expr;

/// Scalar is the element type of vectors and matrices.
///
/// Division is only offered through `checked_recip`, since symbolic zero
/// divisors cannot be represented.
pub trait Scalar:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn checked_recip(&self) -> Option<Self>;

    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        rhs.checked_recip().map(|r| self.clone() * r)
    }

    /// Absolute size used for partial pivoting; `None` for exact scalars.
    fn magnitude(&self) -> Option<f64> {
        None
    }
}

impl Scalar for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn is_zero(&self) -> bool { *self == 0.0 }
    fn checked_recip(&self) -> Option<Self> {
        (*self != 0.0).then(|| 1.0 / self)
    }
    fn magnitude(&self) -> Option<f64> { Some(self.abs() as f64) }
}

impl Scalar for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn is_zero(&self) -> bool { *self == 0.0 }
    fn checked_recip(&self) -> Option<Self> {
        (*self != 0.0).then(|| 1.0 / self)
    }
    fn magnitude(&self) -> Option<f64> { Some(self.abs()) }
}

impl Scalar for Expr {
    fn zero() -> Self { Expr::zero() }
    fn one() -> Self { Expr::one() }
    fn is_zero(&self) -> bool { Expr::is_zero(self) }
    fn is_one(&self) -> bool { Expr::is_one(self) }
    fn checked_recip(&self) -> Option<Self> {
        self.recip().ok()
    }
}

/// Text form of a matrix entry.
pub trait Render {
    fn render(&self, power: PowerStyle) -> String;
}

impl Render for f32 {
    fn render(&self, _power: PowerStyle) -> String { self.to_string() }
}

impl Render for f64 {
    fn render(&self, _power: PowerStyle) -> String { self.to_string() }
}

impl Render for Expr {
    fn render(&self, power: PowerStyle) -> String {
        self.display_with(power).to_string()
    }
}
