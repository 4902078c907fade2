//! Affine transforms with a diagonal linear part.
//!
//! The homogeneous form is
//!
//! ```text
//! [[a, 0, 0, d],
//!  [0, b, 0, e],
//!  [0, 0, c, f],
//!  [0, 0, 0, 1]]
//! ```
//!
//! and its inverse has the closed form
//!
//! ```text
//! [[1/a, 0,   0,   -d/a],
//!  [0,   1/b, 0,   -e/b],
//!  [0,   0,   1/c, -f/c],
//!  [0,   0,   0,   1   ]]
//! ```
//!
//! Orthographic projections have exactly this shape, which is what
//! [`inverse_orthographic`] relies on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::numerics::types::matrix::{Matrix4x4, MatrixError};
use crate::numerics::types::point::Point3;
use crate::numerics::types::traits::Scalar;
use crate::numerics::types::vector::Vector3;

/// Scale along each axis followed by a translation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Scalar + Serialize",
    deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct DiagonalAffine<T: Scalar = f32> {
    pub scale: Vector3<T>,
    pub translation: Vector3<T>,
}

impl<T: Scalar> DiagonalAffine<T> {
    pub fn new(scale: Vector3<T>, translation: Vector3<T>) -> Self {
        Self { scale, translation }
    }

    /// Scales `a, b, c` and translation `d, e, f`.
    pub fn from_components(a: T, b: T, c: T, d: T, e: T, f: T) -> Self {
        Self::new(Vector3::new(a, b, c), Vector3::new(d, e, f))
    }

    pub fn identity() -> Self {
        Self::new(Vector3::one(), Vector3::zero())
    }

    pub fn to_matrix(&self) -> Matrix4x4<T> {
        let [a, b, c] = self.scale.to_array();
        let [d, e, f] = self.translation.to_array();
        let z = || T::zero();
        Matrix4x4::from_rows([
            [a, z(), z(), d],
            [z(), b, z(), e],
            [z(), z(), c, f],
            [z(), z(), z(), T::one()],
        ])
    }

    /// Read the transform back out of a homogeneous matrix.
    ///
    /// Every off-diagonal entry of the linear part and the first three
    /// entries of the last row must be zero, the corner must be one.
    pub fn try_from_matrix(matrix: &Matrix4x4<T>) -> Result<Self, MatrixError> {
        for row in 0..4 {
            for column in 0..3 {
                if row != column && !matrix.get(row, column).is_zero() {
                    return Err(MatrixError::NotDiagonalAffine { row, column });
                }
            }
        }
        if !matrix.get(3, 3).is_one() {
            return Err(MatrixError::NotDiagonalAffine { row: 3, column: 3 });
        }

        let m = &matrix.data;
        Ok(Self::from_components(
            m[0][0].clone(),
            m[1][1].clone(),
            m[2][2].clone(),
            m[0][3].clone(),
            m[1][3].clone(),
            m[2][3].clone(),
        ))
    }

    /// Closed-form inverse. Fails when any scale is zero.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let recip = |s: &T, column: usize| {
            s.checked_recip().ok_or(MatrixError::Singular { column })
        };
        let scale = Vector3::new(
            recip(&self.scale.x, 0)?,
            recip(&self.scale.y, 1)?,
            recip(&self.scale.z, 2)?,
        );
        let translation = (-self.translation.clone()).hadamard(&scale);
        Ok(Self::new(scale, translation))
    }

    pub fn transform_point(&self, point: &Point3<T>) -> Point3<T> {
        self.scale.hadamard(point) + self.translation.clone()
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &Self) -> Self {
        Self::new(
            next.scale.hadamard(&self.scale),
            next.transform_point(&self.translation),
        )
    }
}

/// The homogeneous matrix `[[a,0,0,d],[0,b,0,e],[0,0,c,f],[0,0,0,1]]`.
pub fn affine_matrix<T: Scalar>(a: T, b: T, c: T, d: T, e: T, f: T) -> Matrix4x4<T> {
    DiagonalAffine::from_components(a, b, c, d, e, f).to_matrix()
}

/// Closed-form inverse of [`affine_matrix`].
///
/// Returns `MatrixError::Singular` naming the column of the first zero
/// scale.
pub fn affine_inverse<T: Scalar>(
    a: T,
    b: T,
    c: T,
    d: T,
    e: T,
    f: T,
) -> Result<Matrix4x4<T>, MatrixError> {
    DiagonalAffine::from_components(a, b, c, d, e, f)
        .inverse()
        .map(|inverse| inverse.to_matrix())
}

/// Orthographic projection onto the `[-1, 1]` cube, right handed, looking
/// down `-z`.
pub fn orthographic<T: Scalar>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Result<DiagonalAffine<T>, MatrixError> {
    let two = T::one() + T::one();
    let axis = |low: T, high: T, name: &'static str| -> Result<(T, T), MatrixError> {
        let recip = (high.clone() - low.clone())
            .checked_recip()
            .ok_or(MatrixError::DegenerateProjection(name))?;
        Ok((two.clone() * recip.clone(), -(high + low) * recip))
    };

    let (sx, tx) = axis(left, right, "x")?;
    let (sy, ty) = axis(bottom, top, "y")?;
    let (sz, tz) = axis(near, far, "z")?;
    debug!("built orthographic projection");
    Ok(DiagonalAffine::new(
        Vector3::new(sx, sy, -sz),
        Vector3::new(tx, ty, tz),
    ))
}

/// Invert an orthographic projection matrix through the closed form.
///
/// Includes the depth translation term `-f/c`.
pub fn inverse_orthographic<T: Scalar>(projection: &Matrix4x4<T>) -> Result<Matrix4x4<T>, MatrixError> {
    let affine = DiagonalAffine::try_from_matrix(projection)?;
    Ok(affine.inverse()?.to_matrix())
}

impl<T: Scalar> Matrix4x4<T> {
    /// Apply a homogeneous transform to a point, dividing by `w`.
    pub fn transform_point(&self, point: &Point3<T>) -> Result<Point3<T>, MatrixError> {
        let [x, y, z] = point.to_array();
        let homogeneous = [x, y, z, T::one()];
        let apply = |row: usize| {
            (0..4).fold(T::zero(), |acc, k| {
                acc + self.data[row][k].clone() * homogeneous[k].clone()
            })
        };
        let w = apply(3);
        let point = Vector3::new(apply(0), apply(1), apply(2));
        if w.is_one() {
            return Ok(point);
        }
        let inv_w = w.checked_recip().ok_or(MatrixError::Singular { column: 3 })?;
        Ok(point * inv_w)
    }
}
