// src/numerics/types/point.rs
// Point3 is an alias for Vector3.

use super::vector::Vector3;

/// Point3 is an alias to Vector3 to represent points in space.
///
/// Affine maps translate points; plain vectors only see the linear part.
pub type Point3<T = f32> = Vector3<T>;
