// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Uses the Scalar trait from super::traits.

use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::traits::Scalar;

/// Vector3 is a simple 3D vector over any scalar, symbolic included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T: Scalar = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Serialized as a plain (x, y, z) tuple.
impl<T> Serialize for Vector3<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: Scalar> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    pub fn to_array(&self) -> [T; 3] {
        [self.x.clone(), self.y.clone(), self.z.clone()]
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x.clone() * other.x.clone()
            + self.y.clone() * other.y.clone()
            + self.z.clone() * other.z.clone()
    }

    /// Component-wise product.
    pub fn hadamard(&self, other: &Self) -> Self {
        Self::new(
            self.x.clone() * other.x.clone(),
            self.y.clone() * other.y.clone(),
            self.z.clone() * other.z.clone(),
        )
    }

    pub fn map<U: Scalar>(&self, mut f: impl FnMut(&T) -> U) -> Vector3<U> {
        Vector3::new(f(&self.x), f(&self.y), f(&self.z))
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar.clone(), self.y * scalar.clone(), self.z * scalar)
    }
}

// Conversions between Vector3<T> and tuples / arrays

impl<T: Scalar> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: Scalar> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::new(array[0].clone(), array[1].clone(), array[2].clone())
    }
}

impl<T: Scalar> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        v.to_array()
    }
}

impl Vector3<f32> {
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }
}

impl Vector3<f64> {
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
}
