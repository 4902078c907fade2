// src/numerics/types/matrix.rs
// Square matrices over any Scalar, with Gauss-Jordan inversion.

use core::ops::{Add, Mul, Neg, Sub};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::{DisplayConfig, MatrixFormat};
use crate::numerics::types::traits::{Render, Scalar};
use crate::numerics::types::vector::Vector3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular { column: usize },

    #[error("not a diagonal affine transform: unexpected entry at ({row}, {column})")]
    NotDiagonalAffine { row: usize, column: usize },

    #[error("degenerate projection volume along {0}")]
    DegenerateProjection(&'static str),

    #[error("expected {expected} entries, found {found}")]
    Shape { expected: usize, found: usize },
}

/// Row-major square matrix. `data[row][column]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SquareMatrix<T, const N: usize> {
    pub data: [[T; N]; N],
}

pub type Matrix3x3<T = f32> = SquareMatrix<T, 3>;
pub type Matrix4x4<T = f32> = SquareMatrix<T, 4>;

impl<T: Scalar, const N: usize> SquareMatrix<T, N> {
    pub fn new(data: [[T; N]; N]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from rows
    pub fn from_rows(rows: [[T; N]; N]) -> Self {
        Self { data: rows }
    }

    /// Construct a new matrix from columns
    pub fn from_columns(columns: [[T; N]; N]) -> Self {
        Self {
            data: core::array::from_fn(|i| core::array::from_fn(|j| columns[j][i].clone())),
        }
    }

    /// Build from nested rows of any length, checking the shape.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let found = rows.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                let len = row.len();
                <[T; N]>::try_from(row).map_err(|_| MatrixError::Shape { expected: N, found: len })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let data = <[[T; N]; N]>::try_from(rows)
            .map_err(|_| MatrixError::Shape { expected: N, found })?;
        Ok(Self { data })
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; N] {
        self.data[idx].clone()
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; N] {
        core::array::from_fn(|i| self.data[i][idx].clone())
    }

    pub fn get(&self, row: usize, column: usize) -> &T {
        &self.data[row][column]
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self::filled(T::zero())
    }

    /// One matrix (all elements = 1)
    pub fn one() -> Self {
        Self::filled(T::one())
    }

    fn filled(value: T) -> Self {
        Self {
            data: core::array::from_fn(|_| core::array::from_fn(|_| value.clone())),
        }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self {
            data: core::array::from_fn(|i| {
                core::array::from_fn(|j| if i == j { T::one() } else { T::zero() })
            }),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(self.data.clone())
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SquareMatrix<U, N> {
        SquareMatrix {
            data: core::array::from_fn(|i| core::array::from_fn(|j| f(&self.data[i][j]))),
        }
    }

    /// Like `map`, stopping at the first error.
    pub fn try_map<U: Scalar, E>(
        &self,
        mut f: impl FnMut(&T) -> Result<U, E>,
    ) -> Result<SquareMatrix<U, N>, E> {
        let mut failure = None;
        let data = core::array::from_fn(|i| {
            core::array::from_fn(|j| {
                if failure.is_some() {
                    return U::zero();
                }
                match f(&self.data[i][j]) {
                    Ok(value) => value,
                    Err(err) => {
                        failure = Some(err);
                        U::zero()
                    }
                }
            })
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(SquareMatrix { data }),
        }
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.data.swap(r1, r2);
    }

    /// Multiply a row by a scalar
    pub fn scale_row(&mut self, row: usize, scalar: &T) {
        for entry in self.data[row].iter_mut() {
            *entry = entry.clone() * scalar.clone();
        }
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: &T) {
        for j in 0..N {
            let addend = self.data[source][j].clone() * scalar.clone();
            self.data[target][j] = self.data[target][j].clone() + addend;
        }
    }

    /// Gauss-Jordan inverse.
    ///
    /// Floats pivot on the largest magnitude in the column; exact scalars
    /// take the first entry that is not identically zero. Entries that are
    /// already zero are never touched, so symbolic results stay in the
    /// smallest form elimination produces.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let mut work = self.clone();
        let mut inverse = Self::identity();

        for col in 0..N {
            let pivot = work
                .find_pivot(col)
                .ok_or(MatrixError::Singular { column: col })?;
            if pivot != col {
                debug!(col, pivot, "swapping rows");
                work.swap_rows(col, pivot);
                inverse.swap_rows(col, pivot);
            }

            let recip = work.data[col][col]
                .checked_recip()
                .ok_or(MatrixError::Singular { column: col })?;
            if !recip.is_one() {
                work.scale_row(col, &recip);
                inverse.scale_row(col, &recip);
            }

            for row in 0..N {
                if row == col || work.data[row][col].is_zero() {
                    continue;
                }
                let factor = -work.data[row][col].clone();
                work.add_row_multiple(row, col, &factor);
                inverse.add_row_multiple(row, col, &factor);
            }
            debug!(col, "eliminated column");
        }

        Ok(inverse)
    }

    fn find_pivot(&self, col: usize) -> Option<usize> {
        let mut candidates = (col..N).filter(|&row| !self.data[row][col].is_zero());
        if self.data[col][col].magnitude().is_some() {
            candidates
                .filter_map(|row| self.data[row][col].magnitude().map(|m| (row, m)))
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(row, _)| row)
        } else {
            candidates.next()
        }
    }
}

impl<T: Render, const N: usize> SquareMatrix<T, N> {
    /// Row-major text, `[[a, 0], [0, b]]`.
    pub fn render(&self, config: &DisplayConfig) -> String {
        let rows: Vec<String> = self
            .data
            .iter()
            .map(|row| {
                let entries: Vec<String> = row.iter().map(|x| x.render(config.power)).collect();
                format!("[{}]", entries.join(", "))
            })
            .collect();
        let body = format!("[{}]", rows.join(", "));
        match config.format {
            MatrixFormat::Bracketed => body,
            MatrixFormat::Sympy => format!("Matrix({})", body),
        }
    }
}

impl<T: Render, const N: usize> fmt::Display for SquareMatrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayConfig::default()))
    }
}

// Serialized as a sequence of rows so any N works.
impl<T: Serialize, const N: usize> Serialize for SquareMatrix<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.data.iter().map(|row| row.as_slice()))
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for SquareMatrix<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Self::try_from_rows(rows).map_err(D::Error::custom)
    }
}

impl<T: Scalar, const N: usize> Add for SquareMatrix<T, N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            data: core::array::from_fn(|i| {
                core::array::from_fn(|j| self.data[i][j].clone() + other.data[i][j].clone())
            }),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for SquareMatrix<T, N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            data: core::array::from_fn(|i| {
                core::array::from_fn(|j| self.data[i][j].clone() - other.data[i][j].clone())
            }),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for SquareMatrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x.clone())
    }
}

impl<T: Scalar, const N: usize> Mul<T> for SquareMatrix<T, N> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.map(|x| x.clone() * scalar.clone())
    }
}

impl<T: Scalar, const N: usize> Mul for SquareMatrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            data: core::array::from_fn(|i| {
                core::array::from_fn(|j| {
                    (0..N).fold(T::zero(), |acc, k| {
                        acc + self.data[i][k].clone() * rhs.data[k][j].clone()
                    })
                })
            }),
        }
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        let row = |i: usize| Vector3::from(&self.data[i]).dot(&rhs);
        Vector3::new(row(0), row(1), row(2))
    }
}

impl<T: Scalar> Mul<Matrix3x3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Matrix3x3<T>) -> Vector3<T> {
        let column = |j: usize| Vector3::from(rhs.column(j)).dot(&self);
        Vector3::new(column(0), column(1), column(2))
    }
}
