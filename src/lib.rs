//! symaffine - symbolic inversion of diagonal affine transforms.
//!
//! Builds the homogeneous matrix `[[a,0,0,d],[0,b,0,e],[0,0,c,f],[0,0,0,1]]`
//! over symbolic or floating point scalars and inverts it, either through
//! generic Gauss-Jordan elimination or through the closed form.

pub mod config;
pub mod numerics;

pub use config::DisplayConfig;
pub use numerics::affine::{affine_inverse, affine_matrix, DiagonalAffine};
pub use numerics::symbolic::{symbols, Expr, Symbol, SymbolicError};
pub use numerics::types::matrix::{Matrix4x4, MatrixError, SquareMatrix};
