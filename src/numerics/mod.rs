// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules,
// the symbolic scalar engine and the affine transforms built on both.

pub mod affine;
pub mod symbolic;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix;
    pub mod point;
    pub mod traits;
    pub mod vector;
}
