//! Symbolic scalars.
//!
//! Expressions are rational functions over Laurent polynomials with exact
//! rational coefficients. That is enough to run Gauss-Jordan elimination on
//! matrices of symbols and get `1/a` or `-d/a` back, the way a computer
//! algebra system would print them.
//!
//! ```
//! use symaffine::numerics::symbolic::symbols;
//!
//! let s = symbols("a d").unwrap();
//! let ratio = (-s[1].clone()).checked_div(&s[0]).unwrap();
//! assert_eq!(ratio.to_string(), "-d/a");
//! ```

mod coeff;
mod display;
mod expr;
mod poly;
mod symbol;

pub use coeff::Coefficient;
pub use display::ExprDisplay;
pub use expr::{symbols, Expr};
pub use poly::{Monomial, Polynomial};
pub use symbol::Symbol;

/// Error type for symbolic operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SymbolicError {
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),

    #[error("invalid symbol name: {0:?}")]
    InvalidSymbolName(String),

    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, SymbolicError>;
