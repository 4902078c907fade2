// src/numerics/symbolic/expr.rs
//! Rational-function expressions.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::trace;

use super::coeff::Coefficient;
use super::poly::Polynomial;
use super::symbol::Symbol;
use super::{Result, SymbolicError};

/// A symbolic scalar `numerator / denominator`.
///
/// Kept reduced: a single-term denominator is folded into the numerator,
/// zero is `0/1`, and a numerator that is a one-term multiple of the
/// denominator cancels. Equality compares cross products, so two
/// expressions are equal exactly when they are the same rational function.
#[derive(Debug, Clone, Serialize)]
pub struct Expr {
    num: Polynomial,
    den: Polynomial,
}

#[derive(Deserialize)]
#[serde(rename = "Expr")]
struct ExprRepr {
    num: Polynomial,
    den: Polynomial,
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ExprRepr { num, den } = ExprRepr::deserialize(deserializer)?;
        Expr::ratio(num, den).map_err(D::Error::custom)
    }
}

/// Parse whitespace- or comma-separated names into symbol expressions.
///
/// `symbols("a b c")` yields `[a, b, c]`.
pub fn symbols(names: &str) -> Result<Vec<Expr>> {
    names
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|name| !name.is_empty())
        .map(Expr::var)
        .collect()
}

impl Expr {
    pub fn zero() -> Self {
        Self::from_polynomial(Polynomial::zero())
    }

    pub fn one() -> Self {
        Self::from_polynomial(Polynomial::one())
    }

    pub fn int(n: i64) -> Self {
        Self::constant(Coefficient::int(n))
    }

    pub fn constant(coeff: Coefficient) -> Self {
        Self::from_polynomial(Polynomial::constant(coeff))
    }

    pub fn symbol(symbol: Symbol) -> Self {
        Self::from_polynomial(Polynomial::symbol(symbol))
    }

    /// Shorthand for `Expr::symbol(Symbol::new(name)?)`.
    pub fn var(name: &str) -> Result<Self> {
        Symbol::new(name).map(Self::symbol)
    }

    pub fn from_polynomial(poly: Polynomial) -> Self {
        Self {
            num: poly,
            den: Polynomial::one(),
        }
    }

    /// Build `num / den`, failing when `den` is the zero polynomial.
    pub fn ratio(num: Polynomial, den: Polynomial) -> Result<Self> {
        if den.is_zero() {
            return Err(SymbolicError::DivisionByZero);
        }
        Ok(Self::reduce(num, den))
    }

    // Caller guarantees `den` is nonzero.
    fn reduce(num: Polynomial, den: Polynomial) -> Self {
        if num.is_zero() {
            return Self::zero();
        }
        if den.is_one() {
            return Self::from_polynomial(num);
        }
        if let Some(recip) = den.term_recip() {
            return Self::from_polynomial(&num * &recip);
        }
        if let Some(quotient) = num.monomial_quotient(&den) {
            trace!("cancelled common factor of numerator and denominator");
            return Self::from_polynomial(quotient);
        }
        Self { num, den }
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.num
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.den
    }

    /// The expression as a polynomial, when its denominator is `1`.
    pub fn as_polynomial(&self) -> Option<&Polynomial> {
        self.den.is_one().then_some(&self.num)
    }

    pub fn as_constant(&self) -> Option<Coefficient> {
        self.as_polynomial().and_then(Polynomial::as_constant)
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        let (monomial, coeff) = self.as_polynomial()?.single_term()?;
        let mut factors = monomial.factors();
        match (factors.next(), factors.next()) {
            (Some((symbol, 1)), None) if coeff.is_one() => Some(symbol),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.num == self.den
    }

    pub fn checked_div(&self, rhs: &Expr) -> Result<Expr> {
        if rhs.is_zero() {
            return Err(SymbolicError::DivisionByZero);
        }
        Ok(Self::reduce(&self.num * &rhs.den, &self.den * &rhs.num))
    }

    pub fn recip(&self) -> Result<Expr> {
        Expr::one().checked_div(self)
    }

    /// Integer power by repeated squaring. Negative exponents of zero fail.
    pub fn powi(&self, exp: i32) -> Result<Expr> {
        let mut base = if exp < 0 { self.recip()? } else { self.clone() };
        let mut remaining = exp.unsigned_abs();
        let mut acc = Expr::one();
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = acc * base.clone();
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.clone() * base;
            }
        }
        Ok(acc)
    }

    /// Replace symbols by expressions. Unbound symbols are left as they are.
    pub fn subs(&self, bindings: &HashMap<Symbol, Expr>) -> Result<Expr> {
        let num = subs_polynomial(&self.num, bindings)?;
        let den = subs_polynomial(&self.den, bindings)?;
        num.checked_div(&den)
    }

    /// Numeric value under `values`. Every symbol must be bound.
    pub fn evaluate(&self, values: &HashMap<Symbol, f64>) -> Result<f64> {
        let num = evaluate_polynomial(&self.num, values)?;
        let den = evaluate_polynomial(&self.den, values)?;
        if den == 0.0 {
            return Err(SymbolicError::DivisionByZero);
        }
        Ok(num / den)
    }
}

fn subs_polynomial(poly: &Polynomial, bindings: &HashMap<Symbol, Expr>) -> Result<Expr> {
    let mut total = Expr::zero();
    for (monomial, coeff) in poly.terms() {
        let mut term = Expr::constant(coeff.clone());
        for (symbol, exp) in monomial.factors() {
            let value = bindings
                .get(symbol)
                .cloned()
                .unwrap_or_else(|| Expr::symbol(symbol.clone()));
            term = term * value.powi(exp)?;
        }
        total = total + term;
    }
    Ok(total)
}

fn evaluate_polynomial(poly: &Polynomial, values: &HashMap<Symbol, f64>) -> Result<f64> {
    let mut total = 0.0;
    for (monomial, coeff) in poly.terms() {
        let mut term = coeff.to_f64();
        for (symbol, exp) in monomial.factors() {
            let value = *values
                .get(symbol)
                .ok_or_else(|| SymbolicError::UndefinedSymbol(symbol.name().to_string()))?;
            if value == 0.0 && exp < 0 {
                return Err(SymbolicError::DivisionByZero);
            }
            term *= value.powi(exp);
        }
        total += term;
    }
    Ok(total)
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        &self.num * &other.den == &other.num * &self.den
    }
}

impl Default for Expr {
    fn default() -> Self {
        Expr::zero()
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::int(n)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::symbol(symbol)
    }
}

impl From<Polynomial> for Expr {
    fn from(poly: Polynomial) -> Self {
        Expr::from_polynomial(poly)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        if self.den == rhs.den {
            return Expr::reduce(&self.num + &rhs.num, self.den);
        }
        Expr::reduce(
            &(&self.num * &rhs.den) + &(&rhs.num * &self.den),
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        self + (-rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::reduce(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr {
            num: -&self.num,
            den: self.den,
        }
    }
}
