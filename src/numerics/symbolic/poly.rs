// src/numerics/symbolic/poly.rs
//! Laurent polynomials with exact coefficients.
//!
//! A [`Monomial`] is a product of symbols raised to nonzero integer powers,
//! negative powers included, so `d/a` is the single monomial `a^-1 * d`.
//! A [`Polynomial`] maps monomials to nonzero coefficients. Both are kept in
//! canonical form, so structural equality is mathematical equality.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

use super::coeff::Coefficient;
use super::symbol::Symbol;

/// Product of symbol powers. The empty monomial is the constant `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Monomial {
    powers: BTreeMap<Symbol, i32>,
}

#[derive(Deserialize)]
#[serde(rename = "Monomial")]
struct MonomialRepr {
    powers: BTreeMap<Symbol, i32>,
}

// Zero exponents are dropped so the decoded monomial is canonical.
impl<'de> Deserialize<'de> for Monomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let MonomialRepr { mut powers } = MonomialRepr::deserialize(deserializer)?;
        powers.retain(|_, exp| *exp != 0);
        Ok(Self { powers })
    }
}

impl Monomial {
    pub fn one() -> Self {
        Self::default()
    }

    pub fn symbol(symbol: Symbol) -> Self {
        Self {
            powers: BTreeMap::from([(symbol, 1)]),
        }
    }

    pub fn is_one(&self) -> bool {
        self.powers.is_empty()
    }

    /// Iterate `(symbol, exponent)` pairs in symbol order.
    pub fn factors(&self) -> impl Iterator<Item = (&Symbol, i32)> {
        self.powers.iter().map(|(s, e)| (s, *e))
    }

    pub fn degree(&self) -> i64 {
        self.powers.values().map(|e| *e as i64).sum()
    }

    pub fn inverse(&self) -> Self {
        Self {
            powers: self.powers.iter().map(|(s, e)| (s.clone(), -e)).collect(),
        }
    }

    pub fn mul(&self, other: &Monomial) -> Self {
        let mut powers = self.powers.clone();
        for (symbol, exp) in &other.powers {
            let entry = powers.entry(symbol.clone()).or_insert(0);
            *entry += exp;
            if *entry == 0 {
                powers.remove(symbol);
            }
        }
        Self { powers }
    }
}

/// Finite sum of `coefficient * monomial` terms, zero terms removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Coefficient>,
}

#[derive(Deserialize)]
#[serde(rename = "Polynomial")]
struct PolynomialRepr {
    terms: BTreeMap<Monomial, Coefficient>,
}

// Rebuilt term by term so zero coefficients are dropped.
impl<'de> Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = PolynomialRepr::deserialize(deserializer)?;
        let mut terms = BTreeMap::new();
        for (monomial, coeff) in repr.terms {
            Polynomial::accumulate(&mut terms, monomial, coeff);
        }
        Ok(Self { terms })
    }
}

impl Polynomial {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::constant(Coefficient::int(1))
    }

    pub fn constant(coeff: Coefficient) -> Self {
        Self::term(Monomial::one(), coeff)
    }

    pub fn symbol(symbol: Symbol) -> Self {
        Self::term(Monomial::symbol(symbol), Coefficient::int(1))
    }

    pub fn term(monomial: Monomial, coeff: Coefficient) -> Self {
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(monomial, coeff);
        }
        Self { terms }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_one(&self) -> bool {
        matches!(self.single_term(), Some((m, c)) if m.is_one() && c.is_one())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Coefficient)> {
        self.terms.iter()
    }

    pub fn single_term(&self) -> Option<(&Monomial, &Coefficient)> {
        if self.terms.len() == 1 {
            self.terms.iter().next()
        } else {
            None
        }
    }

    /// Constant value when the polynomial has no symbolic part.
    pub fn as_constant(&self) -> Option<Coefficient> {
        if self.is_zero() {
            return Some(Coefficient::int(0));
        }
        self.single_term()
            .filter(|(m, _)| m.is_one())
            .map(|(_, c)| c.clone())
    }

    /// Reciprocal of a single-term polynomial.
    pub fn term_recip(&self) -> Option<Polynomial> {
        let (monomial, coeff) = self.single_term()?;
        coeff
            .recip()
            .map(|r| Polynomial::term(monomial.inverse(), r))
    }

    /// Find a single term `q` with `q * divisor == self`.
    ///
    /// Any such `q` maps the first term of `self` onto some term of the
    /// divisor, so trying each divisor term is exhaustive.
    pub fn monomial_quotient(&self, divisor: &Polynomial) -> Option<Polynomial> {
        let (lead_mono, lead_coeff) = self.terms.iter().next()?;
        if self.len() != divisor.len() {
            return None;
        }
        divisor.terms.iter().find_map(|(mono, coeff)| {
            let ratio = lead_coeff.checked_div(coeff)?;
            let candidate = Polynomial::term(lead_mono.mul(&mono.inverse()), ratio);
            (&candidate * divisor == *self).then_some(candidate)
        })
    }

    fn accumulate(terms: &mut BTreeMap<Monomial, Coefficient>, monomial: Monomial, coeff: Coefficient) {
        match terms.remove(&monomial) {
            Some(existing) => {
                let sum = existing + coeff;
                if !sum.is_zero() {
                    terms.insert(monomial, sum);
                }
            }
            None => {
                if !coeff.is_zero() {
                    terms.insert(monomial, coeff);
                }
            }
        }
    }
}

impl From<Coefficient> for Polynomial {
    fn from(coeff: Coefficient) -> Self {
        Polynomial::constant(coeff)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut terms = self.terms.clone();
        for (monomial, coeff) in &rhs.terms {
            Polynomial::accumulate(&mut terms, monomial.clone(), coeff.clone());
        }
        Polynomial { terms }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
        }
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut terms = BTreeMap::new();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &rhs.terms {
                Polynomial::accumulate(&mut terms, m1.mul(m2), c1.clone() * c2.clone());
            }
        }
        Polynomial { terms }
    }
}
