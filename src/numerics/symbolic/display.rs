//! Text rendering of expressions in computer-algebra notation.

use std::cmp::Reverse;
use std::fmt;

use super::coeff::Coefficient;
use super::expr::Expr;
use super::poly::{Monomial, Polynomial};
use crate::config::PowerStyle;

/// Borrowed expression paired with a power style, implements `Display`.
pub struct ExprDisplay<'a> {
    expr: &'a Expr,
    power: PowerStyle,
}

impl Expr {
    pub fn display_with(&self, power: PowerStyle) -> ExprDisplay<'_> {
        ExprDisplay { expr: self, power }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(PowerStyle::default()), f)
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = render_polynomial(self.expr.numerator(), self.power);
        let den = self.expr.denominator();
        if den.is_one() {
            return f.write_str(&num);
        }
        let num = if self.expr.numerator().len() > 1 || num.contains('/') {
            format!("({})", num)
        } else {
            num
        };
        write!(f, "{}/({})", num, render_polynomial(den, self.power))
    }
}

fn render_polynomial(poly: &Polynomial, power: PowerStyle) -> String {
    if poly.is_zero() {
        return "0".to_string();
    }

    // Highest degree first, constants after, pure reciprocals last.
    let mut terms: Vec<_> = poly.terms().collect();
    terms.sort_by_key(|(m, _)| (Reverse(m.degree()), *m));

    let mut out = String::new();
    for (i, (monomial, coeff)) in terms.into_iter().enumerate() {
        let body = render_term(monomial, coeff, power);
        match (i, coeff.is_negative()) {
            (0, true) => {
                out.push('-');
                out.push_str(&body);
            }
            (0, false) => out.push_str(&body),
            (_, true) => {
                out.push_str(" - ");
                out.push_str(&body);
            }
            (_, false) => {
                out.push_str(" + ");
                out.push_str(&body);
            }
        }
    }
    out
}

/// Renders `|coeff| * monomial` as `n*x**2/(d*y)`; the sign is the caller's.
fn render_term(monomial: &Monomial, coeff: &Coefficient, power: PowerStyle) -> String {
    let (numer, denom) = match coeff.abs() {
        Coefficient::Rational(n, d) => (n.to_string(), d),
        Coefficient::Float(v) => (v.to_string(), 1),
    };

    let mut upper = Vec::new();
    let mut lower = Vec::new();
    for (symbol, exp) in monomial.factors() {
        let factor = match exp.unsigned_abs() {
            1 => symbol.to_string(),
            e => format!("{}{}{}", symbol, power.operator(), e),
        };
        if exp > 0 {
            upper.push(factor);
        } else {
            lower.push(factor);
        }
    }

    if numer != "1" || upper.is_empty() {
        upper.insert(0, numer);
    }
    if denom != 1 {
        lower.insert(0, denom.to_string());
    }

    let top = upper.join("*");
    match lower.len() {
        0 => top,
        1 => format!("{}/{}", top, lower[0]),
        _ => format!("{}/({})", top, lower.join("*")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::symbolic::symbols;

    fn vars(names: &str) -> Vec<Expr> {
        symbols(names).unwrap()
    }

    #[test]
    fn test_constants_and_symbols() {
        assert_eq!(Expr::zero().to_string(), "0");
        assert_eq!(Expr::one().to_string(), "1");
        assert_eq!(Expr::int(-4).to_string(), "-4");
        assert_eq!(vars("a")[0].to_string(), "a");
    }

    #[test]
    fn test_reciprocals() {
        let s = vars("a d");
        let (a, d) = (&s[0], &s[1]);
        assert_eq!(a.recip().unwrap().to_string(), "1/a");
        assert_eq!((-d.clone()).checked_div(a).unwrap().to_string(), "-d/a");
    }

    #[test]
    fn test_powers_and_grouped_denominator() {
        let s = vars("x y z");
        let (x, y, z) = (s[0].clone(), s[1].clone(), s[2].clone());
        let expr = (Expr::int(2) * x.clone() * x)
            .checked_div(&(y * z.clone() * z))
            .unwrap();
        assert_eq!(expr.to_string(), "2*x**2/(y*z**2)");
        assert_eq!(expr.display_with(PowerStyle::Caret).to_string(), "2*x^2/(y*z^2)");
    }

    #[test]
    fn test_rational_coefficient() {
        let x = vars("x")[0].clone();
        let half = x.checked_div(&Expr::int(2)).unwrap();
        assert_eq!(half.to_string(), "x/2");
        let third = Expr::one().checked_div(&Expr::int(-3)).unwrap();
        assert_eq!(third.to_string(), "-1/3");
    }

    #[test]
    fn test_sum_ordering() {
        let s = vars("a x");
        let (a, x) = (s[0].clone(), s[1].clone());
        assert_eq!((x.clone() + Expr::one()).to_string(), "x + 1");
        assert_eq!((Expr::one() - x.clone()).to_string(), "-x + 1");
        let mixed = x + Expr::one() - a.recip().unwrap();
        assert_eq!(mixed.to_string(), "x + 1 - 1/a");
    }

    #[test]
    fn test_rational_function() {
        let s = vars("l r");
        let (l, r) = (s[0].clone(), s[1].clone());
        let scale = Expr::int(2).checked_div(&(r - l)).unwrap();
        assert_eq!(scale.to_string(), "2/(-l + r)");
    }
}
