//! Recursive canonicalizing simplification.
//!
//! Every node simplifies its children first and then applies the rules
//! for its own kind. Sums and products are flattened and folded from
//! left to right, merging adjacent operands that a pair rule recognizes.
//! Like terms that are not adjacent are left alone.
//!
//! Simplification never fails: invalid operations produce
//! [`RealExpr::Undefined`], which absorbs any node containing it.

use exacta_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::expr::RealExpr;

impl RealExpr {
    /// Returns a simplified, equivalent expression.
    ///
    /// The result is a fixed point: simplifying it again returns an
    /// equal expression.
    #[must_use]
    pub fn simplify(&self) -> Self {
        match self {
            Self::Integer(_) | Self::Undefined => self.clone(),
            Self::Rational(f) => Rational::from(f.clone()).simplify().into(),
            Self::Log(arg) => simplify_log(arg.simplify()),
            Self::Exp(arg) => simplify_exp(arg.simplify()),
            Self::Sum(operands) => fold(Assoc::Sum, operands),
            Self::Product(operands) => fold(Assoc::Product, operands),
            Self::Pow { base, exp } => simplify_pow(base.simplify(), exp.simplify()),
        }
    }
}

fn simplify_log(arg: RealExpr) -> RealExpr {
    match arg {
        RealExpr::Undefined => RealExpr::Undefined,
        RealExpr::Exp(inner) => {
            log::trace!("log-exp: log(exp({inner})) -> {inner}");
            *inner
        }
        arg => match arg.as_rational() {
            Some(r) if r.is_one() => {
                log::trace!("log-one: log({arg}) -> 0");
                RealExpr::Integer(Integer::zero())
            }
            Some(r) if r.numerator().signum() <= 0 => {
                log::trace!("log-domain: log({arg}) -> UNDEFINED");
                RealExpr::Undefined
            }
            _ => RealExpr::log(arg),
        },
    }
}

fn simplify_exp(arg: RealExpr) -> RealExpr {
    match arg {
        RealExpr::Undefined => RealExpr::Undefined,
        RealExpr::Log(inner) => {
            log::trace!("exp-log: exp(log({inner})) -> {inner}");
            *inner
        }
        arg if arg.is_zero() => {
            log::trace!("exp-zero: exp({arg}) -> 1");
            RealExpr::Integer(Integer::one())
        }
        arg => RealExpr::exp(arg),
    }
}

fn simplify_pow(base: RealExpr, exp: RealExpr) -> RealExpr {
    if base.is_undefined() || exp.is_undefined() {
        return RealExpr::Undefined;
    }
    RealExpr::power(base, exp)
}

/// The associative node kinds that are flattened and folded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Assoc {
    Sum,
    Product,
}

impl Assoc {
    fn wrap(self, operands: Vec<RealExpr>) -> RealExpr {
        match self {
            Assoc::Sum => RealExpr::Sum(operands),
            Assoc::Product => RealExpr::Product(operands),
        }
    }

    /// The value of an empty operand list.
    fn identity(self) -> RealExpr {
        match self {
            Assoc::Sum => RealExpr::Integer(Integer::zero()),
            Assoc::Product => RealExpr::Integer(Integer::one()),
        }
    }

    /// Splits a node of the same kind into its operands.
    fn unwrap(self, expr: RealExpr) -> Result<Vec<RealExpr>, RealExpr> {
        match (self, expr) {
            (Assoc::Sum, RealExpr::Sum(operands))
            | (Assoc::Product, RealExpr::Product(operands)) => Ok(operands),
            (_, expr) => Err(expr),
        }
    }

    /// Merges two adjacent simplified operands, if a rule applies.
    fn combine(self, lhs: &RealExpr, rhs: &RealExpr) -> Option<RealExpr> {
        match self {
            Assoc::Sum => combine_sum(lhs, rhs),
            Assoc::Product => combine_product(lhs, rhs),
        }
    }
}

fn combine_sum(lhs: &RealExpr, rhs: &RealExpr) -> Option<RealExpr> {
    if let (Some(a), Some(b)) = (lhs.as_rational(), rhs.as_rational()) {
        return Some((&a + &b).into());
    }
    match (lhs, rhs) {
        (RealExpr::Log(a), RealExpr::Log(b)) => {
            let merged = RealExpr::log(a.as_ref().clone() * b.as_ref().clone()).simplify();
            log::trace!("log-add: {lhs} + {rhs} -> {merged}");
            Some(merged)
        }
        _ => None,
    }
}

fn combine_product(lhs: &RealExpr, rhs: &RealExpr) -> Option<RealExpr> {
    if let (Some(a), Some(b)) = (lhs.as_rational(), rhs.as_rational()) {
        return Some(a.product(&b).into());
    }
    if let (RealExpr::Exp(a), RealExpr::Exp(b)) = (lhs, rhs) {
        let merged = RealExpr::exp(a.as_ref().clone() + b.as_ref().clone()).simplify();
        log::trace!("exp-mul: {lhs} {rhs} -> {merged}");
        return Some(merged);
    }
    let (lhs_base, lhs_exp) = as_power(lhs)?;
    let (rhs_base, rhs_exp) = as_power(rhs)?;
    if lhs_base != rhs_base {
        return None;
    }
    let merged = RealExpr::power(lhs_base.clone(), lhs_exp + rhs_exp).simplify();
    log::trace!("pow-mul: {lhs} {rhs} -> {merged}");
    Some(merged)
}

/// Views a non-numeric operand as `base^exp`, with an implicit exponent
/// of one for anything that is not already a power.
fn as_power(expr: &RealExpr) -> Option<(&RealExpr, RealExpr)> {
    match expr {
        RealExpr::Pow { base, exp } => Some((base.as_ref(), exp.as_ref().clone())),
        RealExpr::Integer(_) | RealExpr::Rational(_) | RealExpr::Undefined => None,
        _ => Some((expr, RealExpr::Integer(Integer::one()))),
    }
}

/// Simplifies the operands, flattens nested nodes of the same kind and
/// merges adjacent operands until no adjacent pair can be combined.
fn fold(kind: Assoc, operands: &[RealExpr]) -> RealExpr {
    let mut flat = Vec::with_capacity(operands.len());
    for operand in operands {
        match operand.simplify() {
            RealExpr::Undefined => return RealExpr::Undefined,
            simplified => match kind.unwrap(simplified) {
                Ok(inner) => flat.extend(inner),
                Err(single) => flat.push(single),
            },
        }
    }

    let mut folded: Vec<RealExpr> = Vec::with_capacity(flat.len());
    for operand in flat {
        folded.push(operand);
        while folded.len() >= 2 {
            let n = folded.len();
            let Some(merged) = kind.combine(&folded[n - 2], &folded[n - 1]) else {
                break;
            };
            if merged.is_undefined() {
                return RealExpr::Undefined;
            }
            folded.truncate(n - 2);
            folded.push(merged);
        }
    }

    match folded.len() {
        0 => kind.identity(),
        1 => folded.swap_remove(0),
        _ => kind.wrap(folded),
    }
}
