//! Export of exacta values into the egg language.
//!
//! Every expression kind maps structurally onto [`ExactaLang`], children
//! first. Numbers stay exact: a fraction becomes `(/ num den)`. Sums and
//! products become left-nested binary `+` and `*` chains.

use egg::{Id, RecExpr};
use exacta_core::RealExpr;
use exacta_integers::{Fraction, Integer, Rational};
use num_traits::{One, Zero};

use crate::language::ExactaLang;

/// Conversion into an egg [`RecExpr`] over [`ExactaLang`].
pub trait ToRecExpr {
    /// Appends the nodes for `self` to `rec` and returns the root id.
    fn export_into(&self, rec: &mut RecExpr<ExactaLang>) -> Id;

    /// Exports `self` as a standalone expression.
    fn to_rec_expr(&self) -> RecExpr<ExactaLang> {
        let mut rec = RecExpr::default();
        self.export_into(&mut rec);
        rec
    }
}

impl ToRecExpr for Integer {
    fn export_into(&self, rec: &mut RecExpr<ExactaLang>) -> Id {
        rec.add(ExactaLang::Num(self.clone()))
    }
}

impl ToRecExpr for Fraction {
    fn export_into(&self, rec: &mut RecExpr<ExactaLang>) -> Id {
        let num = self.numerator().export_into(rec);
        let den = self.denominator().export_into(rec);
        rec.add(ExactaLang::Div([num, den]))
    }
}

impl ToRecExpr for Rational {
    fn export_into(&self, rec: &mut RecExpr<ExactaLang>) -> Id {
        match self {
            Rational::Integer(n) => n.export_into(rec),
            Rational::Fraction(f) => f.export_into(rec),
            Rational::Invalid => rec.add(ExactaLang::Undefined),
        }
    }
}

impl ToRecExpr for RealExpr {
    fn export_into(&self, rec: &mut RecExpr<ExactaLang>) -> Id {
        match self {
            RealExpr::Integer(n) => n.export_into(rec),
            RealExpr::Rational(f) => f.export_into(rec),
            RealExpr::Log(arg) => {
                let arg = arg.export_into(rec);
                rec.add(ExactaLang::Ln(arg))
            }
            RealExpr::Exp(arg) => {
                let arg = arg.export_into(rec);
                rec.add(ExactaLang::Exp(arg))
            }
            RealExpr::Sum(operands) => export_chain(operands, rec, ExactaLang::Add, Integer::zero()),
            RealExpr::Product(operands) => {
                export_chain(operands, rec, ExactaLang::Mul, Integer::one())
            }
            RealExpr::Pow { base, exp } => {
                let base = base.export_into(rec);
                let exp = exp.export_into(rec);
                rec.add(ExactaLang::Pow([base, exp]))
            }
            RealExpr::Undefined => rec.add(ExactaLang::Undefined),
        }
    }
}

/// Exports `operands` as a left-nested chain of the binary operator `op`.
/// An empty list exports as `empty`.
fn export_chain(
    operands: &[RealExpr],
    rec: &mut RecExpr<ExactaLang>,
    op: fn([Id; 2]) -> ExactaLang,
    empty: Integer,
) -> Id {
    let mut acc: Option<Id> = None;
    for operand in operands {
        let id = operand.export_into(rec);
        acc = Some(match acc {
            Some(prev) => rec.add(op([prev, id])),
            None => id,
        });
    }
    acc.unwrap_or_else(|| empty.export_into(rec))
}
