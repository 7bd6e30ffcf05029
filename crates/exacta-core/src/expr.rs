//! Expression node types.
//!
//! This module defines the closed set of real-valued expression kinds.
//! Expressions are immutable value trees: every node owns its children
//! and every transformation builds a new tree.

use exacta_integers::{Fraction, Integer, Rational};
use num_traits::Zero;
use std::fmt;

/// A symbolic real-valued expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RealExpr {
    // === Atoms ===
    /// An integer literal.
    Integer(Integer),

    /// A fraction literal, not necessarily reduced.
    ///
    /// Invariant: denominator > 0.
    Rational(Fraction),

    // === Compound Expressions ===
    /// Natural logarithm: log(arg).
    Log(Box<RealExpr>),

    /// Natural exponential: exp(arg).
    Exp(Box<RealExpr>),

    /// Sum of expressions: a + b + c + ...
    ///
    /// Operand order is kept for display only.
    Sum(Vec<RealExpr>),

    /// Product of expressions: a b c ...
    Product(Vec<RealExpr>),

    /// Power expression: base^exp.
    Pow {
        /// The base of the power.
        base: Box<RealExpr>,
        /// The exponent.
        exp: Box<RealExpr>,
    },

    /// The result of an invalid operation.
    ///
    /// Absorbs every operation it takes part in during simplification.
    Undefined,
}

impl RealExpr {
    // === Constructors ===
    //
    // These build nodes as given, without simplifying. The `+` and `*`
    // operators and `pow` are the combinators that simplify.

    /// Creates an integer literal.
    #[must_use]
    pub fn integer(value: impl Into<Integer>) -> Self {
        Self::Integer(value.into())
    }

    /// Creates the fraction `num/den` without reducing it.
    ///
    /// A zero denominator gives [`RealExpr::Undefined`].
    #[must_use]
    pub fn fraction(num: impl Into<Integer>, den: impl Into<Integer>) -> Self {
        Rational::new(num.into(), den.into()).into()
    }

    /// Creates `log(arg)`.
    #[must_use]
    pub fn log(arg: Self) -> Self {
        Self::Log(Box::new(arg))
    }

    /// Creates `exp(arg)`.
    #[must_use]
    pub fn exp(arg: Self) -> Self {
        Self::Exp(Box::new(arg))
    }

    /// Creates a sum node over the given operands.
    #[must_use]
    pub fn sum(operands: Vec<Self>) -> Self {
        Self::Sum(operands)
    }

    /// Creates a product node over the given operands.
    #[must_use]
    pub fn product(operands: Vec<Self>) -> Self {
        Self::Product(operands)
    }

    /// Creates `base^exp`.
    #[must_use]
    pub fn power(base: Self, exp: Self) -> Self {
        Self::Pow {
            base: Box::new(base),
            exp: Box::new(exp),
        }
    }

    // === Queries ===

    /// Returns true if this node is a numeric literal.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Rational(_))
    }

    /// Returns true if this is the undefined sentinel.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this is a numeric literal equal to zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_rational().is_some_and(|r| r.is_zero())
    }

    /// Returns true if this is a numeric literal equal to one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_rational().is_some_and(|r| r.is_one())
    }

    /// Returns the numeric value of a literal.
    #[must_use]
    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Integer(n) => Some(Rational::Integer(n.clone())),
            Self::Rational(f) => Some(Rational::Fraction(f.clone())),
            _ => None,
        }
    }

    /// Returns the direct children of this node.
    #[must_use]
    pub fn children(&self) -> Vec<&RealExpr> {
        match self {
            Self::Integer(_) | Self::Rational(_) | Self::Undefined => Vec::new(),
            Self::Log(arg) | Self::Exp(arg) => vec![arg.as_ref()],
            Self::Sum(operands) | Self::Product(operands) => operands.iter().collect(),
            Self::Pow { base, exp } => vec![base.as_ref(), exp.as_ref()],
        }
    }
}

impl From<Rational> for RealExpr {
    fn from(value: Rational) -> Self {
        match value {
            Rational::Integer(n) => Self::Integer(n),
            Rational::Fraction(f) => Self::Rational(f),
            Rational::Invalid => Self::Undefined,
        }
    }
}

impl From<Integer> for RealExpr {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for RealExpr {
    fn from(value: i64) -> Self {
        Self::Integer(Integer::new(value))
    }
}

impl Default for RealExpr {
    fn default() -> Self {
        Self::Integer(Integer::zero())
    }
}

/// Writes `expr`, wrapped in parentheses when it is a sum or a product.
fn write_grouped(f: &mut fmt::Formatter<'_>, expr: &RealExpr) -> fmt::Result {
    match expr {
        RealExpr::Sum(_) | RealExpr::Product(_) => write!(f, "({expr})"),
        _ => write!(f, "{expr}"),
    }
}

impl fmt::Display for RealExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Rational(q) => write!(f, "{q}"),
            Self::Log(arg) => write!(f, "log({arg})"),
            Self::Exp(arg) => write!(f, "exp({arg})"),
            Self::Sum(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" + ")?;
                    }
                    write!(f, "{operand}")?;
                }
                Ok(())
            }
            Self::Product(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    if matches!(operand, Self::Sum(_)) {
                        write!(f, "({operand})")?;
                    } else {
                        write!(f, "{operand}")?;
                    }
                }
                Ok(())
            }
            Self::Pow { base, exp } => {
                write_grouped(f, base)?;
                f.write_str("^")?;
                write_grouped(f, exp)
            }
            Self::Undefined => f.write_str("UNDEFINED"),
        }
    }
}
