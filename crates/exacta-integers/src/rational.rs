//! Exact rational numbers with an explicit invalid sentinel.
//!
//! Unlike a normalized big-rational type, a [`Rational`] is not reduced
//! when it is constructed. Construction only normalizes the sign so that
//! the denominator is positive; [`Rational::simplify`] performs the
//! reduction and collapses whole numbers to [`Rational::Integer`].
//!
//! Rational operations never fail. Anything that would divide by zero
//! or raise to an invalid exponent yields [`Rational::Invalid`], which
//! then absorbs every later operation.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{ArithmeticError, Integer};

/// A fraction `num/den` with `den > 0`.
///
/// The fraction is not necessarily in lowest terms. Values of this type
/// are only produced by [`Rational::new`], which enforces the sign
/// invariant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: Integer,
    den: Integer,
}

impl Fraction {
    /// Returns the numerator, which carries the sign.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    fn reduce(&self) -> Result<Rational, ArithmeticError> {
        if self.num.modulo(&self.den)?.is_zero() {
            return Ok(Rational::Integer(self.num.quotient(&self.den)?));
        }
        let g = self.num.gcd(&self.den);
        Ok(Rational::new(
            self.num.quotient(&g)?,
            self.den.quotient(&g)?,
        ))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// An exact rational value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rational {
    /// A whole number, read as `n/1`.
    Integer(Integer),
    /// A possibly unreduced fraction with a positive denominator.
    Fraction(Fraction),
    /// The result of an invalid operation. Reads as `0/0`.
    Invalid,
}

fn collapse(err: ArithmeticError) -> Rational {
    log::debug!("rational operation collapsed to the invalid sentinel: {err}");
    Rational::Invalid
}

impl Rational {
    /// Creates the fraction `numerator/denominator`.
    ///
    /// The sign is moved onto the numerator. A zero denominator yields
    /// [`Rational::Invalid`]. The fraction is not reduced.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        if denominator.is_zero() {
            return Self::Invalid;
        }
        let num = if numerator.signum() * denominator.signum() >= 0 {
            numerator.abs()
        } else {
            -numerator.abs()
        };
        Self::Fraction(Fraction {
            num,
            den: denominator.abs(),
        })
    }

    /// Creates the fraction `numerator/denominator` from machine integers.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator. The sentinel reads as `0`.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        match self {
            Self::Integer(n) => n.clone(),
            Self::Fraction(f) => f.num.clone(),
            Self::Invalid => Integer::zero(),
        }
    }

    /// Returns the denominator. The sentinel reads as `0`.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        match self {
            Self::Integer(_) => Integer::one(),
            Self::Fraction(f) => f.den.clone(),
            Self::Invalid => Integer::zero(),
        }
    }

    /// Returns true for the invalid sentinel.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Returns true if this is a bare integer.
    ///
    /// An unreduced fraction such as `4/2` is not an integer until it
    /// has been simplified.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns the integer value if this is a bare integer.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        match self {
            Self::Integer(n) => Some(n.clone()),
            _ => None,
        }
    }

    /// Returns true if this is a valid value equal to zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.is_invalid() && self.numerator().is_zero()
    }

    /// Returns true if this is a valid value equal to one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self.simplify(), Self::Integer(n) if n.is_one())
    }

    /// Reduces the value to lowest terms.
    ///
    /// Whole numbers collapse to [`Rational::Integer`]. The sentinel
    /// stays the sentinel.
    #[must_use]
    pub fn simplify(&self) -> Self {
        match self {
            Self::Integer(_) | Self::Invalid => self.clone(),
            Self::Fraction(f) => f.reduce().unwrap_or_else(collapse),
        }
    }

    /// Returns the reciprocal. The reciprocal of zero is the sentinel.
    #[must_use]
    pub fn inv(&self) -> Self {
        Self::new(self.denominator(), self.numerator()).simplify()
    }

    /// Exact product with no special case for a zero factor.
    ///
    /// `*` treats a zero right-hand side as invalid; this does not, and
    /// only yields the sentinel when an operand already is one.
    #[must_use]
    pub fn product(&self, rhs: &Self) -> Self {
        if self.is_invalid() || rhs.is_invalid() {
            return Self::Invalid;
        }
        Self::new(
            self.numerator() * rhs.numerator(),
            self.denominator() * rhs.denominator(),
        )
        .simplify()
    }

    /// Raises the value to a non-negative integer power.
    ///
    /// The base is simplified first. `0^0` and negative exponents yield
    /// the sentinel.
    #[must_use]
    pub fn pow(&self, exp: &Integer) -> Self {
        match self.simplify() {
            Self::Integer(n) => n.pow(exp).map_or_else(collapse, Self::Integer),
            Self::Fraction(f) => match (f.num.pow(exp), f.den.pow(exp)) {
                (Ok(num), Ok(den)) => Self::new(num, den),
                (Err(err), _) | (_, Err(err)) => collapse(err),
            },
            Self::Invalid => Self::Invalid,
        }
    }

    /// Returns the absolute value. The denominator is kept as is.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Integer(n) => Self::Integer(n.abs()),
            Self::Fraction(f) => Self::new(f.num.abs(), f.den.clone()),
            Self::Invalid => Self::Invalid,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Fraction(frac) => write!(f, "{frac}"),
            Self::Invalid => write!(f, "0/0"),
        }
    }
}

// Arithmetic operations
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::new(
            self.numerator() * rhs.denominator() + self.denominator() * rhs.numerator(),
            self.denominator() * rhs.denominator(),
        )
        .simplify()
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

/// Multiplication yields the sentinel whenever the right-hand side has a
/// zero numerator, including a literal zero. Use [`Rational::product`]
/// for the exact product.
impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        if rhs.numerator().is_zero() {
            return Rational::Invalid;
        }
        Rational::new(
            self.numerator() * rhs.numerator(),
            self.denominator() * rhs.denominator(),
        )
        .simplify()
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        self * &rhs.inv()
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        match self {
            Rational::Integer(n) => Rational::Integer(-n),
            Rational::Fraction(f) => Rational::new(-&f.num, f.den.clone()),
            Rational::Invalid => Rational::Invalid,
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::Integer(n)
    }
}

impl From<Fraction> for Rational {
    fn from(f: Fraction) -> Self {
        Self::Fraction(f)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::Integer(Integer::new(n))
    }
}
