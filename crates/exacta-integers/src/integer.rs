//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! fallible division and exponentiation the rational layer builds on.
//! Addition, subtraction, multiplication and negation are total and
//! never overflow.

use dashu::base::{Abs, BitTest, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ArithmeticError;

/// Upper bound on the size of a power, in bits of the magnitude.
pub const MAX_POW_BITS: usize = 1 << 26;

/// An arbitrary precision integer.
///
/// Equality is by value. Division and remainder are only available
/// through [`Integer::quotient`] and [`Integer::modulo`], which report a
/// zero divisor instead of panicking.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Integer division truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `rhs` is zero.
    pub fn quotient(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Remainder of the truncated division; takes the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `rhs` is zero.
    pub fn modulo(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self(&self.0 % &rhs.0))
    }

    /// Computes `self^exp`.
    ///
    /// `0^n` is `0` for every positive `n`, and `a^0` is `1` for every
    /// non-zero `a`. Bases `1` and `-1` accept any non-negative exponent.
    ///
    /// # Errors
    ///
    /// - [`ArithmeticError::UndefinedOperation`] for `0^0`
    /// - [`ArithmeticError::InvalidExponent`] for a negative exponent
    /// - [`ArithmeticError::ExponentTooLarge`] if the result would need more
    ///   than [`MAX_POW_BITS`] bits
    pub fn pow(&self, exp: &Self) -> Result<Self, ArithmeticError> {
        if self.is_zero() && exp.is_zero() {
            return Err(ArithmeticError::UndefinedOperation);
        }
        if exp.is_negative() {
            return Err(ArithmeticError::InvalidExponent);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        if self.abs().is_one() {
            let odd = !(&exp.0 % &IBig::from(2)).is_zero();
            return Ok(if self.is_negative() && odd {
                -Self::one()
            } else {
                Self::one()
            });
        }
        let exp: usize = exp
            .0
            .clone()
            .try_into()
            .map_err(|_| ArithmeticError::ExponentTooLarge)?;
        match self.bit_len().checked_mul(exp) {
            Some(bits) if bits <= MAX_POW_BITS => Ok(Self(self.0.pow(exp))),
            _ => Err(ArithmeticError::ExponentTooLarge),
        }
    }

    /// Returns the number of bits in the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Computes the greatest common divisor with the Euclidean algorithm.
    ///
    /// The result is never negative, and `gcd(0, 0) == 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = Self(&a.0 % &b.0);
            a = std::mem::replace(&mut b, r);
        }
        a.abs()
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
