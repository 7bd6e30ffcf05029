//! Errors raised by integer operations.

use thiserror::Error;

/// Errors that can occur during integer arithmetic.
///
/// Only the integer layer reports these. Rational operations collapse
/// every failure into [`crate::Rational::Invalid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("exponent must be non-negative")]
    InvalidExponent,

    #[error("0^0 is undefined")]
    UndefinedOperation,

    #[error("result of exponentiation is too large")]
    ExponentTooLarge,
}
