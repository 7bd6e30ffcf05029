//! # exacta-integers
//!
//! Exact integer and rational arithmetic for the exacta symbolic core.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`) backed by `dashu`
//! - Rationals (`Rational`) with on-demand reduction and an invalid sentinel
//! - The integer error taxonomy (`ArithmeticError`)
//!
//! ## Failure Model
//!
//! - Integer division, remainder and exponentiation return `Result`
//! - Rational operations never fail; they yield `Rational::Invalid`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::{Integer, MAX_POW_BITS};
pub use rational::{Fraction, Rational};
