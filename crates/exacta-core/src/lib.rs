//! # exacta-core
//!
//! Symbolic real-valued expressions for exacta.
//!
//! This crate provides:
//! - The `RealExpr` tagged union (numbers, log, exp, sums, products, powers)
//! - Simplifying combinators (`+`, `*`, `RealExpr::pow`)
//! - A recursive canonicalizing simplifier over exact rationals
//!
//! ## Design Principles
//!
//! - **Value Trees**: Nodes own their children; transformations build new trees
//! - **Exhaustive Dispatch**: Every pass matches on the full set of variants
//! - **Absorbing Undefined**: Invalid operations simplify to `RealExpr::Undefined`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod expr;
pub mod ops;
pub mod simplify;

#[cfg(test)]
mod proptests;

pub use exacta_integers::{Fraction, Integer, Rational};
pub use expr::RealExpr;
