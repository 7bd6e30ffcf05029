//! # Exacta
//!
//! Exact symbolic arithmetic written in Rust.
//!
//! Exacta represents integers, rationals and a small algebra of real
//! expressions, and rewrites expressions into a canonical form without
//! ever touching floating point.
//!
//! ## Features
//!
//! - **Exact Numbers**: Arbitrary precision integers and on-demand reduced rationals
//! - **Explicit Failure**: Integer errors as `Result`, rational failures as a sentinel
//! - **Canonical Forms**: Recursive simplification of sums, products, powers, logs and exps
//! - **Exact Export**: Every expression maps onto an `egg` e-graph language
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let half = RealExpr::fraction(2, -4).simplify();
//! assert_eq!(half.to_string(), "-1/2");
//!
//! let sum = RealExpr::log(RealExpr::integer(2)) + RealExpr::log(RealExpr::integer(3));
//! assert_eq!(sum.to_string(), "log(6)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_core as core;
pub use exacta_integers as integers;
pub use exacta_export as export;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_core::RealExpr;
    pub use exacta_integers::{ArithmeticError, Fraction, Integer, Rational};
    pub use exacta_export::{ExactaLang, ToRecExpr};
}
