//! # exacta-export
//!
//! Export of exacta expressions to the `egg` e-graph library.
//!
//! This crate provides:
//! - An e-graph language (`ExactaLang`) mirroring every `RealExpr` kind
//! - Exact export of integers, rationals and expressions (`ToRecExpr`)
//!
//! Rewriting the exported tree is left to the consumer. Export is purely
//! structural: it never changes the value of the expression it is given,
//! so callers that want a canonical tree call `RealExpr::simplify` first.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod export;
pub mod language;

pub use export::ToRecExpr;
pub use language::ExactaLang;
