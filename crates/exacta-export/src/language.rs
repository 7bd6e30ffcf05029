//! The egg language that exported expressions are written in.
//!
//! Every `RealExpr` variant has a counterpart here; see [`crate::export`].

use egg::{define_language, Id};
use exacta_integers::Integer;

define_language! {
    /// The symbolic expression language for exacta.
    ///
    /// Numbers are exact integers; fractions are written `(/ num den)`.
    pub enum ExactaLang {
        // Result of an invalid operation
        "undefined" = Undefined,
        // Numeric literals
        Num(Integer),

        // Basic arithmetic
        "+" = Add([Id; 2]),
        "*" = Mul([Id; 2]),
        "/" = Div([Id; 2]),
        "^" = Pow([Id; 2]),

        // Exponential and logarithmic
        "exp" = Exp(Id),
        "ln" = Ln(Id),
    }
}

impl ExactaLang {
    /// Returns true if this node is a number.
    #[must_use]
    pub fn is_num(&self) -> bool {
        matches!(self, ExactaLang::Num(_))
    }

    /// Returns true if this node is the undefined leaf.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, ExactaLang::Undefined)
    }

    /// Extracts the numeric value if this is a number.
    #[must_use]
    pub fn as_num(&self) -> Option<&Integer> {
        match self {
            ExactaLang::Num(n) => Some(n),
            _ => None,
        }
    }
}
