//! Simplifying combinators.
//!
//! `x + y` and `x * y` splice the operands of an existing sum (or
//! product) into a single operand list, build the node and simplify it.
//! [`RealExpr::pow`] does the same for powers. These are the only
//! constructors that simplify as a side effect.

use std::ops::{Add, Mul};

use crate::expr::RealExpr;

fn sum_operands(expr: RealExpr) -> Vec<RealExpr> {
    match expr {
        RealExpr::Sum(operands) => operands,
        other => vec![other],
    }
}

fn product_operands(expr: RealExpr) -> Vec<RealExpr> {
    match expr {
        RealExpr::Product(operands) => operands,
        other => vec![other],
    }
}

impl Add for RealExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut operands = sum_operands(self);
        operands.extend(sum_operands(rhs));
        RealExpr::Sum(operands).simplify()
    }
}

impl Add for &RealExpr {
    type Output = RealExpr;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl Mul for RealExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut operands = product_operands(self);
        operands.extend(product_operands(rhs));
        RealExpr::Product(operands).simplify()
    }
}

impl Mul for &RealExpr {
    type Output = RealExpr;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl RealExpr {
    /// Builds `self^exp` and simplifies it.
    #[must_use]
    pub fn pow(self, exp: Self) -> Self {
        Self::power(self, exp).simplify()
    }
}
