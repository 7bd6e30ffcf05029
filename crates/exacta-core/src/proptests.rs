//! Property-based tests for expression simplification.

#[cfg(test)]
mod tests {
    use exacta_integers::Rational;
    use proptest::prelude::*;

    use crate::RealExpr;

    // Strategy for a defined rational with a small numerator and denominator
    fn small_rational() -> impl Strategy<Value = Rational> {
        (-12i64..=12, prop_oneof![(-6i64..=-1), (1i64..=6)])
            .prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    // Strategy for numeric leaves, written as integers or unreduced fractions
    fn number() -> impl Strategy<Value = RealExpr> {
        prop_oneof![
            (-6i64..=6).prop_map(RealExpr::integer),
            small_rational().prop_map(RealExpr::from),
        ]
    }

    // Strategy for arbitrary expression trees, occasionally undefined
    fn expr() -> impl Strategy<Value = RealExpr> {
        let leaf = prop_oneof![8 => number(), 1 => Just(RealExpr::Undefined)];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                inner.clone().prop_map(RealExpr::log),
                inner.clone().prop_map(RealExpr::exp),
                prop::collection::vec(inner.clone(), 0..4).prop_map(RealExpr::sum),
                prop::collection::vec(inner.clone(), 0..4).prop_map(RealExpr::product),
                (inner.clone(), inner).prop_map(|(b, e)| RealExpr::power(b, e)),
            ]
        })
    }

    /// Evaluates an expression in floating point, giving up on undefined
    /// values and on any intermediate result outside a modest range.
    fn eval(expr: &RealExpr) -> Option<f64> {
        let value = match expr {
            RealExpr::Integer(n) => n.to_i64()? as f64,
            RealExpr::Rational(f) => {
                f.numerator().to_i64()? as f64 / f.denominator().to_i64()? as f64
            }
            RealExpr::Log(arg) => eval(arg)?.ln(),
            RealExpr::Exp(arg) => eval(arg)?.exp(),
            RealExpr::Sum(operands) => operands.iter().map(eval).sum::<Option<f64>>()?,
            RealExpr::Product(operands) => operands.iter().map(eval).product::<Option<f64>>()?,
            RealExpr::Pow { base, exp } => eval(base)?.powf(eval(exp)?),
            RealExpr::Undefined => return None,
        };
        (value.is_finite() && value.abs() <= 1e6).then_some(value)
    }

    proptest! {
        #[test]
        fn simplify_is_idempotent(e in expr()) {
            let once = e.simplify();
            prop_assert_eq!(once.simplify(), once);
        }

        #[test]
        fn simplify_preserves_value(e in expr()) {
            if let Some(before) = eval(&e) {
                let simplified = e.simplify();
                prop_assert!(!simplified.is_undefined(), "{} became undefined", e);
                if let Some(after) = eval(&simplified) {
                    let tolerance = 1e-6 * before.abs().max(1.0);
                    prop_assert!(
                        (before - after).abs() <= tolerance,
                        "{} = {} but {} = {}", e, before, simplified, after
                    );
                }
            }
        }

        #[test]
        fn numeric_sum_matches_rational_fold(
            values in prop::collection::vec(small_rational(), 0..6)
        ) {
            let expected = values
                .iter()
                .fold(Rational::from(0i64), |acc, r| &acc + r);
            let sum = RealExpr::sum(values.into_iter().map(RealExpr::from).collect());
            prop_assert_eq!(sum.simplify(), RealExpr::from(expected));
        }

        #[test]
        fn numeric_product_matches_rational_fold(
            values in prop::collection::vec(small_rational(), 0..6)
        ) {
            let expected = values
                .iter()
                .fold(Rational::from(1i64), |acc, r| acc.product(r));
            let product = RealExpr::product(values.into_iter().map(RealExpr::from).collect());
            prop_assert_eq!(product.simplify(), RealExpr::from(expected));
        }

        #[test]
        fn undefined_absorbs(e in expr()) {
            let undefined = RealExpr::Undefined;
            prop_assert!(RealExpr::sum(vec![e.clone(), undefined.clone()]).simplify().is_undefined());
            prop_assert!(RealExpr::product(vec![undefined.clone(), e.clone()]).simplify().is_undefined());
            prop_assert!(RealExpr::power(e.clone(), undefined.clone()).simplify().is_undefined());
            prop_assert!(RealExpr::power(undefined.clone(), e.clone()).simplify().is_undefined());
            prop_assert!(RealExpr::log(RealExpr::sum(vec![e.clone(), undefined.clone()])).simplify().is_undefined());
            prop_assert!(RealExpr::exp(RealExpr::product(vec![e, undefined])).simplify().is_undefined());
        }
    }
}
