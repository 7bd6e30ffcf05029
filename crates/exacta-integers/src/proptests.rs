//! Property-based tests for integer and rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                &a * &(&b + &c),
                &a * &b + &a * &c
            );
        }

        #[test]
        fn integer_subtract_is_add_negate(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        // Division

        #[test]
        fn quotient_remainder_identity(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.quotient(&b).unwrap();
            let r = a.modulo(&b).unwrap();
            prop_assert_eq!(q * &b + r, a);
        }

        #[test]
        fn quotient_matches_machine_division(a in small_int(), b in non_zero_int()) {
            prop_assert_eq!(
                Integer::new(a).quotient(&Integer::new(b)).unwrap(),
                Integer::new(a / b)
            );
            prop_assert_eq!(
                Integer::new(a).modulo(&Integer::new(b)).unwrap(),
                Integer::new(a % b)
            );
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(!g.is_negative());
            if g.is_zero() {
                prop_assert!(a.is_zero() && b.is_zero());
            } else {
                prop_assert!(a.modulo(&g).unwrap().is_zero());
                prop_assert!(b.modulo(&g).unwrap().is_zero());
            }
        }

        #[test]
        fn gcd_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        #[test]
        fn pow_matches_repeated_multiplication(a in -20i64..20i64, n in 0u32..8u32) {
            prop_assume!(a != 0 || n != 0);
            let expected = (0..n).fold(Integer::new(1), |acc, _| acc * Integer::new(a));
            prop_assert_eq!(
                Integer::new(a).pow(&Integer::from(i64::from(n))).unwrap(),
                expected
            );
        }

        // Rational reduction

        #[test]
        fn rational_denominator_positive(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
        }

        #[test]
        fn rational_simplify_is_reduced(num in non_zero_int(), den in non_zero_int()) {
            match Rational::from_i64(num, den).simplify() {
                Rational::Integer(n) => {
                    prop_assert_eq!(num % den, 0);
                    prop_assert_eq!(n, Integer::new(num / den));
                }
                Rational::Fraction(f) => {
                    prop_assert!(f.denominator() > &Integer::new(1));
                    prop_assert_eq!(
                        f.numerator().gcd(f.denominator()),
                        Integer::new(1)
                    );
                }
                Rational::Invalid => prop_assert!(false, "valid input reduced to the sentinel"),
            }
        }

        #[test]
        fn rational_simplify_idempotent(num in small_int(), den in small_int()) {
            let once = Rational::from_i64(num, den).simplify();
            prop_assert_eq!(once.simplify(), once);
        }

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_product_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.product(&(&b + &c)),
                &a.product(&b) + &a.product(&c)
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &a.inv()).is_one());
        }
    }
}
