//! Property-based tests for polynomial arithmetic.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use proptest::prelude::*;

use crate::FixedPoly;

fn int_poly(max_len: usize) -> impl Strategy<Value = FixedPoly<i64>> {
    proptest::collection::vec(-10i64..10i64, 1..=max_len).prop_map(FixedPoly::new)
}

fn nonzero_int_poly(max_len: usize) -> impl Strategy<Value = FixedPoly<i64>> {
    int_poly(max_len).prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

// Tight capacity, leading coefficient 1.
fn monic_int_poly(max_deg: usize) -> impl Strategy<Value = FixedPoly<i64>> {
    proptest::collection::vec(-10i64..10i64, 0..=max_deg).prop_map(|mut v| { 
        v.push(1);
        FixedPoly::new(v)
    })
}

fn rat_poly(max_len: usize) -> impl Strategy<Value = FixedPoly<BigRational>> {
    proptest::collection::vec((-20i64..20i64, 1i64..5i64), 1..=max_len).prop_map(|v| { 
        v.into_iter().map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d))).collect()
    })
}

fn hash_of<T: Hash>(t: &T) -> u64 { 
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

proptest! {
    #[test]
    fn div_identity_field(a in rat_poly(6), b in rat_poly(4)) {
        prop_assume!(!b.is_zero());

        let (q, r) = a.div_rem(&b);

        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.degree() < b.degree());
        prop_assert_eq!(r.capacity(), a.capacity().min(b.capacity()));
    }

    #[test]
    fn div_identity_monic(a in int_poly(7), b in monic_int_poly(3)) {
        let (q, r) = a.div_rem(&b);

        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.degree() < b.degree());
        prop_assert_eq!(q.capacity(), (a.capacity() + 1).saturating_sub(b.capacity()).max(1));
    }

    #[test]
    fn div_identity_scaled(a in nonzero_int_poly(6), b in nonzero_int_poly(4)) {
        let (q, r) = a.div_rem(&b);
        let (m, n) = (a.degree().unwrap(), b.degree().unwrap());

        if m < n { 
            prop_assert!(q.is_zero());
            prop_assert_eq!(r, a);
        } else { 
            let l = *b.lead_coeff().unwrap();
            let mut scaled = a.clone();
            scaled *= &num_traits::pow(l, m - n + 1);

            prop_assert_eq!(&(&q * &b) + &r, scaled);
            prop_assert!(r.degree() < b.degree());
        }
    }

    #[test]
    fn mul_degree(a in nonzero_int_poly(5), b in nonzero_int_poly(5)) {
        let c = &a * &b;
        prop_assert_eq!(c.degree(), Some(a.degree().unwrap() + b.degree().unwrap()));
        prop_assert_eq!(c.capacity(), a.capacity() + b.capacity() - 1);
    }

    #[test]
    fn mul_commutative(a in int_poly(5), b in int_poly(5)) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn distributive(a in int_poly(4), b in int_poly(4), c in int_poly(4)) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn pow_additive(p in int_poly(3).prop_map(|p| p.map_coeffs(|&a| a % 3)), m in 0usize..4, n in 0usize..4) {
        prop_assert_eq!(p.pow(m + n), &p.pow(m) * &p.pow(n));
        prop_assert_eq!(p.pow(m + n).capacity(), (p.capacity().max(1) - 1) * (m + n) + 1);
    }

    #[test]
    fn eq_ignores_capacity(a in int_poly(5), extra in 0usize..4) {
        let b = a.resized(a.capacity() + extra);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.cmp(&b), Ordering::Equal);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn ord_consistent(a in int_poly(4), b in int_poly(4)) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        prop_assert_eq!(a.partial_cmp(&b), Some(a.cmp(&b)));
    }

    #[test]
    fn scalar_rem_identity(p in int_poly(5), s in (-7i64..7).prop_filter("non-zero", |s| *s != 0)) {
        let mut q = p.clone();
        q /= &s;
        q *= &s;

        let mut r = p.clone();
        r %= &s;

        prop_assert_eq!(q + r, p);
    }

    #[test]
    fn add_assign_matches_add(a in int_poly(5), b in int_poly(5)) {
        prop_assume!(b.degree().map_or(true, |d| d < a.capacity()));

        let mut c = a.clone();
        c += &b;

        prop_assert_eq!(c.capacity(), a.capacity());
        prop_assert_eq!(c, &a + &b);
    }

    #[test]
    fn eval_hom(a in int_poly(4), b in int_poly(4), z in -5i64..5) {
        prop_assert_eq!((&a * &b).eval(&z), a.eval(&z) * b.eval(&z));
        prop_assert_eq!(FixedPoly::<i64>::one().eval(&z), 1);
    }
}
