use std::ops::Div;
use crate::{Ring, RingOps};

pub trait DivOps<T = Self>: 
    RingOps<T> + 
    Div<T, Output = T> + 
    for<'a> Div<&'a T, Output = T>
{}

// Coefficients admitting polynomial long division. 
// `Algo` selects the algorithm statically.

pub trait DivCoeff: 
    Ring + 
    DivOps
where 
    for<'a> &'a Self: DivOps<Self>
{
    type Algo: DivAlgo;
}

pub trait DivAlgo { 
    const NAME: &'static str;

    // One elimination step at quotient position `k`, where `n` is the
    // degree of `v` and `u` holds the working remainder.
    fn step<R>(q: &mut [R], u: &mut [R], v: &[R], n: usize, k: usize)
    where R: DivCoeff, for<'x> &'x R: DivOps<R>;

    // Coefficient-wise remainder by a scalar, satisfying a == b * (a / b) + rem(a, b).
    fn rem<R>(a: &R, b: &R) -> R
    where R: DivCoeff, for<'x> &'x R: DivOps<R>;
}

/// Division over a field.
/// 
/// Knuth, TAOCP Vol. 2, 4.6.1, Algorithm D.
pub enum FieldDiv {}

impl DivAlgo for FieldDiv { 
    const NAME: &'static str = "field";

    fn step<R>(q: &mut [R], u: &mut [R], v: &[R], n: usize, k: usize)
    where R: DivCoeff, for<'x> &'x R: DivOps<R> {
        let c = &u[n + k] / &v[n];
        for j in (k .. n + k).rev() { 
            u[j] -= &c * &v[j - k];
        }
        q[k] = c;
    }

    fn rem<R>(_a: &R, _b: &R) -> R
    where R: DivCoeff, for<'x> &'x R: DivOps<R> {
        R::zero() // no meaningful remainder in a field.
    }
}

/// Pseudo-division over an integral domain. Avoids fractions by scaling 
/// the working remainder with the divisor's leading coefficient, so that
/// lc(v)^(m - n + 1) u = q v + r.
/// 
/// Knuth, TAOCP Vol. 2, 4.6.1, Algorithm R.
pub enum PseudoDiv {}

impl DivAlgo for PseudoDiv { 
    const NAME: &'static str = "pseudo";

    fn step<R>(q: &mut [R], u: &mut [R], v: &[R], n: usize, k: usize)
    where R: DivCoeff, for<'x> &'x R: DivOps<R> {
        let a = u[n + k].clone();
        let l = &v[n];

        q[k] = &a * &num_traits::pow(l.clone(), k);

        for j in (0 .. n + k).rev() { 
            let s = l * &u[j];
            u[j] = if j < k { 
                s
            } else { 
                s - &a * &v[j - k]
            };
        }
    }

    fn rem<R>(a: &R, b: &R) -> R
    where R: DivCoeff, for<'x> &'x R: DivOps<R> {
        a - &(b * &(a / b))
    }
}
