use std::cmp::min;
use std::ops::{Div, Rem};
use auto_impl_ops::auto_ops;
use log::trace;

use crate::{DivCoeff, DivOps, DivAlgo, PolyError};
use super::FixedPoly;

impl<R> FixedPoly<R>
where R: DivCoeff, for<'x> &'x R: DivOps<R> {
    /// Quotient and remainder of `self` by a nonzero `rhs`. 
    /// 
    /// The algorithm is chosen by `R::Algo`: exact division over a field, 
    /// or pseudo-division over an integral domain, in which case 
    /// `lc(rhs)^(deg self - deg rhs + 1) * self == q * rhs + r`. 
    /// For monic `rhs` both give `self == q * rhs + r`.
    /// 
    /// The remainder has capacity `min(cap(self), cap(rhs))`, and 
    /// the quotient `max(cap(self) - deg(rhs), 1)`. When `rhs` has no 
    /// spare capacity (`cap(rhs) == deg(rhs) + 1`) the latter is 
    /// `max(cap(self) - cap(rhs) + 1, 1)`; otherwise it is the smallest 
    /// capacity that holds the quotient exactly.
    /// 
    /// Panics if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) { 
        let Some(n) = rhs.degree() else { 
            panic!("{}", PolyError::DivisionByZero)
        };
        self.div_rem_by(rhs, n)
    }

    pub fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self), PolyError> { 
        let n = rhs.degree().ok_or(PolyError::DivisionByZero)?;
        Ok(self.div_rem_by(rhs, n))
    }

    fn div_rem_by(&self, rhs: &Self, n: usize) -> (Self, Self) { 
        let q_cap = self.capacity().saturating_sub(n).max(1);
        let r_cap = min(self.capacity(), rhs.capacity());

        let m = match self.degree() { 
            Some(m) if m >= n => m,
            _ => return (Self::new_zero(q_cap), self.resized(r_cap))
        };

        trace!("div_rem: deg {m} by deg {n}, algo: {}", <R::Algo as DivAlgo>::NAME);

        let mut q = vec![R::zero(); q_cap];
        let mut u = self.coeffs()[..=m].to_vec();
        let v = &rhs.coeffs()[..=n];

        for k in (0 ..= m - n).rev() { 
            <R::Algo as DivAlgo>::step(&mut q, &mut u, v, n, k);
        }

        u.truncate(n);

        (Self::new(q), Self::resized_from(r_cap, u))
    }
}

#[auto_ops]
impl<R> Div<&FixedPoly<R>> for FixedPoly<R>
where R: DivCoeff, for<'x> &'x R: DivOps<R> {
    type Output = Self;
    fn div(self, rhs: &FixedPoly<R>) -> Self::Output {
        self.div_rem(rhs).0
    }
}

#[auto_ops]
impl<R> Rem<&FixedPoly<R>> for FixedPoly<R>
where R: DivCoeff, for<'x> &'x R: DivOps<R> {
    type Output = Self;
    fn rem(self, rhs: &FixedPoly<R>) -> Self::Output {
        self.div_rem(rhs).1
    }
}
