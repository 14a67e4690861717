use log::trace;
use num_traits::{One, Pow};

use crate::{Ring, RingOps, PolyError};
use super::FixedPoly;

impl<R> FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// `self^e` by repeated squaring. 
    /// 
    /// The result has the tight capacity `(cap - 1) * e + 1`, 
    /// so every intermediate product fits without regrowth.
    pub fn pow(&self, e: usize) -> Self { 
        let cap = (self.capacity().max(1) - 1) * e + 1;
        let mut res = Self::one().into_resized(cap);

        if e == 0 { 
            return res
        }

        trace!("pow: exponent {e}, capacity {cap}");

        let mut acc = self.resized(cap);
        let mut e = e;

        loop { 
            if e & 1 == 1 { 
                res = res.mul_within(&acc, cap);
            }
            e >>= 1;
            if e == 0 { 
                break
            }
            acc = acc.mul_within(&acc, cap);
        }

        res
    }

    pub fn try_pow(&self, e: i64) -> Result<Self, PolyError> { 
        let e = usize::try_from(e).map_err(|_| PolyError::NegativeExponent { exponent: e })?;
        Ok(self.pow(e))
    }
}

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl<R> Pow<$t> for &FixedPoly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = FixedPoly<R>;
            fn pow(self, e: $t) -> Self::Output {
                FixedPoly::pow(self, e as usize)
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(u64);
impl_pow_unsigned!(usize);

macro_rules! impl_pow_signed {
    ($t:ty) => {
        impl<R> Pow<$t> for &FixedPoly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = FixedPoly<R>;
            fn pow(self, e: $t) -> Self::Output {
                assert!(e >= 0, "{}", PolyError::NegativeExponent { exponent: e as i64 });
                FixedPoly::pow(self, e as usize)
            }
        }
    }
}

impl_pow_signed!(i32);
impl_pow_signed!(i64);
impl_pow_signed!(isize);
