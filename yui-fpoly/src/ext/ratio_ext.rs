use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};
use crate::{Ring, RingOps, DivOps, DivCoeff, FieldDiv, Classify};

macro_rules! impl_ratio {
    ($t:ty) => {
        impl RingOps for Ratio<$t> {}
        impl<'a> RingOps<Ratio<$t>> for &'a Ratio<$t> {}
        impl DivOps for Ratio<$t> {}
        impl<'a> DivOps<Ratio<$t>> for &'a Ratio<$t> {}

        impl Ring for Ratio<$t> {
            fn math_symbol() -> String { 
                String::from("Q")
            }
        }

        impl DivCoeff for Ratio<$t> {
            type Algo = FieldDiv;
        }
    }
}

impl_ratio!(i32);
impl_ratio!(i64);
impl_ratio!(BigInt);

impl<T> Classify for Ratio<T>
where T: Clone + Integer + Signed {
    fn is_zero_like(&self) -> bool {
        self.is_zero()
    }

    fn is_one_like(&self) -> bool {
        self.is_one()
    }

    fn is_negative_like(&self) -> bool {
        Signed::is_negative(self)
    }
}
