use num_complex::Complex;
use crate::{Ring, RingOps, DivOps, DivCoeff, FieldDiv, PseudoDiv, Classify};
use crate::{composite_is_zero, composite_is_one, composite_is_negative};

macro_rules! impl_complex {
    ($t:ty, $algo:ty, $symbol:expr) => {
        impl RingOps for Complex<$t> {}
        impl<'a> RingOps<Complex<$t>> for &'a Complex<$t> {}
        impl DivOps for Complex<$t> {}
        impl<'a> DivOps<Complex<$t>> for &'a Complex<$t> {}

        impl Ring for Complex<$t> {
            fn math_symbol() -> String { 
                String::from($symbol)
            }
        }

        impl DivCoeff for Complex<$t> {
            type Algo = $algo;
        }
    }
}

impl_complex!(f32, FieldDiv, "C");
impl_complex!(f64, FieldDiv, "C");
impl_complex!(i32, PseudoDiv, "Z[i]");
impl_complex!(i64, PseudoDiv, "Z[i]");

impl<T> Classify for Complex<T>
where T: Classify + Clone {
    fn is_zero_like(&self) -> bool {
        composite_is_zero(&[self.re.clone(), self.im.clone()])
    }

    fn is_one_like(&self) -> bool {
        composite_is_one(&[self.re.clone(), self.im.clone()])
    }

    fn is_negative_like(&self) -> bool {
        composite_is_negative(&[self.re.clone(), self.im.clone()])
    }
}
