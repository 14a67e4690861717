use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use crate::{Ring, RingOps, DivOps, DivCoeff, FieldDiv, PseudoDiv, Classify, TOLERANCE, relative_difference};

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_integer {
    ($type:ty) => {
        impl_ops!(RingOps, $type);
        impl_ops!(DivOps, $type);

        impl Ring for $type {
            fn math_symbol() -> String { 
                String::from("Z")
            }
        }

        impl DivCoeff for $type {
            type Algo = PseudoDiv;
        }

        impl Classify for $type { 
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
    }
}

impl_integer!(i8);
impl_integer!(i16);
impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(isize);
impl_integer!(BigInt);

macro_rules! impl_float {
    ($type:ty) => {
        impl_ops!(RingOps, $type);
        impl_ops!(DivOps, $type);

        impl Ring for $type {
            fn math_symbol() -> String { 
                String::from("R")
            }
        }

        impl DivCoeff for $type {
            type Algo = FieldDiv;
        }

        impl Classify for $type { 
            fn is_zero_like(&self) -> bool {
                !self.is_normal() || (*self as f64).abs() < TOLERANCE
            }

            fn is_one_like(&self) -> bool {
                relative_difference(1.0, *self as f64) < TOLERANCE
            }

            fn is_negative_like(&self) -> bool {
                *self < 0.0 && !self.is_zero_like()
            }
        }
    }
}

impl_float!(f32);
impl_float!(f64);
