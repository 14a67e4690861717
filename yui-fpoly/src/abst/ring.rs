use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};

// Rings (commutativity is not assumed)

pub trait RingOps<T = Self>: 
    Sized + 
    Add<T, Output = T> + 
    for<'a> Add<&'a T, Output = T> + 
    Sub<T, Output = T> + 
    for<'a> Sub<&'a T, Output = T> + 
    Mul<T, Output = T> + 
    for<'a> Mul<&'a T, Output = T> + 
    Neg<Output = T>
{}

pub trait Ring: 
    Clone + 
    PartialEq + 
    Debug + 
    Zero + 
    One + 
    RingOps + 
    AddAssign + 
    for<'a> AddAssign<&'a Self> + 
    SubAssign + 
    for<'a> SubAssign<&'a Self> + 
    MulAssign + 
    for<'a> MulAssign<&'a Self>
where
    for<'a> &'a Self: RingOps<Self>
{
    fn math_symbol() -> String;

    fn is_pm_one(&self) -> bool { 
        self.is_one() || (-self).is_one()
    }
}
