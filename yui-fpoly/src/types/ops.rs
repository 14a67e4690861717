use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Rem, RemAssign, Neg};
use auto_impl_ops::auto_ops;
use itertools::Itertools;
use itertools::EitherOrBoth::{Both, Left, Right};
use num_traits::{Zero, One};

use crate::{Ring, RingOps, DivCoeff, DivOps, DivAlgo, PolyError};
use super::FixedPoly;

impl<R> Neg for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        for a in self.iter_mut() { 
            *a = -&*a;
        }
        self
    }
}

impl<R> Neg for &FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = FixedPoly<R>;
    fn neg(self) -> Self::Output {
        self.map_coeffs(|a| -a)
    }
}

// Scalar ops. Addition and subtraction act on the constant term only.

macro_rules! impl_scalar_assop {
    ($trait:ident, $method:ident) => {
        impl<R> $trait<&R> for FixedPoly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            fn $method(&mut self, rhs: &R) {
                assert!(self.capacity() > 0, "cannot modify the constant term of a polynomial of capacity 0");
                self[0].$method(rhs);
            }
        }

        impl<R> $trait<R> for FixedPoly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            fn $method(&mut self, rhs: R) {
                self.$method(&rhs);
            }
        }
    };
}

impl_scalar_assop!(AddAssign, add_assign);
impl_scalar_assop!(SubAssign, sub_assign);

// On capacity 0 the binary forms return a new constant polynomial.

#[auto_ops]
impl<R> Add<&R> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn add(self, rhs: &R) -> Self::Output {
        if self.capacity() == 0 { 
            return Self::from_const(rhs.clone())
        }
        let mut res = self;
        res += rhs;
        res
    }
}

#[auto_ops]
impl<R> Sub<&R> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn sub(self, rhs: &R) -> Self::Output {
        if self.capacity() == 0 { 
            return Self::from_const(-rhs)
        }
        let mut res = self;
        res -= rhs;
        res
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        for a in self.iter_mut() { 
            *a *= rhs;
        }
    }
}

#[auto_ops]
impl<R> DivAssign<&R> for FixedPoly<R>
where R: DivCoeff, for<'x> &'x R: DivOps<R> {
    fn div_assign(&mut self, rhs: &R) {
        for a in self.iter_mut() { 
            *a = &*a / rhs;
        }
    }
}

// For integral R this keeps p == r * (p / r) + (p % r) coefficient-wise.
// Over a field every coefficient becomes zero.
#[auto_ops]
impl<R> RemAssign<&R> for FixedPoly<R>
where R: DivCoeff, for<'x> &'x R: DivOps<R> {
    fn rem_assign(&mut self, rhs: &R) {
        for a in self.iter_mut() { 
            *a = <R::Algo as DivAlgo>::rem(&*a, rhs);
        }
    }
}

// Polynomial ops. Sums have the larger of the two capacities.

#[auto_ops]
impl<R> Add<&FixedPoly<R>> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn add(self, rhs: &FixedPoly<R>) -> Self::Output {
        self.into_iter().zip_longest(rhs.iter()).map(|e| match e { 
            Both(a, b) => a + b,
            Left(a) => a,
            Right(b) => b.clone()
        }).collect()
    }
}

#[auto_ops]
impl<R> Sub<&FixedPoly<R>> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn sub(self, rhs: &FixedPoly<R>) -> Self::Output {
        self.into_iter().zip_longest(rhs.iter()).map(|e| match e { 
            Both(a, b) => a - b,
            Left(a) => a,
            Right(b) => -b
        }).collect()
    }
}

/// The full product. Its capacity is `cap(a) + cap(b) - 1`, 
/// enough for every possible product of the two shapes.
#[auto_ops]
impl<R> Mul<&FixedPoly<R>> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn mul(self, rhs: &FixedPoly<R>) -> Self::Output {
        let cap = (self.capacity() + rhs.capacity()).saturating_sub(1);
        self.mul_within(rhs, cap)
    }
}

// In-place forms keep the capacity of the left operand, 
// and require that the result fits in it.

fn check_fits(required: Option<usize>, capacity: usize) { 
    if let Some(d) = required { 
        assert!(d < capacity, "{}", PolyError::InsufficientCapacity { required: d + 1, capacity });
    }
}

macro_rules! impl_poly_assop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<R> $trait<&FixedPoly<R>> for FixedPoly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            fn $method(&mut self, rhs: &FixedPoly<R>) {
                check_fits(rhs.degree(), self.capacity());
                for (a, b) in self.iter_mut().zip(rhs.iter()) { 
                    *a $op b;
                }
            }
        }

        impl<R> $trait<FixedPoly<R>> for FixedPoly<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            fn $method(&mut self, rhs: FixedPoly<R>) {
                self.$method(&rhs);
            }
        }
    };
}

impl_poly_assop!(AddAssign, add_assign, +=);
impl_poly_assop!(SubAssign, sub_assign, -=);

impl<R> MulAssign<&FixedPoly<R>> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &FixedPoly<R>) {
        let d = self.degree().zip(rhs.degree()).map(|(i, j)| i + j);
        check_fits(d, self.capacity());
        *self = self.mul_within(rhs, self.capacity());
    }
}

impl<R> MulAssign<FixedPoly<R>> for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: FixedPoly<R>) {
        *self *= &rhs;
    }
}

impl<R> FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// The product truncated to capacity `cap`. 
    /// 
    /// The caller guarantees the headroom: no term of the true product 
    /// has degree `>= cap`. Terms beyond `cap` are silently dropped.
    pub fn mul_within(&self, rhs: &Self, cap: usize) -> Self { 
        let mut res = Self::new_zero(cap);

        let (Some(m), Some(n)) = (self.degree(), rhs.degree()) else { 
            return res
        };

        for (i, a) in self.iter().take(m + 1).enumerate() {
            if a.is_zero() { continue }
            for (j, b) in rhs.iter().take(n + 1).enumerate() {
                if i + j >= cap { break }
                res[i + j] += a * b;
            }
        }

        res
    }
}

impl<R> Zero for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Self::new(vec![])
    }

    fn is_zero(&self) -> bool {
        self.degree().is_none()
    }
}

impl<R> One for FixedPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn one() -> Self {
        Self::from_const(R::one())
    }
}

// Scalar on the left, for primitive coefficients.

macro_rules! impl_scalar_lhs {
    ($t:ty) => {
        impl Add<FixedPoly<$t>> for $t {
            type Output = FixedPoly<$t>;
            fn add(self, rhs: FixedPoly<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<FixedPoly<$t>> for $t {
            type Output = FixedPoly<$t>;
            fn sub(self, rhs: FixedPoly<$t>) -> Self::Output {
                -rhs + self
            }
        }

        impl Mul<FixedPoly<$t>> for $t {
            type Output = FixedPoly<$t>;
            fn mul(self, rhs: FixedPoly<$t>) -> Self::Output {
                rhs * self
            }
        }
    };
}

impl_scalar_lhs!(i8);
impl_scalar_lhs!(i16);
impl_scalar_lhs!(i32);
impl_scalar_lhs!(i64);
impl_scalar_lhs!(i128);
impl_scalar_lhs!(isize);
impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    type P = FixedPoly<i32>;

    #[test]
    fn neg() { 
        let f = P::from([2, 3, -4]);
        assert_eq!((-&f).coeffs(), &[-2, -3, 4]);
        assert_eq!((-f).coeffs(), &[-2, -3, 4]);
    }

    #[test]
    fn add_scalar() { 
        let f = P::from([2, 3]);
        assert_eq!((&f + 5).coeffs(), &[7, 3]);
        assert_eq!((&f - 5).coeffs(), &[-3, 3]);
        assert_eq!((5_i32 + f.clone()).coeffs(), &[7, 3]);
        assert_eq!((5_i32 - f).coeffs(), &[3, -3]);
    }

    #[test]
    fn add_scalar_cap0() { 
        let z = P::zero();
        let f = &z + 3;
        assert_eq!(f.capacity(), 1);
        assert_eq!(f.coeffs(), &[3]);

        let f = z - 3;
        assert_eq!(f.coeffs(), &[-3]);

        let f = 1_i32 - P::zero();
        assert_eq!(f.coeffs(), &[1]);
    }

    #[test]
    #[should_panic]
    fn add_assign_scalar_cap0() { 
        let mut z = P::zero();
        z += 1;
    }

    #[test]
    fn mul_scalar() { 
        let f = P::from([2, 3, -4]);
        assert_eq!((&f * 3).coeffs(), &[6, 9, -12]);
        assert_eq!((3_i32 * f.clone()).coeffs(), &[6, 9, -12]);

        let g = f * 0;
        assert_eq!(g.capacity(), 3);
        assert_eq!(g.degree(), None);
    }

    #[test]
    fn div_scalar() { 
        let f = FixedPoly::<f64>::from([2.0, 3.0]);
        assert_eq!((f / 2.0).coeffs(), &[1.0, 1.5]);

        let f = P::from([5, 7, -7]);
        assert_eq!((f / 2).coeffs(), &[2, 3, -3]);
    }

    #[test]
    fn rem_scalar() { 
        let f = P::from([5, 7]);
        let r = 2;
        assert_eq!((&f % r).coeffs(), &[1, 1]);
        assert_eq!(f.clone(), (&f / r) * r + (&f % r));

        let f = P::from([-5, 7, 8]);
        assert_eq!((&f % 3).coeffs(), &[-2, 1, 2]);
        assert_eq!(f.clone(), (&f / 3) * 3 + (&f % 3));
    }

    #[test]
    fn rem_scalar_field() { 
        let f = FixedPoly::<f64>::from([5.0, 7.0]);
        let g = f % 2.0;
        assert_eq!(g.capacity(), 2);
        assert!(g.is_zero());
    }

    #[test]
    fn owned_and_borrowed_operands() { 
        let f = P::from([1, 2]);
        let g = P::from([0, -1, 3]);

        let h = &f + &g;
        assert_eq!(f.clone() + g.clone(), h);
        assert_eq!(f.clone() + &g, h);
        assert_eq!(&f + g.clone(), h);

        let h = &f - &g;
        assert_eq!(f.clone() - g.clone(), h);
        assert_eq!(f.clone() - &g, h);
        assert_eq!(&f - g.clone(), h);

        let h = &f * &g;
        assert_eq!(h.capacity(), 4);
        assert_eq!(f.clone() * g.clone(), h);
        assert_eq!(f.clone() * &g, h);
        assert_eq!(&f * g.clone(), h);

        let h = &f + &2;
        assert_eq!(h.coeffs(), &[3, 2]);
        assert_eq!(f.clone() + 2, h);
        assert_eq!(f.clone() + &2, h);
        assert_eq!(&f + 2, h);
        assert_eq!((&P::zero() - &2).coeffs(), &[-2]);
    }

    #[test]
    fn add() { 
        let f = P::from([2, 3, -4]);
        let g = P::from([-3, -3, 0, 5]);
        let h = &f + &g;
        assert_eq!(h.capacity(), 4);
        assert_eq!(h.coeffs(), &[-1, 0, -4, 5]);
        assert_eq!(g + f, h);
    }

    #[test]
    fn sub() { 
        let f = P::from([2, 3, -4]);
        let g = P::from([-3, -3, 0, 5]);
        assert_eq!((&f - &g).coeffs(), &[5, 6, -4, -5]);
        assert_eq!((&g - &f).coeffs(), &[-5, -6, 4, 5]);
    }

    #[test]
    fn mul() { 
        let f = P::from([2, 3, -4]);
        let g = P::from([-3, -3, 0, 5]);
        let h = &f * &g;
        assert_eq!(h.capacity(), 6);
        assert_eq!(h.coeffs(), &[-6, -15, 3, 22, 15, -20]);
    }

    #[test]
    fn mul_example() { 
        let f = P::from([1, 0, 1]); // x^2 + 1
        let g = P::from([-1, 1]);   // x - 1
        let h = f * g;
        assert_eq!(h.capacity(), 4);
        assert_eq!(h.coeffs(), &[-1, 1, -1, 1]);
    }

    #[test]
    fn mul_zero() { 
        let f = P::from([1, 2]);
        let z = P::new_zero(3);
        let h = &f * &z;
        assert_eq!(h.capacity(), 4);
        assert!(h.is_zero());

        let h = &f * &P::zero();
        assert_eq!(h.capacity(), 1);
        assert!(h.is_zero());
    }

    #[test]
    fn mul_within() { 
        let f = P::from([1, 1, 0, 0]); // x + 1
        let g = f.mul_within(&f, 4);
        assert_eq!(g.coeffs(), &[1, 2, 1, 0]);

        // truncates silently without headroom
        let g = f.mul_within(&g, 2);
        assert_eq!(g.coeffs(), &[1, 3]);
    }

    #[test]
    fn add_assign() { 
        let mut f = P::from([1, 2, 3]);
        f += P::from([1, 1, 0, 0, 0]);
        assert_eq!(f.coeffs(), &[2, 3, 3]);

        f -= &P::from([2]);
        assert_eq!(f.coeffs(), &[0, 3, 3]);
    }

    #[test]
    #[should_panic]
    fn add_assign_overflow() { 
        let mut f = P::from([1, 2]);
        f += P::from([0, 0, 1]);
    }

    #[test]
    fn mul_assign() { 
        let mut f = P::from([1, 1, 0]);
        f *= P::from([-1, 1]);
        assert_eq!(f.coeffs(), &[-1, 0, 1]);
    }

    #[test]
    #[should_panic]
    fn mul_assign_overflow() { 
        let mut f = P::from([1, 1]);
        f *= P::from([-1, 1]);
    }

    #[test]
    fn zero_one() { 
        assert!(P::zero().is_zero());
        assert_eq!(P::zero().capacity(), 0);
        assert!(P::new_zero(4).is_zero());
        assert!(P::one().is_one());
        assert!(P::from([1, 0, 0]).is_one());
        assert!(!P::from([1, 1]).is_one());
    }
}
