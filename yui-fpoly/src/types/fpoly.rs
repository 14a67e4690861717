use std::ops::{Add, Index, IndexMut, Mul};
use delegate::delegate;
use num_traits::{One, Zero};

use crate::PolyError;

/// A univariate polynomial Σ a_i x^i with a fixed number of coefficient 
/// slots (its *capacity*). Index 0 holds the constant term.
/// 
/// The capacity never changes for a given value. Operations that need 
/// more room return a new polynomial, and conversion between capacities 
/// is always explicit (`resized`). Equality and ordering only look at 
/// coefficients up to the degree, so `{1, 0, 1}` equals `{1, 0, 1, 0, 0}`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FixedPoly<R> { 
    data: Box<[R]>
}

impl<R> FixedPoly<R> { 
    pub fn new(coeffs: Vec<R>) -> Self { 
        Self { data: coeffs.into_boxed_slice() }
    }

    pub fn capacity(&self) -> usize { 
        self.data.len()
    }

    pub fn coeffs(&self) -> &[R] { 
        &self.data
    }

    delegate! { 
        to self.data {
            pub fn get(&self, i: usize) -> Option<&R>;
            pub fn get_mut(&mut self, i: usize) -> Option<&mut R>;
            pub fn iter(&self) -> std::slice::Iter<'_, R>;
            pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, R>;
        }
    }

    pub fn set(&mut self, i: usize, r: R) -> Result<(), PolyError> { 
        let capacity = self.capacity();
        let a = self.get_mut(i).ok_or(PolyError::IndexOutOfRange { index: i, capacity })?;
        *a = r;
        Ok(())
    }

    pub fn map_coeffs<R2, F>(&self, f: F) -> FixedPoly<R2>
    where F: Fn(&R) -> R2 { 
        FixedPoly::from_iter(self.iter().map(f))
    }

    pub fn into_vec(self) -> Vec<R> { 
        self.data.into_vec()
    }
}

impl<R> FixedPoly<R>
where R: Zero + Clone { 
    pub fn new_zero(cap: usize) -> Self { 
        Self::new(vec![R::zero(); cap])
    }

    pub fn from_const(r: R) -> Self { 
        Self::new(vec![r])
    }

    /// r x^k, with capacity k + 1.
    pub fn monomial(r: R, k: usize) -> Self { 
        let mut p = Self::new_zero(k + 1);
        p.data[k] = r;
        p
    }

    /// Takes the first `cap` of `coeffs`, padding with zeros if fewer.
    pub fn resized_from<I>(cap: usize, coeffs: I) -> Self
    where I: IntoIterator<Item = R> { 
        let mut data: Vec<_> = coeffs.into_iter().take(cap).collect();
        data.resize(cap, R::zero());
        Self::new(data)
    }

    /// A copy with capacity `cap`. High-order terms beyond `cap` are dropped.
    pub fn resized(&self, cap: usize) -> Self { 
        Self::resized_from(cap, self.iter().cloned())
    }

    pub fn into_resized(self, cap: usize) -> Self { 
        if cap == self.capacity() { 
            self
        } else { 
            Self::resized_from(cap, self.into_vec())
        }
    }

    /// The index of the highest nonzero coefficient, 
    /// or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> { 
        self.iter().rposition(|a| !a.is_zero())
    }

    pub fn lead_coeff(&self) -> Option<&R> { 
        self.degree().map(|i| &self.data[i])
    }

    /// Evaluates at `z` by Horner's method.
    pub fn eval<S>(&self, z: &S) -> S
    where S: Zero + for<'x> Mul<&'x S, Output = S> + Add<Output = S>, R: Into<S> { 
        self.iter().rev().fold(S::zero(), |res, a| { 
            res * z + a.clone().into()
        })
    }
}

impl<R> FixedPoly<R>
where R: Zero + One + Clone { 
    /// The polynomial x, with capacity 2.
    pub fn variable() -> Self { 
        Self::monomial(R::one(), 1)
    }
}

impl<R> From<Vec<R>> for FixedPoly<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::new(coeffs)
    }
}

impl<R, const M: usize> From<[R; M]> for FixedPoly<R> {
    fn from(coeffs: [R; M]) -> Self {
        Self::new(Vec::from(coeffs))
    }
}

impl<R> FromIterator<R> for FixedPoly<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for FixedPoly<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<R> Index<usize> for FixedPoly<R> {
    type Output = R;

    fn index(&self, i: usize) -> &R {
        assert!(i < self.capacity(), "{}", PolyError::IndexOutOfRange { index: i, capacity: self.capacity() });
        &self.data[i]
    }
}

impl<R> IndexMut<usize> for FixedPoly<R> {
    fn index_mut(&mut self, i: usize) -> &mut R {
        assert!(i < self.capacity(), "{}", PolyError::IndexOutOfRange { index: i, capacity: self.capacity() });
        &mut self.data[i]
    }
}
