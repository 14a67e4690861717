use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use num_traits::Zero;
use super::FixedPoly;

// Equality and ordering ignore capacity: only coefficients 
// up to the degree are compared.

impl<R> FixedPoly<R>
where R: Zero + Clone {
    fn terms(&self) -> &[R] { 
        match self.degree() { 
            Some(d) => &self.coeffs()[..=d],
            None => &[]
        }
    }
}

impl<R> PartialEq for FixedPoly<R>
where R: PartialEq + Zero + Clone {
    fn eq(&self, other: &Self) -> bool {
        self.terms() == other.terms()
    }
}

impl<R> Eq for FixedPoly<R>
where R: Eq + Zero + Clone {}

/// Lower degree first, then the coefficients compared 
/// from the leading term down to the constant term.
impl<R> PartialOrd for FixedPoly<R>
where R: PartialOrd + Zero + Clone {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = (self.terms(), other.terms());
        match a.len().cmp(&b.len()) { 
            Ordering::Equal => a.iter().rev().partial_cmp(b.iter().rev()),
            c => Some(c)
        }
    }
}

impl<R> Ord for FixedPoly<R>
where R: Ord + Zero + Clone {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.terms(), other.terms());
        a.len().cmp(&b.len()).then_with(|| 
            a.iter().rev().cmp(b.iter().rev())
        )
    }
}

impl<R> Hash for FixedPoly<R>
where R: Hash + Zero + Clone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terms().hash(state)
    }
}
