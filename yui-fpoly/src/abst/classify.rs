/// Absolute tolerance for "zero", relative tolerance for "one", 
/// applied to floating-point components.
pub const TOLERANCE: f64 = 1e-11;

/// Predicates used when rendering coefficients. 
/// 
/// For exact types these are literal comparisons. For floats, values 
/// within `TOLERANCE` are classified as zero (resp. one), and non-normal 
/// values (zero, subnormal, NaN, ±∞) count as zero.
pub trait Classify { 
    fn is_zero_like(&self) -> bool;
    fn is_one_like(&self) -> bool;
    fn is_negative_like(&self) -> bool;
}

/// max(|a - b| / |a|, |a - b| / |b|), with non-finite inputs 
/// infinitely far apart.
pub fn relative_difference(a: f64, b: f64) -> f64 { 
    if !a.is_finite() || !b.is_finite() { 
        return f64::MAX
    }
    let d = (a - b).abs();
    let m = a.abs().min(b.abs()).max(f64::MIN_POSITIVE);
    d / m
}

// Composite values (complex, quaternion, octonion, ...) are classified 
// through their real components.

pub fn composite_is_zero<T>(parts: &[T]) -> bool
where T: Classify {
    parts.iter().all(|v| v.is_zero_like())
}

pub fn composite_is_one<T>(parts: &[T]) -> bool
where T: Classify {
    match parts.split_first() { 
        Some((re, rest)) => re.is_one_like() && composite_is_zero(rest),
        None => false
    }
}

/// Negative iff the first nonzero component is negative and negative 
/// components are at least as many as positive ones. 
/// 
/// This is a rendering convention, not an order.
pub fn composite_is_negative<T>(parts: &[T]) -> bool
where T: Classify {
    let Some(first) = parts.iter().find(|v| !v.is_zero_like()) else { 
        return false
    };

    if !first.is_negative_like() { 
        return false
    }

    let neg = parts.iter().filter(|v| v.is_negative_like()).count();
    let pos = parts.iter().filter(|v| !v.is_zero_like() && !v.is_negative_like()).count();

    neg >= pos
}
