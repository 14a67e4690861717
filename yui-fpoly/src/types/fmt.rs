use std::fmt::Display;
use cfg_if::cfg_if;

use crate::{Ring, RingOps, Classify};
use crate::misc::format::{paren_expr, superscript};
use super::FixedPoly;

impl<R> FixedPoly<R>
where R: Ring + Classify + Display, for<'x> &'x R: RingOps<R> {
    fn fmt_with<F>(&self, xpow: F) -> String
    where F: Fn(usize) -> String {
        // Zero-like terms are skipped, including leading ones.
        let Some(deg) = self.iter().rposition(|c| !c.is_zero_like()) else { 
            return "0".to_string()
        };

        if deg == 0 { 
            return self[0].to_string()
        }

        let coeff = |c: &R| -> String { 
            if c.is_one_like() { 
                String::new()
            } else if (-c).is_one_like() { 
                "-".to_string()
            } else { 
                paren_expr(c)
            }
        };

        let mut s = format!("{}{}", coeff(&self[deg]), xpow(deg));

        for k in (1..deg).rev() { 
            let c = &self[k];
            if c.is_negative_like() { 
                s += &format!(" - {}{}", coeff(&-c), xpow(k));
            } else if !c.is_zero_like() { 
                s += &format!(" + {}{}", coeff(c), xpow(k));
            }
        }

        let c = &self[0];
        if c.is_negative_like() { 
            s += &format!(" - {}", paren_expr(-c));
        } else if !c.is_zero_like() { 
            s += &format!(" + {}", paren_expr(c));
        }

        s
    }
}

impl<R> Display for FixedPoly<R>
where R: Ring + Classify + Display, for<'x> &'x R: RingOps<R> {
    /// `x^2 - 2x + 1`, or `x² - 2x + 1` with `{:#}`. 
    /// 
    /// Coefficients are classified with `Classify`, so float terms within 
    /// `TOLERANCE` of zero are not shown even when `degree()` counts them.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = if f.alternate() { 
            self.fmt_with(|k| if k == 1 { "x".into() } else { format!("x{}", superscript(k)) })
        } else { 
            self.fmt_with(|k| if k == 1 { "x".into() } else { format!("x^{k}") })
        };
        f.pad(&s)
    }
}

cfg_if! { 
    if #[cfg(feature = "tex")] {
        impl<R> FixedPoly<R>
        where R: Ring + Classify + Display, for<'x> &'x R: RingOps<R> {
            pub fn to_tex_string(&self) -> String { 
                self.fmt_with(|k| if k == 1 { "x".into() } else { format!("x^{{{k}}}") })
            }
        }
    }
}
