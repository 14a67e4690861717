use std::fmt::Display;

// Wraps `s` in parentheses when it would not read as a single factor, 
// e.g. "1+2i" or "a - b". A leading sign is allowed.
pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    let inner = s.get(1..).unwrap_or("");
    if s.contains(' ') || inner.contains(['+', '-']) { 
        format!("({s})")
    } else { 
        s
    }
}

pub fn superscript(i: usize) -> String { 
    i.to_string().chars().map(|c| { 
        match c { 
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            _ => c.to_digit(10).and_then(|d| char::from_u32(0x2070 + d)).unwrap_or('?')
        }
    }).collect()
}
