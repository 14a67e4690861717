mod fpoly;
mod ops;
mod ord;
mod div;
mod pow;
mod fmt;

pub use fpoly::*;
