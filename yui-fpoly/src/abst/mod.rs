mod ring;
mod div;
mod classify;

pub use ring::*;
pub use div::*;
pub use classify::*;
