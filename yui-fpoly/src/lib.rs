mod abst;
mod ext;
mod types;
mod misc;

pub use abst::*;
pub use types::*;
pub use misc::*;

pub mod util;

#[cfg(test)]
mod proptests;
