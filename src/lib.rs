pub mod num;
pub mod random;
pub mod util;

pub mod math {
    pub use crate::util::math::*;
}

pub use util::{Lerp, TypedMap, TypedMapError, TypedMapResult};

#[cfg(test)]
mod testing;
