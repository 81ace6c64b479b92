mod traits;
pub use traits::*;

mod typed_map;
pub use typed_map::*;

mod arrays;
pub use arrays::*;

mod strings;
pub use strings::*;

pub mod math;

pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x <= y {
        x
    } else {
        y
    }
}

pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x >= y {
        x
    } else {
        y
    }
}
