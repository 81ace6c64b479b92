mod source;
pub use source::*;

mod vector;
pub use vector::*;

mod vector2;
pub use vector2::*;

mod angle;
pub use angle::*;
