pub mod result;
pub mod round;

pub use result::*;
pub use round::*;
