pub mod aggregate;
pub mod blend;
pub mod differential;
pub mod engine;
pub mod selection;

pub use aggregate::*;
pub use blend::*;
pub use differential::*;
pub use engine::*;
pub use selection::*;
