pub mod args;
pub mod error;
pub mod handicap;
pub mod logging;
pub mod model;

pub use error::HandicapError;
pub use handicap::engine::{HandicapConfig, calculate_handicap};
