pub mod bits;
pub mod config;
pub mod math;

pub use bits::*;
pub use config::*;
pub use math::*;
