mod bounds;
pub mod depth_limited;
mod options;
mod selection;
#[cfg(test)]
mod tree_game;
pub mod unbounded;
mod value_search;

pub use bounds::*;
pub use options::*;
pub use selection::*;
pub use value_search::*;
