pub mod curve;
pub mod structs;
pub mod vault;

mod tests;

pub use curve::*;
pub use structs::*;
