pub mod launch;
pub mod simulate_swap;
pub mod swap;

pub use launch::*;
pub use simulate_swap::*;
pub use swap::*;
