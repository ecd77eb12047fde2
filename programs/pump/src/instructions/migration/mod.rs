pub mod migrate;
pub mod release_reserves;

pub use migrate::*;
pub use release_reserves::*;
