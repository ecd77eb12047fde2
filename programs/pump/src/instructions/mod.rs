pub mod admin;
pub mod curve;
pub mod migration;

pub use admin::*;
pub use curve::*;
pub use migration::*;
