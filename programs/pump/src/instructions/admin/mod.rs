pub mod configure;
pub mod pause;
pub mod set_admin;

pub use configure::*;
pub use pause::*;
pub use set_admin::*;
