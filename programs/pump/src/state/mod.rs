pub mod amm;
pub mod bonding_curve;
pub mod config;
