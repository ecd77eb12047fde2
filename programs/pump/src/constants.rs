pub const PERCENT_DENOMINATOR: u64 = 100;

// fee rates are kept in billionths of a percent
pub const FEE_RATE_PER_PERCENT: u64 = 1_000_000_000;
pub const FEE_RATE_DENOMINATOR: u64 = PERCENT_DENOMINATOR * FEE_RATE_PER_PERCENT;

// bumped whenever the Config layout changes
pub const CONFIG_VERSION: u8 = 1;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;

pub static CREATE_POOL_IX_NAME: &str = "create_pool";
pub static POOL_AUTHORITY_SEED: &str = "pool-authority";
