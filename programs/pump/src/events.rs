use anchor_lang::prelude::*;

#[event]
pub struct ConfigUpdateEvent {
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub team_wallet: Pubkey,
    pub curve_limit: u64,
    pub initial_virtual_token_reserves: u64,
    pub initial_virtual_sol_reserves: u64,
    pub initial_real_token_reserves: u64,
    pub total_token_supply: u64,
    pub token_decimals: u8,
    pub init_bonding_curve: u8,
    pub buy_fee_percent: f64,
    pub sell_fee_percent: f64,
    pub migration_fee_percent: f64,
    pub version: u8,
}

#[event]
pub struct AuthorityEvent {
    pub authority: Pubkey,
    pub pending_authority: Pubkey,
}

#[event]
pub struct PauseEvent {
    pub paused: bool,
    pub pause_launch: bool,
    pub pause_swap: bool,
    pub is_completed: bool,
}

#[event]
pub struct CreateEvent {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
    pub real_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub token_total_supply: u64,
    pub curve_allocation: u64,
    pub team_allocation: u64,
}

#[event]
pub struct TradeEvent {
    pub mint: Pubkey,
    pub user: Pubkey,
    pub is_buy: bool,
    pub amount_in: u64,
    pub amount_out: u64,
    pub fee: u64,
    pub timestamp: i64,
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
    pub real_sol_reserves: u64,
    pub real_token_reserves: u64,
}

#[event]
pub struct CompleteEvent {
    pub user: Pubkey,
    pub mint: Pubkey,
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
    pub real_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub timestamp: i64,
}

#[event]
pub struct MigrateEvent {
    pub mint: Pubkey,
    pub amm_program: Pubkey,
    pub pool_authority: Pubkey,
    pub sol_amount: u64,
    pub token_amount: u64,
    pub fee_lamports: u64,
    pub timestamp: i64,
}

#[event]
pub struct ReservesReleasedEvent {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub lamports_sent: u64,
    pub tokens_sent: u64,
}

pub trait IntoEvent<T: anchor_lang::Event> {
    fn into_event(&self) -> T;
}
