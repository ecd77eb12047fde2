use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{
    errors::ContractError,
    state::{bonding_curve::*, config::*},
};

/// Read-only accounts for quoting a swap against the current reserves.
#[derive(Accounts)]
pub struct SimulateSwap<'info> {
    #[account(
        seeds = [Config::SEED_PREFIX.as_bytes()],
        constraint = global_config.is_initialized() @ ContractError::NotInitialized,
        bump,
    )]
    global_config: Box<Account<'info, Config>>,

    token_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [BondingCurve::SEED_PREFIX.as_bytes(), token_mint.to_account_info().key.as_ref()],
        bump,
    )]
    bonding_curve: Box<Account<'info, BondingCurve>>,
}

impl SimulateSwap<'_> {
    pub fn handler(ctx: Context<SimulateSwap>, amount: u64, direction: u8) -> Result<u64> {
        let direction = SwapDirection::try_from(direction)?;
        let quote = ctx
            .accounts
            .bonding_curve
            .quote(&ctx.accounts.global_config, amount, direction)?;
        msg!("SimulateSwap: {:?}", quote);
        Ok(quote.amount_out)
    }
}
