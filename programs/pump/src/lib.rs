use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod guards;
pub mod instructions;
pub mod state;
pub mod util;
use instructions::*;
use state::config::{ConfigParams, PauseTarget};

declare_id!("CaCK9zpnvkdwmzbTX45k99kBFAb9zbAm1EU8YoVWTFcB");

#[program]
pub mod pump {

    use super::*;

    #[access_control(ctx.accounts.validate(&params))]
    pub fn configure(ctx: Context<Configure>, params: ConfigParams) -> Result<()> {
        Configure::handler(ctx, params)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        SetAdmin::handler(ctx, new_admin)
    }

    pub fn accept_admin(ctx: Context<AcceptAdmin>) -> Result<()> {
        AcceptAdmin::handler(ctx)
    }

    pub fn pause(ctx: Context<Pause>, target: PauseTarget) -> Result<()> {
        Pause::handler(ctx, target, true)
    }

    pub fn unpause(ctx: Context<Pause>, target: PauseTarget) -> Result<()> {
        Pause::handler(ctx, target, false)
    }

    #[access_control(ctx.accounts.validate(&params))]
    pub fn launch(ctx: Context<Launch>, params: LaunchParams) -> Result<()> {
        Launch::handler(ctx, params)
    }

    #[access_control(ctx.accounts.validate(&params))]
    pub fn swap(ctx: Context<Swap>, params: SwapParams) -> Result<u64> {
        Swap::handler(ctx, params)
    }

    pub fn simulate_swap(ctx: Context<SimulateSwap>, amount: u64, direction: u8) -> Result<u64> {
        SimulateSwap::handler(ctx, amount, direction)
    }

    #[access_control(ctx.accounts.validate(nonce))]
    pub fn migrate<'info>(
        ctx: Context<'_, '_, 'info, 'info, Migrate<'info>>,
        nonce: u8,
    ) -> Result<()> {
        Migrate::handler(ctx, nonce)
    }

    #[access_control(ctx.accounts.validate())]
    pub fn release_reserves(ctx: Context<ReleaseReserves>) -> Result<()> {
        ReleaseReserves::handler(ctx)
    }
}
