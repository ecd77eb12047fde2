use crate::{
    errors::ContractError,
    events::{IntoEvent, PauseEvent},
    state::config::*,
};
use anchor_lang::prelude::*;

#[event_cpi]
#[derive(Accounts)]
pub struct Pause<'info> {
    authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX.as_bytes()],
        constraint = global_config.is_initialized() @ ContractError::NotInitialized,
        bump,
    )]
    global_config: Box<Account<'info, Config>>,
}

impl Pause<'_> {
    pub fn handler(ctx: Context<Pause>, target: PauseTarget, paused: bool) -> Result<()> {
        let signer = ctx.accounts.authority.key();
        let global_config = &mut ctx.accounts.global_config;
        global_config.set_pause(&signer, target, paused)?;
        msg!("Pause::handler: {:?} -> {}", target, paused);

        let event: PauseEvent = global_config.into_event();
        emit_cpi!(event);
        Ok(())
    }
}
