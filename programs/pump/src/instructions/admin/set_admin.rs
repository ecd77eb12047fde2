use crate::{
    errors::ContractError,
    events::{AuthorityEvent, IntoEvent},
    state::config::*,
};
use anchor_lang::prelude::*;

#[event_cpi]
#[derive(Accounts)]
pub struct SetAdmin<'info> {
    authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX.as_bytes()],
        constraint = global_config.is_initialized() @ ContractError::NotInitialized,
        bump,
    )]
    global_config: Box<Account<'info, Config>>,
}

impl SetAdmin<'_> {
    pub fn handler(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        let signer = ctx.accounts.authority.key();
        let global_config = &mut ctx.accounts.global_config;
        global_config.nominate_authority(&signer, new_admin)?;
        msg!("SetAdmin::handler: pending authority {}", new_admin);

        let event: AuthorityEvent = global_config.into_event();
        emit_cpi!(event);
        Ok(())
    }
}

#[event_cpi]
#[derive(Accounts)]
pub struct AcceptAdmin<'info> {
    new_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX.as_bytes()],
        constraint = global_config.is_initialized() @ ContractError::NotInitialized,
        bump,
    )]
    global_config: Box<Account<'info, Config>>,
}

impl AcceptAdmin<'_> {
    pub fn handler(ctx: Context<AcceptAdmin>) -> Result<()> {
        let signer = ctx.accounts.new_authority.key();
        let global_config = &mut ctx.accounts.global_config;
        global_config.accept_authority(&signer)?;
        msg!("AcceptAdmin::handler: authority is now {}", signer);

        let event: AuthorityEvent = global_config.into_event();
        emit_cpi!(event);
        Ok(())
    }
}
