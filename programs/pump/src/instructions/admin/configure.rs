use crate::{
    events::{ConfigUpdateEvent, IntoEvent},
    state::config::*,
};
use anchor_lang::prelude::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: ConfigParams)]
pub struct Configure<'info> {
    #[account(mut)]
    authority: Signer<'info>,

    #[account(
        init_if_needed,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED_PREFIX.as_bytes()],
        bump,
        payer = authority,
    )]
    global_config: Box<Account<'info, Config>>,

    system_program: Program<'info, System>,
}

impl Configure<'_> {
    pub fn validate(&self, params: &ConfigParams) -> Result<()> {
        self.global_config.check_update(self.authority.key, params)
    }

    pub fn handler(ctx: Context<Configure>, params: ConfigParams) -> Result<()> {
        let signer = ctx.accounts.authority.key();
        let first_call = !ctx.accounts.global_config.is_initialized();

        let global_config = &mut ctx.accounts.global_config;
        global_config.configure(&signer, params, ctx.bumps.global_config)?;
        msg!(
            "Configure::handler: {} config, authority {}",
            if first_call { "created" } else { "replaced" },
            global_config.authority
        );

        let event: ConfigUpdateEvent = global_config.into_event();
        emit_cpi!(event);
        Ok(())
    }
}
