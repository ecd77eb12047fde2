use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::guards::ensure_can_release;
use crate::state::bonding_curve::vault::{CurveVaultCtx, IntoCurveVaultCtx};
use crate::state::{bonding_curve::*, config::*};
use crate::{errors::ContractError, events::ReservesReleasedEvent};

#[event_cpi]
#[derive(Accounts)]
pub struct ReleaseReserves<'info> {
    #[account(mut)]
    authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED_PREFIX.as_bytes()],
        constraint = global_config.is_initialized() @ ContractError::NotInitialized,
        bump,
    )]
    global_config: Box<Account<'info, Config>>,

    token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [BondingCurve::SEED_PREFIX.as_bytes(), token_mint.to_account_info().key.as_ref()],
        bump,
    )]
    bonding_curve: Box<Account<'info, BondingCurve>>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = bonding_curve,
    )]
    curve_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    /// CHECK: any destination the admin chooses
    recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = token_mint,
        associated_token::authority = recipient,
    )]
    recipient_token_account: Box<Account<'info, TokenAccount>>,

    token_program: Program<'info, Token>,
    associated_token_program: Program<'info, AssociatedToken>,
    system_program: Program<'info, System>,
}

impl<'info> IntoCurveVaultCtx<'info> for ReleaseReserves<'info> {
    fn into_curve_vault_ctx(&self, bonding_curve_bump: u8) -> CurveVaultCtx<'info> {
        CurveVaultCtx {
            bonding_curve_bump,
            mint: self.token_mint.to_account_info(),
            decimals: self.token_mint.decimals,
            bonding_curve: self.bonding_curve.to_account_info(),
            curve_token_account: self.curve_token_account.to_account_info(),
            token_program: self.token_program.to_account_info(),
        }
    }
}

impl ReleaseReserves<'_> {
    pub fn validate(&self) -> Result<()> {
        ensure_can_release(&self.global_config, self.authority.key)?;
        self.bonding_curve.ensure_completed()?;
        Ok(())
    }

    pub fn handler(ctx: Context<ReleaseReserves>) -> Result<()> {
        let vault = ctx
            .accounts
            .into_curve_vault_ctx(ctx.bumps.bonding_curve);
        let lamports_sent = vault.pool_lamports()?;
        let tokens_sent = ctx.accounts.curve_token_account.amount;

        ctx.accounts.bonding_curve.release()?;

        let recipient = ctx.accounts.recipient.to_account_info();
        vault.transfer_lamports(&recipient, lamports_sent)?;
        vault.transfer_tokens(
            ctx.accounts.recipient_token_account.to_account_info(),
            tokens_sent,
        )?;
        vault.close_token_account(recipient)?;
        msg!(
            "ReleaseReserves: {} lamports, {} tokens to {}",
            lamports_sent,
            tokens_sent,
            ctx.accounts.recipient.key()
        );

        emit_cpi!(ReservesReleasedEvent {
            mint: ctx.accounts.token_mint.key(),
            recipient: ctx.accounts.recipient.key(),
            lamports_sent,
            tokens_sent,
        });
        Ok(())
    }
}
