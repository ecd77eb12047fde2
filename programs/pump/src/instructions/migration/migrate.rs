use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke,
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::guards::{ensure_can_migrate, ensure_pool_authority};
use crate::state::amm::{get_create_pool_ix_data, CreatePoolArgs};
use crate::state::bonding_curve::vault::{CurveVaultCtx, IntoCurveVaultCtx};
use crate::state::{bonding_curve::*, config::*};
use crate::{errors::ContractError, events::MigrateEvent};

#[event_cpi]
#[derive(Accounts)]
#[instruction(nonce: u8)]
pub struct Migrate<'info> {
    #[account(mut)]
    authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED_PREFIX.as_bytes()],
        constraint = global_config.is_initialized() @ ContractError::NotInitialized,
        bump,
    )]
    global_config: Box<Account<'info, Config>>,

    #[account(
        mut,
        address = global_config.fee_recipient @ ContractError::InvalidFeeRecipient,
    )]
    /// CHECK: pinned to the configured fee recipient
    fee_recipient: UncheckedAccount<'info>,

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

    /// CHECK: checked against the AMM whitelist in `validate`
    amm_program: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: must be the adapter's `pool-authority` PDA for this mint, checked in `validate`
    pool_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = token_mint,
        associated_token::authority = pool_authority,
    )]
    pool_token_account: Box<Account<'info, TokenAccount>>,

    token_program: Program<'info, Token>,
    associated_token_program: Program<'info, AssociatedToken>,
    system_program: Program<'info, System>,
}

impl<'info> IntoCurveVaultCtx<'info> for Migrate<'info> {
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

impl<'info> Migrate<'info> {
    pub fn validate(&self, _nonce: u8) -> Result<()> {
        ensure_can_migrate(&self.global_config, self.authority.key)?;
        require!(
            self.global_config.is_whitelisted_amm(self.amm_program.key)
                && self.amm_program.executable,
            ContractError::InvalidAmmProgram
        );
        ensure_pool_authority(
            self.amm_program.key,
            &self.token_mint.key(),
            self.pool_authority.key,
        )?;
        self.bonding_curve.ensure_completed()?;
        Ok(())
    }

    pub fn handler(ctx: Context<'_, '_, 'info, 'info, Migrate<'info>>, nonce: u8) -> Result<()> {
        let vault = ctx
            .accounts
            .into_curve_vault_ctx(ctx.bumps.bonding_curve);

        let amounts = ctx.accounts.bonding_curve.migration_amounts(
            &ctx.accounts.global_config,
            vault.pool_lamports()?,
            ctx.accounts.curve_token_account.amount,
        )?;
        msg!("Migrate: {:?}", amounts);

        // phase flips before any funds leave custody
        ctx.accounts.bonding_curve.complete_migration()?;

        vault.transfer_lamports(
            &ctx.accounts.fee_recipient.to_account_info(),
            amounts.fee_lamports,
        )?;
        vault.transfer_lamports(
            &ctx.accounts.pool_authority.to_account_info(),
            amounts.sol_amount,
        )?;
        vault.transfer_tokens(
            ctx.accounts.pool_token_account.to_account_info(),
            amounts.token_amount,
        )?;
        msg!("Reserves moved to pool authority");

        ctx.accounts.invoke_create_pool(
            ctx.remaining_accounts,
            &CreatePoolArgs {
                nonce,
                sol_amount: amounts.sol_amount,
                token_amount: amounts.token_amount,
            },
        )?;

        emit_cpi!(MigrateEvent {
            mint: ctx.accounts.token_mint.key(),
            amm_program: ctx.accounts.amm_program.key(),
            pool_authority: ctx.accounts.pool_authority.key(),
            sol_amount: amounts.sol_amount,
            token_amount: amounts.token_amount,
            fee_lamports: amounts.fee_lamports,
            timestamp: Clock::get()?.unix_timestamp,
        });
        msg!("Migrate::handler: success");
        Ok(())
    }

    fn invoke_create_pool(
        &self,
        remaining_accounts: &[AccountInfo<'info>],
        args: &CreatePoolArgs,
    ) -> Result<()> {
        let mut accounts = vec![
            AccountMeta::new(self.pool_authority.key(), false),
            AccountMeta::new(self.pool_token_account.key(), false),
            AccountMeta::new_readonly(self.token_mint.key(), false),
            AccountMeta::new(self.authority.key(), true),
            AccountMeta::new_readonly(self.token_program.key(), false),
            AccountMeta::new_readonly(self.associated_token_program.key(), false),
            AccountMeta::new_readonly(self.system_program.key(), false),
        ];
        accounts.extend(remaining_accounts.iter().map(|acc| AccountMeta {
            pubkey: *acc.key,
            is_signer: acc.is_signer,
            is_writable: acc.is_writable,
        }));

        let instruction = Instruction {
            program_id: self.amm_program.key(),
            accounts,
            data: get_create_pool_ix_data(args)?,
        };

        let mut account_infos = vec![
            self.pool_authority.to_account_info(),
            self.pool_token_account.to_account_info(),
            self.token_mint.to_account_info(),
            self.authority.to_account_info(),
            self.token_program.to_account_info(),
            self.associated_token_program.to_account_info(),
            self.system_program.to_account_info(),
            self.amm_program.to_account_info(),
        ];
        account_infos.extend(remaining_accounts.iter().cloned());

        invoke(&instruction, &account_infos)?;
        msg!("Migrate::invoke_create_pool: done");
        Ok(())
    }
}
