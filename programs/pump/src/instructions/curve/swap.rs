use anchor_lang::{prelude::*, solana_program::system_instruction};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, TransferChecked},
};

use crate::{
    errors::ContractError,
    events::*,
    guards::ensure_can_swap,
    state::{bonding_curve::*, config::*},
};

use crate::state::bonding_curve::vault::{CurveVaultCtx, IntoCurveVaultCtx};

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct SwapParams {
    pub amount: u64,
    /// 0 buys tokens with lamports, 1 sells tokens for lamports
    pub direction: u8,
    pub min_out: u64,
}

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: SwapParams)]
pub struct Swap<'info> {
    #[account(mut)]
    user: Signer<'info>,

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

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = fee_recipient,
    )]
    fee_recipient_token_account: Box<Account<'info, TokenAccount>>,

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

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user,
    )]
    user_token_account: Box<Account<'info, TokenAccount>>,

    system_program: Program<'info, System>,

    token_program: Program<'info, Token>,

    associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> IntoCurveVaultCtx<'info> for Swap<'info> {
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

impl Swap<'_> {
    pub fn validate(&self, params: &SwapParams) -> Result<()> {
        let SwapParams {
            amount,
            direction,
            min_out: _,
        } = params;

        ensure_can_swap(&self.global_config)?;
        SwapDirection::try_from(*direction)?;
        require!(*amount > 0, ContractError::ZeroAmount);
        self.bonding_curve.ensure_tradable()?;
        Ok(())
    }

    pub fn handler(ctx: Context<Swap>, params: SwapParams) -> Result<u64> {
        let SwapParams {
            amount,
            direction,
            min_out,
        } = params;
        let direction = SwapDirection::try_from(direction)?;

        msg!(
            "Swap started. Direction: {:?}, AmountIn: {}, MinOut: {}",
            direction,
            amount,
            min_out
        );

        let quote = ctx.accounts.bonding_curve.apply_swap(
            &ctx.accounts.global_config,
            amount,
            direction,
            min_out,
        )?;

        match direction {
            SwapDirection::Buy => Swap::complete_buy(&ctx, &quote)?,
            SwapDirection::Sell => Swap::complete_sell(&ctx, &quote)?,
        }

        let vault = ctx
            .accounts
            .into_curve_vault_ctx(ctx.bumps.bonding_curve);
        ctx.accounts.curve_token_account.reload()?;
        ctx.accounts
            .bonding_curve
            .check_custody(vault.pool_lamports()?, ctx.accounts.curve_token_account.amount)?;

        let bonding_curve = &ctx.accounts.bonding_curve;
        let mint = ctx.accounts.token_mint.key();
        let user = ctx.accounts.user.key();
        let timestamp = Clock::get()?.unix_timestamp;

        // Emit trade event used for indexing
        emit_cpi!(TradeEvent {
            mint,
            user,
            is_buy: direction == SwapDirection::Buy,
            amount_in: quote.amount_in,
            amount_out: quote.amount_out,
            fee: quote.fee,
            timestamp,
            virtual_sol_reserves: bonding_curve.virtual_sol_reserves,
            virtual_token_reserves: bonding_curve.virtual_token_reserves,
            real_sol_reserves: bonding_curve.real_sol_reserves,
            real_token_reserves: bonding_curve.real_token_reserves,
        });

        if bonding_curve.is_completed() {
            emit_cpi!(CompleteEvent {
                user,
                mint,
                virtual_sol_reserves: bonding_curve.virtual_sol_reserves,
                virtual_token_reserves: bonding_curve.virtual_token_reserves,
                real_sol_reserves: bonding_curve.real_sol_reserves,
                real_token_reserves: bonding_curve.real_token_reserves,
                timestamp,
            });
        }

        bonding_curve.msg();
        Ok(quote.amount_out)
    }

    fn complete_buy(ctx: &Context<Swap>, quote: &SwapQuote) -> Result<()> {
        require!(
            ctx.accounts.user.lamports() >= quote.amount_in,
            ContractError::InsufficientUserSol,
        );

        ctx.accounts
            .transfer_sol_from_user(ctx.accounts.fee_recipient.to_account_info(), quote.fee)?;
        msg!("Fee transfer to fee recipient complete");

        ctx.accounts.transfer_sol_from_user(
            ctx.accounts.bonding_curve.to_account_info(),
            quote.net_amount_in,
        )?;
        msg!("SOL to bonding curve transfer complete");

        let vault = ctx
            .accounts
            .into_curve_vault_ctx(ctx.bumps.bonding_curve);
        vault.transfer_tokens(
            ctx.accounts.user_token_account.to_account_info(),
            quote.amount_out,
        )?;
        msg!("Token transfer to user complete");
        Ok(())
    }

    fn complete_sell(ctx: &Context<Swap>, quote: &SwapQuote) -> Result<()> {
        require!(
            ctx.accounts.user_token_account.amount >= quote.amount_in,
            ContractError::InsufficientUserTokens,
        );

        ctx.accounts.transfer_tokens_from_user(
            ctx.accounts.fee_recipient_token_account.to_account_info(),
            quote.fee,
        )?;
        msg!("Fee token transfer to fee recipient complete");

        ctx.accounts.transfer_tokens_from_user(
            ctx.accounts.curve_token_account.to_account_info(),
            quote.net_amount_in,
        )?;
        msg!("Token to bonding curve transfer complete");

        let vault = ctx
            .accounts
            .into_curve_vault_ctx(ctx.bumps.bonding_curve);
        vault.transfer_lamports(&ctx.accounts.user.to_account_info(), quote.amount_out)?;
        msg!("SOL to user transfer complete");
        Ok(())
    }
}

impl<'info> Swap<'info> {
    fn transfer_sol_from_user(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let transfer_instruction = system_instruction::transfer(self.user.key, to.key, amount);
        anchor_lang::solana_program::program::invoke(
            &transfer_instruction,
            &[
                self.user.to_account_info(),
                to,
                self.system_program.to_account_info(),
            ],
        )?;
        Ok(())
    }

    fn transfer_tokens_from_user(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        token::transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.user_token_account.to_account_info(),
                    mint: self.token_mint.to_account_info(),
                    to,
                    authority: self.user.to_account_info(),
                },
            ),
            amount,
            self.token_mint.decimals,
        )
    }
}
