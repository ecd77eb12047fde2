use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata,
    },
    token::{Mint, Token, TokenAccount},
};

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN};
use crate::guards::ensure_can_launch;
use crate::state::bonding_curve::vault::{CurveVaultCtx, IntoCurveVaultCtx};
use crate::state::{bonding_curve::*, config::*};
use crate::{errors::ContractError, events::CreateEvent};

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct LaunchParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: LaunchParams)]
pub struct Launch<'info> {
    #[account(mut)]
    creator: Signer<'info>,

    #[account(
        seeds = [Config::SEED_PREFIX.as_bytes()],
        constraint = global_config.is_initialized() @ ContractError::NotInitialized,
        bump,
    )]
    global_config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = creator,
        mint::decimals = global_config.token_decimals,
        mint::authority = bonding_curve,
    )]
    token_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        seeds = [BondingCurve::SEED_PREFIX.as_bytes(), token_mint.to_account_info().key.as_ref()],
        bump,
        space = 8 + BondingCurve::INIT_SPACE,
    )]
    bonding_curve: Box<Account<'info, BondingCurve>>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = bonding_curve,
    )]
    curve_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: pinned to the configured team wallet
    #[account(address = global_config.team_wallet @ ContractError::InvalidTeamWallet)]
    team_wallet: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = team_wallet,
    )]
    team_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    ///CHECK: Using seed to validate metadata account
    token_metadata_account: UncheckedAccount<'info>,

    token_program: Program<'info, Token>,
    associated_token_program: Program<'info, AssociatedToken>,
    metadata_program: Program<'info, Metadata>,
    system_program: Program<'info, System>,
    rent: Sysvar<'info, Rent>,
}

impl<'info> IntoCurveVaultCtx<'info> for Launch<'info> {
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

impl Launch<'_> {
    pub fn validate(&self, params: &LaunchParams) -> Result<()> {
        ensure_can_launch(&self.global_config)?;

        let LaunchParams { name, symbol, uri } = params;
        require!(
            !name.is_empty() && name.len() <= MAX_NAME_LEN,
            ContractError::InvalidMetadata
        );
        require!(
            !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
            ContractError::InvalidMetadata
        );
        require!(uri.len() <= MAX_URI_LEN, ContractError::InvalidMetadata);
        Ok(())
    }

    pub fn handler(ctx: Context<Launch>, params: LaunchParams) -> Result<()> {
        let mint = ctx.accounts.token_mint.key();
        let creator = ctx.accounts.creator.key();
        let allocation = ctx.accounts.bonding_curve.update_from_config(
            mint,
            creator,
            &ctx.accounts.global_config,
            ctx.bumps.bonding_curve,
        )?;
        msg!("Launch::update_from_config: {:?}", allocation);

        ctx.accounts
            .initialize_meta(ctx.bumps.bonding_curve, &params)?;

        let vault = ctx
            .accounts
            .into_curve_vault_ctx(ctx.bumps.bonding_curve);
        vault.mint_tokens(
            ctx.accounts.curve_token_account.to_account_info(),
            allocation.curve_amount,
        )?;
        if allocation.team_amount > 0 {
            vault.mint_tokens(
                ctx.accounts.team_token_account.to_account_info(),
                allocation.team_amount,
            )?;
        }
        vault.revoke_mint_authority()?;

        ctx.accounts.curve_token_account.reload()?;
        ctx.accounts
            .bonding_curve
            .check_custody(vault.pool_lamports()?, ctx.accounts.curve_token_account.amount)?;

        let bonding_curve = &ctx.accounts.bonding_curve;
        emit_cpi!(CreateEvent {
            mint,
            creator,
            name: params.name,
            symbol: params.symbol,
            uri: params.uri,
            virtual_sol_reserves: bonding_curve.virtual_sol_reserves,
            virtual_token_reserves: bonding_curve.virtual_token_reserves,
            real_sol_reserves: bonding_curve.real_sol_reserves,
            real_token_reserves: bonding_curve.real_token_reserves,
            token_total_supply: bonding_curve.token_total_supply,
            curve_allocation: allocation.curve_amount,
            team_allocation: allocation.team_amount,
        });
        msg!("Launch::handler: success");
        Ok(())
    }

    fn initialize_meta(&self, bonding_curve_bump: u8, params: &LaunchParams) -> Result<()> {
        let mint_key = self.token_mint.key();
        let signer = BondingCurve::get_signer(&bonding_curve_bump, &mint_key);
        let signer_seeds: &[&[&[u8]]; 1] = &[&signer[..]];

        let mint_info = self.token_mint.to_account_info();
        let mint_authority_info = self.bonding_curve.to_account_info();
        let token_data = DataV2 {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            uri: params.uri.clone(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };
        let metadata_ctx = CpiContext::new_with_signer(
            self.metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                payer: self.creator.to_account_info(),
                mint: mint_info,
                metadata: self.token_metadata_account.to_account_info(),
                update_authority: mint_authority_info.clone(),
                mint_authority: mint_authority_info,
                system_program: self.system_program.to_account_info(),
                rent: self.rent.to_account_info(),
            },
            signer_seeds,
        );
        create_metadata_accounts_v3(metadata_ctx, token_data, false, true, None)?;
        msg!("Launch::initialize_meta: done");
        Ok(())
    }
}
