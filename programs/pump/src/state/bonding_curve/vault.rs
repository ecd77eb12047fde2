use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, CloseAccount, MintTo, SetAuthority, TransferChecked};

use crate::errors::ContractError;
use crate::state::bonding_curve::BondingCurve;

/// Everything needed to move funds out of the curve PDA and its token account.
pub struct CurveVaultCtx<'info> {
    pub bonding_curve_bump: u8,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    pub bonding_curve: AccountInfo<'info>,
    pub curve_token_account: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

impl<'info> CurveVaultCtx<'info> {
    pub fn mint_tokens(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        let mint_key = *self.mint.key;
        let signer = BondingCurve::get_signer(&self.bonding_curve_bump, &mint_key);
        let signer_seeds: &[&[&[u8]]; 1] = &[&signer[..]];

        token::mint_to(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                MintTo {
                    mint: self.mint.clone(),
                    to,
                    authority: self.bonding_curve.clone(),
                },
                signer_seeds,
            ),
            amount,
        )?;
        msg!("CurveVaultCtx::mint_tokens: {}", amount);
        Ok(())
    }

    pub fn transfer_tokens(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let mint_key = *self.mint.key;
        let signer = BondingCurve::get_signer(&self.bonding_curve_bump, &mint_key);
        let signer_seeds: &[&[&[u8]]; 1] = &[&signer[..]];

        token::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                TransferChecked {
                    from: self.curve_token_account.clone(),
                    mint: self.mint.clone(),
                    to,
                    authority: self.bonding_curve.clone(),
                },
                signer_seeds,
            ),
            amount,
            self.decimals,
        )?;
        msg!("CurveVaultCtx::transfer_tokens: {}", amount);
        Ok(())
    }

    /// Closes the (empty) curve token account, sending its rent to `destination`.
    pub fn close_token_account(&self, destination: AccountInfo<'info>) -> Result<()> {
        let mint_key = *self.mint.key;
        let signer = BondingCurve::get_signer(&self.bonding_curve_bump, &mint_key);
        let signer_seeds: &[&[&[u8]]; 1] = &[&signer[..]];

        token::close_account(CpiContext::new_with_signer(
            self.token_program.clone(),
            CloseAccount {
                account: self.curve_token_account.clone(),
                destination,
                authority: self.bonding_curve.clone(),
            },
            signer_seeds,
        ))?;
        msg!("CurveVaultCtx::close_token_account: done");
        Ok(())
    }

    /// Moves lamports out of the program-owned curve PDA.
    pub fn transfer_lamports(&self, to: &AccountInfo<'info>, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let from_balance = self.bonding_curve.lamports();
        let to_balance = to.lamports();
        **self.bonding_curve.try_borrow_mut_lamports()? = from_balance
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticError)?;
        **to.try_borrow_mut_lamports()? = to_balance
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticError)?;
        msg!("CurveVaultCtx::transfer_lamports: {}", amount);
        Ok(())
    }

    /// Lamports held by the curve PDA above its rent-exempt minimum.
    pub fn pool_lamports(&self) -> Result<u64> {
        let rent_exemption_balance =
            Rent::get()?.minimum_balance(self.bonding_curve.data_len());
        Ok(self
            .bonding_curve
            .lamports()
            .saturating_sub(rent_exemption_balance))
    }

    pub fn revoke_mint_authority(&self) -> Result<()> {
        let mint_key = *self.mint.key;
        let signer = BondingCurve::get_signer(&self.bonding_curve_bump, &mint_key);
        let signer_seeds: &[&[&[u8]]; 1] = &[&signer[..]];

        token::set_authority(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                SetAuthority {
                    current_authority: self.bonding_curve.clone(),
                    account_or_mint: self.mint.clone(),
                },
                signer_seeds,
            ),
            AuthorityType::MintTokens,
            None,
        )?;
        msg!("CurveVaultCtx::revoke_mint_authority: done");
        Ok(())
    }
}

pub trait IntoCurveVaultCtx<'info> {
    fn into_curve_vault_ctx(&self, bonding_curve_bump: u8) -> CurveVaultCtx<'info>;
}
