use crate::constants::FEE_RATE_DENOMINATOR;
use crate::errors::ContractError;
use crate::state::bonding_curve::*;
use crate::state::config::Config;
use crate::util::{bps_mul, split_fee};
use anchor_lang::prelude::*;
use std::fmt::{self};

/// Constant-product output `reserve_out * amount_in / (reserve_in + amount_in)`, rounded down.
///
/// Equivalent to `reserve_out - reserve_in * reserve_out / (reserve_in + amount_in)` with the
/// truncation applied to the amount paid out rather than to the reserve left behind.
pub fn calculate_amount_out(reserve_in: u128, reserve_out: u128, amount_in: u128) -> Option<u128> {
    let denominator = reserve_in.checked_add(amount_in)?;
    if denominator == 0 {
        return Some(0);
    }
    reserve_out.checked_mul(amount_in)?.checked_div(denominator)
}

impl BondingCurve {
    pub const SEED_PREFIX: &'static str = "bonding-curve";

    pub fn get_signer<'a>(bump: &'a u8, mint: &'a Pubkey) -> [&'a [u8]; 3] {
        [
            Self::SEED_PREFIX.as_bytes(),
            mint.as_ref(),
            std::slice::from_ref(bump),
        ]
    }

    pub fn update_from_config(
        &mut self,
        mint: Pubkey,
        creator: Pubkey,
        config: &Config,
        bump: u8,
    ) -> Result<LaunchAllocation> {
        let (curve_amount, team_amount) = config.supply_allocation()?;
        self.clone_from(&BondingCurve {
            mint,
            creator,
            virtual_token_reserves: config.initial_virtual_token_reserves,
            virtual_sol_reserves: config.initial_virtual_sol_reserves,
            real_token_reserves: config.tradable_token_reserves(curve_amount),
            real_sol_reserves: 0,
            token_total_supply: config.total_token_supply,
            phase: CurvePhase::Presale,
            bump,
        });
        Ok(LaunchAllocation {
            curve_amount,
            team_amount,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.phase != CurvePhase::Presale
    }

    pub fn migration_completed(&self) -> bool {
        self.phase == CurvePhase::Migrated
    }

    pub fn ensure_tradable(&self) -> Result<()> {
        require!(
            self.phase == CurvePhase::Presale,
            ContractError::CurveCompleted
        );
        Ok(())
    }

    /// Passes only for a completed curve whose reserves are still in custody.
    pub fn ensure_completed(&self) -> Result<()> {
        match self.phase {
            CurvePhase::Presale => err!(ContractError::CurveNotCompleted),
            CurvePhase::Completed => Ok(()),
            CurvePhase::Migrated => err!(ContractError::AlreadyMigrated),
            CurvePhase::Released => err!(ContractError::ReservesAlreadyReleased),
        }
    }

    pub fn sol_reserves(&self) -> u128 {
        self.virtual_sol_reserves as u128 + self.real_sol_reserves as u128
    }

    pub fn token_reserves(&self) -> u128 {
        self.virtual_token_reserves as u128 + self.real_token_reserves as u128
    }

    /// Read-only price of a swap against the current reserves. `apply_swap` commits exactly this.
    pub fn quote(
        &self,
        config: &Config,
        amount_in: u64,
        direction: SwapDirection,
    ) -> Result<SwapQuote> {
        require!(amount_in > 0, ContractError::ZeroAmount);

        let fee_rate = config.fee_rate(direction)?;
        let (net_amount_in, fee) =
            split_fee(amount_in, fee_rate).ok_or(ContractError::ArithmeticError)?;

        let amount_out = match direction {
            SwapDirection::Buy => {
                let out = calculate_amount_out(
                    self.sol_reserves(),
                    self.token_reserves(),
                    net_amount_in as u128,
                )
                .ok_or(ContractError::ArithmeticError)?;
                // the filling trade takes whatever is left in custody
                out.min(self.real_token_reserves as u128)
            }
            SwapDirection::Sell => {
                let out = calculate_amount_out(
                    self.token_reserves(),
                    self.sol_reserves(),
                    net_amount_in as u128,
                )
                .ok_or(ContractError::ArithmeticError)?;
                require!(
                    out <= self.real_sol_reserves as u128,
                    ContractError::InsufficientCurveReserves
                );
                out
            }
        };
        let amount_out: u64 = amount_out
            .try_into()
            .map_err(|_| ContractError::ArithmeticError)?;

        Ok(SwapQuote {
            direction,
            amount_in,
            net_amount_in,
            fee,
            amount_out,
        })
    }

    pub fn apply_swap(
        &mut self,
        config: &Config,
        amount_in: u64,
        direction: SwapDirection,
        min_out: u64,
    ) -> Result<SwapQuote> {
        self.ensure_tradable()?;

        let quote = self.quote(config, amount_in, direction)?;
        msg!("ApplySwap: {:?}", quote);
        require_gte!(
            quote.amount_out,
            min_out,
            ContractError::ReturnAmountTooSmall
        );

        match direction {
            SwapDirection::Buy => {
                self.real_sol_reserves = self
                    .real_sol_reserves
                    .checked_add(quote.net_amount_in)
                    .ok_or(ContractError::ArithmeticError)?;
                self.real_token_reserves = self
                    .real_token_reserves
                    .checked_sub(quote.amount_out)
                    .ok_or(ContractError::ArithmeticError)?;
            }
            SwapDirection::Sell => {
                self.real_token_reserves = self
                    .real_token_reserves
                    .checked_add(quote.net_amount_in)
                    .ok_or(ContractError::ArithmeticError)?;
                self.real_sol_reserves = self
                    .real_sol_reserves
                    .checked_sub(quote.amount_out)
                    .ok_or(ContractError::ArithmeticError)?;
            }
        }

        if self.real_sol_reserves >= config.curve_limit {
            msg!(
                "ApplySwap: curve completed at {} lamports (limit {})",
                self.real_sol_reserves,
                config.curve_limit
            );
            self.phase = CurvePhase::Completed;
        }
        Ok(quote)
    }

    pub fn migration_amounts(
        &self,
        config: &Config,
        available_lamports: u64,
        token_balance: u64,
    ) -> Result<MigrationAmounts> {
        let fee_lamports = bps_mul(
            config.migration_fee_rate()?,
            available_lamports,
            FEE_RATE_DENOMINATOR,
        )
        .ok_or(ContractError::ArithmeticError)?;
        let sol_amount = available_lamports
            .checked_sub(fee_lamports)
            .ok_or(ContractError::ArithmeticError)?;
        Ok(MigrationAmounts {
            sol_amount,
            fee_lamports,
            token_amount: token_balance,
        })
    }

    pub fn complete_migration(&mut self) -> Result<()> {
        self.ensure_completed()?;
        self.phase = CurvePhase::Migrated;
        self.real_sol_reserves = 0;
        self.real_token_reserves = 0;
        Ok(())
    }

    pub fn release(&mut self) -> Result<()> {
        self.ensure_completed()?;
        self.phase = CurvePhase::Released;
        self.real_sol_reserves = 0;
        self.real_token_reserves = 0;
        Ok(())
    }

    /// Custody must always cover the accounted reserves. Donations may push it above.
    pub fn check_custody(&self, pool_lamports: u64, token_balance: u64) -> Result<()> {
        if pool_lamports < self.real_sol_reserves {
            msg!(
                "Invariant failed: pool_lamports {} < real_sol_reserves {}",
                pool_lamports,
                self.real_sol_reserves
            );
            return err!(ContractError::BondingCurveInvariant);
        }
        if token_balance < self.real_token_reserves {
            msg!(
                "Invariant failed: token_balance {} < real_token_reserves {}",
                token_balance,
                self.real_token_reserves
            );
            return err!(ContractError::BondingCurveInvariant);
        }
        Ok(())
    }

    pub fn msg(&self) {
        msg!("{}", self);
    }
}

impl fmt::Display for BondingCurve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "BondingCurve {{ mint: {:?}, creator: {:?}, virtual_sol_reserves: {:?}, virtual_token_reserves: {:?}, real_sol_reserves: {:?}, real_token_reserves: {:?}, token_total_supply: {:?}, phase: {:?} }}",
            self.mint,
            self.creator,
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
            self.real_sol_reserves,
            self.real_token_reserves,
            self.token_total_supply,
            self.phase
        )
    }
}
