use crate::errors::ContractError;
use anchor_lang::prelude::*;

/// Lifecycle of a curve. Transitions only move forward:
/// `Presale -> Completed -> Migrated` or `Completed -> Released`.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, Debug, Default, PartialEq, Eq,
)]
pub enum CurvePhase {
    #[default]
    Presale,
    Completed,
    Migrated,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    Buy,
    Sell,
}

impl TryFrom<u8> for SwapDirection {
    type Error = anchor_lang::error::Error;

    fn try_from(direction: u8) -> Result<Self> {
        match direction {
            0 => Ok(SwapDirection::Buy),
            1 => Ok(SwapDirection::Sell),
            _ => err!(ContractError::InvalidDirection),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub net_amount_in: u64,
    pub fee: u64,
    pub amount_out: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchAllocation {
    pub curve_amount: u64,
    pub team_amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationAmounts {
    pub sol_amount: u64,
    pub fee_lamports: u64,
    pub token_amount: u64,
}

#[account]
#[derive(InitSpace, Debug, Default)]
pub struct BondingCurve {
    pub mint: Pubkey,
    pub creator: Pubkey,

    // priced only, never transferred
    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,

    // custodied by the curve PDA and its token account
    pub real_token_reserves: u64,
    pub real_sol_reserves: u64,

    pub token_total_supply: u64,
    pub phase: CurvePhase,

    pub bump: u8,
}
