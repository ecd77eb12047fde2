use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

use crate::constants::{CREATE_POOL_IX_NAME, POOL_AUTHORITY_SEED};

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePoolArgs {
    pub nonce: u8,
    pub sol_amount: u64,
    pub token_amount: u64,
}

/// Anchor instruction discriminator: first 8 bytes of `sha256("{namespace}:{name}")`.
pub fn get_function_hash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    sighash
}

pub fn get_create_pool_ix_data(args: &CreatePoolArgs) -> Result<Vec<u8>> {
    let mut data = get_function_hash("global", CREATE_POOL_IX_NAME).to_vec();
    args.serialize(&mut data)
        .map_err(|_| anchor_lang::error::ErrorCode::InstructionDidNotSerialize)?;
    Ok(data)
}

/// Account that owns migrated liquidity: the adapter's PDA for `mint`.
pub fn pool_authority_address(amm_program: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[POOL_AUTHORITY_SEED.as_bytes(), mint.as_ref()],
        amm_program,
    )
    .0
}
