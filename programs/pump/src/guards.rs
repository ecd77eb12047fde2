use anchor_lang::prelude::*;

use crate::{
    errors::ContractError,
    state::{amm::pool_authority_address, config::Config},
};

pub fn ensure_initialized(config: &Config) -> Result<()> {
    require!(config.is_initialized(), ContractError::NotInitialized);
    Ok(())
}

pub fn ensure_not_paused(config: &Config) -> Result<()> {
    require!(!config.paused, ContractError::ProgramPaused);
    Ok(())
}

pub fn ensure_not_completed(config: &Config) -> Result<()> {
    require!(!config.is_completed, ContractError::ProgramCompleted);
    Ok(())
}

pub fn ensure_admin(config: &Config, admin_key: &Pubkey) -> Result<()> {
    require_keys_eq!(config.authority, *admin_key, ContractError::NotAuthorized);
    Ok(())
}

pub fn ensure_can_launch(config: &Config) -> Result<()> {
    ensure_initialized(config)?;
    ensure_not_paused(config)?;
    ensure_not_completed(config)?;
    require!(!config.pause_launch, ContractError::LaunchPaused);
    Ok(())
}

pub fn ensure_can_swap(config: &Config) -> Result<()> {
    ensure_initialized(config)?;
    ensure_not_paused(config)?;
    ensure_not_completed(config)?;
    require!(!config.pause_swap, ContractError::SwapPaused);
    Ok(())
}

pub fn ensure_can_migrate(config: &Config, admin_key: &Pubkey) -> Result<()> {
    ensure_initialized(config)?;
    ensure_admin(config, admin_key)?;
    ensure_not_paused(config)?;
    ensure_not_completed(config)?;
    Ok(())
}

/// Release is the emergency path: admin only, kill-switches do not apply.
pub fn ensure_can_release(config: &Config, admin_key: &Pubkey) -> Result<()> {
    ensure_initialized(config)?;
    ensure_admin(config, admin_key)?;
    Ok(())
}

/// Migrated reserves may only go to the adapter's `pool-authority` PDA for this mint.
pub fn ensure_pool_authority(
    amm_program: &Pubkey,
    mint: &Pubkey,
    pool_authority: &Pubkey,
) -> Result<()> {
    require_keys_eq!(
        *pool_authority,
        pool_authority_address(amm_program, mint),
        ContractError::InvalidPoolAuthority
    );
    Ok(())
}
