use crate::constants::{CONFIG_VERSION, PERCENT_DENOMINATOR};
use crate::errors::ContractError;
use crate::events::{AuthorityEvent, ConfigUpdateEvent, IntoEvent, PauseEvent};
use crate::guards::ensure_admin;
use crate::state::bonding_curve::SwapDirection;
use crate::util::{bps_mul, percent_to_fee_rate};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseTarget {
    All,
    Launch,
    Swap,
    // program-wide sunset, blocks launch/swap/migrate
    Program,
}

#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Config {
    pub version: u8,

    pub authority: Pubkey,         // can configure, pause, migrate, release
    pub pending_authority: Pubkey, // nominated, must accept
    pub fee_recipient: Pubkey,
    pub team_wallet: Pubkey, // receives the pre-allocated supply at launch

    pub curve_limit: u64,
    pub initial_virtual_token_reserves: u64,
    pub initial_virtual_sol_reserves: u64,
    pub initial_real_token_reserves: u64,
    pub total_token_supply: u64,
    pub token_decimals: u8,
    pub init_bonding_curve: u8,

    pub buy_fee_percent: f64,
    pub sell_fee_percent: f64,
    pub migration_fee_percent: f64,

    pub paused: bool,
    pub pause_launch: bool,
    pub pause_swap: bool,
    pub is_completed: bool,

    pub expected_raydium_program: Pubkey,
    pub expected_meteora_program: Pubkey,

    pub bump: u8,
}

/// Full replacement payload for [`Config`]. Every field is required.
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, PartialEq)]
pub struct ConfigParams {
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub team_wallet: Pubkey,
    pub curve_limit: u64,
    pub initial_virtual_token_reserves: u64,
    pub initial_virtual_sol_reserves: u64,
    pub initial_real_token_reserves: u64,
    pub total_token_supply: u64,
    pub token_decimals: u8,
    pub init_bonding_curve: u8,
    pub buy_fee_percent: f64,
    pub sell_fee_percent: f64,
    pub migration_fee_percent: f64,
    pub paused: bool,
    pub pause_launch: bool,
    pub pause_swap: bool,
    pub is_completed: bool,
    pub expected_raydium_program: Pubkey,
    pub expected_meteora_program: Pubkey,
}

impl Config {
    pub const SEED_PREFIX: &'static str = "global-config";

    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }

    pub fn validate_params(params: &ConfigParams) -> Result<()> {
        require_keys_neq!(params.authority, Pubkey::default(), ContractError::InvalidConfig);
        require_keys_neq!(
            params.fee_recipient,
            Pubkey::default(),
            ContractError::InvalidFeeRecipient
        );
        require_keys_neq!(
            params.team_wallet,
            Pubkey::default(),
            ContractError::InvalidTeamWallet
        );
        require!(params.curve_limit > 0, ContractError::InvalidConfig);
        require!(params.total_token_supply > 0, ContractError::InvalidConfig);
        require!(
            params.init_bonding_curve > 0
                && params.init_bonding_curve as u64 <= PERCENT_DENOMINATOR,
            ContractError::InvalidConfig
        );

        for fee in [
            params.buy_fee_percent,
            params.sell_fee_percent,
            params.migration_fee_percent,
        ] {
            require!(
                percent_to_fee_rate(fee).is_some(),
                ContractError::InvalidFeePercent
            );
        }

        let (curve_amount, _) =
            Self::split_supply(params.total_token_supply, params.init_bonding_curve)?;
        require!(curve_amount > 0, ContractError::InvalidConfig);
        require_gte!(
            curve_amount,
            params.initial_real_token_reserves,
            ContractError::InvalidConfig
        );
        Ok(())
    }

    /// Checks the signer before the payload once the record exists.
    pub fn check_update(&self, signer: &Pubkey, params: &ConfigParams) -> Result<()> {
        if self.is_initialized() {
            ensure_admin(self, signer)?;
            require_keys_eq!(
                params.authority,
                self.authority,
                ContractError::AuthorityChangeNotAllowed
            );
        }
        Self::validate_params(params)
    }

    /// Creates the record on first use, otherwise replaces it as the current authority.
    pub fn configure(&mut self, signer: &Pubkey, params: ConfigParams, bump: u8) -> Result<()> {
        self.check_update(signer, &params)?;
        let pending_authority = if self.is_initialized() {
            self.pending_authority
        } else {
            Pubkey::default()
        };

        self.clone_from(&Config {
            version: CONFIG_VERSION,
            authority: params.authority,
            pending_authority,
            fee_recipient: params.fee_recipient,
            team_wallet: params.team_wallet,
            curve_limit: params.curve_limit,
            initial_virtual_token_reserves: params.initial_virtual_token_reserves,
            initial_virtual_sol_reserves: params.initial_virtual_sol_reserves,
            initial_real_token_reserves: params.initial_real_token_reserves,
            total_token_supply: params.total_token_supply,
            token_decimals: params.token_decimals,
            init_bonding_curve: params.init_bonding_curve,
            buy_fee_percent: params.buy_fee_percent,
            sell_fee_percent: params.sell_fee_percent,
            migration_fee_percent: params.migration_fee_percent,
            paused: params.paused,
            pause_launch: params.pause_launch,
            pause_swap: params.pause_swap,
            is_completed: params.is_completed,
            expected_raydium_program: params.expected_raydium_program,
            expected_meteora_program: params.expected_meteora_program,
            bump,
        });
        Ok(())
    }

    pub fn nominate_authority(&mut self, signer: &Pubkey, new_authority: Pubkey) -> Result<()> {
        ensure_admin(self, signer)?;
        // nominating the default key cancels a pending handoff
        self.pending_authority = new_authority;
        Ok(())
    }

    pub fn accept_authority(&mut self, signer: &Pubkey) -> Result<()> {
        require_keys_neq!(
            self.pending_authority,
            Pubkey::default(),
            ContractError::NoPendingAuthority
        );
        require_keys_eq!(self.pending_authority, *signer, ContractError::NotAuthorized);
        self.authority = self.pending_authority;
        self.pending_authority = Pubkey::default();
        Ok(())
    }

    pub fn set_pause(&mut self, signer: &Pubkey, target: PauseTarget, paused: bool) -> Result<()> {
        ensure_admin(self, signer)?;
        match target {
            PauseTarget::All => self.paused = paused,
            PauseTarget::Launch => self.pause_launch = paused,
            PauseTarget::Swap => self.pause_swap = paused,
            PauseTarget::Program => self.is_completed = paused,
        }
        Ok(())
    }

    /// Fee rate in billionths of a percent for one trade direction.
    pub fn fee_rate(&self, direction: SwapDirection) -> Result<u64> {
        let percent = match direction {
            SwapDirection::Buy => self.buy_fee_percent,
            SwapDirection::Sell => self.sell_fee_percent,
        };
        percent_to_fee_rate(percent).ok_or_else(|| ContractError::InvalidFeePercent.into())
    }

    pub fn migration_fee_rate(&self) -> Result<u64> {
        percent_to_fee_rate(self.migration_fee_percent)
            .ok_or_else(|| ContractError::InvalidFeePercent.into())
    }

    /// `(curve_amount, team_amount)` for a supply split at `init_bonding_curve` percent.
    pub fn split_supply(total_supply: u64, init_bonding_curve: u8) -> Result<(u64, u64)> {
        let curve_amount = bps_mul(init_bonding_curve as u64, total_supply, PERCENT_DENOMINATOR)
            .ok_or(ContractError::ArithmeticError)?;
        let team_amount = total_supply
            .checked_sub(curve_amount)
            .ok_or(ContractError::ArithmeticError)?;
        Ok((curve_amount, team_amount))
    }

    pub fn supply_allocation(&self) -> Result<(u64, u64)> {
        Self::split_supply(self.total_token_supply, self.init_bonding_curve)
    }

    /// Tokens the curve may sell; zero in config means the whole curve allocation.
    pub fn tradable_token_reserves(&self, curve_amount: u64) -> u64 {
        if self.initial_real_token_reserves == 0 {
            curve_amount
        } else {
            self.initial_real_token_reserves.min(curve_amount)
        }
    }

    pub fn is_whitelisted_amm(&self, program_id: &Pubkey) -> bool {
        *program_id != Pubkey::default()
            && (*program_id == self.expected_raydium_program
                || *program_id == self.expected_meteora_program)
    }
}

impl IntoEvent<ConfigUpdateEvent> for Config {
    fn into_event(&self) -> ConfigUpdateEvent {
        ConfigUpdateEvent {
            authority: self.authority,
            fee_recipient: self.fee_recipient,
            team_wallet: self.team_wallet,
            curve_limit: self.curve_limit,
            initial_virtual_token_reserves: self.initial_virtual_token_reserves,
            initial_virtual_sol_reserves: self.initial_virtual_sol_reserves,
            initial_real_token_reserves: self.initial_real_token_reserves,
            total_token_supply: self.total_token_supply,
            token_decimals: self.token_decimals,
            init_bonding_curve: self.init_bonding_curve,
            buy_fee_percent: self.buy_fee_percent,
            sell_fee_percent: self.sell_fee_percent,
            migration_fee_percent: self.migration_fee_percent,
            version: self.version,
        }
    }
}

impl IntoEvent<AuthorityEvent> for Config {
    fn into_event(&self) -> AuthorityEvent {
        AuthorityEvent {
            authority: self.authority,
            pending_authority: self.pending_authority,
        }
    }
}

impl IntoEvent<PauseEvent> for Config {
    fn into_event(&self) -> PauseEvent {
        PauseEvent {
            paused: self.paused,
            pause_launch: self.pause_launch,
            pause_swap: self.pause_swap,
            is_completed: self.is_completed,
        }
    }
}
