use anchor_lang::error_code;

#[error_code]
pub enum ContractError {
    #[msg("Curve is not completed yet")]
    CurveNotCompleted,
    #[msg("Curve is completed")]
    CurveCompleted,
    #[msg("Curve is already migrated")]
    AlreadyMigrated,
    #[msg("Curve reserves are already released")]
    ReservesAlreadyReleased,

    #[msg("Not authorized address")]
    NotAuthorized,
    #[msg("Authority can only change through set_admin and accept_admin")]
    AuthorityChangeNotAllowed,
    #[msg("No pending authority")]
    NoPendingAuthority,

    #[msg("Config is not initialized")]
    NotInitialized,
    #[msg("Invalid config")]
    InvalidConfig,
    #[msg("Fee percent must be a finite value between 0 and 100")]
    InvalidFeePercent,

    #[msg("Program is paused")]
    ProgramPaused,
    #[msg("Launch is paused")]
    LaunchPaused,
    #[msg("Swap is paused")]
    SwapPaused,
    #[msg("Program is completed")]
    ProgramCompleted,

    #[msg("Return amount is too small compared to the minimum received amount.")]
    ReturnAmountTooSmall,
    #[msg("Swap amount is 0")]
    ZeroAmount,
    #[msg("Invalid swap direction")]
    InvalidDirection,
    #[msg("Insufficient curve reserves")]
    InsufficientCurveReserves,
    #[msg("Insufficient user tokens")]
    InsufficientUserTokens,
    #[msg("Insufficient user SOL")]
    InsufficientUserSol,

    #[msg("Invalid fee recipient")]
    InvalidFeeRecipient,
    #[msg("Invalid team wallet")]
    InvalidTeamWallet,
    #[msg("AMM program is not whitelisted")]
    InvalidAmmProgram,
    #[msg("Pool authority is not derived from the AMM program")]
    InvalidPoolAuthority,
    #[msg("Invalid token metadata")]
    InvalidMetadata,

    #[msg("Bonding Curve Invariant Failed")]
    BondingCurveInvariant,
    #[msg("Arithmetic Error")]
    ArithmeticError,
}
