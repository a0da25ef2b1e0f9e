use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    // Authorization errors
    #[msg("Signer is not allowed to perform this action")]
    NotAuthorized,

    #[msg("Signer is not the registered voting engine")]
    UnauthorizedVotingEngine,

    #[msg("Treasury guard must be set and differ from the admin")]
    InvalidTreasuryGuard,

    // Minting errors
    #[msg("Minting is already active")]
    MintingAlreadyActive,

    #[msg("Airdrop, liquidity and api reward pools must be set before activation")]
    PoolsNotConfigured,

    #[msg("Pool account does not match the configured pool")]
    InvalidPoolAccount,

    #[msg("Share must not exceed 100%")]
    InvalidShare,

    #[msg("Distribution shares exceed 100% while strict shares are enabled")]
    SharesExceedTotal,

    #[msg("Distribution shares must sum to exactly 100% while strict shares are enabled")]
    SharesNotComplete,

    #[msg("Mint multiplier exceeds the allowed maximum")]
    InvalidMultiplier,

    // Treasury errors
    #[msg("Treasury is locked: both owner and guard must unlock")]
    TreasuryLocked,

    #[msg("Treasury has already been unlocked by this role")]
    TreasuryAlreadyUnlocked,

    #[msg("Treasury unlock window has expired")]
    TreasuryUnlockExpired,

    #[msg("Insufficient treasury balance")]
    InsufficientTreasuryBalance,

    // Ledger errors
    #[msg("Recipient cannot be the null address")]
    InvalidRecipient,

    #[msg("Allowance cannot be decreased below zero")]
    AllowanceUnderflow,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,
}
