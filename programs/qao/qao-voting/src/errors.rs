use anchor_lang::prelude::*;

#[error_code]
pub enum VotingError {
    #[msg("Signer is not allowed to perform this action")]
    NotAuthorized,

    // Vote lifecycle
    #[msg("Title exceeds the maximum length")]
    TitleTooLong,

    #[msg("Description exceeds the maximum length")]
    DescriptionTooLong,

    #[msg("Vote is not active")]
    VoteNotActive,

    #[msg("Vote is still active")]
    VoteStillActive,

    // Positions
    #[msg("Lock weeks exceed the allowed maximum")]
    InvalidLockWeeks,

    #[msg("Lock period has not elapsed")]
    LockNotElapsed,

    #[msg("Position has already been withdrawn")]
    AlreadyWithdrawn,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Stake is fully consumed by fees")]
    StakeConsumedByFees,

    // Configuration
    #[msg("Reward curve must start at week 0 with increasing weeks and non-decreasing multipliers >= 1.0")]
    InvalidRewardCurve,

    #[msg("Vote rules are inconsistent")]
    InvalidVoteRules,

    // Arithmetic
    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,
}
