use anchor_lang::prelude::*;

use crate::state::{RewardCurve, VoteRules};

// Singleton engine state; its PDA is the registered voting engine
#[account]
#[derive(InitSpace)]
pub struct EngineConfig {
    pub admin: Pubkey,
    pub token_config: Pubkey,   // qao-token config PDA
    pub mint: Pubkey,
    pub reward_pool: Pubkey,    // Receives the reward share of fees
    pub burn_vault: Pubkey,     // Receives the burn share of fees
    pub vote_count: u64,        // Next vote id
    pub rules: VoteRules,
    pub reward_curve: RewardCurve,
    pub bump: u8,
}
