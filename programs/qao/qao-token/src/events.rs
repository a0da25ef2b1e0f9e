use anchor_lang::prelude::*;

#[event]
pub struct MintingActivated {
    pub last_mint_timestamp: i64,
}

#[event]
pub struct DailyMint {
    pub days: u64,
    pub airdrop: u64,
    pub liquidity: u64,
    pub api_reward: u64,
    pub last_mint_timestamp: i64,
}

#[event]
pub struct TreasuryMint {
    pub years: u64,
    pub amount: u64,
    pub last_treasury_mint_timestamp: i64,
}

#[event]
pub struct TreasuryUnlocked {
    pub owner_unlocked: bool,
    pub guard_unlocked: bool,
    pub unlock_opened_at: i64,
}

#[event]
pub struct TreasuryWithdrawal {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct AllowanceApproved {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardMinted {
    pub destination: Pubkey,
    pub amount: u64,
}
