use anchor_lang::prelude::*;

#[event]
pub struct StartOfVote {
    pub vote_id: u64,
    pub creator: Pubkey,
    pub vote: Pubkey,
}

#[event]
pub struct AttendanceSubmitted {
    pub participant: Pubkey,
    pub vote_id: u64,
    pub attendance: Pubkey,
    pub staked_amount: u64,
    pub weight: u128,
    pub support: bool,
    pub lock_weeks: u16,
}

#[event]
pub struct EndOfVote {
    pub vote_id: u64,
    pub positive_weight: u128,
    pub negative_weight: u128,
    pub end_timestamp: i64,
}

#[event]
pub struct PositionWithdrawn {
    pub participant: Pubkey,
    pub vote_id: u64,
    pub principal: u64,
    pub reward: u64,
}
