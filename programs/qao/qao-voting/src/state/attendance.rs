// Attendance State
//
// One stake position per participant per vote.

use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::*,
    state::{RewardCurve, Vote},
};

#[account]
#[derive(InitSpace)]
pub struct Attendance {
    pub vote_id: u64,
    pub vote: Pubkey,
    pub participant: Pubkey,
    pub staked_amount: u64,
    pub timestamp: i64,
    pub lock_weeks: u16,
    pub side_support: bool,
    pub withdrawn: bool,
    pub is_creator: bool,
    pub bump: u8,
}

// Principal returns from the vault, reward is newly minted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub principal: u64,
    pub reward: u64,
}

impl Attendance {
    pub fn unlock_timestamp(&self) -> Result<i64> {
        (self.lock_weeks as i64)
            .checked_mul(SECONDS_PER_WEEK)
            .and_then(|lock| self.timestamp.checked_add(lock))
            .ok_or(VotingError::Overflow.into())
    }

    // Locked positions wait out their lock; unlocked ones wait for the vote to close
    pub fn assert_withdrawable(&self, vote: &Vote, now: i64) -> Result<()> {
        require!(!self.withdrawn, VotingError::AlreadyWithdrawn);

        if self.lock_weeks > 0 {
            require!(now >= self.unlock_timestamp()?, VotingError::LockNotElapsed);
        } else {
            require!(!vote.is_active, VotingError::VoteStillActive);
        }
        Ok(())
    }

    pub fn payout(&self, curve: &RewardCurve, creator_boost_bps: u64) -> Result<Payout> {
        let total = curve.weight(self.staked_amount, self.lock_weeks)?;
        let mut reward = total
            .checked_sub(self.staked_amount as u128)
            .ok_or(VotingError::Underflow)?;

        if self.is_creator {
            reward = reward
                .checked_mul(creator_boost_bps as u128)
                .ok_or(VotingError::Overflow)?
                / ONE_HUNDRED_PERCENT as u128;
        }

        Ok(Payout {
            principal: self.staked_amount,
            reward: u64::try_from(reward).map_err(|_| VotingError::Overflow)?,
        })
    }
}
