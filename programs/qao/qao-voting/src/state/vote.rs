// Vote State

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::VoteRules};

#[account]
#[derive(InitSpace)]
pub struct Vote {
    pub id: u64,
    pub creator: Pubkey,
    pub creation_timestamp: i64,
    pub end_timestamp: i64,       // 0 while active
    pub positive_weight: u128,
    pub negative_weight: u128,
    pub is_active: bool,
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub total_staked: u64,        // Mirrors the vault balance
    pub attendance_count: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Vote {
    pub fn assert_active(&self) -> Result<()> {
        require!(self.is_active, VotingError::VoteNotActive);
        Ok(())
    }

    pub fn total_weight(&self) -> Result<u128> {
        self.positive_weight
            .checked_add(self.negative_weight)
            .ok_or(VotingError::Overflow.into())
    }

    pub fn add_stake(&mut self, staked: u64, weight: u128, support: bool) -> Result<()> {
        if support {
            self.positive_weight = self
                .positive_weight
                .checked_add(weight)
                .ok_or(VotingError::Overflow)?;
        } else {
            self.negative_weight = self
                .negative_weight
                .checked_add(weight)
                .ok_or(VotingError::Overflow)?;
        }

        self.total_staked = self
            .total_staked
            .checked_add(staked)
            .ok_or(VotingError::Overflow)?;
        self.attendance_count = self
            .attendance_count
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;
        Ok(())
    }

    pub fn release_stake(&mut self, staked: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(staked)
            .ok_or(VotingError::Underflow)?;
        Ok(())
    }

    // Closes once the minimum duration has passed and enough weight is in.
    // Returns true only on the transition.
    pub fn try_close(&mut self, now: i64, rules: &VoteRules) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }

        let matured = now >= self.creation_timestamp.saturating_add(rules.min_vote_duration);
        if !matured || self.total_weight()? < rules.close_weight_threshold {
            return Ok(false);
        }

        self.is_active = false;
        self.end_timestamp = now;
        Ok(true)
    }
}
