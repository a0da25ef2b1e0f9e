// Vote Rules
//
// Costs, fees and closing thresholds applied by the engine.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct VoteRules {
    pub creation_cost: u64,
    pub creation_burn_bps: u64,
    pub creation_reward_bps: u64,
    pub creator_lock_weeks: u16,
    pub participation_burn_bps: u64,
    pub participation_reward_bps: u64,
    pub creator_reward_boost_bps: u64,
    pub close_weight_threshold: u128,
    pub min_vote_duration: i64,
    pub max_lock_weeks: u16,
}

impl Default for VoteRules {
    fn default() -> Self {
        Self {
            creation_cost: DEFAULT_CREATION_COST,
            creation_burn_bps: DEFAULT_CREATION_BURN_BPS,
            creation_reward_bps: DEFAULT_CREATION_REWARD_BPS,
            creator_lock_weeks: DEFAULT_CREATOR_LOCK_WEEKS,
            participation_burn_bps: 0,
            participation_reward_bps: 0,
            creator_reward_boost_bps: DEFAULT_CREATOR_REWARD_BOOST_BPS,
            close_weight_threshold: DEFAULT_CLOSE_WEIGHT_THRESHOLD,
            min_vote_duration: DEFAULT_MIN_VOTE_DURATION,
            max_lock_weeks: DEFAULT_MAX_LOCK_WEEKS,
        }
    }
}

// An amount split into burned, rewarded and staked parts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub burn: u64,
    pub reward: u64,
    pub stake: u64,
}

fn bps_of(amount: u64, bps: u64) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(VotingError::Overflow)?
        / ONE_HUNDRED_PERCENT as u128;
    u64::try_from(value).map_err(|_| VotingError::Overflow.into())
}

pub fn split_fees(amount: u64, burn_bps: u64, reward_bps: u64) -> Result<FeeSplit> {
    let burn = bps_of(amount, burn_bps)?;
    let reward = bps_of(amount, reward_bps)?;
    let stake = amount
        .checked_sub(burn)
        .and_then(|rest| rest.checked_sub(reward))
        .ok_or(VotingError::Underflow)?;

    Ok(FeeSplit {
        burn,
        reward,
        stake,
    })
}

impl VoteRules {
    pub fn validate(&self) -> Result<()> {
        require!(self.creation_cost > 0, VotingError::InvalidVoteRules);
        require!(
            self.creation_burn_bps.saturating_add(self.creation_reward_bps) < ONE_HUNDRED_PERCENT,
            VotingError::InvalidVoteRules
        );
        require!(
            self.participation_burn_bps
                .saturating_add(self.participation_reward_bps)
                < ONE_HUNDRED_PERCENT,
            VotingError::InvalidVoteRules
        );
        require!(
            self.creator_lock_weeks <= self.max_lock_weeks,
            VotingError::InvalidVoteRules
        );
        require!(self.min_vote_duration >= 0, VotingError::InvalidVoteRules);
        Ok(())
    }

    pub fn creation_split(&self) -> Result<FeeSplit> {
        split_fees(
            self.creation_cost,
            self.creation_burn_bps,
            self.creation_reward_bps,
        )
    }

    pub fn participation_split(&self, amount: u64) -> Result<FeeSplit> {
        split_fees(
            amount,
            self.participation_burn_bps,
            self.participation_reward_bps,
        )
    }

    pub fn assert_lock_weeks(&self, lock_weeks: u16) -> Result<()> {
        require!(
            lock_weeks <= self.max_lock_weeks,
            VotingError::InvalidLockWeeks
        );
        Ok(())
    }
}
