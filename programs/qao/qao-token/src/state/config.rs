// Token Configuration State
//
// Holds the roles, distribution parameters, minting clocks and the
// dual-key treasury lock. All schedule math lives here so it can be
// exercised without a runtime.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::PoolKind};

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub admin: Pubkey,            // Owner role
    pub treasury_guard: Pubkey,   // Second key of the treasury lock
    pub voting_engine: Pubkey,    // Allowed to mint rewards, default until registered
    pub mint: Pubkey,
    pub treasury_vault: Pubkey,
    pub airdrop_pool: Pubkey,
    pub liquidity_pool: Pubkey,
    pub api_reward_pool: Pubkey,
    pub mint_multiplier: u64,     // Basis points applied to the daily amount
    pub airdrop_share: u64,
    pub liquidity_share: u64,
    pub api_reward_share: u64,
    pub strict_shares: bool,      // Shares must sum to 100% when set
    pub minting_active: bool,
    pub last_mint_timestamp: i64,
    pub last_treasury_mint_timestamp: i64,
    pub owner_unlocked: bool,
    pub guard_unlocked: bool,
    pub unlock_opened_at: i64,    // Time of the first unlock of the current pair
    pub bump: u8,
    pub mint_bump: u8,
    pub treasury_bump: u8,
}

// Amounts of one catch-up mint, by destination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    pub airdrop: u64,
    pub liquidity: u64,
    pub api_reward: u64,
}

impl Distribution {
    pub fn total(&self) -> Result<u64> {
        self.airdrop
            .checked_add(self.liquidity)
            .and_then(|sum| sum.checked_add(self.api_reward))
            .ok_or(TokenError::Overflow.into())
    }
}

// Start of the UTC day containing `timestamp`
pub fn day_start(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY
}

fn apply_bps(amount: u128, bps: u64) -> Result<u128> {
    amount
        .checked_mul(bps as u128)
        .ok_or(TokenError::Overflow)?
        .checked_div(ONE_HUNDRED_PERCENT as u128)
        .ok_or(TokenError::Overflow.into())
}

fn to_u64(amount: u128) -> Result<u64> {
    u64::try_from(amount).map_err(|_| TokenError::Overflow.into())
}

impl Config {
    // DAILY MINT SCHEDULE

    // Whole days elapsed since the last daily mint, 0 while inactive
    pub fn pending_days(&self, now: i64) -> u64 {
        if !self.minting_active || now <= self.last_mint_timestamp {
            return 0;
        }
        ((now - self.last_mint_timestamp) / SECONDS_PER_DAY) as u64
    }

    // Split of `days` worth of daily mint under the current multiplier and shares.
    // Each share is taken from the multiplied total, rounding down.
    pub fn distribution_for(&self, days: u64) -> Result<Distribution> {
        let base = (DAILY_MINT_AMOUNT as u128)
            .checked_mul(days as u128)
            .ok_or(TokenError::Overflow)?;
        let total = apply_bps(base, self.mint_multiplier)?;

        Ok(Distribution {
            airdrop: to_u64(apply_bps(total, self.airdrop_share)?)?,
            liquidity: to_u64(apply_bps(total, self.liquidity_share)?)?,
            api_reward: to_u64(apply_bps(total, self.api_reward_share)?)?,
        })
    }

    // Moves the daily clock forward by whole days, keeping the sub-day remainder
    pub fn advance_mint_clock(&mut self, days: u64) -> Result<()> {
        let elapsed = (days as i64)
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(TokenError::Overflow)?;
        self.last_mint_timestamp = self
            .last_mint_timestamp
            .checked_add(elapsed)
            .ok_or(TokenError::Overflow)?;
        Ok(())
    }

    // ANNUAL TREASURY SCHEDULE

    pub fn pending_treasury_years(&self, now: i64) -> u64 {
        if !self.minting_active || now <= self.last_treasury_mint_timestamp {
            return 0;
        }
        ((now - self.last_treasury_mint_timestamp) / SECONDS_PER_YEAR) as u64
    }

    pub fn treasury_amount_for(years: u64) -> Result<u64> {
        ANNUAL_TREASURY_MINT
            .checked_mul(years)
            .ok_or(TokenError::Overflow.into())
    }

    pub fn advance_treasury_clock(&mut self, years: u64) -> Result<()> {
        let elapsed = (years as i64)
            .checked_mul(SECONDS_PER_YEAR)
            .ok_or(TokenError::Overflow)?;
        self.last_treasury_mint_timestamp = self
            .last_treasury_mint_timestamp
            .checked_add(elapsed)
            .ok_or(TokenError::Overflow)?;
        Ok(())
    }

    // DISTRIBUTION PARAMETERS

    pub fn share_sum(&self) -> u64 {
        self.airdrop_share
            .saturating_add(self.liquidity_share)
            .saturating_add(self.api_reward_share)
    }

    pub fn set_share(&mut self, kind: PoolKind, share: u64) -> Result<()> {
        require!(share <= ONE_HUNDRED_PERCENT, TokenError::InvalidShare);

        match kind {
            PoolKind::Airdrop => self.airdrop_share = share,
            PoolKind::Liquidity => self.liquidity_share = share,
            PoolKind::ApiReward => self.api_reward_share = share,
        }

        if self.strict_shares {
            require!(
                self.share_sum() <= ONE_HUNDRED_PERCENT,
                TokenError::SharesExceedTotal
            );
        }
        Ok(())
    }

    pub fn set_mint_multiplier(&mut self, multiplier: u64) -> Result<()> {
        require!(
            multiplier <= MAX_MINT_MULTIPLIER,
            TokenError::InvalidMultiplier
        );
        self.mint_multiplier = multiplier;
        Ok(())
    }

    pub fn set_strict_shares(&mut self, strict: bool) -> Result<()> {
        if strict {
            require!(
                self.share_sum() <= ONE_HUNDRED_PERCENT,
                TokenError::SharesExceedTotal
            );
        }
        self.strict_shares = strict;
        Ok(())
    }

    pub fn set_pool(&mut self, kind: PoolKind, pool: Pubkey) {
        match kind {
            PoolKind::Airdrop => self.airdrop_pool = pool,
            PoolKind::Liquidity => self.liquidity_pool = pool,
            PoolKind::ApiReward => self.api_reward_pool = pool,
        }
    }

    pub fn pools_configured(&self) -> bool {
        self.airdrop_pool != Pubkey::default()
            && self.liquidity_pool != Pubkey::default()
            && self.api_reward_pool != Pubkey::default()
    }

    // Arms the daily clock so the first catch-up mints the current day
    pub fn activate(&mut self, now: i64) -> Result<()> {
        require!(!self.minting_active, TokenError::MintingAlreadyActive);
        require!(self.pools_configured(), TokenError::PoolsNotConfigured);
        if self.strict_shares {
            require!(
                self.share_sum() == ONE_HUNDRED_PERCENT,
                TokenError::SharesNotComplete
            );
        }

        self.minting_active = true;
        self.last_mint_timestamp = day_start(now)
            .checked_sub(SECONDS_PER_DAY)
            .ok_or(TokenError::Underflow)?;
        Ok(())
    }

    // TREASURY LOCK

    pub fn unlock_expired(&self, now: i64) -> bool {
        now > self.unlock_opened_at.saturating_add(TREASURY_UNLOCK_WINDOW)
    }

    // A stale half or full pair is discarded so unlocking starts over
    fn refresh_unlock(&mut self, now: i64) {
        if (self.owner_unlocked || self.guard_unlocked) && self.unlock_expired(now) {
            self.reset_unlock();
        }
    }

    fn reset_unlock(&mut self) {
        self.owner_unlocked = false;
        self.guard_unlocked = false;
        self.unlock_opened_at = 0;
    }

    pub fn unlock_by_owner(&mut self, now: i64) -> Result<()> {
        self.refresh_unlock(now);
        require!(!self.owner_unlocked, TokenError::TreasuryAlreadyUnlocked);
        if !self.guard_unlocked {
            self.unlock_opened_at = now;
        }
        self.owner_unlocked = true;
        Ok(())
    }

    pub fn unlock_by_guard(&mut self, now: i64) -> Result<()> {
        self.refresh_unlock(now);
        require!(!self.guard_unlocked, TokenError::TreasuryAlreadyUnlocked);
        if !self.owner_unlocked {
            self.unlock_opened_at = now;
        }
        self.guard_unlocked = true;
        Ok(())
    }

    // Validates and spends the unlock pair for a single withdrawal
    pub fn consume_unlock(&mut self, now: i64) -> Result<()> {
        require!(
            self.owner_unlocked && self.guard_unlocked,
            TokenError::TreasuryLocked
        );
        require!(!self.unlock_expired(now), TokenError::TreasuryUnlockExpired);
        self.reset_unlock();
        Ok(())
    }
}
