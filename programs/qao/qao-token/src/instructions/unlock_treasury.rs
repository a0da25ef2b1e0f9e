// Unlock Treasury Instructions
//
// Owner and guard each record their half of the unlock. Either may go
// first; the pair is usable for TREASURY_UNLOCK_WINDOW after the first.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct UnlockByOwner<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ TokenError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UnlockByOwner<'info> {
    pub fn unlock_treasury_by_owner(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.config.unlock_by_owner(now)?;
        emit_unlocked(&self.config);
        Ok(())
    }
}

#[derive(Accounts)]
pub struct UnlockByGuard<'info> {
    pub treasury_guard: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = treasury_guard @ TokenError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UnlockByGuard<'info> {
    pub fn unlock_treasury_by_guard(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.config.unlock_by_guard(now)?;
        emit_unlocked(&self.config);
        Ok(())
    }
}

fn emit_unlocked(config: &Config) {
    emit!(TreasuryUnlocked {
        owner_unlocked: config.owner_unlocked,
        guard_unlocked: config.guard_unlocked,
        unlock_opened_at: config.unlock_opened_at,
    });
}
