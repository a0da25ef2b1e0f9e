// Admin Instructions
//
// Distribution parameters and role registration. None of these run the
// scheduler; a change applies to every day caught up afterwards.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct AdminAction<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ TokenError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> AdminAction<'info> {
    pub fn set_mint_multiplier(&mut self, multiplier: u64) -> Result<()> {
        self.config.set_mint_multiplier(multiplier)?;
        msg!("Mint multiplier set to {} bps", multiplier);
        Ok(())
    }

    pub fn set_share(&mut self, kind: PoolKind, share: u64) -> Result<()> {
        self.config.set_share(kind, share)?;
        msg!("{:?} share set to {} bps", kind, share);
        Ok(())
    }

    pub fn set_strict_shares(&mut self, strict: bool) -> Result<()> {
        self.config.set_strict_shares(strict)?;
        msg!("Strict shares: {}", strict);
        Ok(())
    }

    // The engine is the voting program's config PDA
    pub fn set_voting_engine(&mut self, voting_engine: Pubkey) -> Result<()> {
        self.config.voting_engine = voting_engine;
        msg!("Voting engine set to {}", voting_engine);
        Ok(())
    }
}
