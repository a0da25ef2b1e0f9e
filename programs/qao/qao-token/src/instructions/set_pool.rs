// Set Pool Instruction
//
// Points one of the three distribution destinations at a token account.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct SetPool<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ TokenError::NotAuthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        constraint = pool.mint == config.mint @ TokenError::InvalidPoolAccount,
        constraint = pool.owner != Pubkey::default() @ TokenError::InvalidRecipient,
    )]
    pub pool: Account<'info, TokenAccount>,
}

impl<'info> SetPool<'info> {
    pub fn set_pool(&mut self, kind: PoolKind) -> Result<()> {
        self.config.set_pool(kind, self.pool.key());
        msg!("{:?} pool set to {}", kind, self.pool.key());
        Ok(())
    }
}
