// Catch Up Minting Instruction
//
// Permissionless trigger for the scheduler. The voting program calls
// this through CPI before every state change.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CatchUpMinting<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    #[account(mut, address = config.mint)]
    pub mint: Box<Account<'info, Mint>>,

    /// CHECK: matched against config.airdrop_pool by the scheduler
    #[account(mut)]
    pub airdrop_pool: UncheckedAccount<'info>,

    /// CHECK: matched against config.liquidity_pool by the scheduler
    #[account(mut)]
    pub liquidity_pool: UncheckedAccount<'info>,

    /// CHECK: matched against config.api_reward_pool by the scheduler
    #[account(mut)]
    pub api_reward_pool: UncheckedAccount<'info>,

    #[account(mut, address = config.treasury_vault)]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> CatchUpMinting<'info> {
    pub fn catch_up_minting(&mut self) -> Result<()> {
        catch_up(
            &mut self.config,
            self.mint.to_account_info(),
            self.airdrop_pool.to_account_info(),
            self.liquidity_pool.to_account_info(),
            self.api_reward_pool.to_account_info(),
            self.treasury_vault.to_account_info(),
            self.token_program.to_account_info(),
        )
    }
}
