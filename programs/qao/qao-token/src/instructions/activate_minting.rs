// Activate Minting Instruction
//
// One-shot switch that starts the daily and annual schedules and mints
// the current day right away.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ActivateMinting<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ TokenError::NotAuthorized,
    )]
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

impl<'info> ActivateMinting<'info> {
    pub fn activate_minting(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.config.activate(now)?;

        emit!(MintingActivated {
            last_mint_timestamp: self.config.last_mint_timestamp,
        });

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
