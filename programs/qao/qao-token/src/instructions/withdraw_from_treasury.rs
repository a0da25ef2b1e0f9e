// Withdraw From Treasury Instruction
//
// Admin-only transfer out of the treasury vault. Needs a live owner+guard
// unlock pair, which the withdrawal consumes.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct WithdrawFromTreasury<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        token::mint = mint,
        constraint = recipient.owner != Pubkey::default() @ TokenError::InvalidRecipient,
    )]
    pub recipient: Box<Account<'info, TokenAccount>>,

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

impl<'info> WithdrawFromTreasury<'info> {
    pub fn withdraw_from_treasury(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, TokenError::ZeroAmount);

        catch_up(
            &mut self.config,
            self.mint.to_account_info(),
            self.airdrop_pool.to_account_info(),
            self.liquidity_pool.to_account_info(),
            self.api_reward_pool.to_account_info(),
            self.treasury_vault.to_account_info(),
            self.token_program.to_account_info(),
        )?;

        // Scheduler may have minted into the vault
        self.treasury_vault.reload()?;

        let now = Clock::get()?.unix_timestamp;
        self.config.consume_unlock(now)?;

        require!(
            amount <= self.treasury_vault.amount,
            TokenError::InsufficientTreasuryBalance
        );

        let bump = [self.config.bump];
        let config_seeds: &[&[u8]] = &[CONFIG_SEED, &bump];

        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.treasury_vault.to_account_info(),
            &self.recipient.to_account_info(),
            &self.config.to_account_info(),
            config_seeds,
        )?;

        emit!(TreasuryWithdrawal {
            recipient: self.recipient.key(),
            amount,
        });
        msg!("Treasury withdrawal of {} to {}", amount, self.recipient.key());

        Ok(())
    }
}
