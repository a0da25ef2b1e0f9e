// Transfer From Instruction
//
// Delegate-signed transfer that spends the owner's allowance.
// The token program rejects amounts above the delegated amount.

use anchor_lang::{prelude::*, solana_program::program_option::COption};
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    pub delegate: Signer<'info>,

    #[account(
        mut,
        token::mint = mint,
        constraint = from.delegate == COption::Some(delegate.key()) @ TokenError::NotAuthorized,
    )]
    pub from: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint,
        constraint = to.owner != Pubkey::default() @ TokenError::InvalidRecipient,
    )]
    pub to: Box<Account<'info, TokenAccount>>,

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

impl<'info> TransferFrom<'info> {
    pub fn transfer_from(&mut self, amount: u64) -> Result<()> {
        catch_up(
            &mut self.config,
            self.mint.to_account_info(),
            self.airdrop_pool.to_account_info(),
            self.liquidity_pool.to_account_info(),
            self.api_reward_pool.to_account_info(),
            self.treasury_vault.to_account_info(),
            self.token_program.to_account_info(),
        )?;

        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.from.to_account_info(),
                    to: self.to.to_account_info(),
                    authority: self.delegate.to_account_info(),
                },
            ),
            amount,
        )?;

        emit!(TokensTransferred {
            from: self.from.owner,
            to: self.to.owner,
            amount,
        });

        Ok(())
    }
}
