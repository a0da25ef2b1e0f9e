// Burn Instruction
//
// Destroys the caller's own tokens, reducing supply.

use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
    )]
    pub source: Box<Account<'info, TokenAccount>>,

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

impl<'info> BurnTokens<'info> {
    pub fn burn_tokens(&mut self, amount: u64) -> Result<()> {
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

        burn(
            CpiContext::new(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.mint.to_account_info(),
                    from: self.source.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
        )?;

        msg!("Burned {} from {}", amount, self.owner.key());
        Ok(())
    }
}
