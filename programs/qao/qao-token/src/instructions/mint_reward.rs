// Mint Reward Instruction
//
// Supply hook for the registered voting engine. The engine signs with its
// config PDA through CPI.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct MintReward<'info> {
    pub voting_engine: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        constraint = config.voting_engine != Pubkey::default()
            && config.voting_engine == voting_engine.key() @ TokenError::UnauthorizedVotingEngine,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(mut, address = config.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = mint,
        constraint = destination.owner != Pubkey::default() @ TokenError::InvalidRecipient,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> MintReward<'info> {
    pub fn mint_reward(&mut self, amount: u64) -> Result<()> {
        let bump = [self.config.bump];
        let config_seeds: &[&[u8]] = &[CONFIG_SEED, &bump];

        mint_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.destination.to_account_info(),
            &self.config.to_account_info(),
            config_seeds,
        )?;

        emit!(RewardMinted {
            destination: self.destination.key(),
            amount,
        });

        Ok(())
    }
}
