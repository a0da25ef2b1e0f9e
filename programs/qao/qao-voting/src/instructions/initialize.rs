// Initialize Instruction
//
// Creates the engine config bound to the qao-token config and the burn
// vault that holds burned fees out of circulation. Only the token admin
// may initialize. The token admin must then register the engine PDA
// with `set_voting_engine` before rewards can be minted.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use qao_token::state::Config as TokenConfig;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + EngineConfig::INIT_SPACE,
        seeds = [ENGINE_SEED],
        bump,
    )]
    pub engine_config: Box<Account<'info, EngineConfig>>,

    #[account(
        seeds = [qao_token::constants::CONFIG_SEED],
        bump = token_config.bump,
        seeds::program = qao_token::ID,
        constraint = token_config.admin == admin.key() @ VotingError::NotAuthorized,
    )]
    pub token_config: Box<Account<'info, TokenConfig>>,

    #[account(address = token_config.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(token::mint = mint)]
    pub reward_pool: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        seeds = [BURN_VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = system_program,
    )]
    pub burn_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.engine_config.set_inner(EngineConfig {
            admin: self.admin.key(),
            token_config: self.token_config.key(),
            mint: self.mint.key(),
            reward_pool: self.reward_pool.key(),
            burn_vault: self.burn_vault.key(),
            vote_count: 0,
            rules: VoteRules::default(),
            reward_curve: RewardCurve::default(),
            bump: bumps.engine_config,
        });

        msg!("Voting engine initialized at {}", self.engine_config.key());
        Ok(())
    }
}
