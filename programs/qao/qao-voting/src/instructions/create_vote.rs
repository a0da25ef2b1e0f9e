// Create Vote Instruction
//
// The creator pays the creation cost: one part goes to the burn vault, one
// to the reward pool and the rest is escrowed as the creator's supporting
// stake. Total supply is unchanged.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use qao_token::program::QaoToken;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CreateVote<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_SEED],
        bump = engine_config.bump,
    )]
    pub engine_config: Box<Account<'info, EngineConfig>>,

    #[account(mut, address = engine_config.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Vote::INIT_SPACE,
        seeds = [VOTE_SEED, &engine_config.vote_count.to_le_bytes()],
        bump,
    )]
    pub vote: Box<Account<'info, Vote>>,

    #[account(
        init,
        payer = creator,
        seeds = [VOTE_VAULT_SEED, vote.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = engine_config,
    )]
    pub vote_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Attendance::INIT_SPACE,
        seeds = [ATTENDANCE_SEED, vote.key().as_ref(), creator.key().as_ref()],
        bump,
    )]
    pub attendance: Box<Account<'info, Attendance>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = engine_config.reward_pool)]
    pub reward_pool: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = engine_config.burn_vault)]
    pub burn_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: qao-token config, validated by address here and by qao-token in the CPI
    #[account(mut, address = engine_config.token_config)]
    pub token_config: UncheckedAccount<'info>,

    /// CHECK: forwarded to the qao-token scheduler
    #[account(mut)]
    pub airdrop_pool: UncheckedAccount<'info>,

    /// CHECK: forwarded to the qao-token scheduler
    #[account(mut)]
    pub liquidity_pool: UncheckedAccount<'info>,

    /// CHECK: forwarded to the qao-token scheduler
    #[account(mut)]
    pub api_reward_pool: UncheckedAccount<'info>,

    /// CHECK: forwarded to the qao-token scheduler
    #[account(mut)]
    pub treasury_vault: UncheckedAccount<'info>,

    pub qao_token_program: Program<'info, QaoToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateVote<'info> {
    pub fn create_vote(
        &mut self,
        title: String,
        description: String,
        bumps: &CreateVoteBumps,
    ) -> Result<()> {
        require!(title.len() <= MAX_TITLE_LEN, VotingError::TitleTooLong);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            VotingError::DescriptionTooLong
        );

        catch_up_minting(MintingAccounts {
            qao_token_program: self.qao_token_program.to_account_info(),
            token_config: self.token_config.to_account_info(),
            mint: self.mint.to_account_info(),
            airdrop_pool: self.airdrop_pool.to_account_info(),
            liquidity_pool: self.liquidity_pool.to_account_info(),
            api_reward_pool: self.api_reward_pool.to_account_info(),
            treasury_vault: self.treasury_vault.to_account_info(),
            token_program: self.token_program.to_account_info(),
        })?;

        let now = Clock::get()?.unix_timestamp;
        let rules = self.engine_config.rules;
        let split = rules.creation_split()?;

        let token_program = self.token_program.to_account_info();
        let creator_tokens = self.creator_token_account.to_account_info();
        let creator = self.creator.to_account_info();

        transfer_tokens(
            split.burn,
            &token_program,
            &creator_tokens,
            &self.burn_vault.to_account_info(),
            &creator,
        )?;
        transfer_tokens(
            split.reward,
            &token_program,
            &creator_tokens,
            &self.reward_pool.to_account_info(),
            &creator,
        )?;
        transfer_tokens(
            split.stake,
            &token_program,
            &creator_tokens,
            &self.vote_vault.to_account_info(),
            &creator,
        )?;

        let vote_id = self.engine_config.vote_count;

        self.vote.set_inner(Vote {
            id: vote_id,
            creator: self.creator.key(),
            creation_timestamp: now,
            end_timestamp: 0,
            positive_weight: split.stake as u128,
            negative_weight: 0,
            is_active: true,
            title,
            description,
            total_staked: split.stake,
            attendance_count: 1,
            bump: bumps.vote,
            vault_bump: bumps.vote_vault,
        });

        self.attendance.set_inner(Attendance {
            vote_id,
            vote: self.vote.key(),
            participant: self.creator.key(),
            staked_amount: split.stake,
            timestamp: now,
            lock_weeks: rules.creator_lock_weeks,
            side_support: true,
            withdrawn: false,
            is_creator: true,
            bump: bumps.attendance,
        });

        self.engine_config.vote_count = vote_id
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;

        emit!(StartOfVote {
            vote_id,
            creator: self.creator.key(),
            vote: self.vote.key(),
        });
        emit!(AttendanceSubmitted {
            participant: self.creator.key(),
            vote_id,
            attendance: self.attendance.key(),
            staked_amount: split.stake,
            weight: split.stake as u128,
            support: true,
            lock_weeks: rules.creator_lock_weeks,
        });
        msg!("Vote {} created by {}", vote_id, self.creator.key());

        Ok(())
    }
}
