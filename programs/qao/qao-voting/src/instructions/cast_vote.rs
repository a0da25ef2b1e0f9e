// Vote Instruction
//
// Stakes tokens on one side of an active vote. Weight is the stake scaled
// by the lock multiplier. The vote may close as a result.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use qao_token::program::QaoToken;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
#[instruction(vote_id: u64)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(seeds = [ENGINE_SEED], bump = engine_config.bump)]
    pub engine_config: Box<Account<'info, EngineConfig>>,

    #[account(mut, address = engine_config.mint)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [VOTE_SEED, &vote_id.to_le_bytes()],
        bump = vote.bump,
    )]
    pub vote: Box<Account<'info, Vote>>,

    #[account(
        mut,
        seeds = [VOTE_VAULT_SEED, vote.key().as_ref()],
        bump = vote.vault_bump,
    )]
    pub vote_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = participant,
        space = ANCHOR_DISCRIMINATOR + Attendance::INIT_SPACE,
        seeds = [ATTENDANCE_SEED, vote.key().as_ref(), participant.key().as_ref()],
        bump,
    )]
    pub attendance: Box<Account<'info, Attendance>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = participant,
    )]
    pub participant_token_account: Box<Account<'info, TokenAccount>>,

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

impl<'info> CastVote<'info> {
    pub fn vote(
        &mut self,
        vote_id: u64,
        amount: u64,
        lock_weeks: u16,
        support: bool,
        bumps: &CastVoteBumps,
    ) -> Result<()> {
        require!(amount > 0, VotingError::ZeroAmount);
        self.vote.assert_active()?;

        let rules = self.engine_config.rules;
        rules.assert_lock_weeks(lock_weeks)?;

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
        let split = rules.participation_split(amount)?;
        require!(split.stake > 0, VotingError::StakeConsumedByFees);

        let token_program = self.token_program.to_account_info();
        let participant_tokens = self.participant_token_account.to_account_info();
        let participant = self.participant.to_account_info();

        transfer_tokens(
            split.burn,
            &token_program,
            &participant_tokens,
            &self.burn_vault.to_account_info(),
            &participant,
        )?;
        transfer_tokens(
            split.reward,
            &token_program,
            &participant_tokens,
            &self.reward_pool.to_account_info(),
            &participant,
        )?;
        transfer_tokens(
            split.stake,
            &token_program,
            &participant_tokens,
            &self.vote_vault.to_account_info(),
            &participant,
        )?;

        let weight = self.engine_config.reward_curve.weight(split.stake, lock_weeks)?;
        self.vote.add_stake(split.stake, weight, support)?;

        self.attendance.set_inner(Attendance {
            vote_id,
            vote: self.vote.key(),
            participant: self.participant.key(),
            staked_amount: split.stake,
            timestamp: now,
            lock_weeks,
            side_support: support,
            withdrawn: false,
            is_creator: false,
            bump: bumps.attendance,
        });

        emit!(AttendanceSubmitted {
            participant: self.participant.key(),
            vote_id,
            attendance: self.attendance.key(),
            staked_amount: split.stake,
            weight,
            support,
            lock_weeks,
        });

        if self.vote.try_close(now, &rules)? {
            emit!(EndOfVote {
                vote_id,
                positive_weight: self.vote.positive_weight,
                negative_weight: self.vote.negative_weight,
                end_timestamp: now,
            });
            msg!("Vote {} closed", vote_id);
        }

        Ok(())
    }
}
