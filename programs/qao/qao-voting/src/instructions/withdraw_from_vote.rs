// Withdraw From Vote Instruction
//
// Returns a position's principal from the vote vault and mints its reward
// through qao-token. Each position pays out once.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use qao_token::program::QaoToken;

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
#[instruction(vote_id: u64)]
pub struct WithdrawFromVote<'info> {
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
        mut,
        seeds = [ATTENDANCE_SEED, vote.key().as_ref(), participant.key().as_ref()],
        bump = attendance.bump,
        has_one = participant @ VotingError::NotAuthorized,
    )]
    pub attendance: Box<Account<'info, Attendance>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = participant,
    )]
    pub participant_token_account: Box<Account<'info, TokenAccount>>,

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
}

impl<'info> WithdrawFromVote<'info> {
    pub fn withdraw_from_vote(&mut self, vote_id: u64) -> Result<()> {
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
        self.attendance.assert_withdrawable(&self.vote, now)?;

        let payout = self.attendance.payout(
            &self.engine_config.reward_curve,
            self.engine_config.rules.creator_reward_boost_bps,
        )?;

        self.attendance.withdrawn = true;
        self.vote.release_stake(payout.principal)?;

        let bump = [self.engine_config.bump];
        let engine_seeds: &[&[u8]] = &[ENGINE_SEED, &bump];
        let token_program = self.token_program.to_account_info();
        let engine = self.engine_config.to_account_info();
        let destination = self.participant_token_account.to_account_info();

        transfer_from_vault(
            payout.principal,
            &token_program,
            &self.vote_vault.to_account_info(),
            &destination,
            &engine,
            engine_seeds,
        )?;

        mint_reward(
            payout.reward,
            &self.qao_token_program.to_account_info(),
            &engine,
            &self.token_config.to_account_info(),
            &self.mint.to_account_info(),
            &destination,
            &token_program,
            engine_seeds,
        )?;

        emit!(PositionWithdrawn {
            participant: self.participant.key(),
            vote_id,
            principal: payout.principal,
            reward: payout.reward,
        });
        msg!(
            "Position on vote {} withdrawn: {} principal, {} reward",
            vote_id,
            payout.principal,
            payout.reward
        );

        Ok(())
    }
}
