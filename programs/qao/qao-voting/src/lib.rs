// QAO Voting Program
//
// Token-weighted votes with time-locked stakes. Stakes are escrowed per
// vote; withdrawals return the principal and mint a lock-scaled reward
// through the qao-token program.
//
// Instructions:
// - initialize: Create the engine config bound to the qao-token config
// - set_vote_rules / set_reward_curve: Admin configuration
// - create_vote: Pay the creation cost and open a vote
// - vote: Stake on a side of an active vote, possibly closing it
// - withdraw_from_vote: Reclaim a position with its reward

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{CurvePoint, VoteRules};

declare_id!("FQTH8t8SKYRLtNcCWA6WTu3zhn7dfoPmn6NuVzWcX2KE");

#[program]
pub mod qao_voting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    pub fn set_vote_rules(ctx: Context<AdminAction>, rules: VoteRules) -> Result<()> {
        ctx.accounts.set_vote_rules(rules)
    }

    pub fn set_reward_curve(ctx: Context<AdminAction>, points: Vec<CurvePoint>) -> Result<()> {
        ctx.accounts.set_reward_curve(points)
    }

    pub fn create_vote(ctx: Context<CreateVote>, title: String, description: String) -> Result<()> {
        ctx.accounts.create_vote(title, description, &ctx.bumps)
    }

    pub fn vote(
        ctx: Context<CastVote>,
        vote_id: u64,
        amount: u64,
        lock_weeks: u16,
        support: bool,
    ) -> Result<()> {
        ctx.accounts.vote(vote_id, amount, lock_weeks, support, &ctx.bumps)
    }

    pub fn withdraw_from_vote(ctx: Context<WithdrawFromVote>, vote_id: u64) -> Result<()> {
        ctx.accounts.withdraw_from_vote(vote_id)
    }
}
