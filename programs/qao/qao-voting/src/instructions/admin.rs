// Admin Instructions

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct AdminAction<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_SEED],
        bump = engine_config.bump,
        has_one = admin @ VotingError::NotAuthorized,
    )]
    pub engine_config: Box<Account<'info, EngineConfig>>,
}

impl<'info> AdminAction<'info> {
    // Applies to votes and positions created afterwards and to pending payouts
    pub fn set_vote_rules(&mut self, rules: VoteRules) -> Result<()> {
        rules.validate()?;
        self.engine_config.rules = rules;
        msg!("Vote rules updated");
        Ok(())
    }

    pub fn set_reward_curve(&mut self, points: Vec<CurvePoint>) -> Result<()> {
        self.engine_config.reward_curve = RewardCurve::from_points(&points)?;
        msg!("Reward curve updated with {} points", points.len());
        Ok(())
    }
}
