// Reward Curve
//
// Step function from lock duration (weeks) to a multiplier in bps. The same
// curve weights votes and sizes withdrawal rewards.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct CurvePoint {
    pub weeks: u16,
    pub multiplier_bps: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct RewardCurve {
    pub points: [CurvePoint; MAX_CURVE_POINTS],
    pub len: u8,
}

impl Default for RewardCurve {
    fn default() -> Self {
        let mut points = [CurvePoint::default(); MAX_CURVE_POINTS];
        for (slot, (weeks, multiplier_bps)) in points.iter_mut().zip(DEFAULT_REWARD_CURVE) {
            *slot = CurvePoint {
                weeks,
                multiplier_bps,
            };
        }

        Self {
            points,
            len: DEFAULT_REWARD_CURVE.len() as u8,
        }
    }
}

impl RewardCurve {
    pub fn from_points(input: &[CurvePoint]) -> Result<Self> {
        require!(
            !input.is_empty() && input.len() <= MAX_CURVE_POINTS,
            VotingError::InvalidRewardCurve
        );
        require!(input[0].weeks == 0, VotingError::InvalidRewardCurve);

        for pair in input.windows(2) {
            require!(
                pair[1].weeks > pair[0].weeks
                    && pair[1].multiplier_bps >= pair[0].multiplier_bps,
                VotingError::InvalidRewardCurve
            );
        }
        require!(
            input[0].multiplier_bps as u64 >= ONE_HUNDRED_PERCENT,
            VotingError::InvalidRewardCurve
        );

        let mut points = [CurvePoint::default(); MAX_CURVE_POINTS];
        points[..input.len()].copy_from_slice(input);

        Ok(Self {
            points,
            len: input.len() as u8,
        })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points[..self.len as usize]
    }

    // Multiplier of the largest step not above `lock_weeks`
    pub fn multiplier(&self, lock_weeks: u16) -> u64 {
        self.points()
            .iter()
            .take_while(|point| point.weeks <= lock_weeks)
            .last()
            .map(|point| point.multiplier_bps as u64)
            .unwrap_or(ONE_HUNDRED_PERCENT)
    }

    pub fn weight(&self, amount: u64, lock_weeks: u16) -> Result<u128> {
        (amount as u128)
            .checked_mul(self.multiplier(lock_weeks) as u128)
            .ok_or(VotingError::Overflow)?
            .checked_div(ONE_HUNDRED_PERCENT as u128)
            .ok_or(VotingError::Overflow.into())
    }
}
