use anchor_lang::prelude::*;

// Destination pools of the daily mint
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolKind {
    Airdrop,
    Liquidity,
    ApiReward,
}
