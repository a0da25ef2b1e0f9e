// QAO Token Program
//
// SPL mint with a scheduled supply. Every balance-changing instruction first
// catches up the daily pool mint and the annual treasury mint.
//
// Instructions:
// - initialize: Create config, mint and treasury; mint the genesis supply
// - set_*: Distribution parameters, pools and voting engine registration
// - activate_minting: Start the schedules
// - catch_up_minting: Permissionless scheduler trigger
// - transfer / transfer_from / burn: Ledger operations
// - approve / increase_allowance / decrease_allowance: Delegate management
// - unlock_treasury_by_owner / unlock_treasury_by_guard / withdraw_from_treasury:
//   Dual-key treasury access
// - mint_reward: Reward supply for the registered voting engine

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;
use state::PoolKind;

declare_id!("5pKFDzETkqRMs6ZF8E8r1ZpScXog27CegVR2pzgjXr12");

#[program]
pub mod qao_token {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, treasury_guard: Pubkey) -> Result<()> {
        ctx.accounts.initialize(treasury_guard, &ctx.bumps)
    }

    pub fn set_mint_multiplier(ctx: Context<AdminAction>, multiplier: u64) -> Result<()> {
        ctx.accounts.set_mint_multiplier(multiplier)
    }

    pub fn set_airdrop_share(ctx: Context<AdminAction>, share: u64) -> Result<()> {
        ctx.accounts.set_share(PoolKind::Airdrop, share)
    }

    pub fn set_liquidity_share(ctx: Context<AdminAction>, share: u64) -> Result<()> {
        ctx.accounts.set_share(PoolKind::Liquidity, share)
    }

    pub fn set_api_reward_share(ctx: Context<AdminAction>, share: u64) -> Result<()> {
        ctx.accounts.set_share(PoolKind::ApiReward, share)
    }

    pub fn set_strict_shares(ctx: Context<AdminAction>, strict: bool) -> Result<()> {
        ctx.accounts.set_strict_shares(strict)
    }

    pub fn set_voting_engine(ctx: Context<AdminAction>, voting_engine: Pubkey) -> Result<()> {
        ctx.accounts.set_voting_engine(voting_engine)
    }

    pub fn set_pool(ctx: Context<SetPool>, kind: PoolKind) -> Result<()> {
        ctx.accounts.set_pool(kind)
    }

    pub fn activate_minting(ctx: Context<ActivateMinting>) -> Result<()> {
        ctx.accounts.activate_minting()
    }

    pub fn catch_up_minting(ctx: Context<CatchUpMinting>) -> Result<()> {
        ctx.accounts.catch_up_minting()
    }

    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_tokens(amount)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_from(amount)
    }

    pub fn approve(ctx: Context<ManageAllowance>, amount: u64) -> Result<()> {
        ctx.accounts.approve(amount)
    }

    pub fn increase_allowance(ctx: Context<ManageAllowance>, added: u64) -> Result<()> {
        ctx.accounts.increase_allowance(added)
    }

    pub fn decrease_allowance(ctx: Context<ManageAllowance>, subtracted: u64) -> Result<()> {
        ctx.accounts.decrease_allowance(subtracted)
    }

    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        ctx.accounts.burn_tokens(amount)
    }

    pub fn unlock_treasury_by_owner(ctx: Context<UnlockByOwner>) -> Result<()> {
        ctx.accounts.unlock_treasury_by_owner()
    }

    pub fn unlock_treasury_by_guard(ctx: Context<UnlockByGuard>) -> Result<()> {
        ctx.accounts.unlock_treasury_by_guard()
    }

    pub fn withdraw_from_treasury(ctx: Context<WithdrawFromTreasury>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_from_treasury(amount)
    }

    pub fn mint_reward(ctx: Context<MintReward>, amount: u64) -> Result<()> {
        ctx.accounts.mint_reward(amount)
    }
}
