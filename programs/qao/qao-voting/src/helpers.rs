// Voting Engine Helpers
//
// CPI wrappers around SPL Token and the qao-token program.

use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Transfer};
use qao_token::cpi::accounts::{CatchUpMinting, MintReward};

// Accounts of the qao-token scheduler, forwarded untouched
pub struct MintingAccounts<'info> {
    pub qao_token_program: AccountInfo<'info>,
    pub token_config: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub airdrop_pool: AccountInfo<'info>,
    pub liquidity_pool: AccountInfo<'info>,
    pub api_reward_pool: AccountInfo<'info>,
    pub treasury_vault: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

// Bring the token supply up to date before touching balances
pub fn catch_up_minting(accounts: MintingAccounts<'_>) -> Result<()> {
    qao_token::cpi::catch_up_minting(CpiContext::new(
        accounts.qao_token_program,
        CatchUpMinting {
            config: accounts.token_config,
            mint: accounts.mint,
            airdrop_pool: accounts.airdrop_pool,
            liquidity_pool: accounts.liquidity_pool,
            api_reward_pool: accounts.api_reward_pool,
            treasury_vault: accounts.treasury_vault,
            token_program: accounts.token_program,
        },
    ))
}

// Reward mint signed by the engine PDA; skipped for a zero reward
#[allow(clippy::too_many_arguments)]
pub fn mint_reward<'info>(
    amount: u64,
    qao_token_program: &AccountInfo<'info>,
    engine: &AccountInfo<'info>,
    token_config: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    engine_seeds: &[&[u8]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let signer_seeds = &[engine_seeds];

    qao_token::cpi::mint_reward(
        CpiContext::new_with_signer(
            qao_token_program.clone(),
            MintReward {
                voting_engine: engine.clone(),
                config: token_config.clone(),
                mint: mint.clone(),
                destination: destination.clone(),
                token_program: token_program.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// User-signed transfer, skipped for a zero amount
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Transfer out of a vote vault (engine PDA signs)
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
