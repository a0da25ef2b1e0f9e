// Token Program Helpers
//
// CPI wrappers for the config PDA and the supply scheduler that every
// balance-changing instruction runs before doing its own work.

use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, transfer, MintTo, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

// Accounts the scheduler needs to mint into the pools and the treasury
pub struct MintingAccounts<'a, 'info> {
    pub config: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
    pub airdrop_pool: &'a AccountInfo<'info>,
    pub liquidity_pool: &'a AccountInfo<'info>,
    pub api_reward_pool: &'a AccountInfo<'info>,
    pub treasury_vault: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> MintingAccounts<'a, 'info> {
    fn assert_matches(&self, config: &Config) -> Result<()> {
        require_keys_eq!(self.mint.key(), config.mint, TokenError::InvalidPoolAccount);
        require_keys_eq!(
            self.treasury_vault.key(),
            config.treasury_vault,
            TokenError::InvalidPoolAccount
        );
        require_keys_eq!(
            self.airdrop_pool.key(),
            config.airdrop_pool,
            TokenError::InvalidPoolAccount
        );
        require_keys_eq!(
            self.liquidity_pool.key(),
            config.liquidity_pool,
            TokenError::InvalidPoolAccount
        );
        require_keys_eq!(
            self.api_reward_pool.key(),
            config.api_reward_pool,
            TokenError::InvalidPoolAccount
        );
        Ok(())
    }
}

// SCHEDULER

// Mints every whole day and year elapsed since the last mint.
// No-op while minting is inactive.
pub fn run_minting_schedule(
    config: &mut Config,
    accounts: &MintingAccounts<'_, '_>,
    now: i64,
) -> Result<()> {
    if !config.minting_active {
        return Ok(());
    }
    accounts.assert_matches(config)?;

    let bump = [config.bump];
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, &bump];

    let days = config.pending_days(now);
    if days > 0 {
        let split = config.distribution_for(days)?;
        config.advance_mint_clock(days)?;

        mint_with_config(accounts, accounts.airdrop_pool, split.airdrop, config_seeds)?;
        mint_with_config(accounts, accounts.liquidity_pool, split.liquidity, config_seeds)?;
        mint_with_config(accounts, accounts.api_reward_pool, split.api_reward, config_seeds)?;

        emit!(DailyMint {
            days,
            airdrop: split.airdrop,
            liquidity: split.liquidity,
            api_reward: split.api_reward,
            last_mint_timestamp: config.last_mint_timestamp,
        });
        msg!("Daily mint: {} day(s), {} total", days, split.total()?);
    }

    let years = config.pending_treasury_years(now);
    if years > 0 {
        let amount = Config::treasury_amount_for(years)?;
        config.advance_treasury_clock(years)?;

        mint_with_config(accounts, accounts.treasury_vault, amount, config_seeds)?;

        emit!(TreasuryMint {
            years,
            amount,
            last_treasury_mint_timestamp: config.last_treasury_mint_timestamp,
        });
        msg!("Treasury mint: {} year(s), {} total", years, amount);
    }

    Ok(())
}

// Runs the scheduler against an instruction's own accounts
#[allow(clippy::too_many_arguments)]
pub fn catch_up<'info>(
    config: &mut Account<'info, Config>,
    mint: AccountInfo<'info>,
    airdrop_pool: AccountInfo<'info>,
    liquidity_pool: AccountInfo<'info>,
    api_reward_pool: AccountInfo<'info>,
    treasury_vault: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config_info = config.to_account_info();

    let accounts = MintingAccounts {
        config: &config_info,
        mint: &mint,
        airdrop_pool: &airdrop_pool,
        liquidity_pool: &liquidity_pool,
        api_reward_pool: &api_reward_pool,
        treasury_vault: &treasury_vault,
        token_program: &token_program,
    };

    run_minting_schedule(config, &accounts, now)
}

// CPI HELPERS

// Mint with the config PDA as authority, skipping empty amounts
pub fn mint_with_config<'info>(
    accounts: &MintingAccounts<'_, 'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    config_seeds: &[&[u8]],
) -> Result<()> {
    mint_tokens(
        amount,
        accounts.token_program,
        accounts.mint,
        to,
        accounts.config,
        config_seeds,
    )
}

pub fn mint_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let signer_seeds = &[authority_seeds];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Transfer out of the treasury vault (config PDA signs)
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
