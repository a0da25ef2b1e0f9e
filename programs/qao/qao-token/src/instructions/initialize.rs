// Initialize Instruction
//
// Creates the config, the mint and the treasury vault, then mints the
// genesis supply: 9T to the initial recipient and 1T to the treasury.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Config::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        payer = admin,
        seeds = [MINT_SEED],
        bump,
        mint::decimals = DECIMALS,
        mint::authority = config,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        seeds = [TREASURY_SEED],
        bump,
        token::mint = mint,
        token::authority = config,
    )]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: wallet receiving the genesis allocation
    pub genesis_recipient: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = genesis_recipient,
    )]
    pub genesis_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, treasury_guard: Pubkey, bumps: &InitializeBumps) -> Result<()> {
        require!(
            treasury_guard != Pubkey::default() && treasury_guard != self.admin.key(),
            TokenError::InvalidTreasuryGuard
        );

        let now = Clock::get()?.unix_timestamp;

        self.config.set_inner(Config {
            admin: self.admin.key(),
            treasury_guard,
            voting_engine: Pubkey::default(),
            mint: self.mint.key(),
            treasury_vault: self.treasury_vault.key(),
            airdrop_pool: Pubkey::default(),
            liquidity_pool: Pubkey::default(),
            api_reward_pool: Pubkey::default(),
            mint_multiplier: ONE_HUNDRED_PERCENT,
            airdrop_share: DEFAULT_AIRDROP_SHARE,
            liquidity_share: DEFAULT_LIQUIDITY_SHARE,
            api_reward_share: DEFAULT_API_REWARD_SHARE,
            strict_shares: false,
            minting_active: false,
            last_mint_timestamp: day_start(now),
            last_treasury_mint_timestamp: day_start(now),
            owner_unlocked: false,
            guard_unlocked: false,
            unlock_opened_at: 0,
            bump: bumps.config,
            mint_bump: bumps.mint,
            treasury_bump: bumps.treasury_vault,
        });

        let bump = [bumps.config];
        let config_seeds: &[&[u8]] = &[CONFIG_SEED, &bump];
        let token_program = self.token_program.to_account_info();
        let mint = self.mint.to_account_info();
        let config = self.config.to_account_info();

        mint_tokens(
            GENESIS_RECIPIENT_AMOUNT,
            &token_program,
            &mint,
            &self.genesis_token_account.to_account_info(),
            &config,
            config_seeds,
        )?;

        mint_tokens(
            GENESIS_TREASURY_AMOUNT,
            &token_program,
            &mint,
            &self.treasury_vault.to_account_info(),
            &config,
            config_seeds,
        )?;

        msg!(
            "QAO initialized: admin {}, guard {}, genesis recipient {}",
            self.admin.key(),
            treasury_guard,
            self.genesis_recipient.key()
        );

        Ok(())
    }
}
