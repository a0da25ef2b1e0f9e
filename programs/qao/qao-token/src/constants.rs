use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["config"]
// The config PDA is the mint authority and the treasury vault authority.
#[constant]
pub const CONFIG_SEED: &[u8] = b"config";

// Seeds for PDA derivation: ["mint"]
#[constant]
pub const MINT_SEED: &[u8] = b"mint";

// Seeds for PDA derivation: ["treasury"]
#[constant]
pub const TREASURY_SEED: &[u8] = b"treasury";

pub const DECIMALS: u8 = 4;
pub const TOKEN_UNIT: u64 = 10_000; // 10^DECIMALS

// Basis points, 1.0 == 10_000
pub const ONE_HUNDRED_PERCENT: u64 = 100_00;
pub const MAX_MINT_MULTIPLIER: u64 = 10 * ONE_HUNDRED_PERCENT;

pub const GENESIS_RECIPIENT_AMOUNT: u64 = 9_000_000_000_000 * TOKEN_UNIT;
pub const GENESIS_TREASURY_AMOUNT: u64 = 1_000_000_000_000 * TOKEN_UNIT;

pub const DAILY_MINT_AMOUNT: u64 = 100_000_000 * TOKEN_UNIT;
pub const ANNUAL_TREASURY_MINT: u64 = 1_000_000_000_000 * TOKEN_UNIT;

pub const DEFAULT_AIRDROP_SHARE: u64 = 45_00;
pub const DEFAULT_LIQUIDITY_SHARE: u64 = 45_00;
pub const DEFAULT_API_REWARD_SHARE: u64 = 10_00;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

// An owner/guard unlock pair is only usable for this long after the first unlock
pub const TREASURY_UNLOCK_WINDOW: i64 = 7 * SECONDS_PER_DAY;
