use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["engine"]
// The engine PDA owns every vote vault and signs reward mints.
#[constant]
pub const ENGINE_SEED: &[u8] = b"engine";

// Seeds for PDA derivation: ["vote", vote_id (u64 LE)]
#[constant]
pub const VOTE_SEED: &[u8] = b"vote";

// Seeds for PDA derivation: ["vote_vault", vote]
#[constant]
pub const VOTE_VAULT_SEED: &[u8] = b"vote_vault";

// Seeds for PDA derivation: ["attendance", vote, participant]
#[constant]
pub const ATTENDANCE_SEED: &[u8] = b"attendance";

// Seeds for PDA derivation: ["burn_vault"]
// Token account owned by the null address; nothing can move tokens out.
#[constant]
pub const BURN_VAULT_SEED: &[u8] = b"burn_vault";

pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_CURVE_POINTS: usize = 16;

pub const ONE_HUNDRED_PERCENT: u64 = 100_00;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

// Default vote rules
pub const DEFAULT_CREATION_COST: u64 = 100_000_000 * qao_token::constants::TOKEN_UNIT;
pub const DEFAULT_CREATION_BURN_BPS: u64 = 1_25;
pub const DEFAULT_CREATION_REWARD_BPS: u64 = 1_25;
pub const DEFAULT_CREATOR_LOCK_WEEKS: u16 = 1;
pub const DEFAULT_CREATOR_REWARD_BOOST_BPS: u64 = 2 * ONE_HUNDRED_PERCENT;
pub const DEFAULT_CLOSE_WEIGHT_THRESHOLD: u128 =
    150_000_000 * qao_token::constants::TOKEN_UNIT as u128;
pub const DEFAULT_MIN_VOTE_DURATION: i64 = 28 * SECONDS_PER_DAY;
pub const DEFAULT_MAX_LOCK_WEEKS: u16 = 520;

// Default reward curve as (weeks, multiplier bps)
pub const DEFAULT_REWARD_CURVE: [(u16, u32); 9] = [
    (0, 1_0000),
    (1, 1_0500),
    (4, 1_1500),
    (13, 1_3500),
    (26, 1_7000),
    (52, 2_4000),
    (104, 4_3300),
    (260, 6_5000),
    (520, 10_0000),
];
