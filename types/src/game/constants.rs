/// Base unit of the pooled HORSE asset (9 decimals).
pub const UNIT: u64 = 1_000_000_000;

/// Maximum display-name length for a horsey (bytes).
pub const MAX_NAME_LENGTH: usize = 32;

/// Base stats derived from DNA land in `1..=BASE_STAT_RANGE`.
pub const BASE_STAT_RANGE: u32 = 100;

/// Upgrade tier at which a horsey becomes eligible for reward claims.
pub const REWARD_TIER: u8 = 2;

// Default fee schedule. Every value is owner-tunable at runtime via
// `Instruction::SetConfig`; these only seed `FeeTable::default()`.

/// Pool fee collected when a horsey is claimed.
pub const DEFAULT_CLAIM_FEE: u64 = UNIT / 10;

/// Pool fee per character of a requested display name.
pub const DEFAULT_RENAME_FEE_PER_CHAR: u64 = UNIT / 100;

/// Flat pool fee charged on every upgrade.
pub const DEFAULT_UPGRADE_FEE: u64 = UNIT / 4;

/// HXP cost to upgrade out of tiers 0..=3.
pub const DEFAULT_UPGRADE_COSTS: [u64; 4] = [100, 2_000, 20_000, 100_000];

/// Pool fee to burn a horsey at tiers 0..=4.
pub const DEFAULT_BURN_FEES: [u64; 5] = [
    UNIT / 20,
    UNIT / 10,
    UNIT / 5,
    UNIT / 2,
    UNIT,
];

/// HXP reward credited for burning a horsey at tiers 0..=4.
pub const DEFAULT_BURN_REWARDS: [u64; 5] = [1_000, 5_000, 25_000, 125_000, 625_000];

/// Pool payout for reward claims at tiers 2..=4.
pub const DEFAULT_REWARD_PAYOUTS: [u64; 3] = [UNIT, 2 * UNIT, 5 * UNIT];
