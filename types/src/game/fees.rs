use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use std::collections::BTreeMap;

use super::{
    DEFAULT_BURN_FEES, DEFAULT_BURN_REWARDS, DEFAULT_CLAIM_FEE, DEFAULT_REWARD_PAYOUTS,
    DEFAULT_RENAME_FEE_PER_CHAR, DEFAULT_UPGRADE_COSTS, DEFAULT_UPGRADE_FEE, REWARD_TIER,
};

/// A typed fee-table key.
///
/// Tier-indexed keys carry the tier explicitly instead of being spelled into
/// the key name, so an out-of-range tier is a lookup miss rather than a
/// silently-absent string key.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum FeeKey {
    /// Pool fee collected when a horsey is claimed.
    Claim,
    /// Pool fee per character of a requested display name.
    Rename,
    /// Flat pool fee charged on every upgrade.
    UpgradeFee,
    /// HXP cost to upgrade out of `tier`.
    UpgradeCost(u8),
    /// Pool fee to burn a horsey at `tier`.
    BurnFee(u8),
    /// HXP reward for burning a horsey at `tier`.
    BurnReward(u8),
    /// Pool payout for a reward claim at `tier`.
    RewardClaim(u8),
}

impl Write for FeeKey {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            Self::Claim => 0u8.write(writer),
            Self::Rename => 1u8.write(writer),
            Self::UpgradeFee => 2u8.write(writer),
            Self::UpgradeCost(tier) => {
                3u8.write(writer);
                tier.write(writer);
            }
            Self::BurnFee(tier) => {
                4u8.write(writer);
                tier.write(writer);
            }
            Self::BurnReward(tier) => {
                5u8.write(writer);
                tier.write(writer);
            }
            Self::RewardClaim(tier) => {
                6u8.write(writer);
                tier.write(writer);
            }
        }
    }
}

impl Read for FeeKey {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let key = match u8::read(reader)? {
            0 => Self::Claim,
            1 => Self::Rename,
            2 => Self::UpgradeFee,
            3 => Self::UpgradeCost(u8::read(reader)?),
            4 => Self::BurnFee(u8::read(reader)?),
            5 => Self::BurnReward(u8::read(reader)?),
            6 => Self::RewardClaim(u8::read(reader)?),
            i => return Err(Error::InvalidEnum(i)),
        };

        Ok(key)
    }
}

impl EncodeSize for FeeKey {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + match self {
                Self::Claim | Self::Rename | Self::UpgradeFee => 0,
                Self::UpgradeCost(_)
                | Self::BurnFee(_)
                | Self::BurnReward(_)
                | Self::RewardClaim(_) => u8::SIZE,
            }
    }
}

/// The configurable fee schedule read by every lifecycle operation.
///
/// Writes take effect for the next operation that reads the key; there is no
/// versioning. A `BTreeMap` keeps the binary encoding canonical over insertion
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeTable {
    entries: BTreeMap<FeeKey, u64>,
}

impl FeeTable {
    /// An empty table. Prefer [`FeeTable::default`], which seeds the
    /// shipped fee schedule.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Value stored for `key`, if any. Tier-indexed keys that miss are a
    /// configuration error the caller must surface.
    pub fn get(&self, key: FeeKey) -> Option<u64> {
        self.entries.get(&key).copied()
    }

    /// Value stored for a flat key, defaulting to zero when unset.
    pub fn flat(&self, key: FeeKey) -> u64 {
        self.get(key).unwrap_or(0)
    }

    /// Create or overwrite `key`.
    pub fn set(&mut self, key: FeeKey, value: u64) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FeeTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.set(FeeKey::Claim, DEFAULT_CLAIM_FEE);
        table.set(FeeKey::Rename, DEFAULT_RENAME_FEE_PER_CHAR);
        table.set(FeeKey::UpgradeFee, DEFAULT_UPGRADE_FEE);
        for (tier, cost) in DEFAULT_UPGRADE_COSTS.iter().enumerate() {
            table.set(FeeKey::UpgradeCost(tier as u8), *cost);
        }
        for (tier, fee) in DEFAULT_BURN_FEES.iter().enumerate() {
            table.set(FeeKey::BurnFee(tier as u8), *fee);
        }
        for (tier, reward) in DEFAULT_BURN_REWARDS.iter().enumerate() {
            table.set(FeeKey::BurnReward(tier as u8), *reward);
        }
        for (offset, payout) in DEFAULT_REWARD_PAYOUTS.iter().enumerate() {
            table.set(FeeKey::RewardClaim(REWARD_TIER + offset as u8), *payout);
        }
        table
    }
}

impl Write for FeeTable {
    fn write(&self, writer: &mut impl BufMut) {
        (self.entries.len() as u32).write(writer);
        for (key, value) in &self.entries {
            key.write(writer);
            value.write(writer);
        }
    }
}

impl Read for FeeTable {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let count = u32::read(reader)?;
        let mut entries = BTreeMap::new();
        for _ in 0..count {
            let key = FeeKey::read(reader)?;
            let value = u64::read(reader)?;
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }
}

impl EncodeSize for FeeTable {
    fn encode_size(&self) -> usize {
        u32::SIZE
            + self
                .entries
                .keys()
                .map(|key| key.encode_size() + u64::SIZE)
                .sum::<usize>()
    }
}
