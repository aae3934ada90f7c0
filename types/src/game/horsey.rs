use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use commonware_cryptography::{ed25519::PublicKey, sha256::Digest};

use super::FeeTable;

/// A minted horsey record.
///
/// The display name lives under its own state key so renames never rewrite
/// the core record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Horsey {
    /// Deterministic attribute blob derived from race, claimant, and id.
    pub dna: Digest,
    pub owner: PublicKey,
    /// Race the horsey was claimed from.
    pub race: u64,
    pub base_stat: u32,
    pub upgrade_tier: u8,
}

impl Write for Horsey {
    fn write(&self, writer: &mut impl BufMut) {
        self.dna.write(writer);
        self.owner.write(writer);
        self.race.write(writer);
        self.base_stat.write(writer);
        self.upgrade_tier.write(writer);
    }
}

impl Read for Horsey {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            dna: Digest::read(reader)?,
            owner: PublicKey::read(reader)?,
            race: u64::read(reader)?,
            base_stat: u32::read(reader)?,
            upgrade_tier: u8::read(reader)?,
        })
    }
}

impl EncodeSize for Horsey {
    fn encode_size(&self) -> usize {
        Digest::SIZE + PublicKey::SIZE + u64::SIZE + u32::SIZE + u8::SIZE
    }
}

/// Per-identity win bookkeeping for reward-tier claims.
///
/// `wins` counts successful claims; `rewards_taken` counts reward claims
/// consumed. A reward claim requires `wins > rewards_taken`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WinRecord {
    pub wins: u64,
    pub rewards_taken: u64,
}

impl WinRecord {
    pub fn has_fresh_win(&self) -> bool {
        self.wins > self.rewards_taken
    }
}

impl Write for WinRecord {
    fn write(&self, writer: &mut impl BufMut) {
        self.wins.write(writer);
        self.rewards_taken.write(writer);
    }
}

impl Read for WinRecord {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            wins: u64::read(reader)?,
            rewards_taken: u64::read(reader)?,
        })
    }
}

impl EncodeSize for WinRecord {
    fn encode_size(&self) -> usize {
        self.wins.encode_size() + self.rewards_taken.encode_size()
    }
}

/// Registry configuration: a single authorized writer ("master"),
/// changeable by the registry owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    pub owner: PublicKey,
    pub master: PublicKey,
}

impl Write for RegistryConfig {
    fn write(&self, writer: &mut impl BufMut) {
        self.owner.write(writer);
        self.master.write(writer);
    }
}

impl Read for RegistryConfig {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            owner: PublicKey::read(reader)?,
            master: PublicKey::read(reader)?,
        })
    }
}

impl EncodeSize for RegistryConfig {
    fn encode_size(&self) -> usize {
        PublicKey::SIZE * 2
    }
}

/// Controller configuration: the fee table plus the identity the controller
/// acts under when it invokes privileged wallet/registry operations.
///
/// `next_horsey_id` is monotonic; an id is never reused for a logically
/// distinct asset even after a burn frees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub owner: PublicKey,
    pub controller: PublicKey,
    pub next_horsey_id: u64,
    pub fees: FeeTable,
}

impl Write for GameConfig {
    fn write(&self, writer: &mut impl BufMut) {
        self.owner.write(writer);
        self.controller.write(writer);
        self.next_horsey_id.write(writer);
        self.fees.write(writer);
    }
}

impl Read for GameConfig {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            owner: PublicKey::read(reader)?,
            controller: PublicKey::read(reader)?,
            next_horsey_id: u64::read(reader)?,
            fees: FeeTable::read(reader)?,
        })
    }
}

impl EncodeSize for GameConfig {
    fn encode_size(&self) -> usize {
        PublicKey::SIZE * 2 + u64::SIZE + self.fees.encode_size()
    }
}
