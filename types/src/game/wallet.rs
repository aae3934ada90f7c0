use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use commonware_cryptography::ed25519::PublicKey;

/// Custodial balances held for one identity.
///
/// Both balances are unsigned and mutated with checked arithmetic only, so
/// they can never go negative.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WalletAccount {
    /// Pooled HORSE value, deposit/withdraw self-service.
    pub horse: u64,
    /// HXP points, creditable/spendable only by approved spenders.
    pub hxp: u64,
}

impl Write for WalletAccount {
    fn write(&self, writer: &mut impl BufMut) {
        self.horse.write(writer);
        self.hxp.write(writer);
    }
}

impl Read for WalletAccount {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            horse: u64::read(reader)?,
            hxp: u64::read(reader)?,
        })
    }
}

impl EncodeSize for WalletAccount {
    fn encode_size(&self) -> usize {
        self.horse.encode_size() + self.hxp.encode_size()
    }
}

/// Wallet-wide configuration.
///
/// `custodian` is the wallet's own identity: the pool is its account and the
/// external value asset holds deposits under it. `approved_spenders` is kept
/// sorted so the encoding is canonical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    pub owner: PublicKey,
    pub custodian: PublicKey,
    approved_spenders: Vec<PublicKey>,
}

impl WalletConfig {
    pub fn new(owner: PublicKey, custodian: PublicKey) -> Self {
        Self {
            owner,
            custodian,
            approved_spenders: Vec::new(),
        }
    }

    pub fn is_approved(&self, spender: &PublicKey) -> bool {
        self.approved_spenders.binary_search(spender).is_ok()
    }

    /// Idempotent add to the authorization set.
    pub fn approve(&mut self, spender: PublicKey) {
        if let Err(at) = self.approved_spenders.binary_search(&spender) {
            self.approved_spenders.insert(at, spender);
        }
    }

    pub fn approved_spenders(&self) -> &[PublicKey] {
        &self.approved_spenders
    }
}

impl Write for WalletConfig {
    fn write(&self, writer: &mut impl BufMut) {
        self.owner.write(writer);
        self.custodian.write(writer);
        (self.approved_spenders.len() as u32).write(writer);
        for spender in &self.approved_spenders {
            spender.write(writer);
        }
    }
}

impl Read for WalletConfig {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let owner = PublicKey::read(reader)?;
        let custodian = PublicKey::read(reader)?;
        let count = u32::read(reader)?;
        let mut config = Self::new(owner, custodian);
        for _ in 0..count {
            config.approve(PublicKey::read(reader)?);
        }
        Ok(config)
    }
}

impl EncodeSize for WalletConfig {
    fn encode_size(&self) -> usize {
        PublicKey::SIZE * 2 + u32::SIZE + self.approved_spenders.len() * PublicKey::SIZE
    }
}
