use bytes::{Buf, BufMut};
use commonware_codec::{Encode, EncodeSize, Error, FixedSize, Read, ReadExt, Write};
use commonware_cryptography::{
    ed25519::{self, PublicKey},
    sha256::{Digest, Sha256},
    Digestible, Hasher, Signer, Verifier,
};
use commonware_utils::union;

use crate::game::{
    read_string, string_encode_size, write_string, FeeKey, GameConfig, Horsey, RegistryConfig,
    WalletAccount, WalletConfig, WinRecord, MAX_NAME_LENGTH,
};

pub const NAMESPACE: &[u8] = b"_HORSEY";
pub const TRANSACTION_SUFFIX: &[u8] = b"_TX";

/// Maximum length of an error message carried in an event.
pub const MAX_MESSAGE_LENGTH: usize = 256;

#[inline]
pub fn transaction_namespace(namespace: &[u8]) -> Vec<u8> {
    union(namespace, TRANSACTION_SUFFIX)
}

/// A signed, replay-protected operation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub nonce: u64,
    pub instruction: Instruction,

    pub public: ed25519::PublicKey,
    pub signature: ed25519::Signature,
}

impl Transaction {
    fn payload(nonce: &u64, instruction: &Instruction) -> Vec<u8> {
        let mut payload = Vec::new();
        nonce.write(&mut payload);
        instruction.write(&mut payload);

        payload
    }

    pub fn sign(private: &ed25519::PrivateKey, nonce: u64, instruction: Instruction) -> Self {
        let signature = private.sign(
            Some(&transaction_namespace(NAMESPACE)),
            &Self::payload(&nonce, &instruction),
        );

        Self {
            nonce,
            instruction,
            public: private.public_key(),
            signature,
        }
    }

    pub fn verify(&self) -> bool {
        self.public.verify(
            Some(&transaction_namespace(NAMESPACE)),
            &Self::payload(&self.nonce, &self.instruction),
            &self.signature,
        )
    }
}

impl Write for Transaction {
    fn write(&self, writer: &mut impl BufMut) {
        self.nonce.write(writer);
        self.instruction.write(writer);
        self.public.write(writer);
        self.signature.write(writer);
    }
}

impl Read for Transaction {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            nonce: u64::read(reader)?,
            instruction: Instruction::read(reader)?,
            public: ed25519::PublicKey::read(reader)?,
            signature: ed25519::Signature::read(reader)?,
        })
    }
}

impl EncodeSize for Transaction {
    fn encode_size(&self) -> usize {
        self.nonce.encode_size()
            + self.instruction.encode_size()
            + self.public.encode_size()
            + self.signature.encode_size()
    }
}

impl Digestible for Transaction {
    type Digest = Digest;

    fn digest(&self) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(self.nonce.to_be_bytes().as_ref());
        hasher.update(self.instruction.encode().as_ref());
        hasher.update(self.public.as_ref());
        // The signature is not part of the digest (any valid signature is
        // valid for the transaction).
        hasher.finalize()
    }
}

/// Per-identity replay bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Account {
    pub nonce: u64,
}

impl Write for Account {
    fn write(&self, writer: &mut impl BufMut) {
        self.nonce.write(writer);
    }
}

impl Read for Account {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        Ok(Self {
            nonce: u64::read(reader)?,
        })
    }
}

impl EncodeSize for Account {
    fn encode_size(&self) -> usize {
        self.nonce.encode_size()
    }
}

/// User-facing operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    // Wallet instructions (tags 10-16)
    /// Pull external value from the caller into the shared pool.
    /// Binary: [10] [amount:u64 BE]
    WalletAddFunds { amount: u64 },

    /// Pull external value from the caller into their own pooled balance.
    /// Binary: [11] [amount:u64 BE]
    WalletDeposit { amount: u64 },

    /// Pay out pooled balance back to the caller as external value.
    /// Binary: [12] [amount:u64 BE]
    WalletWithdraw { amount: u64 },

    /// Add an approved spender (wallet owner only).
    /// Binary: [13] [spender:pk]
    WalletApproveSpender { spender: PublicKey },

    /// Privileged pooled transfer (approved spenders only).
    /// Binary: [14] [from:pk] [to:pk] [amount:u64 BE]
    WalletTransfer {
        from: PublicKey,
        to: PublicKey,
        amount: u64,
    },

    /// Privileged HXP credit (approved spenders only).
    /// Binary: [15] [account:pk] [amount:u64 BE]
    WalletCreditHxp { account: PublicKey, amount: u64 },

    /// Privileged HXP debit (approved spenders only).
    /// Binary: [16] [account:pk] [amount:u64 BE]
    WalletSpendHxp { account: PublicKey, amount: u64 },

    // Registry instructions (tag 17)
    /// Replace the registry's authorized writer (registry owner only).
    /// Binary: [17] [master:pk]
    RegistryChangeMaster { master: PublicKey },

    // Game instructions (tags 20-26)
    /// Convert a winning bet on `race` into a newly minted horsey.
    /// Binary: [20] [race:u64 BE]
    Claim { race: u64 },

    /// Raise a horsey's upgrade tier by one.
    /// Binary: [21] [id:u64 BE]
    Upgrade { id: u64 },

    /// Set a horsey's display name.
    /// Binary: [22] [id:u64 BE] [nameLen:u32 BE] [nameBytes...]
    Rename { id: u64, name: String },

    /// Destroy a horsey for an HXP reward.
    /// Binary: [23] [id:u64 BE]
    Burn { id: u64 },

    /// Credit HXP to the caller.
    /// Binary: [24] [amount:u64 BE]
    PurchaseHxp { amount: u64 },

    /// Claim the reward unlocked by a reward-tier horsey and a fresh win.
    /// Binary: [25] [id:u64 BE]
    ClaimReward { id: u64 },

    /// Create or overwrite a fee-table entry (game owner only).
    /// Binary: [26] [key:FeeKey] [value:u64 BE]
    SetConfig { key: FeeKey, value: u64 },
}

impl Write for Instruction {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            // Wallet (10-16)
            Self::WalletAddFunds { amount } => {
                10u8.write(writer);
                amount.write(writer);
            }
            Self::WalletDeposit { amount } => {
                11u8.write(writer);
                amount.write(writer);
            }
            Self::WalletWithdraw { amount } => {
                12u8.write(writer);
                amount.write(writer);
            }
            Self::WalletApproveSpender { spender } => {
                13u8.write(writer);
                spender.write(writer);
            }
            Self::WalletTransfer { from, to, amount } => {
                14u8.write(writer);
                from.write(writer);
                to.write(writer);
                amount.write(writer);
            }
            Self::WalletCreditHxp { account, amount } => {
                15u8.write(writer);
                account.write(writer);
                amount.write(writer);
            }
            Self::WalletSpendHxp { account, amount } => {
                16u8.write(writer);
                account.write(writer);
                amount.write(writer);
            }

            // Registry (17)
            Self::RegistryChangeMaster { master } => {
                17u8.write(writer);
                master.write(writer);
            }

            // Game (20-26)
            Self::Claim { race } => {
                20u8.write(writer);
                race.write(writer);
            }
            Self::Upgrade { id } => {
                21u8.write(writer);
                id.write(writer);
            }
            Self::Rename { id, name } => {
                22u8.write(writer);
                id.write(writer);
                write_string(name, writer);
            }
            Self::Burn { id } => {
                23u8.write(writer);
                id.write(writer);
            }
            Self::PurchaseHxp { amount } => {
                24u8.write(writer);
                amount.write(writer);
            }
            Self::ClaimReward { id } => {
                25u8.write(writer);
                id.write(writer);
            }
            Self::SetConfig { key, value } => {
                26u8.write(writer);
                key.write(writer);
                value.write(writer);
            }
        }
    }
}

impl Read for Instruction {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let instruction = match u8::read(reader)? {
            // Wallet (10-16)
            10 => Self::WalletAddFunds {
                amount: u64::read(reader)?,
            },
            11 => Self::WalletDeposit {
                amount: u64::read(reader)?,
            },
            12 => Self::WalletWithdraw {
                amount: u64::read(reader)?,
            },
            13 => Self::WalletApproveSpender {
                spender: PublicKey::read(reader)?,
            },
            14 => Self::WalletTransfer {
                from: PublicKey::read(reader)?,
                to: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            15 => Self::WalletCreditHxp {
                account: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            16 => Self::WalletSpendHxp {
                account: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },

            // Registry (17)
            17 => Self::RegistryChangeMaster {
                master: PublicKey::read(reader)?,
            },

            // Game (20-26)
            20 => Self::Claim {
                race: u64::read(reader)?,
            },
            21 => Self::Upgrade {
                id: u64::read(reader)?,
            },
            22 => Self::Rename {
                id: u64::read(reader)?,
                name: read_string(reader, MAX_NAME_LENGTH)?,
            },
            23 => Self::Burn {
                id: u64::read(reader)?,
            },
            24 => Self::PurchaseHxp {
                amount: u64::read(reader)?,
            },
            25 => Self::ClaimReward {
                id: u64::read(reader)?,
            },
            26 => Self::SetConfig {
                key: FeeKey::read(reader)?,
                value: u64::read(reader)?,
            },

            i => return Err(Error::InvalidEnum(i)),
        };

        Ok(instruction)
    }
}

impl EncodeSize for Instruction {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + match self {
                // Wallet
                Self::WalletAddFunds { .. }
                | Self::WalletDeposit { .. }
                | Self::WalletWithdraw { .. } => u64::SIZE,
                Self::WalletApproveSpender { .. } => PublicKey::SIZE,
                Self::WalletTransfer { .. } => PublicKey::SIZE * 2 + u64::SIZE,
                Self::WalletCreditHxp { .. } | Self::WalletSpendHxp { .. } => {
                    PublicKey::SIZE + u64::SIZE
                }

                // Registry
                Self::RegistryChangeMaster { .. } => PublicKey::SIZE,

                // Game
                Self::Claim { .. }
                | Self::Upgrade { .. }
                | Self::Burn { .. }
                | Self::PurchaseHxp { .. }
                | Self::ClaimReward { .. } => u64::SIZE,
                Self::Rename { name, .. } => u64::SIZE + string_encode_size(name),
                Self::SetConfig { key, .. } => key.encode_size() + u64::SIZE,
            }
    }
}

#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Clone, Debug)]
pub enum Key {
    /// Account for nonce tracking (tag 0)
    Account(PublicKey),

    // Wallet keys (tags 10-11)
    Wallet(PublicKey),
    WalletConfig,

    // Registry keys (tags 12-14)
    RegistryConfig,
    Horsey(u64),
    HorseyName(u64),

    // Validator key (tag 15)
    Claim(u64, PublicKey),

    // Game keys (tags 16-17)
    WinRecord(PublicKey),
    GameConfig,
}

impl Write for Key {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            // Account key (tag 0)
            Self::Account(pk) => {
                0u8.write(writer);
                pk.write(writer);
            }

            // Wallet keys (tags 10-11)
            Self::Wallet(pk) => {
                10u8.write(writer);
                pk.write(writer);
            }
            Self::WalletConfig => 11u8.write(writer),

            // Registry keys (tags 12-14)
            Self::RegistryConfig => 12u8.write(writer),
            Self::Horsey(id) => {
                13u8.write(writer);
                id.write(writer);
            }
            Self::HorseyName(id) => {
                14u8.write(writer);
                id.write(writer);
            }

            // Validator key (tag 15)
            Self::Claim(race, pk) => {
                15u8.write(writer);
                race.write(writer);
                pk.write(writer);
            }

            // Game keys (tags 16-17)
            Self::WinRecord(pk) => {
                16u8.write(writer);
                pk.write(writer);
            }
            Self::GameConfig => 17u8.write(writer),
        }
    }
}

impl Read for Key {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let key = match u8::read(reader)? {
            0 => Self::Account(PublicKey::read(reader)?),

            10 => Self::Wallet(PublicKey::read(reader)?),
            11 => Self::WalletConfig,

            12 => Self::RegistryConfig,
            13 => Self::Horsey(u64::read(reader)?),
            14 => Self::HorseyName(u64::read(reader)?),

            15 => Self::Claim(u64::read(reader)?, PublicKey::read(reader)?),

            16 => Self::WinRecord(PublicKey::read(reader)?),
            17 => Self::GameConfig,

            i => return Err(Error::InvalidEnum(i)),
        };

        Ok(key)
    }
}

impl EncodeSize for Key {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + match self {
                Self::Account(_) => PublicKey::SIZE,

                Self::Wallet(_) => PublicKey::SIZE,
                Self::WalletConfig => 0,

                Self::RegistryConfig => 0,
                Self::Horsey(_) | Self::HorseyName(_) => u64::SIZE,

                Self::Claim(_, _) => u64::SIZE + PublicKey::SIZE,

                Self::WinRecord(_) => PublicKey::SIZE,
                Self::GameConfig => 0,
            }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Value {
    /// Account for nonce tracking (tag 0)
    Account(Account),

    // Wallet values (tags 10-11)
    Wallet(WalletAccount),
    WalletConfig(WalletConfig),

    // Registry values (tags 12-14)
    RegistryConfig(RegistryConfig),
    Horsey(Horsey),
    HorseyName(String),

    /// Marker for a consumed (race, claimant) pair (tag 15).
    Claimed,

    // Game values (tags 16-17)
    WinRecord(WinRecord),
    GameConfig(GameConfig),
}

impl Write for Value {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            Self::Account(account) => {
                0u8.write(writer);
                account.write(writer);
            }

            Self::Wallet(account) => {
                10u8.write(writer);
                account.write(writer);
            }
            Self::WalletConfig(config) => {
                11u8.write(writer);
                config.write(writer);
            }

            Self::RegistryConfig(config) => {
                12u8.write(writer);
                config.write(writer);
            }
            Self::Horsey(horsey) => {
                13u8.write(writer);
                horsey.write(writer);
            }
            Self::HorseyName(name) => {
                14u8.write(writer);
                write_string(name, writer);
            }

            Self::Claimed => 15u8.write(writer),

            Self::WinRecord(record) => {
                16u8.write(writer);
                record.write(writer);
            }
            Self::GameConfig(config) => {
                17u8.write(writer);
                config.write(writer);
            }
        }
    }
}

impl Read for Value {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = match u8::read(reader)? {
            0 => Self::Account(Account::read(reader)?),

            10 => Self::Wallet(WalletAccount::read(reader)?),
            11 => Self::WalletConfig(WalletConfig::read(reader)?),

            12 => Self::RegistryConfig(RegistryConfig::read(reader)?),
            13 => Self::Horsey(Horsey::read(reader)?),
            14 => Self::HorseyName(read_string(reader, MAX_NAME_LENGTH)?),

            15 => Self::Claimed,

            16 => Self::WinRecord(WinRecord::read(reader)?),
            17 => Self::GameConfig(GameConfig::read(reader)?),

            i => return Err(Error::InvalidEnum(i)),
        };

        Ok(value)
    }
}

impl EncodeSize for Value {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + match self {
                Self::Account(account) => account.encode_size(),

                Self::Wallet(account) => account.encode_size(),
                Self::WalletConfig(config) => config.encode_size(),

                Self::RegistryConfig(config) => config.encode_size(),
                Self::Horsey(horsey) => horsey.encode_size(),
                Self::HorseyName(name) => string_encode_size(name),

                Self::Claimed => 0,

                Self::WinRecord(record) => record.encode_size(),
                Self::GameConfig(config) => config.encode_size(),
            }
    }
}

/// Observable results of applied operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Wallet events (tags 10-17)
    FundsAdded {
        player: PublicKey,
        amount: u64,
    },
    Deposited {
        player: PublicKey,
        amount: u64,
    },
    Withdrawn {
        player: PublicKey,
        amount: u64,
    },
    Transferred {
        spender: PublicKey,
        from: PublicKey,
        to: PublicKey,
        amount: u64,
    },
    HxpCredited {
        account: PublicKey,
        amount: u64,
    },
    HxpSpent {
        account: PublicKey,
        amount: u64,
    },
    SpenderApproved {
        spender: PublicKey,
    },
    MasterChanged {
        master: PublicKey,
    },

    // Game events (tags 20-26)
    Claimed {
        id: u64,
        player: PublicKey,
        race: u64,
        fee: u64,
    },
    Upgraded {
        id: u64,
        player: PublicKey,
        tier: u8,
        cost: u64,
        fee: u64,
    },
    Renamed {
        id: u64,
        player: PublicKey,
        name: String,
        fee: u64,
    },
    Burned {
        id: u64,
        player: PublicKey,
        fee: u64,
        reward: u64,
    },
    HxpPurchased {
        player: PublicKey,
        amount: u64,
    },
    RewardClaimed {
        id: u64,
        player: PublicKey,
        payout: u64,
    },
    ConfigChanged {
        key: FeeKey,
        value: u64,
    },

    // Error event (tag 29)
    OperationFailed {
        player: PublicKey,
        code: u8,
        message: String,
    },
}

impl Write for Event {
    fn write(&self, writer: &mut impl BufMut) {
        match self {
            // Wallet (10-17)
            Self::FundsAdded { player, amount } => {
                10u8.write(writer);
                player.write(writer);
                amount.write(writer);
            }
            Self::Deposited { player, amount } => {
                11u8.write(writer);
                player.write(writer);
                amount.write(writer);
            }
            Self::Withdrawn { player, amount } => {
                12u8.write(writer);
                player.write(writer);
                amount.write(writer);
            }
            Self::Transferred {
                spender,
                from,
                to,
                amount,
            } => {
                13u8.write(writer);
                spender.write(writer);
                from.write(writer);
                to.write(writer);
                amount.write(writer);
            }
            Self::HxpCredited { account, amount } => {
                14u8.write(writer);
                account.write(writer);
                amount.write(writer);
            }
            Self::HxpSpent { account, amount } => {
                15u8.write(writer);
                account.write(writer);
                amount.write(writer);
            }
            Self::SpenderApproved { spender } => {
                16u8.write(writer);
                spender.write(writer);
            }
            Self::MasterChanged { master } => {
                17u8.write(writer);
                master.write(writer);
            }

            // Game (20-26)
            Self::Claimed {
                id,
                player,
                race,
                fee,
            } => {
                20u8.write(writer);
                id.write(writer);
                player.write(writer);
                race.write(writer);
                fee.write(writer);
            }
            Self::Upgraded {
                id,
                player,
                tier,
                cost,
                fee,
            } => {
                21u8.write(writer);
                id.write(writer);
                player.write(writer);
                tier.write(writer);
                cost.write(writer);
                fee.write(writer);
            }
            Self::Renamed {
                id,
                player,
                name,
                fee,
            } => {
                22u8.write(writer);
                id.write(writer);
                player.write(writer);
                write_string(name, writer);
                fee.write(writer);
            }
            Self::Burned {
                id,
                player,
                fee,
                reward,
            } => {
                23u8.write(writer);
                id.write(writer);
                player.write(writer);
                fee.write(writer);
                reward.write(writer);
            }
            Self::HxpPurchased { player, amount } => {
                24u8.write(writer);
                player.write(writer);
                amount.write(writer);
            }
            Self::RewardClaimed { id, player, payout } => {
                25u8.write(writer);
                id.write(writer);
                player.write(writer);
                payout.write(writer);
            }
            Self::ConfigChanged { key, value } => {
                26u8.write(writer);
                key.write(writer);
                value.write(writer);
            }

            // Error (29)
            Self::OperationFailed {
                player,
                code,
                message,
            } => {
                29u8.write(writer);
                player.write(writer);
                code.write(writer);
                write_string(message, writer);
            }
        }
    }
}

impl Read for Event {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let event = match u8::read(reader)? {
            // Wallet (10-17)
            10 => Self::FundsAdded {
                player: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            11 => Self::Deposited {
                player: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            12 => Self::Withdrawn {
                player: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            13 => Self::Transferred {
                spender: PublicKey::read(reader)?,
                from: PublicKey::read(reader)?,
                to: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            14 => Self::HxpCredited {
                account: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            15 => Self::HxpSpent {
                account: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            16 => Self::SpenderApproved {
                spender: PublicKey::read(reader)?,
            },
            17 => Self::MasterChanged {
                master: PublicKey::read(reader)?,
            },

            // Game (20-26)
            20 => Self::Claimed {
                id: u64::read(reader)?,
                player: PublicKey::read(reader)?,
                race: u64::read(reader)?,
                fee: u64::read(reader)?,
            },
            21 => Self::Upgraded {
                id: u64::read(reader)?,
                player: PublicKey::read(reader)?,
                tier: u8::read(reader)?,
                cost: u64::read(reader)?,
                fee: u64::read(reader)?,
            },
            22 => Self::Renamed {
                id: u64::read(reader)?,
                player: PublicKey::read(reader)?,
                name: read_string(reader, MAX_NAME_LENGTH)?,
                fee: u64::read(reader)?,
            },
            23 => Self::Burned {
                id: u64::read(reader)?,
                player: PublicKey::read(reader)?,
                fee: u64::read(reader)?,
                reward: u64::read(reader)?,
            },
            24 => Self::HxpPurchased {
                player: PublicKey::read(reader)?,
                amount: u64::read(reader)?,
            },
            25 => Self::RewardClaimed {
                id: u64::read(reader)?,
                player: PublicKey::read(reader)?,
                payout: u64::read(reader)?,
            },
            26 => Self::ConfigChanged {
                key: FeeKey::read(reader)?,
                value: u64::read(reader)?,
            },

            // Error (29)
            29 => Self::OperationFailed {
                player: PublicKey::read(reader)?,
                code: u8::read(reader)?,
                message: read_string(reader, MAX_MESSAGE_LENGTH)?,
            },

            i => return Err(Error::InvalidEnum(i)),
        };

        Ok(event)
    }
}

impl EncodeSize for Event {
    fn encode_size(&self) -> usize {
        u8::SIZE
            + match self {
                // Wallet
                Self::FundsAdded { .. }
                | Self::Deposited { .. }
                | Self::Withdrawn { .. }
                | Self::HxpCredited { .. }
                | Self::HxpSpent { .. }
                | Self::HxpPurchased { .. } => PublicKey::SIZE + u64::SIZE,
                Self::Transferred { .. } => PublicKey::SIZE * 3 + u64::SIZE,
                Self::SpenderApproved { .. } | Self::MasterChanged { .. } => PublicKey::SIZE,

                // Game
                Self::Claimed { .. } => u64::SIZE + PublicKey::SIZE + u64::SIZE * 2,
                Self::Upgraded { .. } => {
                    u64::SIZE + PublicKey::SIZE + u8::SIZE + u64::SIZE * 2
                }
                Self::Renamed { name, .. } => {
                    u64::SIZE + PublicKey::SIZE + string_encode_size(name) + u64::SIZE
                }
                Self::Burned { .. } => u64::SIZE + PublicKey::SIZE + u64::SIZE * 2,
                Self::RewardClaimed { .. } => u64::SIZE + PublicKey::SIZE + u64::SIZE,
                Self::ConfigChanged { key, .. } => key.encode_size() + u64::SIZE,

                // Error
                Self::OperationFailed { message, .. } => {
                    PublicKey::SIZE + u8::SIZE + string_encode_size(message)
                }
            }
    }
}
