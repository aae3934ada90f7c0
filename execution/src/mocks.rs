//! Test doubles: deterministic keypairs, an in-memory oracle, a fake value
//! asset, and a genesis-initialized fixture.

use crate::asset::ValueAsset;
use crate::genesis;
use crate::oracle::{Bet, Oracle, Race};
use crate::state::{Adb, Memory};
use commonware_cryptography::{
    ed25519::{PrivateKey, PublicKey},
    PrivateKeyExt, Signer,
};
use commonware_runtime::{buffer::PoolRef, Clock, Metrics, Spawner, Storage};
use commonware_storage::{adb, translator::EightCap};
use commonware_utils::{NZUsize, NZU64};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;

/// Creates an account keypair for Ed25519 signatures used by users
pub fn create_account_keypair(seed: u64) -> (PrivateKey, PublicKey) {
    let mut rng = StdRng::seed_from_u64(seed);
    let private = PrivateKey::from_rng(&mut rng);
    let public = private.public_key();
    (private, public)
}

/// One race with a scripted verdict.
#[derive(Default)]
pub struct MockRace {
    ended: bool,
    voided: bool,
    winner: String,
    bets: HashMap<PublicKey, Bet>,
}

impl MockRace {
    pub fn running() -> Self {
        Self::default()
    }

    pub fn voided() -> Self {
        Self {
            ended: true,
            voided: true,
            ..Self::default()
        }
    }

    pub fn won_by(outcome: &str) -> Self {
        Self {
            ended: true,
            winner: outcome.to_string(),
            ..Self::default()
        }
    }

    pub fn place_bet(&mut self, bettor: &PublicKey, outcome: &str, amount: u64) {
        self.bets.insert(
            bettor.clone(),
            Bet {
                outcome: outcome.to_string(),
                amount,
            },
        );
    }
}

impl Race for MockRace {
    fn is_ended(&self) -> bool {
        self.ended
    }

    fn is_voided(&self) -> bool {
        self.voided
    }

    fn winning_outcome(&self) -> &str {
        &self.winner
    }

    fn bet_of(&self, bettor: &PublicKey) -> Option<Bet> {
        self.bets.get(bettor).cloned()
    }
}

#[derive(Default)]
pub struct MockOracle {
    races: HashMap<u64, MockRace>,
}

impl MockOracle {
    pub fn insert(&mut self, race: u64, verdict: MockRace) {
        self.races.insert(race, verdict);
    }
}

impl Oracle for MockOracle {
    fn lookup(&self, race: u64) -> Option<&dyn Race> {
        self.races.get(&race).map(|verdict| verdict as &dyn Race)
    }
}

/// External fungible asset with plain balances and custody held by one
/// identity. Every holder is treated as having approved the custodian.
pub struct FakeToken {
    custodian: PublicKey,
    balances: HashMap<PublicKey, u64>,
}

impl FakeToken {
    pub fn new(custodian: PublicKey) -> Self {
        Self {
            custodian,
            balances: HashMap::new(),
        }
    }

    pub fn mint(&mut self, holder: &PublicKey, amount: u64) {
        *self.balances.entry(holder.clone()).or_insert(0) += amount;
    }

    pub fn balance_of(&self, holder: &PublicKey) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }
}

impl ValueAsset for FakeToken {
    fn transfer_from(&mut self, from: &PublicKey, to: &PublicKey, amount: u64) -> bool {
        if self.balance_of(from) < amount {
            return false;
        }
        *self.balances.entry(from.clone()).or_insert(0) -= amount;
        *self.balances.entry(to.clone()).or_insert(0) += amount;
        true
    }

    fn transfer(&mut self, to: &PublicKey, amount: u64) -> bool {
        let custodian = self.custodian.clone();
        self.transfer_from(&custodian, to, amount)
    }
}

/// A genesis-initialized in-memory deployment.
pub struct Fixture {
    pub state: Memory,
    pub oracle: MockOracle,
    pub token: FakeToken,
    pub owner_signer: PrivateKey,
    pub custodian: PublicKey,
    pub controller: PublicKey,
}

pub async fn fixture() -> Fixture {
    let (owner_signer, owner) = create_account_keypair(100);
    let (_, custodian) = create_account_keypair(101);
    let (_, controller) = create_account_keypair(102);

    let mut state = Memory::default();
    genesis::initialize(&mut state, owner, custodian.clone(), controller.clone())
        .await
        .expect("genesis");

    Fixture {
        state,
        oracle: MockOracle::default(),
        token: FakeToken::new(custodian.clone()),
        owner_signer,
        custodian,
        controller,
    }
}

/// Creates a durable state database for testing
pub async fn create_adb<E: Spawner + Metrics + Storage + Clock>(context: &E) -> Adb<E, EightCap> {
    let buffer_pool = PoolRef::new(NZUsize!(1024), NZUsize!(1024));

    Adb::init(
        context.with_label("state"),
        adb::any::variable::Config {
            mmr_journal_partition: String::from("state-mmr-journal"),
            mmr_metadata_partition: String::from("state-mmr-metadata"),
            mmr_items_per_blob: NZU64!(1024),
            mmr_write_buffer: NZUsize!(1024),
            log_journal_partition: String::from("state-log-journal"),
            log_items_per_section: NZU64!(1024),
            log_write_buffer: NZUsize!(1024),
            log_compression: None,
            log_codec_config: (),
            locations_journal_partition: String::from("state-locations-journal"),
            locations_items_per_blob: NZU64!(1024),
            translator: EightCap,
            thread_pool: None,
            buffer_pool,
        },
    )
    .await
    .expect("Failed to initialize state ADB")
}
