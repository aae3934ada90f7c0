use anyhow::{Context as _, Result};
use commonware_cryptography::ed25519::PublicKey;
use horsey_types::{
    execution::{Event, Instruction, Key, Transaction, Value},
    game::{GameConfig, RegistryConfig, WalletAccount, WalletConfig, WinRecord},
};
use std::collections::BTreeMap;
use tracing::debug;

use crate::asset::ValueAsset;
use crate::error::Error;
use crate::oracle::Oracle;
use crate::state::{load_account, validate_and_increment_nonce, PrepareError, State, Status};

mod handlers;
mod validator;

/// Pending-write overlay over a backing [`State`].
///
/// All reads consult the overlay first; all writes stage into it. One block's
/// worth of transactions executes against a single `Layer`, and the staged
/// changes are applied to the backing state via [`Layer::commit`].
///
/// Each transaction is additionally checkpointed: a handler that fails with a
/// domain error rolls the overlay back to the pre-transaction snapshot, so a
/// rejected operation stages nothing. Handlers must therefore move external
/// value only after every internal check has passed (the external asset
/// cannot be rolled back).
pub struct Layer<'a, S: State> {
    state: &'a S,
    pending: BTreeMap<Key, Status>,

    oracle: &'a dyn Oracle,
    asset: &'a mut dyn ValueAsset,
}

impl<'a, S: State> Layer<'a, S> {
    pub fn new(state: &'a S, oracle: &'a dyn Oracle, asset: &'a mut dyn ValueAsset) -> Self {
        Self {
            state,
            pending: BTreeMap::new(),
            oracle,
            asset,
        }
    }

    fn stage(&mut self, key: Key, value: Value) {
        self.pending.insert(key, Status::Update(value));
    }

    fn stage_delete(&mut self, key: Key) {
        self.pending.insert(key, Status::Delete);
    }

    async fn prepare(&mut self, transaction: &Transaction) -> Result<(), PrepareError> {
        let mut account = load_account(self, &transaction.public)
            .await
            .map_err(PrepareError::State)?;
        validate_and_increment_nonce(&mut account, transaction.nonce)?;
        self.stage(
            Key::Account(transaction.public.clone()),
            Value::Account(account),
        );

        Ok(())
    }

    async fn dispatch(
        &mut self,
        public: &PublicKey,
        instruction: &Instruction,
    ) -> Result<Vec<Event>, Error> {
        match instruction {
            Instruction::WalletAddFunds { amount } => {
                self.handle_wallet_add_funds(public, *amount).await
            }
            Instruction::WalletDeposit { amount } => {
                self.handle_wallet_deposit(public, *amount).await
            }
            Instruction::WalletWithdraw { amount } => {
                self.handle_wallet_withdraw(public, *amount).await
            }
            Instruction::WalletApproveSpender { spender } => {
                self.handle_wallet_approve_spender(public, spender).await
            }
            Instruction::WalletTransfer { from, to, amount } => {
                self.handle_wallet_transfer(public, from, to, *amount).await
            }
            Instruction::WalletCreditHxp { account, amount } => {
                self.handle_wallet_credit_hxp(public, account, *amount).await
            }
            Instruction::WalletSpendHxp { account, amount } => {
                self.handle_wallet_spend_hxp(public, account, *amount).await
            }

            Instruction::RegistryChangeMaster { master } => {
                self.handle_registry_change_master(public, master).await
            }

            Instruction::Claim { race } => self.handle_claim(public, *race).await,
            Instruction::Upgrade { id } => self.handle_upgrade(public, *id).await,
            Instruction::Rename { id, name } => self.handle_rename(public, *id, name).await,
            Instruction::Burn { id } => self.handle_burn(public, *id).await,
            Instruction::PurchaseHxp { amount } => {
                self.handle_purchase_hxp(public, *amount).await
            }
            Instruction::ClaimReward { id } => self.handle_claim_reward(public, *id).await,
            Instruction::SetConfig { key, value } => {
                self.handle_set_config(public, *key, *value).await
            }
        }
    }

    /// Apply one transaction's instruction. A domain failure rolls back the
    /// overlay and is reported as an [`Event::OperationFailed`]; only backend
    /// faults abort the block.
    async fn apply(&mut self, transaction: &Transaction) -> Result<Vec<Event>> {
        let checkpoint = self.pending.clone();
        match self
            .dispatch(&transaction.public, &transaction.instruction)
            .await
        {
            Ok(events) => Ok(events),
            Err(Error::State(err)) => Err(err),
            Err(err) => {
                self.pending = checkpoint;
                debug!(public = ?transaction.public, %err, "operation rejected");
                Ok(vec![Event::OperationFailed {
                    player: transaction.public.clone(),
                    code: err.code(),
                    message: err.to_string(),
                }])
            }
        }
    }

    pub async fn execute(
        &mut self,
        transactions: Vec<Transaction>,
    ) -> Result<(Vec<Event>, BTreeMap<PublicKey, u64>)> {
        let mut processed_nonces = BTreeMap::new();
        let mut events = Vec::new();

        for tx in transactions {
            if !tx.verify() {
                debug!(public = ?tx.public, "invalid signature; dropping transaction");
                continue;
            }
            match self.prepare(&tx).await {
                Ok(()) => {}
                Err(PrepareError::NonceMismatch { expected, got }) => {
                    debug!(
                        public = ?tx.public,
                        expected,
                        got,
                        "nonce mismatch; dropping transaction"
                    );
                    continue;
                }
                Err(PrepareError::State(err)) => {
                    return Err(err).context("state error during prepare");
                }
            }
            processed_nonces.insert(tx.public.clone(), tx.nonce.saturating_add(1));
            events.extend(self.apply(&tx).await?);
        }

        Ok((events, processed_nonces))
    }

    pub fn commit(self) -> Vec<(Key, Status)> {
        self.pending.into_iter().collect()
    }

    // Typed accessors for the singleton configuration records. Genesis writes
    // all three; their absence is a deployment fault, not a user error.

    pub(crate) async fn wallet_config(&self) -> Result<WalletConfig, Error> {
        match self.get(&Key::WalletConfig).await? {
            Some(Value::WalletConfig(config)) => Ok(config),
            _ => Err(Error::NotFound),
        }
    }

    pub(crate) async fn registry_config(&self) -> Result<RegistryConfig, Error> {
        match self.get(&Key::RegistryConfig).await? {
            Some(Value::RegistryConfig(config)) => Ok(config),
            _ => Err(Error::NotFound),
        }
    }

    pub(crate) async fn game_config(&self) -> Result<GameConfig, Error> {
        match self.get(&Key::GameConfig).await? {
            Some(Value::GameConfig(config)) => Ok(config),
            _ => Err(Error::NotFound),
        }
    }

    pub(crate) async fn wallet_account(&self, public: &PublicKey) -> Result<WalletAccount> {
        Ok(match self.get(&Key::Wallet(public.clone())).await? {
            Some(Value::Wallet(account)) => account,
            _ => WalletAccount::default(),
        })
    }

    pub(crate) async fn win_record(&self, public: &PublicKey) -> Result<WinRecord> {
        Ok(match self.get(&Key::WinRecord(public.clone())).await? {
            Some(Value::WinRecord(record)) => record,
            _ => WinRecord::default(),
        })
    }
}

impl<'a, S: State> State for Layer<'a, S> {
    async fn get(&self, key: &Key) -> Result<Option<Value>> {
        Ok(match self.pending.get(key) {
            Some(Status::Update(value)) => Some(value.clone()),
            Some(Status::Delete) => None,
            None => self.state.get(key).await?,
        })
    }

    async fn insert(&mut self, key: Key, value: Value) -> Result<()> {
        self.pending.insert(key, Status::Update(value));
        Ok(())
    }

    async fn delete(&mut self, key: &Key) -> Result<()> {
        self.pending.insert(key.clone(), Status::Delete);
        Ok(())
    }
}
