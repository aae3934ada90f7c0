//! Block-level execution: run a batch of transactions through a [`Layer`]
//! and apply the staged writes to the backing state.

use anyhow::Result;
use commonware_cryptography::ed25519::PublicKey;
use horsey_types::execution::{Event, Transaction};
use std::collections::BTreeMap;

use crate::asset::ValueAsset;
use crate::layer::Layer;
use crate::oracle::Oracle;
use crate::state::State;

pub struct BlockResult {
    pub events: Vec<Event>,
    /// Next expected nonce per identity that had a transaction processed.
    pub processed_nonces: BTreeMap<PublicKey, u64>,
}

pub async fn execute_block<S: State>(
    state: &mut S,
    oracle: &dyn Oracle,
    asset: &mut dyn ValueAsset,
    transactions: Vec<Transaction>,
) -> Result<BlockResult> {
    let mut layer = Layer::new(&*state, oracle, asset);
    let (events, processed_nonces) = layer.execute(transactions).await?;
    let changes = layer.commit();
    state.apply(changes).await?;

    Ok(BlockResult {
        events,
        processed_nonces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{
        create_account_keypair, create_adb, fixture, FakeToken, Fixture, MockOracle, MockRace,
    };
    use crate::query;
    use crate::state::nonce;
    use commonware_runtime::deterministic::Runner;
    use commonware_runtime::Runner as _;
    use horsey_types::execution::Instruction;
    use horsey_types::game::{DEFAULT_CLAIM_FEE, UNIT};

    #[test]
    fn lifecycle_across_blocks() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut fx = fixture().await;
            let (signer, alice) = create_account_keypair(1);

            let mut race = MockRace::won_by("ETH");
            race.place_bet(&alice, "ETH", 10);
            fx.oracle.insert(1, race);
            fx.token.mint(&alice, UNIT);

            // Block 1: deposit.
            let deposit = Transaction::sign(&signer, 0, Instruction::WalletDeposit { amount: UNIT });
            let result = execute_block(&mut fx.state, &fx.oracle, &mut fx.token, vec![deposit])
                .await
                .unwrap();
            assert_eq!(result.events.len(), 1);
            assert_eq!(result.processed_nonces.get(&alice), Some(&1));

            // Block 2: claim.
            let claim = Transaction::sign(&signer, 1, Instruction::Claim { race: 1 });
            let result = execute_block(&mut fx.state, &fx.oracle, &mut fx.token, vec![claim])
                .await
                .unwrap();
            assert!(matches!(
                result.events.as_slice(),
                [Event::Claimed { id: 1, .. }]
            ));

            // Committed state is visible to queries against the backing
            // store, not just the overlay.
            let view = query::get_horsey(&fx.state, 1).await.unwrap().unwrap();
            assert_eq!(view.upgrade_tier, 0);
            assert_eq!(
                query::balance_of(&fx.state, &alice).await.unwrap(),
                UNIT - DEFAULT_CLAIM_FEE
            );
            assert_eq!(
                query::pool_balance(&fx.state).await.unwrap(),
                DEFAULT_CLAIM_FEE
            );
            assert_eq!(nonce(&fx.state, &alice).await.unwrap(), 2);
        });
    }

    #[test]
    fn replayed_transactions_are_dropped() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut fx = fixture().await;
            let (signer, alice) = create_account_keypair(1);
            fx.token.mint(&alice, 200);

            let deposit = Transaction::sign(&signer, 0, Instruction::WalletDeposit { amount: 100 });
            execute_block(
                &mut fx.state,
                &fx.oracle,
                &mut fx.token,
                vec![deposit.clone()],
            )
            .await
            .unwrap();

            // Same signed transaction again: stale nonce, no effect.
            let result = execute_block(&mut fx.state, &fx.oracle, &mut fx.token, vec![deposit])
                .await
                .unwrap();
            assert!(result.events.is_empty());
            assert!(result.processed_nonces.is_empty());
            assert_eq!(query::balance_of(&fx.state, &alice).await.unwrap(), 100);
        });
    }

    #[test]
    fn tampered_transactions_are_dropped() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let mut fx = fixture().await;
            let (signer, alice) = create_account_keypair(1);
            fx.token.mint(&alice, 200);

            let mut tx = Transaction::sign(&signer, 0, Instruction::WalletDeposit { amount: 100 });
            tx.instruction = Instruction::WalletDeposit { amount: 200 };

            let result = execute_block(&mut fx.state, &fx.oracle, &mut fx.token, vec![tx])
                .await
                .unwrap();
            assert!(result.events.is_empty());
            assert_eq!(query::balance_of(&fx.state, &alice).await.unwrap(), 0);
        });
    }

    #[test]
    fn identical_blocks_execute_identically() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let build = |fx: &mut Fixture| {
                let (signer, alice) = create_account_keypair(1);
                let mut race = MockRace::won_by("ETH");
                race.place_bet(&alice, "ETH", 10);
                fx.oracle.insert(1, race);
                fx.token.mint(&alice, UNIT);

                vec![
                    Transaction::sign(&signer, 0, Instruction::WalletDeposit { amount: UNIT }),
                    Transaction::sign(&signer, 1, Instruction::Claim { race: 1 }),
                    Transaction::sign(
                        &signer,
                        2,
                        Instruction::Rename {
                            id: 1,
                            name: "FAFNIR".into(),
                        },
                    ),
                ]
            };

            let mut fx1 = fixture().await;
            let txs = build(&mut fx1);
            let result1 = execute_block(&mut fx1.state, &fx1.oracle, &mut fx1.token, txs)
                .await
                .unwrap();

            let mut fx2 = fixture().await;
            let txs = build(&mut fx2);
            let result2 = execute_block(&mut fx2.state, &fx2.oracle, &mut fx2.token, txs)
                .await
                .unwrap();

            assert_eq!(result1.events, result2.events);
            assert_eq!(result1.processed_nonces, result2.processed_nonces);
        });
    }

    #[test]
    fn durable_backend_round_trip() {
        let executor = Runner::default();
        executor.start(|context| async move {
            let mut state = create_adb(&context).await;

            let (_, owner) = create_account_keypair(100);
            let (_, custodian) = create_account_keypair(101);
            let (_, controller) = create_account_keypair(102);
            crate::genesis::initialize(&mut state, owner, custodian.clone(), controller)
                .await
                .unwrap();

            let mut oracle = MockOracle::default();
            let mut token = FakeToken::new(custodian);
            let (signer, alice) = create_account_keypair(1);
            let mut race = MockRace::won_by("ETH");
            race.place_bet(&alice, "ETH", 10);
            oracle.insert(1, race);
            token.mint(&alice, UNIT);

            let txs = vec![
                Transaction::sign(&signer, 0, Instruction::WalletDeposit { amount: UNIT }),
                Transaction::sign(&signer, 1, Instruction::Claim { race: 1 }),
            ];
            let result = execute_block(&mut state, &oracle, &mut token, txs)
                .await
                .unwrap();
            assert_eq!(result.events.len(), 2);
            state.sync().await.unwrap();

            let view = query::get_horsey(&state, 1).await.unwrap().unwrap();
            assert_eq!(view.race, 1);
            assert_eq!(
                query::pool_balance(&state).await.unwrap(),
                DEFAULT_CLAIM_FEE
            );
        });
    }
}
