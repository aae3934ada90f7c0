//! One-time deployment wiring.
//!
//! Writes the three configuration singletons and registers the controller as
//! wallet spender and registry master, the same wiring the game needs before
//! any lifecycle instruction can run.

use anyhow::{bail, Result};
use commonware_cryptography::ed25519::PublicKey;
use horsey_types::{
    execution::{Key, Value},
    game::{FeeTable, GameConfig, RegistryConfig, WalletConfig},
};

use crate::state::State;

pub async fn initialize<S: State>(
    state: &mut S,
    owner: PublicKey,
    custodian: PublicKey,
    controller: PublicKey,
) -> Result<()> {
    if state.get(&Key::GameConfig).await?.is_some() {
        bail!("already initialized");
    }

    let mut wallet = WalletConfig::new(owner.clone(), custodian);
    wallet.approve(controller.clone());
    state
        .insert(Key::WalletConfig, Value::WalletConfig(wallet))
        .await?;

    state
        .insert(
            Key::RegistryConfig,
            Value::RegistryConfig(RegistryConfig {
                owner: owner.clone(),
                master: controller.clone(),
            }),
        )
        .await?;

    state
        .insert(
            Key::GameConfig,
            Value::GameConfig(GameConfig {
                owner,
                controller,
                next_horsey_id: 1,
                fees: FeeTable::default(),
            }),
        )
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::create_account_keypair;
    use crate::state::Memory;
    use commonware_runtime::deterministic::Runner;
    use commonware_runtime::Runner as _;

    #[test]
    fn initialize_refuses_to_run_twice() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let (_, owner) = create_account_keypair(0);
            let (_, custodian) = create_account_keypair(1);
            let (_, controller) = create_account_keypair(2);

            let mut state = Memory::default();
            initialize(
                &mut state,
                owner.clone(),
                custodian.clone(),
                controller.clone(),
            )
            .await
            .unwrap();
            assert!(initialize(&mut state, owner, custodian, controller)
                .await
                .is_err());
        });
    }

    #[test]
    fn initialize_wires_the_controller() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let (_, owner) = create_account_keypair(0);
            let (_, custodian) = create_account_keypair(1);
            let (_, controller) = create_account_keypair(2);

            let mut state = Memory::default();
            initialize(&mut state, owner, custodian, controller.clone())
                .await
                .unwrap();

            let Some(Value::WalletConfig(wallet)) =
                state.get(&Key::WalletConfig).await.unwrap()
            else {
                panic!("wallet config missing");
            };
            assert!(wallet.is_approved(&controller));

            let Some(Value::RegistryConfig(registry)) =
                state.get(&Key::RegistryConfig).await.unwrap()
            else {
                panic!("registry config missing");
            };
            assert_eq!(registry.master, controller);

            let Some(Value::GameConfig(game)) = state.get(&Key::GameConfig).await.unwrap()
            else {
                panic!("game config missing");
            };
            assert_eq!(game.controller, controller);
            assert_eq!(game.next_horsey_id, 1);
            assert!(!game.fees.is_empty());
        });
    }
}
