//! Read-only views over state. No query stages a write.

use anyhow::{bail, Result};
use commonware_cryptography::ed25519::PublicKey;
use commonware_utils::hex;
use horsey_types::{
    execution::{Key, Value},
    game::FeeKey,
};
use serde::Serialize;

use crate::state::State;

/// A horsey record joined with its display name, hex-encoded for clients.
#[derive(Clone, Debug, Serialize)]
pub struct HorseyView {
    pub id: u64,
    pub dna: String,
    pub owner: String,
    pub race: u64,
    pub base_stat: u32,
    pub upgrade_tier: u8,
    pub name: Option<String>,
}

pub async fn get_horsey<S: State>(state: &S, id: u64) -> Result<Option<HorseyView>> {
    let Some(Value::Horsey(horsey)) = state.get(&Key::Horsey(id)).await? else {
        return Ok(None);
    };
    let name = match state.get(&Key::HorseyName(id)).await? {
        Some(Value::HorseyName(name)) => Some(name),
        _ => None,
    };

    Ok(Some(HorseyView {
        id,
        dna: hex(horsey.dna.as_ref()),
        owner: hex(horsey.owner.as_ref()),
        race: horsey.race,
        base_stat: horsey.base_stat,
        upgrade_tier: horsey.upgrade_tier,
        name,
    }))
}

pub async fn balance_of<S: State>(state: &S, public: &PublicKey) -> Result<u64> {
    Ok(match state.get(&Key::Wallet(public.clone())).await? {
        Some(Value::Wallet(account)) => account.horse,
        _ => 0,
    })
}

pub async fn balance_of_hxp<S: State>(state: &S, public: &PublicKey) -> Result<u64> {
    Ok(match state.get(&Key::Wallet(public.clone())).await? {
        Some(Value::Wallet(account)) => account.hxp,
        _ => 0,
    })
}

/// The pool is the custodian's own pooled balance.
pub async fn pool_balance<S: State>(state: &S) -> Result<u64> {
    let custodian = match state.get(&Key::WalletConfig).await? {
        Some(Value::WalletConfig(config)) => config.custodian,
        _ => bail!("wallet not initialized"),
    };
    balance_of(state, &custodian).await
}

pub async fn fee<S: State>(state: &S, key: FeeKey) -> Result<Option<u64>> {
    Ok(match state.get(&Key::GameConfig).await? {
        Some(Value::GameConfig(config)) => config.fees.get(key),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::create_account_keypair;
    use crate::state::Memory;
    use commonware_cryptography::{sha256::Sha256, Hasher};
    use commonware_runtime::deterministic::Runner;
    use commonware_runtime::Runner as _;
    use horsey_types::game::Horsey;

    #[test]
    fn horsey_view_serializes_with_name() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let (_, owner) = create_account_keypair(1);
            let mut state = Memory::default();
            state
                .insert(
                    Key::Horsey(3),
                    Value::Horsey(Horsey {
                        dna: Sha256::hash(b"dna"),
                        owner: owner.clone(),
                        race: 9,
                        base_stat: 42,
                        upgrade_tier: 1,
                    }),
                )
                .await
                .unwrap();
            state
                .insert(Key::HorseyName(3), Value::HorseyName("FAFNIR".into()))
                .await
                .unwrap();

            let view = get_horsey(&state, 3).await.unwrap().unwrap();
            assert_eq!(view.name.as_deref(), Some("FAFNIR"));
            assert_eq!(view.owner, hex(owner.as_ref()));

            let json = serde_json::to_value(&view).unwrap();
            assert_eq!(json["id"], 3);
            assert_eq!(json["race"], 9);
            assert_eq!(json["upgrade_tier"], 1);
            assert_eq!(json["name"], "FAFNIR");
        });
    }

    #[test]
    fn missing_records_read_as_empty() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let (_, nobody) = create_account_keypair(1);
            let state = Memory::default();

            assert!(get_horsey(&state, 1).await.unwrap().is_none());
            assert_eq!(balance_of(&state, &nobody).await.unwrap(), 0);
            assert_eq!(balance_of_hxp(&state, &nobody).await.unwrap(), 0);
            assert_eq!(fee(&state, FeeKey::Claim).await.unwrap(), None);
            assert!(pool_balance(&state).await.is_err());
        });
    }
}
