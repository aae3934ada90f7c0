use super::super::*;
use commonware_cryptography::sha256::Digest;
use horsey_types::game::Horsey;

impl<'a, S: State> Layer<'a, S> {
    async fn require_master(&self, acting: &PublicKey) -> Result<(), Error> {
        let config = self.registry_config().await?;
        if config.master != *acting {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub(in crate::layer) async fn horsey(&self, id: u64) -> Result<Horsey, Error> {
        match self.get(&Key::Horsey(id)).await? {
            Some(Value::Horsey(horsey)) => Ok(horsey),
            _ => Err(Error::NotFound),
        }
    }

    // === Master-gated registry operations ===

    pub(in crate::layer) async fn store_horsey(
        &mut self,
        acting: &PublicKey,
        id: u64,
        horsey: Horsey,
    ) -> Result<(), Error> {
        self.require_master(acting).await?;
        if self.get(&Key::Horsey(id)).await?.is_some() {
            return Err(Error::AlreadyExists);
        }
        self.stage(Key::Horsey(id), Value::Horsey(horsey));
        Ok(())
    }

    pub(in crate::layer) async fn store_name(
        &mut self,
        acting: &PublicKey,
        id: u64,
        name: &str,
    ) -> Result<(), Error> {
        self.require_master(acting).await?;
        self.horsey(id).await?;
        self.stage(Key::HorseyName(id), Value::HorseyName(name.to_string()));
        Ok(())
    }

    /// Rewrite a record's attribute blob. No instruction dispatches here;
    /// it is part of the master-gated surface for masters that adjust
    /// attributes directly.
    pub(in crate::layer) async fn modify_horsey_dna(
        &mut self,
        acting: &PublicKey,
        id: u64,
        dna: Digest,
    ) -> Result<(), Error> {
        self.require_master(acting).await?;
        let mut horsey = self.horsey(id).await?;
        horsey.dna = dna;
        self.stage(Key::Horsey(id), Value::Horsey(horsey));
        Ok(())
    }

    pub(in crate::layer) async fn modify_upgrade_tier(
        &mut self,
        acting: &PublicKey,
        id: u64,
        tier: u8,
    ) -> Result<(), Error> {
        self.require_master(acting).await?;
        let mut horsey = self.horsey(id).await?;
        horsey.upgrade_tier = tier;
        self.stage(Key::Horsey(id), Value::Horsey(horsey));
        Ok(())
    }

    /// Delete the record and its name. The id is never handed out again
    /// (`GameConfig::next_horsey_id` is monotonic).
    pub(in crate::layer) async fn unstore_horsey(
        &mut self,
        acting: &PublicKey,
        id: u64,
    ) -> Result<(), Error> {
        self.require_master(acting).await?;
        self.horsey(id).await?;
        self.stage_delete(Key::Horsey(id));
        self.stage_delete(Key::HorseyName(id));
        Ok(())
    }

    // === Registry instruction handlers ===

    pub(in crate::layer) async fn handle_registry_change_master(
        &mut self,
        public: &PublicKey,
        master: &PublicKey,
    ) -> Result<Vec<Event>, Error> {
        let mut config = self.registry_config().await?;
        if config.owner != *public {
            return Err(Error::Unauthorized);
        }
        config.master = master.clone();
        self.stage(Key::RegistryConfig, Value::RegistryConfig(config));

        Ok(vec![Event::MasterChanged {
            master: master.clone(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{create_account_keypair, fixture, Fixture};
    use commonware_cryptography::{sha256::Sha256, Hasher};
    use commonware_runtime::deterministic::Runner;
    use commonware_runtime::Runner as _;

    fn sample(owner: &PublicKey) -> Horsey {
        Horsey {
            dna: Sha256::hash(b"sample"),
            owner: owner.clone(),
            race: 1,
            base_stat: 50,
            upgrade_tier: 0,
        }
    }

    #[test]
    fn store_is_master_gated_and_exactly_once() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let Fixture {
                state,
                oracle,
                mut token,
                controller,
                ..
            } = fixture().await;
            let (_, stranger) = create_account_keypair(5);
            let (_, owner) = create_account_keypair(1);

            let mut layer = Layer::new(&state, &oracle, &mut token);
            let horsey = sample(&owner);

            assert!(matches!(
                layer.store_horsey(&stranger, 1, horsey.clone()).await,
                Err(Error::Unauthorized)
            ));
            assert!(layer.store_horsey(&controller, 1, horsey.clone()).await.is_ok());
            assert!(matches!(
                layer.store_horsey(&controller, 1, horsey).await,
                Err(Error::AlreadyExists)
            ));
        });
    }

    #[test]
    fn modify_missing_record_is_not_found() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let Fixture {
                state,
                oracle,
                mut token,
                controller,
                ..
            } = fixture().await;

            let mut layer = Layer::new(&state, &oracle, &mut token);
            assert!(matches!(
                layer.modify_upgrade_tier(&controller, 7, 1).await,
                Err(Error::NotFound)
            ));
            assert!(matches!(
                layer
                    .modify_horsey_dna(&controller, 7, Sha256::hash(b"x"))
                    .await,
                Err(Error::NotFound)
            ));
            assert!(matches!(
                layer.store_name(&controller, 7, "GHOST").await,
                Err(Error::NotFound)
            ));
            assert!(matches!(
                layer.unstore_horsey(&controller, 7).await,
                Err(Error::NotFound)
            ));
        });
    }

    #[test]
    fn unstore_clears_record_and_name() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let Fixture {
                state,
                oracle,
                mut token,
                controller,
                ..
            } = fixture().await;
            let (_, owner) = create_account_keypair(1);

            let mut layer = Layer::new(&state, &oracle, &mut token);
            layer.store_horsey(&controller, 1, sample(&owner)).await.unwrap();
            layer.store_name(&controller, 1, "FAFNIR").await.unwrap();

            layer.unstore_horsey(&controller, 1).await.unwrap();
            assert!(layer.get(&Key::Horsey(1)).await.unwrap().is_none());
            assert!(layer.get(&Key::HorseyName(1)).await.unwrap().is_none());
        });
    }

    #[test]
    fn change_master_is_owner_gated() {
        let executor = Runner::default();
        executor.start(|_| async move {
            let Fixture {
                state,
                oracle,
                mut token,
                owner_signer,
                ..
            } = fixture().await;
            let (intruder_signer, _) = create_account_keypair(5);
            let (_, new_master) = create_account_keypair(6);

            let mut layer = Layer::new(&state, &oracle, &mut token);
            let tx = Transaction::sign(
                &intruder_signer,
                0,
                Instruction::RegistryChangeMaster {
                    master: new_master.clone(),
                },
            );
            assert!(layer.prepare(&tx).await.is_ok());
            let events = layer.apply(&tx).await.unwrap();
            assert!(matches!(
                events.as_slice(),
                [Event::OperationFailed { code, .. }]
                    if *code == Error::Unauthorized.code()
            ));

            let tx = Transaction::sign(
                &owner_signer,
                0,
                Instruction::RegistryChangeMaster {
                    master: new_master.clone(),
                },
            );
            assert!(layer.prepare(&tx).await.is_ok());
            let events = layer.apply(&tx).await.unwrap();
            assert_eq!(
                events,
                vec![Event::MasterChanged {
                    master: new_master.clone()
                }]
            );
            assert_eq!(layer.registry_config().await.unwrap().master, new_master);
        });
    }
}
