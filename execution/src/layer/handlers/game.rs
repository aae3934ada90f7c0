use super::super::*;
use commonware_cryptography::{
    sha256::{Digest, Sha256},
    Hasher,
};
use horsey_types::game::{FeeKey, Horsey, BASE_STAT_RANGE, REWARD_TIER};

fn base_stat(dna: &Digest) -> u32 {
    let bytes = dna.as_ref();
    let raw = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    raw % BASE_STAT_RANGE + 1
}

impl<'a, S: State> Layer<'a, S> {
    async fn owned_horsey(&self, public: &PublicKey, id: u64) -> Result<Horsey, Error> {
        let horsey = self.horsey(id).await?;
        if horsey.owner != *public {
            return Err(Error::Unauthorized);
        }
        Ok(horsey)
    }

    /// Convert a winning bet into a newly minted horsey.
    ///
    /// Validator gate, claim fee, mint, and win bookkeeping all stage inside
    /// one transaction: any failure leaves no claim mark, no fee movement,
    /// and no asset.
    pub(in crate::layer) async fn handle_claim(
        &mut self,
        public: &PublicKey,
        race: u64,
    ) -> Result<Vec<Event>, Error> {
        let mut config = self.game_config().await?;
        let controller = config.controller.clone();

        self.validate_winner(race, public).await?;

        let fee = config.fees.flat(FeeKey::Claim);
        let custodian = self.wallet_config().await?.custodian;
        self.transfer_pooled(&controller, public, &custodian, fee)
            .await?;

        let id = config.next_horsey_id;
        let mut hasher = Sha256::new();
        hasher.update(&race.to_be_bytes());
        hasher.update(public.as_ref());
        hasher.update(&id.to_be_bytes());
        let dna = hasher.finalize();

        self.store_horsey(
            &controller,
            id,
            Horsey {
                base_stat: base_stat(&dna),
                dna,
                owner: public.clone(),
                race,
                upgrade_tier: 0,
            },
        )
        .await?;

        let mut record = self.win_record(public).await?;
        record.wins += 1;
        self.stage(Key::WinRecord(public.clone()), Value::WinRecord(record));

        config.next_horsey_id += 1;
        self.stage(Key::GameConfig, Value::GameConfig(config));

        Ok(vec![Event::Claimed {
            id,
            player: public.clone(),
            race,
            fee,
        }])
    }

    pub(in crate::layer) async fn handle_upgrade(
        &mut self,
        public: &PublicKey,
        id: u64,
    ) -> Result<Vec<Event>, Error> {
        let config = self.game_config().await?;
        let controller = config.controller.clone();
        let horsey = self.owned_horsey(public, id).await?;

        let tier = horsey.upgrade_tier;
        let cost = config
            .fees
            .get(FeeKey::UpgradeCost(tier))
            .ok_or(Error::UnknownFeeKey)?;
        let fee = config.fees.flat(FeeKey::UpgradeFee);
        let next_tier = tier.checked_add(1).ok_or(Error::Overflow)?;

        let custodian = self.wallet_config().await?.custodian;
        self.spend_hxp(&controller, public, cost).await?;
        self.transfer_pooled(&controller, public, &custodian, fee)
            .await?;
        self.modify_upgrade_tier(&controller, id, next_tier).await?;

        Ok(vec![Event::Upgraded {
            id,
            player: public.clone(),
            tier: next_tier,
            cost,
            fee,
        }])
    }

    /// Set the display name. The fee is priced per character of the new
    /// name.
    pub(in crate::layer) async fn handle_rename(
        &mut self,
        public: &PublicKey,
        id: u64,
        name: &str,
    ) -> Result<Vec<Event>, Error> {
        let config = self.game_config().await?;
        let controller = config.controller.clone();
        self.owned_horsey(public, id).await?;

        let fee = config
            .fees
            .flat(FeeKey::Rename)
            .checked_mul(name.len() as u64)
            .ok_or(Error::Overflow)?;
        let custodian = self.wallet_config().await?.custodian;
        self.transfer_pooled(&controller, public, &custodian, fee)
            .await?;
        self.store_name(&controller, id, name).await?;

        Ok(vec![Event::Renamed {
            id,
            player: public.clone(),
            name: name.to_string(),
            fee,
        }])
    }

    pub(in crate::layer) async fn handle_burn(
        &mut self,
        public: &PublicKey,
        id: u64,
    ) -> Result<Vec<Event>, Error> {
        let config = self.game_config().await?;
        let controller = config.controller.clone();
        let horsey = self.owned_horsey(public, id).await?;

        let tier = horsey.upgrade_tier;
        let fee = config
            .fees
            .get(FeeKey::BurnFee(tier))
            .ok_or(Error::UnknownFeeKey)?;
        let reward = config
            .fees
            .get(FeeKey::BurnReward(tier))
            .ok_or(Error::UnknownFeeKey)?;

        let custodian = self.wallet_config().await?.custodian;
        self.transfer_pooled(&controller, public, &custodian, fee)
            .await?;
        self.credit_hxp(&controller, public, reward).await?;
        self.unstore_horsey(&controller, id).await?;

        Ok(vec![Event::Burned {
            id,
            player: public.clone(),
            fee,
            reward,
        }])
    }

    pub(in crate::layer) async fn handle_purchase_hxp(
        &mut self,
        public: &PublicKey,
        amount: u64,
    ) -> Result<Vec<Event>, Error> {
        let config = self.game_config().await?;
        self.credit_hxp(&config.controller, public, amount).await?;

        Ok(vec![Event::HxpPurchased {
            player: public.clone(),
            amount,
        }])
    }

    /// Pay out the reward unlocked by a reward-tier horsey and a fresh win.
    ///
    /// Each successful claim unlocks at most one reward; the payout comes
    /// out of the pool.
    pub(in crate::layer) async fn handle_claim_reward(
        &mut self,
        public: &PublicKey,
        id: u64,
    ) -> Result<Vec<Event>, Error> {
        let config = self.game_config().await?;
        let controller = config.controller.clone();
        let horsey = self.owned_horsey(public, id).await?;

        if horsey.upgrade_tier < REWARD_TIER {
            return Err(Error::Unauthorized);
        }
        let mut record = self.win_record(public).await?;
        if !record.has_fresh_win() {
            return Err(Error::AlreadyClaimed);
        }
        let payout = config
            .fees
            .get(FeeKey::RewardClaim(horsey.upgrade_tier))
            .ok_or(Error::UnknownFeeKey)?;

        let custodian = self.wallet_config().await?.custodian;
        self.transfer_pooled(&controller, &custodian, public, payout)
            .await?;

        record.rewards_taken += 1;
        self.stage(Key::WinRecord(public.clone()), Value::WinRecord(record));

        Ok(vec![Event::RewardClaimed {
            id,
            player: public.clone(),
            payout,
        }])
    }

    pub(in crate::layer) async fn handle_set_config(
        &mut self,
        public: &PublicKey,
        key: FeeKey,
        value: u64,
    ) -> Result<Vec<Event>, Error> {
        let mut config = self.game_config().await?;
        if config.owner != *public {
            return Err(Error::Unauthorized);
        }
        config.fees.set(key, value);
        self.stage(Key::GameConfig, Value::GameConfig(config));
        debug!(?key, value, "fee table updated");

        Ok(vec![Event::ConfigChanged { key, value }])
    }
}
