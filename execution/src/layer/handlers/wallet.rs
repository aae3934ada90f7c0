use super::super::*;

impl<'a, S: State> Layer<'a, S> {
    // === Pooled balance primitives ===
    //
    // Every mutation stages its write before the next read, so chained
    // mutations (including self-transfers) observe each other through the
    // overlay.

    pub(in crate::layer) async fn credit_horse(
        &mut self,
        public: &PublicKey,
        amount: u64,
    ) -> Result<(), Error> {
        let mut account = self.wallet_account(public).await?;
        account.horse = account
            .horse
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        self.stage(Key::Wallet(public.clone()), Value::Wallet(account));
        Ok(())
    }

    pub(in crate::layer) async fn debit_horse(
        &mut self,
        public: &PublicKey,
        amount: u64,
    ) -> Result<(), Error> {
        let mut account = self.wallet_account(public).await?;
        account.horse = account
            .horse
            .checked_sub(amount)
            .ok_or(Error::InsufficientBalance)?;
        self.stage(Key::Wallet(public.clone()), Value::Wallet(account));
        Ok(())
    }

    /// Move pooled value between two accounts on behalf of `spender`, who
    /// must be in the approved-spender set.
    pub(in crate::layer) async fn transfer_pooled(
        &mut self,
        spender: &PublicKey,
        from: &PublicKey,
        to: &PublicKey,
        amount: u64,
    ) -> Result<(), Error> {
        let config = self.wallet_config().await?;
        if !config.is_approved(spender) {
            return Err(Error::Unauthorized);
        }
        self.debit_horse(from, amount).await?;
        self.credit_horse(to, amount).await?;
        Ok(())
    }

    pub(in crate::layer) async fn credit_hxp(
        &mut self,
        spender: &PublicKey,
        account: &PublicKey,
        amount: u64,
    ) -> Result<(), Error> {
        let config = self.wallet_config().await?;
        if !config.is_approved(spender) {
            return Err(Error::Unauthorized);
        }
        let mut wallet = self.wallet_account(account).await?;
        wallet.hxp = wallet
            .hxp
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        self.stage(Key::Wallet(account.clone()), Value::Wallet(wallet));
        Ok(())
    }

    pub(in crate::layer) async fn spend_hxp(
        &mut self,
        spender: &PublicKey,
        account: &PublicKey,
        amount: u64,
    ) -> Result<(), Error> {
        let config = self.wallet_config().await?;
        if !config.is_approved(spender) {
            return Err(Error::Unauthorized);
        }
        let mut wallet = self.wallet_account(account).await?;
        wallet.hxp = wallet
            .hxp
            .checked_sub(amount)
            .ok_or(Error::InsufficientBalance)?;
        self.stage(Key::Wallet(account.clone()), Value::Wallet(wallet));
        Ok(())
    }

    // === Wallet instruction handlers ===

    /// Pull external value from the caller and credit the shared pool (the
    /// custodian's own account).
    pub(in crate::layer) async fn handle_wallet_add_funds(
        &mut self,
        public: &PublicKey,
        amount: u64,
    ) -> Result<Vec<Event>, Error> {
        let config = self.wallet_config().await?;
        let mut pool = self.wallet_account(&config.custodian).await?;
        pool.horse = pool
            .horse
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        // External movement last: nothing above staged a write.
        if !self.asset.transfer_from(public, &config.custodian, amount) {
            return Err(Error::TransferDenied);
        }
        self.stage(Key::Wallet(config.custodian.clone()), Value::Wallet(pool));

        Ok(vec![Event::FundsAdded {
            player: public.clone(),
            amount,
        }])
    }

    /// Pull external value from the caller and credit their own pooled
    /// balance.
    pub(in crate::layer) async fn handle_wallet_deposit(
        &mut self,
        public: &PublicKey,
        amount: u64,
    ) -> Result<Vec<Event>, Error> {
        let config = self.wallet_config().await?;
        let mut account = self.wallet_account(public).await?;
        account.horse = account
            .horse
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        if !self.asset.transfer_from(public, &config.custodian, amount) {
            return Err(Error::TransferDenied);
        }
        self.stage(Key::Wallet(public.clone()), Value::Wallet(account));

        Ok(vec![Event::Deposited {
            player: public.clone(),
            amount,
        }])
    }

    /// Debit the caller's pooled balance and push external value back out of
    /// custody.
    pub(in crate::layer) async fn handle_wallet_withdraw(
        &mut self,
        public: &PublicKey,
        amount: u64,
    ) -> Result<Vec<Event>, Error> {
        let mut account = self.wallet_account(public).await?;
        account.horse = account
            .horse
            .checked_sub(amount)
            .ok_or(Error::InsufficientBalance)?;

        if !self.asset.transfer(public, amount) {
            return Err(Error::TransferDenied);
        }
        self.stage(Key::Wallet(public.clone()), Value::Wallet(account));

        Ok(vec![Event::Withdrawn {
            player: public.clone(),
            amount,
        }])
    }

    pub(in crate::layer) async fn handle_wallet_approve_spender(
        &mut self,
        public: &PublicKey,
        spender: &PublicKey,
    ) -> Result<Vec<Event>, Error> {
        let mut config = self.wallet_config().await?;
        if config.owner != *public {
            return Err(Error::Unauthorized);
        }
        config.approve(spender.clone());
        self.stage(Key::WalletConfig, Value::WalletConfig(config));

        Ok(vec![Event::SpenderApproved {
            spender: spender.clone(),
        }])
    }

    pub(in crate::layer) async fn handle_wallet_transfer(
        &mut self,
        public: &PublicKey,
        from: &PublicKey,
        to: &PublicKey,
        amount: u64,
    ) -> Result<Vec<Event>, Error> {
        self.transfer_pooled(public, from, to, amount).await?;

        Ok(vec![Event::Transferred {
            spender: public.clone(),
            from: from.clone(),
            to: to.clone(),
            amount,
        }])
    }

    pub(in crate::layer) async fn handle_wallet_credit_hxp(
        &mut self,
        public: &PublicKey,
        account: &PublicKey,
        amount: u64,
    ) -> Result<Vec<Event>, Error> {
        self.credit_hxp(public, account, amount).await?;

        Ok(vec![Event::HxpCredited {
            account: account.clone(),
            amount,
        }])
    }

    pub(in crate::layer) async fn handle_wallet_spend_hxp(
        &mut self,
        public: &PublicKey,
        account: &PublicKey,
        amount: u64,
    ) -> Result<Vec<Event>, Error> {
        self.spend_hxp(public, account, amount).await?;

        Ok(vec![Event::HxpSpent {
            account: account.clone(),
            amount,
        }])
    }
}
