use super::*;

impl<'a, S: State> Layer<'a, S> {
    /// Check that `claimant` won `race` and consume the (race, claimant)
    /// pair.
    ///
    /// The check and the consumption stage together, so a claim that fails
    /// later in the same operation leaves the pair unconsumed (the
    /// per-transaction checkpoint discards the mark).
    pub(crate) async fn validate_winner(
        &mut self,
        race: u64,
        claimant: &PublicKey,
    ) -> Result<(), Error> {
        let oracle = self.oracle;
        let verdict = oracle.lookup(race).ok_or(Error::NotFound)?;
        if !verdict.is_ended() {
            return Err(Error::RaceNotEnded);
        }
        if verdict.is_voided() {
            return Err(Error::RaceVoided);
        }
        let bet = verdict.bet_of(claimant).ok_or(Error::NotAWinner)?;
        if bet.outcome != verdict.winning_outcome() {
            return Err(Error::NotAWinner);
        }

        let key = Key::Claim(race, claimant.clone());
        if self.get(&key).await?.is_some() {
            return Err(Error::AlreadyClaimed);
        }
        self.stage(key, Value::Claimed);

        Ok(())
    }
}
