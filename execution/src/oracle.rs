//! Read-only view of the external race/betting system.
//!
//! Execution never mutates the oracle; a race's verdict and the bets placed
//! on it are facts the claim path consumes. Whether a (race, claimant) pair
//! has already been converted into an asset is tracked in our own state, not
//! here.

use commonware_cryptography::ed25519::PublicKey;

/// A bet recorded by the oracle for one bettor on one race.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bet {
    /// Outcome label the bettor backed.
    pub outcome: String,
    /// Stake, in the oracle's own units.
    pub amount: u64,
}

/// One race as the oracle reports it.
pub trait Race {
    fn is_ended(&self) -> bool;
    fn is_voided(&self) -> bool;

    /// Winning outcome label. Only meaningful once `is_ended` and not
    /// `is_voided`.
    fn winning_outcome(&self) -> &str;

    fn bet_of(&self, bettor: &PublicKey) -> Option<Bet>;
}

/// Resolves race identifiers to race verdicts.
pub trait Oracle {
    /// `None` when the identifier resolves to nothing implementing the race
    /// interface.
    fn lookup(&self, race: u64) -> Option<&dyn Race>;
}
