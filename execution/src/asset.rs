//! Interface to the external fungible value asset backing the pool.
//!
//! The asset itself (supply, allowances, per-holder balances) lives outside
//! this crate; execution only moves value into and out of custody. Both
//! methods are all-or-nothing: a `false` return means no value moved.

use commonware_cryptography::ed25519::PublicKey;

pub trait ValueAsset {
    /// Pull `amount` from `from` into `to` (custody), subject to whatever
    /// allowance rules the asset enforces.
    fn transfer_from(&mut self, from: &PublicKey, to: &PublicKey, amount: u64) -> bool;

    /// Push `amount` out of custody to `to`.
    fn transfer(&mut self, to: &PublicKey, amount: u64) -> bool;
}
