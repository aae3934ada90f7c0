//! Horsey execution layer.
//!
//! Deterministic transaction execution for the horsey game core: a custodial
//! ledger, the horsey registry, claim validation against an external race
//! oracle, and the fee-driven lifecycle controller.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside execution.
//! - Do not let iteration order of hash-based collections influence outputs.
//! - The oracle is read-only; whether a (race, claimant) pair was consumed is
//!   our state, not the oracle's.
//!
//! The primary entrypoint is [`Layer`]; blocks are driven through
//! [`state_transition::execute_block`].

pub mod asset;
pub mod genesis;
pub mod oracle;
pub mod query;
pub mod state_transition;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

mod error;
mod layer;
mod state;

pub use error::Error;
pub use layer::Layer;
pub use state::{nonce, Adb, PrepareError, State, Status};

#[cfg(any(test, feature = "mocks"))]
pub use state::Memory;
