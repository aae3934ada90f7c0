//! Game domain types.
//!
//! Defines the wallet (custodial ledger), horsey registry, claim bookkeeping,
//! and fee-table state used by the execution layer and clients.

mod codec;
mod constants;
mod fees;
mod horsey;
mod wallet;

pub use codec::{read_string, string_encode_size, write_string};
pub use constants::*;
pub use fees::*;
pub use horsey::*;
pub use wallet::*;
