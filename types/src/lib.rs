//! Common types for the horsey game core.
//!
//! The wire and storage encodings here are canonical: encoding the same
//! logical value always yields the same bytes, regardless of construction
//! order.

pub mod execution;
pub mod game;

pub use execution::{Account, Event, Instruction, Key, Transaction, Value, NAMESPACE};
