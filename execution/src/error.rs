use thiserror::Error as ThisError;

/// Domain failures surfaced by instruction handlers.
///
/// Every variant except [`Error::State`] is deterministic: applying the same
/// instruction against the same state fails the same way. `State` wraps a
/// backend fault and aborts the whole block instead of producing an
/// [`Event::OperationFailed`](horsey_types::Event::OperationFailed).
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("already exists")]
    AlreadyExists,

    #[error("already claimed")]
    AlreadyClaimed,

    #[error("race not ended")]
    RaceNotEnded,

    #[error("race voided")]
    RaceVoided,

    #[error("not a winner")]
    NotAWinner,

    #[error("insufficient balance")]
    InsufficientBalance,

    #[error("transfer denied")]
    TransferDenied,

    #[error("no fee configured for key")]
    UnknownFeeKey,

    #[error("balance overflow")]
    Overflow,

    #[error(transparent)]
    State(#[from] anyhow::Error),
}

impl Error {
    /// Stable code carried in failure events.
    pub fn code(&self) -> u8 {
        match self {
            Self::State(_) => 0,
            Self::Unauthorized => 1,
            Self::NotFound => 2,
            Self::AlreadyExists => 3,
            Self::AlreadyClaimed => 4,
            Self::RaceNotEnded => 5,
            Self::RaceVoided => 6,
            Self::NotAWinner => 7,
            Self::InsufficientBalance => 8,
            Self::TransferDenied => 9,
            Self::UnknownFeeKey => 10,
            Self::Overflow => 11,
        }
    }
}
