use crate::board::RouteId;
use crate::game::MatchId;
use crate::player::PlayerId;

use thiserror::Error;

/// All failures surfaced by the engine.
///
/// Every error is synchronous and returned to the immediate caller; none of
/// them is transient, so there is no retry machinery anywhere in the crate.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("match `{0}` was not found")]
    MatchNotFound(MatchId),

    #[error("player `{0}` was not found in this match")]
    PlayerNotFound(PlayerId),

    #[error("route `{0}` was not found on the board")]
    RouteNotFound(RouteId),

    /// An action was attempted in a lifecycle or turn state that forbids it.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Caller input failed validation (counts, indices, selections).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A deck had no cards left to satisfy a required draw.
    #[error("deck exhausted: {0}")]
    ResourceExhausted(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this is one of the not-found errors, regardless of entity.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::MatchNotFound(_) | Error::PlayerNotFound(_) | Error::RouteNotFound(_)
        )
    }
}
