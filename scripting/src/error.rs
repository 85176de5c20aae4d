use crate::ActorId;
use thiserror::Error;

/// The single failure kind of the query API.
///
/// Raised by [`crate::ActorSource`] implementations and propagated unchanged through
/// every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActorError {
    /// The handle does not resolve to a live actor.
    #[error("actor {0} not found")]
    NotFound(ActorId),
}

pub type Result<T, E = ActorError> = std::result::Result<T, E>;
