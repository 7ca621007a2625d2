use thiserror::Error;

pub type Result<T, E = RopeError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RopeError {
    /// A position lies past `limit`: the rope's length, or the end of a
    /// range whose start comes after it.
    #[error("position {position} is out of range (limit {limit})")]
    OutOfRange { position: usize, limit: usize },

    /// A position falls inside a multi-byte character.
    #[error("position {position} is not on a char boundary")]
    NotCharBoundary { position: usize },
}
