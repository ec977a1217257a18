use rs_utils::Position;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    #[error("no block entity at {0}")]
    NoBlockEntity(Position),

    #[error("block entity at {pos} is {expected}, payload is {found}")]
    IncompatibleBlockEntity {
        pos: Position,
        expected: String,
        found: String,
    },

    #[error("position {0} is outside the world")]
    OutOfBounds(Position),

    #[error("invalid payload at {pos}: {reason}")]
    InvalidPayload { pos: Position, reason: String },
}

pub type WorldResult<T> = Result<T, WorldError>;
