#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    InvalidLength { length: usize },
    MismatchedSegments { segments: usize, facings: usize },
    BoardExhausted,
    InvalidSettings(String),
}

impl std::fmt::Display for SnakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeError::InvalidLength { length } => {
                write!(f, "Snake length must be at least 1, got {}", length)
            }
            SnakeError::MismatchedSegments { segments, facings } => write!(
                f,
                "Snake needs one facing per segment and at least one segment, got {} segments and {} facings",
                segments, facings
            ),
            SnakeError::BoardExhausted => write!(f, "No empty cell left to place an apple"),
            SnakeError::InvalidSettings(reason) => write!(f, "Invalid game settings: {}", reason),
        }
    }
}

impl std::error::Error for SnakeError {}
