use super::snake::Snake;
use super::types::{Cell, Direction, FieldSize, GamePhase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSnapshot {
    pub segments: Vec<Cell>,
    pub facings: Vec<Direction>,
    pub apples_eaten: u32,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<(Cell, Direction)> {
        Some((*self.segments.first()?, *self.facings.first()?))
    }
}

impl From<&Snake> for SnakeSnapshot {
    fn from(snake: &Snake) -> Self {
        Self {
            segments: snake.segments().iter().copied().collect(),
            facings: snake.facings().iter().copied().collect(),
            apples_eaten: snake.apples_eaten(),
        }
    }
}

/// Owned copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub field_size: FieldSize,
    pub snake_one: SnakeSnapshot,
    pub snake_two: SnakeSnapshot,
    pub apples: Vec<Cell>,
    pub phase: GamePhase,
}
