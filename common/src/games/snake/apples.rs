use std::collections::HashSet;

use crate::games::RandomSource;
use super::error::SnakeError;
use super::types::{Cell, FieldSize};

/// Start-of-round apples: evenly spaced down the center column, top to bottom.
pub fn initial_apples(field: FieldSize, count: usize) -> Vec<Cell> {
    let spacing = field.height / (count as i32 + 1);
    (1..=count as i32)
        .map(|i| Cell::new(i * spacing, field.width / 2))
        .collect()
}

/// Uniformly picks a board cell outside `occupied`.
pub fn pick_empty_cell<R: RandomSource>(
    field: FieldSize,
    occupied: &HashSet<Cell>,
    rng: &mut R,
) -> Result<Cell, SnakeError> {
    let empty: Vec<Cell> = field.cells().filter(|cell| !occupied.contains(cell)).collect();
    if empty.is_empty() {
        return Err(SnakeError::BoardExhausted);
    }
    Ok(empty[rng.random_index(empty.len())])
}
