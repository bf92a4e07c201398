use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::apples::initial_apples;
use super::snake::Snake;
use super::types::{Cell, Direction, FieldSize, PlayerSlot};

pub const DEFAULT_FIELD_WIDTH: u32 = 19;
pub const DEFAULT_FIELD_HEIGHT: u32 = 19;
pub const DEFAULT_STARTING_LENGTH: u32 = 4;
pub const DEFAULT_APPLE_COUNT: u32 = 1;
pub const DEFAULT_APPLES_TO_WIN: u32 = 10;

const MIN_FIELD_SIDE: u32 = 5;
const MAX_FIELD_SIDE: u32 = 100;
const START_ROW_OFFSET: i32 = 1;
const START_COL_OFFSET: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeGameSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub starting_length: u32,
    pub apple_count: u32,
    pub apples_to_win: u32,
}

impl Default for SnakeGameSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            starting_length: DEFAULT_STARTING_LENGTH,
            apple_count: DEFAULT_APPLE_COUNT,
            apples_to_win: DEFAULT_APPLES_TO_WIN,
        }
    }
}

impl SnakeGameSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width as i32, self.field_height as i32)
    }

    /// Head cell and heading of a snake's default start, mirrored about the
    /// board center.
    pub fn starting_head(&self, slot: PlayerSlot) -> (Cell, Direction) {
        let field = self.field_size();
        let (mid_row, mid_col) = (field.height / 2, field.width / 2);
        match slot {
            PlayerSlot::One => (
                Cell::new(mid_row - START_ROW_OFFSET, mid_col - START_COL_OFFSET),
                Direction::Right,
            ),
            PlayerSlot::Two => (
                Cell::new(mid_row + START_ROW_OFFSET, mid_col + START_COL_OFFSET),
                Direction::Left,
            ),
        }
    }

    pub fn starting_snake(&self, slot: PlayerSlot) -> Result<Snake, super::SnakeError> {
        let (head, facing) = self.starting_head(slot);
        Snake::new(head, facing, self.starting_length as usize)
    }

    fn validate_layout(&self) -> Result<(), String> {
        let field = self.field_size();
        let mut occupied = HashSet::new();

        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            let snake = self.starting_snake(slot).map_err(|e| e.to_string())?;
            for &cell in snake.segments() {
                if !field.contains(cell) {
                    return Err(format!(
                        "{} does not fit on a {}x{} field with starting_length {}",
                        slot, self.field_width, self.field_height, self.starting_length
                    ));
                }
                if !occupied.insert(cell) {
                    return Err(format!("starting snakes overlap at {}", cell));
                }
            }
        }

        for apple in initial_apples(field, self.apple_count as usize) {
            if !occupied.insert(apple) {
                return Err(format!(
                    "apple_count {} does not fit beside the starting snakes (collision at {})",
                    self.apple_count, apple
                ));
            }
        }
        Ok(())
    }
}

impl Validate for SnakeGameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < MIN_FIELD_SIDE || self.field_height < MIN_FIELD_SIDE {
            return Err(format!(
                "field dimensions must be at least {}x{}",
                MIN_FIELD_SIDE, MIN_FIELD_SIDE
            ));
        }
        if self.field_width > MAX_FIELD_SIDE || self.field_height > MAX_FIELD_SIDE {
            return Err(format!(
                "field dimensions must not exceed {}x{}",
                MAX_FIELD_SIDE, MAX_FIELD_SIDE
            ));
        }
        if self.starting_length < 1 {
            return Err("starting_length must be at least 1".to_string());
        }
        if self.apple_count < 1 {
            return Err("apple_count must be at least 1".to_string());
        }
        if self.apple_count >= self.field_height {
            return Err("apple_count must be smaller than field_height".to_string());
        }
        if self.apples_to_win < 1 {
            return Err("apples_to_win must be at least 1".to_string());
        }
        self.validate_layout()
    }
}
