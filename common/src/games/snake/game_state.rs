use std::collections::HashSet;

use crate::config::Validate;
use crate::games::{RandomSource, SessionRng};
use crate::log;
use super::apples::{initial_apples, pick_empty_cell};
use super::error::SnakeError;
use super::settings::SnakeGameSettings;
use super::snake::Snake;
use super::snapshot::{BoardSnapshot, SnakeSnapshot};
use super::types::{
    Cell, CollisionReport, DeathReason, Direction, FieldSize, GamePhase, PlayerSlot, RoundWinners,
};

/// Two-snake rules engine.
///
/// A tick is `move_snakes`: both snakes advance, then apples are eaten and
/// respawned. Judging the round (`collision`, `snake_won`) is a separate,
/// side-effect-free query so a driver can draw the moved state first. The
/// phase is stored here but only ever changed through `set_phase`.
pub struct SnakeGameModel<R: RandomSource = SessionRng> {
    settings: SnakeGameSettings,
    field_size: FieldSize,
    snake_one: Snake,
    snake_two: Snake,
    apples: Vec<Cell>,
    phase: GamePhase,
    rng: R,
}

impl<R: RandomSource> SnakeGameModel<R> {
    pub fn new(settings: SnakeGameSettings, rng: R) -> Result<Self, SnakeError> {
        Self::with_snakes(settings, rng, None, None)
    }

    /// Like `new`, but any snake given here replaces that player's default
    /// start. Overrides only last until the next `reset`.
    pub fn with_snakes(
        settings: SnakeGameSettings,
        rng: R,
        snake_one: Option<Snake>,
        snake_two: Option<Snake>,
    ) -> Result<Self, SnakeError> {
        settings.validate().map_err(SnakeError::InvalidSettings)?;

        let field_size = settings.field_size();
        let snake_one = match snake_one {
            Some(snake) => snake,
            None => settings.starting_snake(PlayerSlot::One)?,
        };
        let snake_two = match snake_two {
            Some(snake) => snake,
            None => settings.starting_snake(PlayerSlot::Two)?,
        };
        let apples = initial_apples(field_size, settings.apple_count as usize);

        Ok(Self {
            settings,
            field_size,
            snake_one,
            snake_two,
            apples,
            phase: GamePhase::default(),
            rng,
        })
    }

    /// Restores the default start: both snakes and the apple layout. The
    /// phase is left to the driver.
    pub fn reset(&mut self) -> Result<(), SnakeError> {
        self.snake_one = self.settings.starting_snake(PlayerSlot::One)?;
        self.snake_two = self.settings.starting_snake(PlayerSlot::Two)?;
        self.apples = initial_apples(self.field_size, self.settings.apple_count as usize);
        log!("Round reset to the default start");
        Ok(())
    }

    pub fn move_snakes(
        &mut self,
        snake_one_direction: Direction,
        snake_two_direction: Direction,
    ) -> Result<(), SnakeError> {
        self.snake_one.move_towards(snake_one_direction);
        self.snake_two.move_towards(snake_two_direction);
        self.eat_apples()
    }

    fn eat_apples(&mut self) -> Result<(), SnakeError> {
        let mut eaten_indexes = Vec::new();

        for (index, &apple) in self.apples.iter().enumerate() {
            for (slot, snake) in [
                (PlayerSlot::One, &mut self.snake_one),
                (PlayerSlot::Two, &mut self.snake_two),
            ] {
                if snake.head() != apple {
                    continue;
                }
                snake.grow();
                log!(
                    "{} ate the apple at {}. Apples eaten: {}",
                    slot,
                    apple,
                    snake.apples_eaten()
                );
                if eaten_indexes.last() != Some(&index) {
                    eaten_indexes.push(index);
                }
            }
        }

        for index in eaten_indexes {
            self.respawn_apple(index)?;
        }
        Ok(())
    }

    fn respawn_apple(&mut self, index: usize) -> Result<(), SnakeError> {
        let occupied: HashSet<Cell> = self
            .snake_one
            .segments()
            .iter()
            .chain(self.snake_two.segments())
            .copied()
            .chain(
                self.apples
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != index)
                    .map(|(_, &apple)| apple),
            )
            .collect();

        let cell = pick_empty_cell(self.field_size, &occupied, &mut self.rng)?;
        self.apples[index] = cell;
        log!("Apple {} respawned at {}", index, cell);
        Ok(())
    }

    fn snake_pair(&self, slot: PlayerSlot) -> (&Snake, &Snake) {
        match slot {
            PlayerSlot::One => (&self.snake_one, &self.snake_two),
            PlayerSlot::Two => (&self.snake_two, &self.snake_one),
        }
    }

    /// Why the snake in `slot` is dead, judged only by where its head is now.
    pub fn collision_reason(&self, slot: PlayerSlot) -> Option<DeathReason> {
        let (snake, other) = self.snake_pair(slot);
        let head = snake.head();

        if !self.field_size.contains(head) {
            Some(DeathReason::WallCollision)
        } else if snake.body().any(|&segment| segment == head) {
            Some(DeathReason::SelfCollision)
        } else if other.occupies(head) {
            Some(DeathReason::OtherSnakeCollision)
        } else {
            None
        }
    }

    pub fn collision(&self) -> CollisionReport {
        CollisionReport {
            snake_one: self.collision_reason(PlayerSlot::One).is_some(),
            snake_two: self.collision_reason(PlayerSlot::Two).is_some(),
        }
    }

    /// Round outcome. Checked in this order: both dead is a tie; then snake
    /// one wins if snake two is dead or snake one reached the apple target;
    /// then the same for snake two.
    pub fn snake_won(&self) -> RoundWinners {
        let collision = self.collision();
        let target = self.settings.apples_to_win;

        if collision.snake_one && collision.snake_two {
            RoundWinners { snake_one: true, snake_two: true }
        } else if collision.snake_two || self.snake_one.apples_eaten() >= target {
            RoundWinners { snake_one: true, snake_two: false }
        } else if collision.snake_one || self.snake_two.apples_eaten() >= target {
            RoundWinners { snake_one: false, snake_two: true }
        } else {
            RoundWinners::default()
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub fn snake(&self, slot: PlayerSlot) -> &Snake {
        self.snake_pair(slot).0
    }

    pub fn snake_one(&self) -> &Snake {
        &self.snake_one
    }

    pub fn snake_two(&self) -> &Snake {
        &self.snake_two
    }

    pub fn apples(&self) -> &[Cell] {
        &self.apples
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn width(&self) -> i32 {
        self.field_size.width
    }

    pub fn height(&self) -> i32 {
        self.field_size.height
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            field_size: self.field_size,
            snake_one: SnakeSnapshot::from(&self.snake_one),
            snake_two: SnakeSnapshot::from(&self.snake_two),
            apples: self.apples.clone(),
            phase: self.phase,
        }
    }
}
