use std::collections::HashSet;

use common::config::Validate;
use common::games::snake::{ControlEvent, Direction, PlayerSlot};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct DirectionKeys {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
}

impl DirectionKeys {
    fn direction_for(&self, key: char) -> Option<Direction> {
        match key {
            k if k == self.up => Some(Direction::Up),
            k if k == self.down => Some(Direction::Down),
            k if k == self.left => Some(Direction::Left),
            k if k == self.right => Some(Direction::Right),
            _ => None,
        }
    }

    fn keys(&self) -> [char; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct KeyBindings {
    pub snake_one: DirectionKeys,
    pub snake_two: DirectionKeys,
    pub start: char,
    pub quit: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            snake_one: DirectionKeys { up: 'w', down: 's', left: 'a', right: 'd' },
            snake_two: DirectionKeys { up: 'i', down: 'k', left: 'j', right: 'l' },
            start: ' ',
            quit: 'q',
        }
    }
}

impl KeyBindings {
    /// Keys are matched case-insensitively.
    pub fn event_for(&self, key: char) -> Option<ControlEvent> {
        let key = key.to_ascii_lowercase();
        if key == self.start {
            return Some(ControlEvent::Start);
        }
        if key == self.quit {
            return Some(ControlEvent::Quit);
        }
        if let Some(direction) = self.snake_one.direction_for(key) {
            return Some(ControlEvent::Turn { player: PlayerSlot::One, direction });
        }
        self.snake_two
            .direction_for(key)
            .map(|direction| ControlEvent::Turn { player: PlayerSlot::Two, direction })
    }

    /// Events for one input line. The words `start` and `quit` are accepted
    /// on their own; anything else is read key by key.
    pub fn events_for_line(&self, line: &str) -> Vec<ControlEvent> {
        match line.trim().to_ascii_lowercase().as_str() {
            "start" => vec![ControlEvent::Start],
            "quit" | "exit" => vec![ControlEvent::Quit],
            _ => line
                .trim_end_matches(['\r', '\n'])
                .chars()
                .filter_map(|key| self.event_for(key))
                .collect(),
        }
    }

    pub fn describe(&self) -> String {
        let one = self.snake_one;
        let two = self.snake_two;
        format!(
            "snake one: {}{}{}{} (up/left/down/right), snake two: {}{}{}{}, start: {:?}, quit: {:?}",
            one.up, one.left, one.down, one.right, two.up, two.left, two.down, two.right,
            self.start, self.quit
        )
    }
}

impl Validate for KeyBindings {
    fn validate(&self) -> Result<(), String> {
        let all: Vec<char> = self
            .snake_one
            .keys()
            .into_iter()
            .chain(self.snake_two.keys())
            .chain([self.start, self.quit])
            .collect();

        if let Some(key) = all.iter().find(|key| key.is_ascii_uppercase()) {
            return Err(format!("key {:?} must be lowercase", key));
        }

        let mut seen = HashSet::new();
        for key in all {
            if !seen.insert(key) {
                return Err(format!("key {:?} is bound more than once", key));
            }
        }
        Ok(())
    }
}
