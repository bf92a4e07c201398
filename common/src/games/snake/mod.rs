mod apples;
mod controller;
mod error;
mod game_state;
mod session;
mod settings;
mod snake;
mod snapshot;
mod text_view;
mod types;

pub use apples::{initial_apples, pick_empty_cell};
pub use controller::{ControlEvent, DIRECTION_CUE_CAPACITY, InputSource, QueuedController};
pub use error::SnakeError;
pub use game_state::SnakeGameModel;
pub use session::{SessionError, SessionStatus, SnakeSession};
pub use settings::{
    DEFAULT_APPLE_COUNT, DEFAULT_APPLES_TO_WIN, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH,
    DEFAULT_STARTING_LENGTH, SnakeGameSettings,
};
pub use snake::Snake;
pub use snapshot::{BoardSnapshot, SnakeSnapshot};
pub use text_view::{FrameSink, TextView};
pub use types::{
    Cell, CollisionReport, DeathReason, Direction, FieldSize, GamePhase, PlayerSlot, RoundWinners,
};
