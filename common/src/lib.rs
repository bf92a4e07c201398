//! Rules engine and shared plumbing for a two-player snake duel.
//!
//! [`games::snake::SnakeGameModel`] owns both snakes and the apples and
//! advances them one tick at a time; [`games::snake::SnakeSession`] couples
//! it to an input cue and a frame sink.

pub mod config;
pub mod games;
pub mod logger;
