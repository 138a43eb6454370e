#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod agent;
mod bitboard;
mod board;
mod common;
mod config;
mod driver;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod random_agent;
mod ship;

pub use agent::Agent;
pub use bitboard::{BitBoard, Cells};
pub use board::{Board, ShipId, BB};
pub use common::{GameError, GuessResult};
pub use config::*;
pub use driver::{play_match, MatchReport};
pub use game::{Game, MoveOutcome, Phase, TurnRule};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_at, LOG_ENV};
pub use player::{Player, Side};
pub use random_agent::RandomAgent;
pub use ship::{Orientation, Ship, ShipType};
